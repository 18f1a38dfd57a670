//! `InterpreterBuilder` for configuring an [`Interpreter`].

use lam_ir::StringInterner;

use super::{EvalStats, Interpreter};

/// Builder for [`Interpreter`].
pub struct InterpreterBuilder<'a> {
    interner: &'a StringInterner,
    step_limit: Option<u64>,
}

impl<'a> InterpreterBuilder<'a> {
    /// Builder with no step limit.
    pub fn new(interner: &'a StringInterner) -> Self {
        InterpreterBuilder {
            interner,
            step_limit: None,
        }
    }

    /// Bound the number of trampoline iterations, summed over every
    /// evaluation the interpreter runs. `None` removes the bound.
    #[must_use]
    pub fn step_limit(mut self, limit: Option<u64>) -> Self {
        self.step_limit = limit;
        self
    }

    pub fn build(self) -> Interpreter<'a> {
        Interpreter {
            interner: self.interner,
            step_limit: self.step_limit,
            stats: EvalStats::default(),
        }
    }
}
