//! Parsed program.

use crate::{ExprDisplay, ExprId, ExprKind, Name, ProgramDisplay, SharedArena, StringInterner};

/// A whole program after assignment desugaring.
///
/// `x = e1  y = e2  body` is stored as `((λx.((λy.body) e2)) e1)`. The
/// evaluator only ever sees `root`; `assignments` records how many of the
/// outer `Apply(Lambda, rhs)` layers came from assignment sugar, so the
/// printer can show them as `name = expr` lines again.
#[derive(Clone, Debug)]
pub struct Program {
    pub arena: SharedArena,
    pub root: ExprId,
    pub assignments: usize,
}

impl Program {
    pub fn new(arena: SharedArena, root: ExprId, assignments: usize) -> Self {
        Program {
            arena,
            root,
            assignments,
        }
    }

    /// The `(name, right-hand side)` pairs in source order, and the body.
    ///
    /// Stops early if the tree does not have the recorded shape (only
    /// possible for hand-built programs).
    pub fn split(&self) -> (Vec<(Name, ExprId)>, ExprId) {
        let mut bindings = Vec::with_capacity(self.assignments);
        let mut current = self.root;
        for _ in 0..self.assignments {
            let ExprKind::Apply { func, arg } = self.arena.kind(current) else {
                break;
            };
            let ExprKind::Lambda { param, body } = self.arena.kind(func) else {
                break;
            };
            bindings.push((param, arg));
            current = body;
        }
        (bindings, current)
    }

    /// Print with assignment sugar restored.
    pub fn display<'a>(&'a self, interner: &'a StringInterner) -> ProgramDisplay<'a> {
        ProgramDisplay::new(self, interner)
    }

    /// Print the desugared root expression.
    pub fn root_display<'a>(&'a self, interner: &'a StringInterner) -> ExprDisplay<'a> {
        ExprDisplay::new(&self.arena, interner, self.root)
    }
}
