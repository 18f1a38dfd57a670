//! Trampolined evaluator.
//!
//! # Reduction
//!
//! - `Var`: look the name up in the current environment
//! - `Lambda`: capture the current environment in a fresh [`Closure`]
//! - `Apply`: evaluate the function operand, then the argument operand,
//!   both under the current environment, then apply
//!
//! # Trampoline
//!
//! Only the two operand evaluations of an application and builtin calls
//! recurse. Entering a closure body replaces the loop state
//! `(env, arena, expr)` and continues, so chains of applications run in
//! constant native stack.
//!
//! # Cacheability
//!
//! Every evaluation yields a value and a `cacheable` flag: the AND of every
//! step that produced it. A closure applied to a closure argument with both
//! operands cacheable consults the callee's memo table, keyed by the
//! identity of the argument. Because the body's result only shows up many
//! loop iterations later, the loop keeps a stack of [`Finalizer`]s:
//!
//! - `Memoize` stores the final value in the callee's table if the running
//!   flag is still set when it runs
//! - `Taint` clears the running flag, for applications whose operands were
//!   not cacheable
//!
//! Finalizers run innermost first once a terminal value is produced (a
//! variable, an abstraction, a memo hit or a builtin result). On error they
//! are dropped without running.

mod builder;

pub use builder::InterpreterBuilder;

use lam_ir::{ExprId, ExprKind, Program, SharedArena, StringInterner};
use lam_stack::ensure_sufficient_stack;
use smallvec::SmallVec;
use tracing::{debug, debug_span, trace};

use crate::{Applied, Builtin, Closure, Environment, EvalError, EvalResult, Value};

/// A value plus whether it may be memoized.
#[derive(Clone, Debug)]
struct Evaluated {
    value: Value,
    cacheable: bool,
}

impl Evaluated {
    fn pure(value: Value) -> Self {
        Evaluated {
            value,
            cacheable: true,
        }
    }
}

/// Work deferred until the trampoline produces its terminal value.
enum Finalizer {
    /// Store the result as `closure` applied to `arg`.
    Memoize { closure: Closure, arg: Closure },
    /// An operand of an enclosing application was not cacheable.
    Taint,
}

/// Counters for one interpreter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EvalStats {
    /// Trampoline iterations, across every evaluation.
    pub steps: u64,
    pub memo_hits: u64,
    pub memo_stores: u64,
    pub builtin_calls: u64,
}

/// The evaluator.
///
/// Holds configuration and counters only; all program state lives in the
/// environments and closures passed through it.
pub struct Interpreter<'a> {
    interner: &'a StringInterner,
    step_limit: Option<u64>,
    stats: EvalStats,
}

impl<'a> Interpreter<'a> {
    /// Interpreter with default settings (no step limit).
    pub fn new(interner: &'a StringInterner) -> Self {
        InterpreterBuilder::new(interner).build()
    }

    /// Counters accumulated so far.
    pub fn stats(&self) -> EvalStats {
        self.stats
    }

    /// Evaluate `expr` (a node of `arena`) under `env`.
    pub fn evaluate(
        &mut self,
        env: &Environment,
        arena: &SharedArena,
        expr: ExprId,
    ) -> EvalResult<Value> {
        let _span = debug_span!("evaluate", expr = expr.raw()).entered();
        let result = self.eval(env, arena, expr)?;
        debug!(
            steps = self.stats.steps,
            cacheable = result.cacheable,
            "evaluated"
        );
        Ok(result.value)
    }

    /// Evaluate a parsed program's root under `env`.
    pub fn eval_program(&mut self, env: &Environment, program: &Program) -> EvalResult<Value> {
        self.evaluate(env, &program.arena, program.root)
    }

    /// Operand evaluation: the only genuine recursion besides builtins.
    fn eval_operand(
        &mut self,
        env: &Environment,
        arena: &SharedArena,
        expr: ExprId,
    ) -> EvalResult<Evaluated> {
        ensure_sufficient_stack(|| self.eval(env, arena, expr))
    }

    fn eval(&mut self, env: &Environment, arena: &SharedArena, expr: ExprId) -> EvalResult<Evaluated> {
        let mut env = env.clone();
        let mut arena = arena.clone();
        let mut expr = expr;
        let mut finalizers: SmallVec<[Finalizer; 8]> = SmallVec::new();

        let terminal = loop {
            self.check_budget()?;
            match arena.kind(expr) {
                ExprKind::Var(name) => match env.lookup(name) {
                    Some(value) => break Evaluated::pure(value.clone()),
                    None => {
                        return Err(EvalError::UnboundVariable {
                            name: self.interner.lookup(name).to_string(),
                        })
                    }
                },
                ExprKind::Lambda { param, body } => {
                    let closure = Closure::new(env.clone(), param, body, arena.clone());
                    break Evaluated::pure(Value::Closure(closure));
                }
                ExprKind::Apply { func, arg } => {
                    let func = self.eval_operand(&env, &arena, func)?;
                    let arg = self.eval_operand(&env, &arena, arg)?;
                    let cacheable = func.cacheable && arg.cacheable;

                    let closure = match func.value {
                        Value::Closure(closure) => closure,
                        Value::Builtin(builtin) => {
                            let applied = self.call_builtin(&builtin, &arg.value)?;
                            break Evaluated {
                                value: applied.value,
                                cacheable: applied.cacheable && cacheable,
                            };
                        }
                        Value::Host(host) => {
                            return Err(EvalError::NotCallable {
                                kind: host.kind_name(),
                            })
                        }
                    };

                    if !cacheable {
                        finalizers.push(Finalizer::Taint);
                    } else if let Value::Closure(arg_closure) = &arg.value {
                        if let Some(hit) = closure.memo_lookup(arg_closure) {
                            self.stats.memo_hits = self.stats.memo_hits.saturating_add(1);
                            trace!(body = closure.body().raw(), "memo hit");
                            break Evaluated::pure(hit);
                        }
                        finalizers.push(Finalizer::Memoize {
                            closure: closure.clone(),
                            arg: arg_closure.clone(),
                        });
                    }

                    env = closure.env().extend(closure.param(), arg.value);
                    arena = closure.arena().clone();
                    expr = closure.body();
                }
            }
        };

        Ok(self.finalize(terminal, finalizers))
    }

    /// Run deferred finalizers, innermost first.
    fn finalize(
        &mut self,
        terminal: Evaluated,
        finalizers: SmallVec<[Finalizer; 8]>,
    ) -> Evaluated {
        let Evaluated {
            value,
            mut cacheable,
        } = terminal;
        for finalizer in finalizers.into_iter().rev() {
            match finalizer {
                Finalizer::Taint => cacheable = false,
                Finalizer::Memoize { closure, arg } => {
                    if cacheable {
                        closure.memoize(&arg, value.clone());
                        self.stats.memo_stores = self.stats.memo_stores.saturating_add(1);
                        trace!(body = closure.body().raw(), "memo store");
                    }
                }
            }
        }
        Evaluated { value, cacheable }
    }

    fn call_builtin(&mut self, builtin: &Builtin, arg: &Value) -> EvalResult<Applied> {
        self.stats.builtin_calls = self.stats.builtin_calls.saturating_add(1);
        trace!(builtin = builtin.name(), arg = arg.kind_name(), "builtin call");
        ensure_sufficient_stack(|| builtin.apply(arg))
            .map_err(|err| EvalError::from_builtin(builtin.name(), err))
    }

    /// Count one trampoline iteration against the step limit.
    #[inline]
    fn check_budget(&mut self) -> EvalResult<()> {
        self.stats.steps = self.stats.steps.saturating_add(1);
        match self.step_limit {
            Some(limit) if self.stats.steps > limit => {
                Err(EvalError::StepLimitExceeded { limit })
            }
            _ => Ok(()),
        }
    }
}
