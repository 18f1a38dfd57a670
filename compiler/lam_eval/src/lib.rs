//! Lam Eval - evaluator for lambda programs.
//!
//! # Architecture
//!
//! - `Environment`: persistent linked scope chain, shared between closures
//! - `Value`: closures, builtins and opaque host values
//! - `Interpreter`: trampolined evaluation with identity-keyed memoization
//! - `church`: Church encodings builtins use to hand data to programs
//!
//! # Embedding
//!
//! A host seeds an [`Environment`] with builtins and values, then hands it
//! to [`Interpreter::eval_program`] together with a parsed
//! [`lam_ir::Program`]. Effects only happen inside builtins, which report
//! them through [`Applied::cacheable`] so memoization never skips one.

pub mod church;
mod environment;
mod errors;
mod interpreter;
mod value;

pub use environment::{Environment, Iter};
pub use errors::{EvalError, EvalResult};
pub use interpreter::{EvalStats, Interpreter, InterpreterBuilder};
pub use value::{
    Applied, Builtin, BuiltinError, BuiltinFn, Closure, HostValue, Value, ValueDisplay,
};
