//! Evaluation errors.
//!
//! Every variant is terminal: the evaluation in progress stops and the
//! error is returned to the embedding host.

use std::error::Error as StdError;

use thiserror::Error;

use crate::BuiltinError;

/// Result of evaluation.
pub type EvalResult<T> = Result<T, EvalError>;

/// Reason an evaluation failed.
#[derive(Debug, Error)]
pub enum EvalError {
    /// A variable with no binding in scope.
    #[error("unbound variable '{name}'")]
    UnboundVariable { name: String },
    /// The function position evaluated to something that cannot be applied.
    #[error("cannot apply a value of kind {kind}")]
    NotCallable { kind: &'static str },
    /// A builtin received an argument of the wrong kind.
    #[error("builtin '{builtin}' expected {expected}, found {found}")]
    WrongValueKind {
        builtin: String,
        expected: &'static str,
        found: &'static str,
    },
    /// A builtin's host side failed.
    #[error("builtin '{name}' failed: {source}")]
    Builtin {
        name: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
    /// The configured step budget ran out.
    #[error("evaluation exceeded the limit of {limit} steps")]
    StepLimitExceeded { limit: u64 },
}

impl EvalError {
    /// Attribute a builtin failure to the builtin named `name`.
    pub fn from_builtin(name: &str, err: BuiltinError) -> Self {
        match err {
            BuiltinError::WrongValueKind { expected, found } => EvalError::WrongValueKind {
                builtin: name.to_string(),
                expected,
                found,
            },
            BuiltinError::Host(source) => EvalError::Builtin {
                name: name.to_string(),
                source,
            },
        }
    }
}
