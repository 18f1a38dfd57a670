//! Host-supplied functions.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use super::Value;

/// Signature of a builtin's host transform.
pub type BuiltinFn = dyn Fn(&Value) -> Result<Applied, BuiltinError> + Send + Sync;

/// Result of a builtin call.
#[derive(Clone, Debug)]
pub struct Applied {
    pub value: Value,
    /// `false` when the call had an externally observable effect, so
    /// nothing derived from it may be memoized.
    pub cacheable: bool,
}

impl Applied {
    /// A result with no side effect.
    pub fn pure(value: Value) -> Self {
        Applied {
            value,
            cacheable: true,
        }
    }

    /// A result whose production had a side effect.
    pub fn effect(value: Value) -> Self {
        Applied {
            value,
            cacheable: false,
        }
    }
}

/// Failure inside a builtin.
#[derive(Debug, Error)]
pub enum BuiltinError {
    #[error("expected {expected}, found {found}")]
    WrongValueKind {
        expected: &'static str,
        found: &'static str,
    },
    #[error(transparent)]
    Host(Box<dyn Error + Send + Sync>),
}

impl BuiltinError {
    /// The argument was not of the `expected` kind.
    pub fn wrong_kind(expected: &'static str, found: &Value) -> Self {
        BuiltinError::WrongValueKind {
            expected,
            found: found.kind_name(),
        }
    }

    /// Wrap a host-side failure (I/O and the like).
    pub fn host(err: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        BuiltinError::Host(err.into())
    }
}

/// A named host function from one value to one value.
#[derive(Clone)]
pub struct Builtin {
    name: Arc<str>,
    transform: Arc<BuiltinFn>,
}

impl Builtin {
    pub fn new<F>(name: impl Into<Arc<str>>, transform: F) -> Self
    where
        F: Fn(&Value) -> Result<Applied, BuiltinError> + Send + Sync + 'static,
    {
        Builtin {
            name: name.into(),
            transform: Arc::new(transform),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Same host transform?
    pub fn ptr_eq(&self, other: &Builtin) -> bool {
        Arc::ptr_eq(&self.transform, &other.transform)
    }

    /// Run the host transform on `arg`.
    pub fn apply(&self, arg: &Value) -> Result<Applied, BuiltinError> {
        (self.transform)(arg)
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Builtin").field(&self.name).finish()
    }
}
