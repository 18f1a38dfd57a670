//! Runtime values.
//!
//! A closed set of three kinds:
//! - [`Closure`]: an abstraction plus its captured environment
//! - [`Builtin`]: a host function bridging to effects
//! - host values: opaque data the evaluator passes around but never calls
//!
//! Every kind is `Send + Sync`; cloning a value is a reference count bump.

mod builtin;
mod closure;

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use lam_ir::{ExprDisplay, StringInterner};
use lam_lexer_core::runes::CANONICAL_LAMBDA;

pub use builtin::{Applied, Builtin, BuiltinError, BuiltinFn};
pub use closure::Closure;

use crate::environment::Frame;

/// Data a host injects into programs (bytes, handles, ...).
pub trait HostValue: fmt::Display + fmt::Debug + Send + Sync + 'static {
    /// Short kind name used in error messages.
    fn kind_name(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;
}

/// Runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    Closure(Closure),
    Builtin(Builtin),
    Host(Arc<dyn HostValue>),
}

impl Value {
    /// Wrap a host value.
    pub fn host(value: impl HostValue) -> Self {
        Value::Host(Arc::new(value))
    }

    /// Wrap a host function.
    pub fn builtin<F>(name: &str, transform: F) -> Self
    where
        F: Fn(&Value) -> Result<Applied, BuiltinError> + Send + Sync + 'static,
    {
        Value::Builtin(Builtin::new(name, transform))
    }

    /// Kind name for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Closure(_) => "closure",
            Value::Builtin(_) => "builtin",
            Value::Host(host) => host.kind_name(),
        }
    }

    pub fn as_closure(&self) -> Option<&Closure> {
        match self {
            Value::Closure(closure) => Some(closure),
            _ => None,
        }
    }

    /// The host value, if it is a `T`.
    pub fn downcast_host<T: HostValue>(&self) -> Option<&T> {
        match self {
            Value::Host(host) => host.as_any().downcast_ref::<T>(),
            _ => None,
        }
    }

    /// Same underlying instance?
    pub fn ptr_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Closure(a), Value::Closure(b)) => a.ptr_eq(b),
            (Value::Builtin(a), Value::Builtin(b)) => a.ptr_eq(b),
            (Value::Host(a), Value::Host(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Printable form, resolving names through `interner`.
    ///
    /// Closures print as their abstraction, builtins as `builtin(name)` and
    /// host values through their own `Display`.
    pub fn display<'a>(&'a self, interner: &'a StringInterner) -> ValueDisplay<'a> {
        ValueDisplay {
            value: self,
            interner,
        }
    }

    /// Move captured environments this value solely owns into `frames`,
    /// following memoized results as well.
    pub(crate) fn detach_environments(&mut self, frames: &mut Vec<Arc<Frame>>) {
        let mut owned = Vec::new();
        if let Value::Closure(closure) = self {
            closure.detach(frames, &mut owned);
        }
        while let Some(mut value) = owned.pop() {
            if let Value::Closure(closure) = &mut value {
                closure.detach(frames, &mut owned);
            }
        }
    }
}

/// `Display` adapter returned by [`Value::display`].
pub struct ValueDisplay<'a> {
    value: &'a Value,
    interner: &'a StringInterner,
}

impl fmt::Display for ValueDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Value::Closure(closure) => write!(
                f,
                "{CANONICAL_LAMBDA}{}.{}",
                self.interner.lookup(closure.param()),
                ExprDisplay::new(closure.arena(), self.interner, closure.body())
            ),
            Value::Builtin(builtin) => write!(f, "builtin({})", builtin.name()),
            Value::Host(host) => fmt::Display::fmt(host, f),
        }
    }
}
