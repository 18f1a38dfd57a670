//! Byte I/O builtins and the environment programs start in.
//!
//! Programs see two names:
//! - `PRINT_BYTE`: takes a Church numeral, prints it as a byte and returns
//!   the numeral unchanged
//! - `READ_BYTE`: ignores its argument and returns a Church pair of a found
//!   flag (Church boolean) and the byte read (Church numeral, 0 at end of
//!   input)
//!
//! Both are closures over a private environment holding the host builtins
//! `print`, `next` and `read` and the seed byte `null`, so program names can
//! never shadow what they use.

use std::any::Any;
use std::fmt;

use lam_eval::church::{church_bool, church_numeral, church_pair};
use lam_eval::{
    Applied, BuiltinError, Environment, HostValue, Interpreter, Value,
};
use lam_ir::SharedInterner;
use lam_parse::parse_str;
use tracing::debug;

use crate::io_handler::SharedByteIo;
use crate::Error;

/// `PRINT_BYTE`: count `next` up from `null` to get the byte, print it,
/// then hand back the numeral.
pub const PRINT_BYTE_SOURCE: &str = r"\n.(\_.\v.v (print (n next null)) n)";

/// `READ_BYTE`.
pub const READ_BYTE_SOURCE: &str = r"\x.(read x)";

/// A raw byte, the host value `print` consumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Byte(pub u8);

impl fmt::Display for Byte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "byte({:02x})", self.0)
    }
}

impl HostValue for Byte {
    fn kind_name(&self) -> &'static str {
        "byte"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Builder for the starting environment.
pub struct Prelude {
    io: SharedByteIo,
    extra: Vec<(String, Value)>,
}

impl Prelude {
    pub fn new(io: SharedByteIo) -> Self {
        Prelude {
            io,
            extra: Vec::new(),
        }
    }

    /// Bind an additional host value, visible to programs as `name`.
    #[must_use]
    pub fn bind(mut self, name: impl Into<String>, value: Value) -> Self {
        self.extra.push((name.into(), value));
        self
    }

    /// Build the environment.
    pub fn environment(&self, interner: &SharedInterner) -> Result<Environment, Error> {
        let print_env = Environment::empty()
            .extend(interner.intern("null"), Value::host(Byte(0)))
            .extend(interner.intern("print"), print_builtin(&self.io))
            .extend(interner.intern("next"), next_builtin());
        let read_env =
            Environment::empty().extend(interner.intern("read"), read_builtin(&self.io, interner));

        let mut env = Environment::empty()
            .extend(
                interner.intern("PRINT_BYTE"),
                closure_over(interner, &print_env, PRINT_BYTE_SOURCE)?,
            )
            .extend(
                interner.intern("READ_BYTE"),
                closure_over(interner, &read_env, READ_BYTE_SOURCE)?,
            );
        for (name, value) in &self.extra {
            env = env.extend(interner.intern(name), value.clone());
        }
        debug!(bindings = env.depth(), "prelude ready");
        Ok(env)
    }
}

/// Evaluate an abstraction's source under `env`, yielding the closure.
fn closure_over(
    interner: &SharedInterner,
    env: &Environment,
    source: &str,
) -> Result<Value, Error> {
    let program = parse_str(source, interner)?;
    Ok(Interpreter::new(interner).eval_program(env, &program)?)
}

fn expect_byte(arg: &Value) -> Result<Byte, BuiltinError> {
    arg.downcast_host::<Byte>()
        .copied()
        .ok_or_else(|| BuiltinError::wrong_kind("byte", arg))
}

/// `next`: the following byte, wrapping at 255.
fn next_builtin() -> Value {
    Value::builtin("next", |arg| {
        let Byte(byte) = expect_byte(arg)?;
        Ok(Applied::pure(Value::host(Byte(byte.wrapping_add(1)))))
    })
}

/// `print`: write the byte and return it.
fn print_builtin(io: &SharedByteIo) -> Value {
    let io = SharedByteIo::clone(io);
    Value::builtin("print", move |arg| {
        let Byte(byte) = expect_byte(arg)?;
        if io.output.is_silent() {
            return Ok(Applied::pure(arg.clone()));
        }
        io.output.write_byte(byte).map_err(BuiltinError::host)?;
        Ok(Applied::effect(arg.clone()))
    })
}

/// `read`: `pair(true, numeral(b))` for a byte, `pair(false, 0)` at end of
/// input. Only a successful read is an effect.
fn read_builtin(io: &SharedByteIo, interner: &SharedInterner) -> Value {
    let io = SharedByteIo::clone(io);
    let interner = interner.clone();
    Value::builtin("read", move |_| {
        match io.input.read_byte().map_err(BuiltinError::host)? {
            Some(byte) => Ok(Applied::effect(church_pair(
                &interner,
                church_bool(&interner, true),
                church_numeral(&interner, u32::from(byte)),
            ))),
            None => Ok(Applied::pure(church_pair(
                &interner,
                church_bool(&interner, false),
                church_numeral(&interner, 0),
            ))),
        }
    })
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
