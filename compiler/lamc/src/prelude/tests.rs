use std::io::{self, Read};

use lam_eval::EvalError;
use lam_ir::SharedInterner;
use pretty_assertions::assert_eq;

use super::*;
use crate::io_handler::{captured, ByteIo, InputSource, OutputHandler};

fn run(io: &SharedByteIo, source: &str) -> Result<Value, Error> {
    let interner = SharedInterner::default();
    let env = Prelude::new(SharedByteIo::clone(io)).environment(&interner)?;
    let program = parse_str(source, &interner)?;
    Ok(Interpreter::new(&interner).eval_program(&env, &program)?)
}

/// Church numeral source for `n`.
fn numeral(n: usize) -> String {
    format!("\\f.\\x.{}x{}", "(f ".repeat(n), ")".repeat(n))
}

#[test]
fn test_byte_display() {
    assert_eq!(Byte(0x41).to_string(), "byte(41)");
    assert_eq!(Byte(0).to_string(), "byte(00)");
    assert_eq!(Byte(0xff).to_string(), "byte(ff)");
}

#[test]
fn test_print_byte_writes_and_returns_numeral() {
    let io = captured("");
    let interner = SharedInterner::default();
    let env = Prelude::new(SharedByteIo::clone(&io))
        .environment(&interner)
        .unwrap();
    let program = parse_str(&format!("(PRINT_BYTE {})", numeral(65)), &interner).unwrap();
    let value = Interpreter::new(&interner)
        .eval_program(&env, &program)
        .unwrap();

    assert_eq!(io.output.captured(), b"A".to_vec());
    assert!(value.display(&interner).to_string().starts_with("λf.λx.(f (f"));
}

#[test]
fn test_print_byte_wraps_past_255() {
    let io = captured("");
    run(&io, &format!("(PRINT_BYTE {})", numeral(256 + 66))).unwrap();
    assert_eq!(io.output.captured(), b"B".to_vec());
}

#[test]
fn test_print_is_silent_without_output() {
    let io = ByteIo::new(OutputHandler::Silent, InputSource::Empty);
    run(&io, &format!("(PRINT_BYTE {})", numeral(10))).unwrap();
    assert!(io.output.captured().is_empty());
}

#[test]
fn test_read_byte_found() {
    let io = captured("\x03");
    let interner = SharedInterner::default();
    let env = Prelude::new(SharedByteIo::clone(&io))
        .environment(&interner)
        .unwrap();
    // Print the byte that was read, then report the found flag
    let source = "\
        pair = (READ_BYTE READ_BYTE)
        found = (pair \\a.\\b.a)
        byte = (pair \\a.\\b.b)
        (PRINT_BYTE byte)";
    let program = parse_str(source, &interner).unwrap();
    Interpreter::new(&interner)
        .eval_program(&env, &program)
        .unwrap();
    assert_eq!(io.output.captured(), vec![3]);
}

#[test]
fn test_read_byte_at_end_of_input() {
    let io = captured("");
    let interner = SharedInterner::default();
    let env = Prelude::new(SharedByteIo::clone(&io))
        .environment(&interner)
        .unwrap();
    let program = parse_str("((READ_BYTE READ_BYTE) \\a.\\b.a)", &interner).unwrap();
    let flag = Interpreter::new(&interner)
        .eval_program(&env, &program)
        .unwrap();
    assert_eq!(flag.display(&interner).to_string(), "λt.λf.f");
}

/// Reports end of input once, then has bytes again.
struct ResumesAfterEnd {
    ended: bool,
}

impl Read for ResumesAfterEnd {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if !self.ended {
            self.ended = true;
            return Ok(0);
        }
        buf[0] = b'x';
        Ok(1)
    }
}

#[test]
fn test_read_byte_stays_at_end() {
    let io = ByteIo::new(
        OutputHandler::buffer(),
        InputSource::reader(ResumesAfterEnd { ended: false }),
    );
    let source = "\
        first = (READ_BYTE \\x.x)
        second = (READ_BYTE \\y.y)
        byte = \\p.(p \\a.\\b.b)
        ignored = (PRINT_BYTE (byte first))
        (PRINT_BYTE (byte second))";
    run(&io, source).unwrap();
    assert_eq!(io.output.captured(), vec![0, 0]);
}

#[test]
fn test_print_rejects_non_byte() {
    let io = captured("");
    // A numeral applied to something other than `next`/`null` hands
    // `print` a closure
    let err = run(&io, "(PRINT_BYTE \\f.\\x.f)").unwrap_err();
    assert!(
        matches!(
            &err,
            Error::Eval(EvalError::WrongValueKind { builtin, expected: "byte", found: "builtin" })
                if builtin == "print"
        ),
        "{err}"
    );
}

#[test]
fn test_program_names_do_not_shadow_builtins() {
    let io = captured("");
    let source = format!(
        "print = \\x.x\nnext = \\x.x\nnull = \\x.x\n(PRINT_BYTE {})",
        numeral(72)
    );
    run(&io, &source).unwrap();
    assert_eq!(io.output.captured(), b"H".to_vec());
}

#[test]
fn test_extra_bindings() {
    let io = captured("");
    let interner = SharedInterner::default();
    let env = Prelude::new(SharedByteIo::clone(&io))
        .bind("answer", Value::host(Byte(42)))
        .environment(&interner)
        .unwrap();
    let program = parse_str("answer", &interner).unwrap();
    let value = Interpreter::new(&interner)
        .eval_program(&env, &program)
        .unwrap();
    assert_eq!(value.downcast_host::<Byte>(), Some(&Byte(42)));
}

#[test]
fn test_prelude_sources_print_back() {
    let interner = SharedInterner::default();
    let program = parse_str(PRINT_BYTE_SOURCE, &interner).unwrap();
    assert_eq!(
        program.root_display(&interner).to_string(),
        "λn.(((λ_.λv.v) (print ((n next) null))) n)"
    );
}
