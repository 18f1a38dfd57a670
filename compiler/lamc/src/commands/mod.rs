//! Command handlers for the `lam` CLI.
//!
//! - `parsed`: pretty-print the program
//! - `output`: evaluate, printed bytes go to stdout
//! - `result`: evaluate with printing disabled, then print the final value

use std::fmt;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::str::FromStr;

use lam_eval::InterpreterBuilder;
use lam_ir::SharedInterner;
use lam_parse::parse_reader;
use tracing::debug;

use crate::io_handler::{self, SharedByteIo};
use crate::{Error, Prelude};

/// What to do with the program.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Parsed,
    Output,
    Result,
}

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "parsed" => Ok(Mode::Parsed),
            "output" => Ok(Mode::Output),
            "result" => Ok(Mode::Result),
            other => Err(UnknownMode(other.to_string())),
        }
    }
}

/// A mode name that is not `parsed`, `output` or `result`.
#[derive(Debug, PartialEq, Eq)]
pub struct UnknownMode(pub String);

impl fmt::Display for UnknownMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown mode '{}'", self.0)
    }
}

impl std::error::Error for UnknownMode {}

/// Options shared by every mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub mode: Mode,
    /// `parsed` only: print the desugared body without `name = expr` lines.
    pub skip_assignments: bool,
    /// Bound on evaluation steps.
    pub max_steps: Option<u64>,
}

impl RunOptions {
    pub fn new(mode: Mode) -> Self {
        RunOptions {
            mode,
            skip_assignments: false,
            max_steps: None,
        }
    }
}

/// The byte I/O the CLI uses for `mode`.
pub fn stdio_for(mode: Mode) -> SharedByteIo {
    match mode {
        Mode::Output | Mode::Parsed => io_handler::stdio(),
        Mode::Result => io_handler::silent_stdin(),
    }
}

/// Run one command over `source`.
///
/// Textual results (the pretty-printed program or final value) go to
/// `out`; bytes the program prints go to `io`.
pub fn run<R: Read, W: Write>(
    source: R,
    options: &RunOptions,
    io: &SharedByteIo,
    out: &mut W,
) -> Result<(), Error> {
    let interner = SharedInterner::new();
    let program = parse_reader(source, &interner)?;
    debug!(
        assignments = program.assignments,
        mode = ?options.mode,
        "parsed"
    );

    if options.mode == Mode::Parsed {
        if options.skip_assignments {
            writeln!(out, "{}", program.root_display(&interner))?;
        } else {
            writeln!(out, "{}", program.display(&interner))?;
        }
        return Ok(());
    }

    let env = Prelude::new(SharedByteIo::clone(io)).environment(&interner)?;
    let mut interpreter = InterpreterBuilder::new(&interner)
        .step_limit(options.max_steps)
        .build();
    let result = interpreter.eval_program(&env, &program);
    io.output.flush()?;
    let value = result?;

    let stats = interpreter.stats();
    debug!(
        steps = stats.steps,
        memo_hits = stats.memo_hits,
        memo_stores = stats.memo_stores,
        builtin_calls = stats.builtin_calls,
        "evaluation finished"
    );

    if options.mode == Mode::Result {
        writeln!(out, "{}", value.display(&interner))?;
    }
    Ok(())
}

/// Open `paths` as one concatenated reader, or stdin when empty.
pub fn open_sources(paths: &[PathBuf]) -> Result<Box<dyn Read>, Error> {
    if paths.is_empty() {
        return Ok(Box::new(io::stdin()));
    }
    let mut source: Box<dyn Read> = Box::new(io::empty());
    for path in paths {
        let file = File::open(path).map_err(|err| Error::Open {
            path: path.clone(),
            source: err,
        })?;
        source = Box::new(source.chain(file));
    }
    Ok(source)
}

/// Evaluate in-memory source, returning what the command would print.
///
/// For `output` the captured program output (lossily decoded) is returned;
/// for `parsed` and `result` the printed text. `input` feeds `READ_BYTE`.
pub fn evaluate_source(source: &str, options: &RunOptions, input: &[u8]) -> Result<String, Error> {
    let io = match options.mode {
        Mode::Result => io_handler::ByteIo::new(
            io_handler::OutputHandler::Silent,
            io_handler::InputSource::buffer(input),
        ),
        Mode::Parsed | Mode::Output => io_handler::captured(input),
    };
    let mut out = Vec::new();
    run(source.as_bytes(), options, &io, &mut out)?;
    if options.mode == Mode::Output {
        out = io.output.captured();
    }
    Ok(String::from_utf8_lossy(&out).into_owned())
}
