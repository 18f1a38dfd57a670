//! Lamc - driver for the lambda interpreter.
//!
//! Wires the parser and evaluator to byte I/O:
//! - `prelude`: the `PRINT_BYTE` and `READ_BYTE` environment
//! - `io_handler`: where printed bytes go and read bytes come from
//! - `commands`: the `parsed`, `output` and `result` commands behind `lam`

mod commands;
mod error;
pub mod io_handler;
pub mod prelude;
mod tracing_setup;

pub use commands::{
    evaluate_source, open_sources, run, stdio_for, Mode, RunOptions, UnknownMode,
};
pub use error::Error;
pub use prelude::{Byte, Prelude, PRINT_BYTE_SOURCE, READ_BYTE_SOURCE};
pub use tracing_setup::init_tracing;
