//! Driver errors.

use std::io;
use std::path::PathBuf;

use lam_eval::EvalError;
use lam_parse::ParseError;
use thiserror::Error;

/// Anything that stops a `lam` command.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to open '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("runtime error: {0}")]
    Eval(#[from] EvalError),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}
