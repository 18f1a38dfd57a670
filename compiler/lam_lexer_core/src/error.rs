use std::fmt;
use std::io;

use thiserror::Error;

use crate::runes::{describe_rune, describe_set};

/// Failure while pulling runes out of the underlying source.
#[derive(Debug, Error)]
pub enum StreamError {
    /// The reader itself failed.
    #[error("failed to read source: {0}")]
    Io(#[from] io::Error),
    /// The byte sequence starting at `offset` is not valid UTF-8.
    #[error("invalid encoding at byte {offset}")]
    InvalidEncoding { offset: usize },
}

/// The rune read was not one of the expected set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mismatch {
    pub expected: &'static [char],
    /// `None` means the stream was at end of input.
    pub found: Option<char>,
    /// Byte offset of the offending rune.
    pub offset: usize,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unexpected {} at byte {}: expected {}",
            describe_rune(self.found),
            self.offset,
            describe_set(self.expected)
        )
    }
}

impl std::error::Error for Mismatch {}

/// Error from [`RuneStream::expect_one_of`](crate::RuneStream::expect_one_of).
#[derive(Debug, Error)]
pub enum LexError {
    #[error(transparent)]
    Stream(#[from] StreamError),
    #[error(transparent)]
    Mismatch(#[from] Mismatch),
}
