//! Parse error types.
//!
//! Two layers, mirroring where a failure comes from:
//! - [`ParseError::Stream`]: the source could not be read or decoded
//! - [`ParseError::Syntax`]: the runes do not form a program
//!
//! Positions are byte offsets into the source, which is all the context the
//! rune stream carries.

use lam_lexer_core::runes::describe_rune;
use lam_lexer_core::{LexError, Mismatch, StreamError};
use thiserror::Error;

/// Describe a peeked rune for an error message.
fn describe_found(rune: &Option<char>) -> String {
    describe_rune(*rune)
}

/// Malformed grammar.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// A required token was missing (`.`, `=`, a lambda glyph, ...).
    #[error(transparent)]
    Unexpected(#[from] Mismatch),
    /// The rune at `offset` cannot start an expression.
    #[error("expected an expression at byte {offset}, found {}", describe_found(.found))]
    ExpressionExpected { found: Option<char>, offset: usize },
    /// An abstraction without a parameter name.
    #[error("expected a variable name at byte {offset}, found {}", describe_found(.found))]
    NameExpected { found: Option<char>, offset: usize },
    /// End of input inside a parenthesized group.
    #[error("expected ')' to close the '(' at byte {open}, found end of input")]
    UnclosedGroup { open: usize },
    /// Something other than a bare variable sits where an assignment target
    /// or the end of input was expected.
    #[error("unparsed code remaining after the expression at byte {offset}")]
    UnparsedInput { offset: usize },
}

/// Error produced by the parser.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("stream error: {0}")]
    Stream(#[from] StreamError),
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),
}

impl ParseError {
    /// The syntax error, if this is one.
    pub fn as_syntax(&self) -> Option<&SyntaxError> {
        match self {
            ParseError::Syntax(err) => Some(err),
            ParseError::Stream(_) => None,
        }
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        match err {
            LexError::Stream(err) => ParseError::Stream(err),
            LexError::Mismatch(mismatch) => ParseError::Syntax(mismatch.into()),
        }
    }
}
