//! Low-level rune stream for lambda source text.
//!
//! Standalone crate with no `lam_*` dependencies. It provides:
//!
//! - [`RuneStream`]: buffered single-rune lookahead over any [`std::io::Read`],
//!   with incremental UTF-8 decoding and `#` line comments elided
//! - [`runes`]: the character classes of the surface syntax (lambda glyphs,
//!   name runes, delimiters)
//! - [`StreamError`], [`Mismatch`], [`LexError`]: failure taxonomy
//!
//! Comments never surface above this layer: they are skipped whenever the
//! lookahead is refilled, so the parser sees a comment-free rune sequence.

mod error;
pub mod runes;
mod stream;

pub use error::{LexError, Mismatch, StreamError};
pub use stream::RuneStream;
