//! Buffered single-rune lookahead over a byte source.
//!
//! The stream decodes UTF-8 one rune at a time, so it can sit on top of
//! stdin or a chain of files without reading everything up front.
//!
//! # End of Input
//!
//! End of input is reported as `Ok(None)` from [`RuneStream::peek`]. Once
//! observed it is sticky: the reader is never polled again and every later
//! peek reports `None`.
//!
//! # Comments
//!
//! `#` starts a comment that runs through the next `\n` (or end of input).
//! Comments are consumed while refilling the lookahead, so callers never
//! observe them.

use std::io::{self, BufRead, BufReader, Read};

use crate::runes::COMMENT;
use crate::{LexError, Mismatch, StreamError};

/// Rune cursor with one rune of lookahead.
pub struct RuneStream<R> {
    source: BufReader<R>,
    /// Buffered rune and the byte offset it started at.
    lookahead: Option<(char, usize)>,
    /// Sticky end-of-input flag.
    at_end: bool,
    /// Byte offset of the next undecoded byte.
    offset: usize,
}

impl<'a> RuneStream<&'a [u8]> {
    /// Create a stream over in-memory source text.
    pub fn from_source(source: &'a str) -> Self {
        RuneStream::new(source.as_bytes())
    }
}

impl<R: Read> RuneStream<R> {
    /// Create a stream over any reader.
    pub fn new(reader: R) -> Self {
        RuneStream {
            source: BufReader::new(reader),
            lookahead: None,
            at_end: false,
            offset: 0,
        }
    }

    /// Return the next rune without consuming it, or `None` at end of input.
    pub fn peek(&mut self) -> Result<Option<char>, StreamError> {
        if let Some((rune, _)) = self.lookahead {
            return Ok(Some(rune));
        }
        while !self.at_end {
            let start = self.offset;
            match self.decode_rune()? {
                Some(COMMENT) => self.skip_comment()?,
                Some(rune) => {
                    self.lookahead = Some((rune, start));
                    return Ok(Some(rune));
                }
                None => self.at_end = true,
            }
        }
        Ok(None)
    }

    /// Discard the peeked rune. Does not read further.
    #[inline]
    pub fn advance(&mut self) {
        self.lookahead = None;
    }

    /// Peek, then advance.
    pub fn read(&mut self) -> Result<Option<char>, StreamError> {
        let rune = self.peek()?;
        self.advance();
        Ok(rune)
    }

    /// Returns `true` once the stream has no runes left (comments excluded).
    pub fn is_at_end(&mut self) -> Result<bool, StreamError> {
        Ok(self.peek()?.is_none())
    }

    /// Byte offset of the next rune the stream will hand out.
    pub fn position(&self) -> usize {
        self.lookahead.map_or(self.offset, |(_, start)| start)
    }

    /// Consume whitespace up to the next non-whitespace rune or end of input.
    pub fn skip_whitespace(&mut self) -> Result<(), StreamError> {
        while let Some(rune) = self.peek()? {
            if !rune.is_whitespace() {
                break;
            }
            self.advance();
        }
        Ok(())
    }

    /// Read one rune that must be in `expected`, then skip whitespace.
    pub fn expect_one_of(&mut self, expected: &'static [char]) -> Result<char, LexError> {
        let peeked = self.peek()?;
        let offset = self.position();
        match peeked {
            Some(rune) if expected.contains(&rune) => {
                self.advance();
                self.skip_whitespace()?;
                Ok(rune)
            }
            found => Err(Mismatch {
                expected,
                found,
                offset,
            }
            .into()),
        }
    }

    fn skip_comment(&mut self) -> Result<(), StreamError> {
        loop {
            match self.decode_rune()? {
                Some('\n') => return Ok(()),
                Some(_) => {}
                None => {
                    self.at_end = true;
                    return Ok(());
                }
            }
        }
    }

    fn decode_rune(&mut self) -> Result<Option<char>, StreamError> {
        let start = self.offset;
        let Some(lead) = self.read_byte()? else {
            return Ok(None);
        };
        let width = match lead {
            0x00..=0x7F => return Ok(Some(char::from(lead))),
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => return Err(StreamError::InvalidEncoding { offset: start }),
        };

        let mut bytes = [lead, 0, 0, 0];
        for slot in &mut bytes[1..width] {
            match self.read_byte()? {
                Some(byte) => *slot = byte,
                None => return Err(StreamError::InvalidEncoding { offset: start }),
            }
        }
        std::str::from_utf8(&bytes[..width])
            .ok()
            .and_then(|decoded| decoded.chars().next())
            .map(Some)
            .ok_or(StreamError::InvalidEncoding { offset: start })
    }

    fn read_byte(&mut self) -> Result<Option<u8>, StreamError> {
        loop {
            let next = match self.source.fill_buf() {
                Ok(buf) => buf.first().copied(),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(StreamError::Io(err)),
            };
            if next.is_some() {
                self.source.consume(1);
                self.offset += 1;
            }
            return Ok(next);
        }
    }
}
