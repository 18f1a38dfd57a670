//! Recursive descent parser for lambda programs.
//!
//! Reads runes from a [`RuneStream`] and produces a [`Program`] over a flat
//! [`ExprArena`]. Assignment sugar (`name = expr` lines before the final
//! expression) is desugared here into nested applications of abstractions.

mod error;
mod grammar;

pub use error::{ParseError, SyntaxError};

use std::io::Read;

use lam_ir::{ExprArena, ExprId, ExprKind, Name, Program, StringInterner};
use lam_lexer_core::runes::EQUALS;
use lam_lexer_core::RuneStream;
use tracing::{debug, trace};

/// Parser state.
pub struct Parser<'a, R> {
    stream: RuneStream<R>,
    arena: ExprArena,
    interner: &'a StringInterner,
}

impl<'a, R: Read> Parser<'a, R> {
    /// Create a parser over a rune stream.
    pub fn new(stream: RuneStream<R>, interner: &'a StringInterner) -> Self {
        Parser {
            stream,
            arena: ExprArena::new(),
            interner,
        }
    }

    /// Parse a full program.
    ///
    /// ```text
    /// program    := ws (assignment)* expr
    /// assignment := name '=' expr
    /// ```
    ///
    /// Assignments are folded in reverse, so the first one becomes the
    /// outermost binding and is bound before the ones after it.
    pub fn parse_program(mut self) -> Result<Program, ParseError> {
        self.stream.skip_whitespace()?;
        let mut assignments: Vec<(Name, ExprId)> = Vec::new();

        loop {
            let offset = self.stream.position();
            let expr = self.parse_expr()?;

            if self.stream.is_at_end()? {
                let mut root = expr;
                for &(name, rhs) in assignments.iter().rev() {
                    let binder = self.arena.lambda(name, root);
                    root = self.arena.apply(binder, rhs);
                }
                debug!(
                    nodes = self.arena.len(),
                    assignments = assignments.len(),
                    "parsed program"
                );
                return Ok(Program::new(self.arena.freeze(), root, assignments.len()));
            }

            let ExprKind::Var(name) = self.arena.kind(expr) else {
                return Err(SyntaxError::UnparsedInput { offset }.into());
            };
            self.stream.expect_one_of(EQUALS)?;
            let rhs = self.parse_expr()?;
            trace!(name = self.interner.lookup(name), "assignment");
            assignments.push((name, rhs));
        }
    }
}

/// Parse a program from in-memory source.
pub fn parse_str(source: &str, interner: &StringInterner) -> Result<Program, ParseError> {
    Parser::new(RuneStream::from_source(source), interner).parse_program()
}

/// Parse a program from a reader (stdin, a file, a chain of files).
pub fn parse_reader<R: Read>(reader: R, interner: &StringInterner) -> Result<Program, ParseError> {
    Parser::new(RuneStream::new(reader), interner).parse_program()
}
