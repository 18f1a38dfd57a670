//! Expression grammar.
//!
//! ```text
//! expr  := lambda-glyph name '.' expr
//!        | '(' expr expr* ')'
//!        | name
//! ```
//!
//! Every production swallows the whitespace after its last rune, so each
//! parse function starts on a non-whitespace rune (or end of input).

use std::io::Read;

use lam_ir::{ExprId, Name};
use lam_lexer_core::runes::{is_lambda, is_name_rune, DOT, LAMBDAS, OPEN_PAREN};
use lam_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{ParseError, Parser, SyntaxError};

impl<R: Read> Parser<'_, R> {
    /// Parse the next full expression.
    ///
    /// Does not handle assignment sugar and does not check that the stream
    /// is exhausted afterwards.
    pub(crate) fn parse_expr(&mut self) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| match self.stream.peek()? {
            Some(rune) if is_lambda(rune) => self.parse_lambda(),
            Some('(') => self.parse_group(),
            Some(rune) if is_name_rune(rune) => {
                let name = self.parse_name()?;
                Ok(self.arena.var(name))
            }
            found => Err(SyntaxError::ExpressionExpected {
                found,
                offset: self.stream.position(),
            }
            .into()),
        })
    }

    /// `lambda-glyph name '.' expr`
    fn parse_lambda(&mut self) -> Result<ExprId, ParseError> {
        self.stream.expect_one_of(LAMBDAS)?;
        let param = self.parse_name()?;
        self.stream.expect_one_of(DOT)?;
        let body = self.parse_expr()?;
        trace!(param = self.interner.lookup(param), "lambda");
        Ok(self.arena.lambda(param, body))
    }

    /// `'(' expr expr* ')'`
    ///
    /// A single inner expression is returned as-is; more than one folds to
    /// the left: `(f a b)` is `((f a) b)`.
    fn parse_group(&mut self) -> Result<ExprId, ParseError> {
        let open = self.stream.position();
        self.stream.expect_one_of(OPEN_PAREN)?;
        if self.stream.is_at_end()? {
            return Err(SyntaxError::UnclosedGroup { open }.into());
        }

        let mut result = self.parse_expr()?;
        loop {
            match self.stream.peek()? {
                Some(')') => {
                    self.stream.advance();
                    self.stream.skip_whitespace()?;
                    return Ok(result);
                }
                Some(_) => {
                    let arg = self.parse_expr()?;
                    result = self.arena.apply(result, arg);
                }
                None => return Err(SyntaxError::UnclosedGroup { open }.into()),
            }
        }
    }

    /// One or more name runes.
    fn parse_name(&mut self) -> Result<Name, ParseError> {
        let offset = self.stream.position();
        let mut name = String::new();
        while let Some(rune) = self.stream.peek()? {
            if !is_name_rune(rune) {
                break;
            }
            name.push(rune);
            self.stream.advance();
        }
        if name.is_empty() {
            return Err(SyntaxError::NameExpected {
                found: self.stream.peek()?,
                offset: self.stream.position(),
            }
            .into());
        }
        self.stream.skip_whitespace()?;
        trace!(name = %name, offset, "name");
        Ok(self.interner.intern(&name))
    }
}
