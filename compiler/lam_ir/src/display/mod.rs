//! Pretty-printing back to surface syntax.
//!
//! Output always uses the canonical `λ` glyph and re-parses to the same
//! tree. An application whose function is an abstraction parenthesizes the
//! abstraction, `((λx.x) y)`, because an abstraction body extends as far
//! right as possible.

use std::fmt;

use lam_lexer_core::runes::CANONICAL_LAMBDA;
use lam_stack::ensure_sufficient_stack;

use crate::{ExprArena, ExprId, ExprKind, Program, StringInterner};

/// `Display` adapter for one expression.
pub struct ExprDisplay<'a> {
    arena: &'a ExprArena,
    interner: &'a StringInterner,
    id: ExprId,
}

impl<'a> ExprDisplay<'a> {
    pub fn new(arena: &'a ExprArena, interner: &'a StringInterner, id: ExprId) -> Self {
        ExprDisplay {
            arena,
            interner,
            id,
        }
    }

    fn write_expr(&self, f: &mut fmt::Formatter<'_>, id: ExprId) -> fmt::Result {
        ensure_sufficient_stack(|| match self.arena.kind(id) {
            ExprKind::Var(name) => f.write_str(self.interner.lookup(name)),
            ExprKind::Lambda { param, body } => {
                write!(f, "{CANONICAL_LAMBDA}{}.", self.interner.lookup(param))?;
                self.write_expr(f, body)
            }
            ExprKind::Apply { func, arg } => {
                let wrap = matches!(self.arena.kind(func), ExprKind::Lambda { .. });
                f.write_str(if wrap { "((" } else { "(" })?;
                self.write_expr(f, func)?;
                f.write_str(if wrap { ") " } else { " " })?;
                self.write_expr(f, arg)?;
                f.write_str(")")
            }
        })
    }
}

impl fmt::Display for ExprDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_expr(f, self.id)
    }
}

/// `Display` adapter for a whole program.
///
/// Assignments print as `name = expr` lines in source order, followed by a
/// blank line and the body. Without assignments only the body is printed.
pub struct ProgramDisplay<'a> {
    program: &'a Program,
    interner: &'a StringInterner,
}

impl<'a> ProgramDisplay<'a> {
    pub fn new(program: &'a Program, interner: &'a StringInterner) -> Self {
        ProgramDisplay { program, interner }
    }
}

impl fmt::Display for ProgramDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arena = &self.program.arena;
        let (bindings, body) = self.program.split();
        for &(name, rhs) in &bindings {
            writeln!(
                f,
                "{} = {}",
                self.interner.lookup(name),
                ExprDisplay::new(arena, self.interner, rhs)
            )?;
        }
        if !bindings.is_empty() {
            writeln!(f)?;
        }
        write!(f, "{}", ExprDisplay::new(arena, self.interner, body))
    }
}

#[cfg(test)]
mod tests;
