//! Expression nodes for the flat AST.

use std::fmt;

use crate::Name;

/// Index into an [`ExprArena`](crate::ExprArena).
///
/// Only meaningful together with the arena that issued it.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    /// Create a new `ExprId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        ExprId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprId({})", self.0)
    }
}

/// Expression node.
///
/// `Copy`: children are indices, so nodes are plain data.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ExprKind {
    /// Variable reference.
    Var(Name),
    /// Single-parameter abstraction `λparam.body`.
    Lambda { param: Name, body: ExprId },
    /// Application `(func arg)`.
    Apply { func: ExprId, arg: ExprId },
}
