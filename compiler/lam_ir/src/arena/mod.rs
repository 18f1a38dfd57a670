//! Expression arena.
//!
//! Nodes are appended while parsing (or while a host builds an expression in
//! code) and never mutated afterwards. Freezing the arena into a
//! [`SharedArena`] makes it shareable between closures.

use std::ops::Deref;
use std::sync::Arc;

use crate::{ExprId, ExprKind, Name};

/// Contiguous storage for expression nodes.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ExprArena {
    exprs: Vec<ExprKind>,
}

impl ExprArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        ExprArena { exprs: Vec::new() }
    }

    /// Allocate a node, returning its ID.
    ///
    /// # Panics
    /// Panics if the arena exceeds `u32::MAX` nodes.
    pub fn alloc(&mut self, kind: ExprKind) -> ExprId {
        let index = u32::try_from(self.exprs.len())
            .unwrap_or_else(|_| panic!("expression arena exceeded {} nodes", u32::MAX));
        self.exprs.push(kind);
        ExprId::new(index)
    }

    /// Allocate a variable reference.
    pub fn var(&mut self, name: Name) -> ExprId {
        self.alloc(ExprKind::Var(name))
    }

    /// Allocate an abstraction.
    pub fn lambda(&mut self, param: Name, body: ExprId) -> ExprId {
        self.alloc(ExprKind::Lambda { param, body })
    }

    /// Allocate an application.
    pub fn apply(&mut self, func: ExprId, arg: ExprId) -> ExprId {
        self.alloc(ExprKind::Apply { func, arg })
    }

    /// Get a node.
    ///
    /// # Panics
    /// Panics if `id` was issued by a different arena.
    #[inline]
    pub fn kind(&self, id: ExprId) -> ExprKind {
        self.exprs[id.index()]
    }

    /// Number of allocated nodes.
    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    /// Returns `true` if no node has been allocated.
    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    /// Freeze into a shareable arena.
    pub fn freeze(self) -> SharedArena {
        SharedArena(Arc::new(self))
    }
}

/// Frozen, reference-counted arena.
///
/// Closures hold one of these next to their body `ExprId`, so the nodes
/// they point into live exactly as long as some closure needs them.
#[derive(Clone, Debug)]
pub struct SharedArena(Arc<ExprArena>);

impl SharedArena {
    /// Returns `true` if both handles refer to the same arena.
    #[inline]
    pub fn ptr_eq(&self, other: &SharedArena) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for SharedArena {
    type Target = ExprArena;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<ExprArena> for SharedArena {
    fn from(arena: ExprArena) -> Self {
        arena.freeze()
    }
}

#[cfg(test)]
mod tests;
