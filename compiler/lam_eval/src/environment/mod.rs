//! Persistent lexical environment.
//!
//! An immutable singly-linked list of `(Name, Value)` frames behind `Arc`.
//! Extending allocates one new head frame and shares the rest of the chain,
//! so sibling calls that extend the same parent never observe each other.

use std::fmt;
use std::sync::Arc;

use lam_ir::Name;

use crate::Value;

/// One binding plus the chain it shadows.
pub(crate) struct Frame {
    name: Name,
    value: Value,
    parent: Option<Arc<Frame>>,
}

/// Name-to-value bindings, innermost first.
///
/// Cloning is a reference count bump.
#[derive(Clone, Default)]
pub struct Environment {
    head: Option<Arc<Frame>>,
}

impl Environment {
    /// The environment with no bindings.
    pub fn empty() -> Self {
        Environment { head: None }
    }

    /// Find the innermost binding for `name`.
    pub fn lookup(&self, name: Name) -> Option<&Value> {
        self.iter()
            .find(|&(bound, _)| bound == name)
            .map(|(_, value)| value)
    }

    /// A new environment with `name` bound to `value` in front of `self`.
    ///
    /// `self` is left untouched and stays usable by other holders.
    #[must_use]
    pub fn extend(&self, name: Name, value: Value) -> Self {
        Environment {
            head: Some(Arc::new(Frame {
                name,
                value,
                parent: self.head.clone(),
            })),
        }
    }

    /// Number of frames in the chain, shadowed ones included.
    pub fn depth(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Bindings from innermost to outermost, shadowed ones included.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Hand the head frame to the caller, leaving this environment empty.
    pub(crate) fn take_head(&mut self) -> Option<Arc<Frame>> {
        self.head.take()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(|(name, _)| name))
            .finish()
    }
}

/// Iterator over the bindings of an [`Environment`].
pub struct Iter<'a> {
    next: Option<&'a Frame>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (Name, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        let frame = self.next?;
        self.next = frame.parent.as_deref();
        Some((frame.name, &frame.value))
    }
}

impl Drop for Frame {
    // Chains grow as deep as the program nests closures, and a closure
    // value holds a chain of its own. Dropping them recursively would
    // overflow, so uniquely owned frames are dismantled with a worklist.
    fn drop(&mut self) {
        let mut pending = Vec::new();
        pending.extend(self.parent.take());
        self.value.detach_environments(&mut pending);

        while let Some(frame) = pending.pop() {
            if let Ok(mut frame) = Arc::try_unwrap(frame) {
                pending.extend(frame.parent.take());
                frame.value.detach_environments(&mut pending);
            }
        }
    }
}
