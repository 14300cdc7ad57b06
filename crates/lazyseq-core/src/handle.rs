//! Type-safe node handles.
//!
//! Handles are 32-bit indices into a [`Sequence`](crate::Sequence) arena.
//! Neighbouring nodes refer to each other through handles, so cycles and
//! back-links never fight the borrow checker.

use std::fmt;

/// A handle to a node stored in a sequence arena.
///
/// Handles are `Copy` and compare equal if and only if they denote the
/// same node of the same arena.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeHandle(u32);

impl NodeHandle {
    /// Creates a new handle from an arena slot.
    ///
    /// This is primarily for internal use by the arena.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw arena slot of this handle.
    ///
    /// This is the allocation order, not the position in the sequence;
    /// see [`Node::index`](crate::Node::index) for the latter.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }

    pub(crate) const fn slot(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for NodeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.0)
    }
}

impl fmt::Display for NodeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_equality() {
        let h1 = NodeHandle::new(7);
        let h2 = NodeHandle::new(7);
        let h3 = NodeHandle::new(8);

        assert_eq!(h1, h2);
        assert_ne!(h1, h3);
    }

    #[test]
    fn test_handle_formatting() {
        let h = NodeHandle::new(3);
        assert_eq!(format!("{h:?}"), "Node(3)");
        assert_eq!(h.to_string(), "#3");
    }

    #[test]
    fn test_handle_size() {
        assert_eq!(std::mem::size_of::<NodeHandle>(), 4);
    }
}
