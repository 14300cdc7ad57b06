//! Sequence nodes.

use crate::link::{Direction, Link};

/// One element of a lazily computed sequence.
///
/// Nodes live inside a [`Sequence`](crate::Sequence) arena and are only
/// reachable through a [`NodeHandle`](crate::NodeHandle).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) index: i64,
    pub(crate) predecessor: Link,
    pub(crate) successor: Link,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T, index: i64, predecessor: Link, successor: Link) -> Self {
        Self {
            value,
            index,
            predecessor,
            successor,
        }
    }

    /// The payload of this node.
    #[must_use]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Position relative to the origin of the sequence (origin is 0).
    #[must_use]
    pub fn index(&self) -> i64 {
        self.index
    }

    /// The current state of the predecessor slot.
    #[must_use]
    pub fn predecessor_link(&self) -> Link {
        self.predecessor
    }

    /// The current state of the successor slot.
    #[must_use]
    pub fn successor_link(&self) -> Link {
        self.successor
    }

    /// The slot facing `direction`.
    #[must_use]
    pub fn link(&self, direction: Direction) -> Link {
        match direction {
            Direction::Backward => self.predecessor,
            Direction::Forward => self.successor,
        }
    }

    pub(crate) fn link_mut(&mut self, direction: Direction) -> &mut Link {
        match direction {
            Direction::Backward => &mut self.predecessor,
            Direction::Forward => &mut self.successor,
        }
    }
}
