//! Neighbour slots.

use std::fmt;

use crate::handle::NodeHandle;

/// The state of one neighbour slot of a node.
///
/// A slot is always in exactly one of three states. `Pending` slots turn
/// into `Resolved` or `Absent` the first time they are dereferenced and
/// never go back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Link {
    /// No neighbour exists; the sequence ends here.
    #[default]
    Absent,
    /// The neighbour exists but has not been computed yet.
    Pending,
    /// The neighbour has been computed or spliced in.
    Resolved(NodeHandle),
}

impl Link {
    /// Returns true unless the slot is [`Link::Absent`].
    #[must_use]
    pub const fn is_present(self) -> bool {
        !matches!(self, Link::Absent)
    }

    /// Returns true if the neighbour still has to be computed.
    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, Link::Pending)
    }

    /// Returns the neighbour handle if it is already known.
    #[must_use]
    pub const fn resolved(self) -> Option<NodeHandle> {
        match self {
            Link::Resolved(handle) => Some(handle),
            Link::Absent | Link::Pending => None,
        }
    }
}

impl From<NodeHandle> for Link {
    fn from(handle: NodeHandle) -> Self {
        Link::Resolved(handle)
    }
}

impl From<Option<NodeHandle>> for Link {
    fn from(handle: Option<NodeHandle>) -> Self {
        handle.map_or(Link::Absent, Link::Resolved)
    }
}

/// A traversal direction along the sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards smaller indices (predecessors).
    Backward,
    /// Towards larger indices (successors).
    Forward,
}

impl Direction {
    /// Returns the other direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Backward => Direction::Forward,
            Direction::Forward => Direction::Backward,
        }
    }

    /// The index change of a single step in this direction.
    #[must_use]
    pub const fn step(self) -> i64 {
        match self {
            Direction::Backward => -1,
            Direction::Forward => 1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Backward => f.write_str("before"),
            Direction::Forward => f.write_str("after"),
        }
    }
}
