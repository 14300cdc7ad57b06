//! Errors raised by sequence traversal.

use thiserror::Error;

use crate::handle::NodeHandle;
use crate::link::Direction;

/// Traversal stepped past the end of a sequence.
///
/// Raised at the failing step: the walk stops at `node`, whose slot facing
/// `direction` is [`Link::Absent`](crate::Link::Absent).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("sequence ends {direction} node {node} (index {index})")]
pub struct BoundaryError {
    /// The last node reached before the boundary.
    pub node: NodeHandle,
    /// Sequence index of `node`.
    pub index: i64,
    /// Which side of `node` is missing.
    pub direction: Direction,
}
