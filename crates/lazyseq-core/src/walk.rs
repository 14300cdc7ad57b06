//! Lazy traversal iterators.

use std::iter::FusedIterator;

use crate::arena::Sequence;
use crate::handle::NodeHandle;
use crate::link::Direction;
use crate::rule::Rule;

/// Iterator over the nodes strictly after (or before) a starting node.
///
/// Each step resolves at most one pending neighbour. The walk ends
/// silently at the sequence boundary and never ends on infinite
/// sequences, so bound it with [`Iterator::take`].
pub struct Walk<'a, T, R> {
    sequence: &'a mut Sequence<T, R>,
    current: Option<NodeHandle>,
    direction: Direction,
}

impl<'a, T, R: Rule<T>> Walk<'a, T, R> {
    pub(crate) fn new(
        sequence: &'a mut Sequence<T, R>,
        start: NodeHandle,
        direction: Direction,
    ) -> Self {
        Self {
            sequence,
            current: Some(start),
            direction,
        }
    }
}

impl<T, R: Rule<T>> Iterator for Walk<'_, T, R> {
    type Item = NodeHandle;

    fn next(&mut self) -> Option<NodeHandle> {
        let current = self.current?;
        self.current = self.sequence.neighbour(current, self.direction).ok();
        self.current
    }
}

impl<T, R: Rule<T>> FusedIterator for Walk<'_, T, R> {}
