//! Arena storage for lazily computed sequences.
//!
//! Every node of a sequence lives in one contiguous `Vec` owned by a
//! [`Sequence`]; neighbours point at each other with [`NodeHandle`]s. Nodes
//! are appended as traversal demands and are dropped together with the
//! arena.

use std::fmt;
use std::ops::Index;

use tracing::{debug, trace};

use crate::config::SequenceConfig;
use crate::error::BoundaryError;
use crate::handle::NodeHandle;
use crate::link::{Direction, Link};
use crate::node::Node;
use crate::rule::Rule;
use crate::walk::Walk;

/// A lazily computed, memoized bidirectional sequence.
///
/// Pending neighbours are computed by the rule `R` on first access and
/// cached in the slot, so each neighbour is computed at most once no matter
/// how often it is revisited.
pub struct Sequence<T, R> {
    /// Storage for all nodes, in allocation order.
    nodes: Vec<Node<T>>,
    /// Strategy producing pending neighbours.
    rule: R,
    /// Number of rule invocations so far.
    computations: usize,
}

impl<T, R: Rule<T>> Sequence<T, R> {
    /// Creates an empty sequence driven by `rule`.
    #[must_use]
    pub fn new(rule: R) -> Self {
        Self::with_config(rule, SequenceConfig::default())
    }

    /// Creates an empty sequence with custom configuration.
    #[must_use]
    pub fn with_config(rule: R, config: SequenceConfig) -> Self {
        Self {
            nodes: Vec::with_capacity(config.capacity),
            rule,
            computations: 0,
        }
    }

    /// Constructs a node with explicit neighbour slots.
    ///
    /// The index is the predecessor's index plus one when `predecessor` is
    /// resolved, and 0 otherwise. Neighbours are not back-linked; use
    /// [`Sequence::set_successor`] and friends to splice.
    ///
    /// # Panics
    ///
    /// Panics if `predecessor` refers to a node outside this arena.
    pub fn insert(&mut self, value: T, predecessor: Link, successor: Link) -> NodeHandle {
        let index = match predecessor {
            Link::Resolved(prev) => self.get(prev).index + 1,
            Link::Absent | Link::Pending => 0,
        };
        self.push(Node::new(value, index, predecessor, successor))
    }

    /// Constructs an origin node whose neighbours are both pending.
    pub fn origin(&mut self, value: T) -> NodeHandle {
        self.insert(value, Link::Pending, Link::Pending)
    }

    /// Constructs an origin node with no predecessor and a pending successor.
    pub fn head(&mut self, value: T) -> NodeHandle {
        self.insert(value, Link::Absent, Link::Pending)
    }

    /// Returns the node behind `handle`.
    ///
    /// # Panics
    ///
    /// Panics if the handle does not belong to this arena.
    #[must_use]
    pub fn get(&self, handle: NodeHandle) -> &Node<T> {
        &self.nodes[handle.slot()]
    }

    /// Returns the payload of the node behind `handle`.
    #[must_use]
    pub fn value(&self, handle: NodeHandle) -> &T {
        &self.get(handle).value
    }

    /// Returns the sequence index of the node behind `handle`.
    #[must_use]
    pub fn index(&self, handle: NodeHandle) -> i64 {
        self.get(handle).index
    }

    /// The node before `handle`, computing it on first access.
    ///
    /// # Errors
    ///
    /// Returns [`BoundaryError`] if the sequence starts at `handle`.
    pub fn predecessor(&mut self, handle: NodeHandle) -> Result<NodeHandle, BoundaryError> {
        self.neighbour(handle, Direction::Backward)
    }

    /// The node after `handle`, computing it on first access.
    ///
    /// # Errors
    ///
    /// Returns [`BoundaryError`] if the sequence ends at `handle`.
    pub fn successor(&mut self, handle: NodeHandle) -> Result<NodeHandle, BoundaryError> {
        self.neighbour(handle, Direction::Forward)
    }

    /// Resolves one step from `handle` in `direction`.
    ///
    /// # Errors
    ///
    /// Returns [`BoundaryError`] if the slot is, or turns out to be, absent.
    pub fn neighbour(
        &mut self,
        handle: NodeHandle,
        direction: Direction,
    ) -> Result<NodeHandle, BoundaryError> {
        let node = self.get(handle);
        match node.link(direction) {
            Link::Resolved(next) => Ok(next),
            Link::Absent => Err(self.boundary(handle, direction)),
            Link::Pending => {
                let index = node.index + direction.step();
                let computed = match direction {
                    Direction::Backward => self.rule.compute_predecessor(node),
                    Direction::Forward => self.rule.compute_successor(node),
                };
                self.computations += 1;

                let Some(value) = computed else {
                    *self.nodes[handle.slot()].link_mut(direction) = Link::Absent;
                    return Err(self.boundary(handle, direction));
                };

                let back = Link::Resolved(handle);
                let (predecessor, successor) = match direction {
                    Direction::Backward => (Link::Pending, back),
                    Direction::Forward => (back, Link::Pending),
                };
                let next = self.push(Node::new(value, index, predecessor, successor));
                *self.nodes[handle.slot()].link_mut(direction) = Link::Resolved(next);
                trace!(from = %handle, to = %next, index, "resolved {direction:?} neighbour");
                Ok(next)
            }
        }
    }

    /// Overwrites the predecessor slot of `handle`.
    pub fn set_predecessor(&mut self, handle: NodeHandle, link: impl Into<Link>) {
        self.set_link(handle, Direction::Backward, link.into());
    }

    /// Overwrites the successor slot of `handle`.
    pub fn set_successor(&mut self, handle: NodeHandle, link: impl Into<Link>) {
        self.set_link(handle, Direction::Forward, link.into());
    }

    /// Overwrites the slot of `handle` facing `direction`.
    ///
    /// The link is stored verbatim: indices are not renumbered and the
    /// target is not back-linked.
    pub fn set_link(&mut self, handle: NodeHandle, direction: Direction, link: Link) {
        debug!(node = %handle, ?direction, ?link, "splicing neighbour slot");
        *self.nodes[handle.slot()].link_mut(direction) = link;
    }

    /// Whether `handle` has a predecessor, computed or not.
    ///
    /// Never triggers a computation.
    #[must_use]
    pub fn has_predecessor(&self, handle: NodeHandle) -> bool {
        self.get(handle).predecessor.is_present()
    }

    /// Whether `handle` has a successor, computed or not.
    ///
    /// Never triggers a computation.
    #[must_use]
    pub fn has_successor(&self, handle: NodeHandle) -> bool {
        self.get(handle).successor.is_present()
    }

    /// The node `offset` steps away from `handle`.
    ///
    /// Positive offsets walk successors, negative offsets walk predecessors
    /// and zero returns `handle` itself. Each step may compute and cache one
    /// node.
    ///
    /// # Errors
    ///
    /// Returns [`BoundaryError`] at the first step that runs off the
    /// sequence.
    pub fn at(&mut self, handle: NodeHandle, offset: i64) -> Result<NodeHandle, BoundaryError> {
        let direction = if offset < 0 {
            Direction::Backward
        } else {
            Direction::Forward
        };
        let mut current = handle;
        for _ in 0..offset.unsigned_abs() {
            current = self.neighbour(current, direction)?;
        }
        Ok(current)
    }

    /// Lazily walks the nodes strictly after or before `handle`.
    pub fn walk(&mut self, handle: NodeHandle, direction: Direction) -> Walk<'_, T, R> {
        Walk::new(self, handle, direction)
    }

    /// Lazily walks the nodes after `handle`.
    pub fn successors(&mut self, handle: NodeHandle) -> Walk<'_, T, R> {
        self.walk(handle, Direction::Forward)
    }

    /// Lazily walks the nodes before `handle`.
    pub fn predecessors(&mut self, handle: NodeHandle) -> Walk<'_, T, R> {
        self.walk(handle, Direction::Backward)
    }

    /// Clones up to `n` payloads going forward, starting with `handle`.
    ///
    /// Stops early at the end of the sequence.
    pub fn take_values(&mut self, handle: NodeHandle, n: usize) -> Vec<T>
    where
        T: Clone,
    {
        let mut values = Vec::with_capacity(n);
        if n == 0 {
            return values;
        }
        values.push(self.value(handle).clone());
        let handles: Vec<_> = self.successors(handle).take(n - 1).collect();
        values.extend(handles.into_iter().map(|h| self.value(h).clone()));
        values
    }

    fn push(&mut self, node: Node<T>) -> NodeHandle {
        let slot = self.nodes.len();
        assert!(slot < u32::MAX as usize, "Sequence capacity exceeded");

        #[allow(clippy::cast_possible_truncation)]
        let handle = NodeHandle::new(slot as u32);
        self.nodes.push(node);
        handle
    }

    fn boundary(&self, handle: NodeHandle, direction: Direction) -> BoundaryError {
        let index = self.get(handle).index;
        trace!(node = %handle, index, "sequence ends {direction}");
        BoundaryError {
            node: handle,
            index,
            direction,
        }
    }
}

impl<T, R> Sequence<T, R> {
    /// The rule driving this sequence.
    #[must_use]
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// Number of nodes materialised so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if no node has been constructed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of times the rule has been consulted.
    ///
    /// Includes consultations that found a boundary.
    #[must_use]
    pub fn computations(&self) -> usize {
        self.computations
    }

    /// Iterates all materialised nodes in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeHandle, &Node<T>)> {
        self.nodes.iter().enumerate().map(|(slot, node)| {
            #[allow(clippy::cast_possible_truncation)]
            let handle = NodeHandle::new(slot as u32);
            (handle, node)
        })
    }
}

impl<T, R> Index<NodeHandle> for Sequence<T, R> {
    type Output = Node<T>;

    fn index(&self, handle: NodeHandle) -> &Node<T> {
        &self.nodes[handle.slot()]
    }
}

impl<T: fmt::Debug, R> fmt::Debug for Sequence<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("nodes", &self.nodes)
            .field("computations", &self.computations)
            .finish_non_exhaustive()
    }
}
