//! Computation rules for lazy neighbours.
//!
//! A [`Rule`] is the strategy a [`Sequence`](crate::Sequence) consults the
//! first time a pending slot is dereferenced. It maps the state of the
//! current node to the payload of its neighbour, or to `None` when the
//! sequence ends on that side.
//!
//! ## Provided rules
//!
//! - `()`: the base rule, every pending slot resolves to absent
//! - [`FnRule`]: a pair of closures
//! - [`Bounded`]: restricts another rule to an index window
//! - [`Geometric`]: multiply or divide by a fixed ratio

use num_traits::{CheckedDiv, CheckedMul, CheckedRem, Zero};

use crate::node::Node;

/// Strategy computing the neighbours of a node.
///
/// Both hooks default to `None`, which marks the sequence boundary.
/// Implementations should be deterministic functions of the node; the
/// arena calls each hook at most once per slot and caches the outcome.
pub trait Rule<T> {
    /// Payload of the node before `node`, or `None` if there is none.
    fn compute_predecessor(&self, node: &Node<T>) -> Option<T> {
        let _ = node;
        None
    }

    /// Payload of the node after `node`, or `None` if there is none.
    fn compute_successor(&self, node: &Node<T>) -> Option<T> {
        let _ = node;
        None
    }
}

impl<T> Rule<T> for () {}

impl<T, R: Rule<T> + ?Sized> Rule<T> for Box<R> {
    fn compute_predecessor(&self, node: &Node<T>) -> Option<T> {
        (**self).compute_predecessor(node)
    }

    fn compute_successor(&self, node: &Node<T>) -> Option<T> {
        (**self).compute_successor(node)
    }
}

/// Signature of a rule that never produces a neighbour.
pub type NoNeighbour<T> = fn(&Node<T>) -> Option<T>;

fn no_neighbour<T>(_: &Node<T>) -> Option<T> {
    None
}

/// A rule assembled from two closures.
#[derive(Clone, Copy, Debug)]
pub struct FnRule<P, S> {
    predecessor: P,
    successor: S,
}

impl<P, S> FnRule<P, S> {
    /// Creates a rule computing predecessors with `predecessor` and
    /// successors with `successor`.
    pub const fn new(predecessor: P, successor: S) -> Self {
        Self {
            predecessor,
            successor,
        }
    }
}

impl<T, S> FnRule<NoNeighbour<T>, S>
where
    S: Fn(&Node<T>) -> Option<T>,
{
    /// A sequence that only grows forward; predecessors are always absent.
    pub fn forward(successor: S) -> Self {
        Self::new(no_neighbour::<T>, successor)
    }
}

impl<T, P> FnRule<P, NoNeighbour<T>>
where
    P: Fn(&Node<T>) -> Option<T>,
{
    /// A sequence that only grows backward; successors are always absent.
    pub fn backward(predecessor: P) -> Self {
        Self::new(predecessor, no_neighbour::<T>)
    }
}

impl<T, P, S> Rule<T> for FnRule<P, S>
where
    P: Fn(&Node<T>) -> Option<T>,
    S: Fn(&Node<T>) -> Option<T>,
{
    fn compute_predecessor(&self, node: &Node<T>) -> Option<T> {
        (self.predecessor)(node)
    }

    fn compute_successor(&self, node: &Node<T>) -> Option<T> {
        (self.successor)(node)
    }
}

/// Restricts a rule to the inclusive index window `[lower, upper]`.
///
/// Nodes at `lower` have no computed predecessor and nodes at `upper` have
/// no computed successor. `None` leaves that side unbounded.
#[derive(Clone, Debug)]
pub struct Bounded<R> {
    inner: R,
    lower: Option<i64>,
    upper: Option<i64>,
}

impl<R> Bounded<R> {
    /// Wraps `inner` with the given index window.
    pub const fn new(inner: R, lower: Option<i64>, upper: Option<i64>) -> Self {
        Self { inner, lower, upper }
    }

    /// A window `[0, len - 1]`, i.e. a finite sequence of `len` nodes
    /// starting at the origin.
    ///
    /// The origin itself always exists, so `len` must be at least 1.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `len` is zero.
    pub fn finite(inner: R, len: usize) -> Self {
        debug_assert!(len > 0, "a finite sequence holds at least its origin");
        let last = i64::try_from(len).unwrap_or(i64::MAX) - 1;
        Self::new(inner, Some(0), Some(last))
    }

    /// The wrapped rule.
    pub fn inner(&self) -> &R {
        &self.inner
    }
}

impl<T, R: Rule<T>> Rule<T> for Bounded<R> {
    fn compute_predecessor(&self, node: &Node<T>) -> Option<T> {
        if self.lower.is_some_and(|lower| node.index() <= lower) {
            return None;
        }
        self.inner.compute_predecessor(node)
    }

    fn compute_successor(&self, node: &Node<T>) -> Option<T> {
        if self.upper.is_some_and(|upper| node.index() >= upper) {
            return None;
        }
        self.inner.compute_successor(node)
    }
}

/// The recurrence `aₙ₊₁ = r·aₙ`, extended backward by `aₙ₋₁ = aₙ / r`.
///
/// The sequence ends where a step leaves the value type: a forward step
/// that overflows, or a backward step where `r` is zero or does not divide
/// `aₙ` exactly. Every computed predecessor is therefore mapped back onto
/// its successor by the forward rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Geometric<T> {
    ratio: T,
}

impl<T> Geometric<T> {
    /// Creates the recurrence with the given ratio.
    pub const fn new(ratio: T) -> Self {
        Self { ratio }
    }

    /// The common ratio.
    pub fn ratio(&self) -> &T {
        &self.ratio
    }
}

impl<T> Rule<T> for Geometric<T>
where
    T: Zero + CheckedMul + CheckedDiv + CheckedRem,
{
    fn compute_predecessor(&self, node: &Node<T>) -> Option<T> {
        if self.ratio.is_zero() {
            return None;
        }
        if !node.value().checked_rem(&self.ratio)?.is_zero() {
            return None;
        }
        node.value().checked_div(&self.ratio)
    }

    fn compute_successor(&self, node: &Node<T>) -> Option<T> {
        node.value().checked_mul(&self.ratio)
    }
}
