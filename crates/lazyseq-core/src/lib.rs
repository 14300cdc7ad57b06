//! # lazyseq-core
//!
//! Lazily computed bidirectional sequences.
//!
//! This crate provides:
//! - Arena-allocated nodes addressed by 32-bit handles
//! - Three-state neighbour slots: absent, pending, resolved
//! - Pluggable [`Rule`]s that compute a pending neighbour on first access
//! - Indexed access and lazy iterators over either direction
//!
//! ## Design Principles
//!
//! - **Memoization**: every neighbour is computed at most once and cached
//! - **Handles over pointers**: back-links and cycles need no shared ownership
//! - **Strategy over inheritance**: the recurrence is a value, not a subclass

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arena;
pub mod config;
pub mod error;
pub mod handle;
pub mod link;
pub mod node;
pub mod rule;
pub mod walk;

#[cfg(test)]
mod proptests;

pub use arena::Sequence;
pub use config::SequenceConfig;
pub use error::BoundaryError;
pub use handle::NodeHandle;
pub use link::{Direction, Link};
pub use node::Node;
pub use rule::{Bounded, FnRule, Geometric, Rule};
pub use walk::Walk;
