//! # lazyseq
//!
//! Sequences whose elements are computed on demand and cached.
//!
//! A sequence is a chain of nodes, each knowing its predecessor and
//! successor. A neighbour may be absent (the sequence ends), pending (to be
//! computed by a [`Rule`](prelude::Rule) on first access) or resolved.
//!
//! ## Quick Start
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! // 1, 2, 4, 8, ... with nothing before 1
//! let mut powers = Sequence::new(Geometric::new(2u64));
//! let one = powers.head(1);
//!
//! let n = powers.at(one, 5).unwrap();
//! assert_eq!(*powers.value(n), 32);
//! assert!(powers.predecessor(one).is_err());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use lazyseq_core as core;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use lazyseq_core::{
        BoundaryError, Bounded, Direction, FnRule, Geometric, Link, Node, NodeHandle, Rule,
        Sequence, SequenceConfig,
    };
}
