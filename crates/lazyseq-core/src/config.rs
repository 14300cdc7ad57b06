//! Tunables for sequence arenas.

/// Configuration for a [`Sequence`](crate::Sequence).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceConfig {
    /// Number of node slots to pre-allocate.
    pub capacity: usize,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self { capacity: 64 }
    }
}

impl SequenceConfig {
    /// Sets the pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}
