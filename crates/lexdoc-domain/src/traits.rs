//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.

/// Source of randomness for demo-result selection
///
/// Implemented by the infrastructure layer (lexdoc-client). Tests inject a
/// fixed or seeded source so fallback output is deterministic.
pub trait RandomSource {
    /// Pick an index in `0..len`. `len` is always greater than zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Always returns the same index (clamped to the range)
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedIndex(pub usize);

impl RandomSource for FixedIndex {
    fn pick_index(&mut self, len: usize) -> usize {
        self.0.min(len.saturating_sub(1))
    }
}
