//! Injectable randomness.
//!
//! Engines never reach for a global generator: every random decision (computer
//! choice, tie-break between equally good moves) goes through a [`RandomSource`]
//! handed in by the caller, so tests can supply fixed sequences.

use rand::Rng;

/// Source of uniform random indices.
pub trait RandomSource {
    /// Returns an index uniformly drawn from `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Picks one element of `items` uniformly, or `None` if it is empty.
    fn choose<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.pick_index(items.len())).copied()
    }
}

impl<R: Rng> RandomSource for R {
    fn pick_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}
