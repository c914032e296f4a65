//! Random source used when building randomized bit vectors.
//!
//! A source supplies two primitives, a biased coin flip and a bounded index.
//! Drawing several distinct indices has a provided Fisher-Yates default, so a
//! custom source only implements the two primitives. Every [`rand::Rng`] is a
//! source out of the box and draws distinct indices with
//! [`rand::seq::index::sample`].

use crate::utils::sample_with;
use rand::Rng;

/// Capability required by the random constructors of `BitVector`.
pub trait RandomSource {
    /// Return `true` with probability `p`, where `0.0 <= p <= 1.0`.
    fn next_bool(&mut self, p: f64) -> bool;

    /// Return a uniformly distributed index in `0..bound` (`bound > 0`).
    fn next_index(&mut self, bound: usize) -> usize;

    /// Return `count` distinct indices below `upper`, in ascending order.
    ///
    /// `count` is clamped to `upper`.
    fn next_unique_indices(&mut self, count: usize, upper: usize) -> Vec<usize> {
        let mut pool: Vec<usize> = (0..upper).collect();
        sample_with(&mut pool, count, |bound| self.next_index(bound))
    }
}

impl<R: Rng + ?Sized> RandomSource for R {
    #[inline]
    fn next_bool(&mut self, p: f64) -> bool {
        self.gen_bool(p)
    }

    #[inline]
    fn next_index(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }

    fn next_unique_indices(&mut self, count: usize, upper: usize) -> Vec<usize> {
        let mut picked = rand::seq::index::sample(self, upper, count.min(upper)).into_vec();
        picked.sort_unstable();
        picked
    }
}
