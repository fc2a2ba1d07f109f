//! Deterministic search RNG wrapper.
//!
//! # Determinism strategy
//!
//! The optimizer owns exactly one `SearchRng` seeded from
//! `SearchConfig::seed`.  Every random draw (population lengths and bits,
//! tournament samples, crossover points, mutations) happens on the
//! coordinating thread in a fixed order, so a seed fully determines the
//! outcome even when fitness evaluation runs on a Rayon pool.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG for search operators.
///
/// Used only in single-threaded contexts.
pub struct SearchRng(SmallRng);

impl SearchRng {
    pub fn new(seed: u64) -> Self {
        SearchRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }

    /// `amount` distinct indices from `0..len`, in sampling order.
    ///
    /// # Panics
    /// Panics if `amount > len`.
    pub fn sample_distinct(&mut self, len: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.0, len, amount).into_vec()
    }
}
