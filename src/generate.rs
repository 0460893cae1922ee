//! Seeded input generation.
//!
//! Produces arrays that satisfy each [`InputShape`] so randomized runs never
//! violate an unvalidated precondition. The same seed always yields the
//! same arrays.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::ops::RangeInclusive;

use crate::catalog::InputShape;

/// Deterministic array generator backed by ChaCha8.
pub struct InputGenerator {
    rng: ChaCha8Rng,
}

impl InputGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// `len` values drawn uniformly from `range`.
    pub fn values(&mut self, len: usize, range: RangeInclusive<i32>) -> Vec<i32> {
        (0..len).map(|_| self.rng.gen_range(range.clone())).collect()
    }

    /// Ascending values drawn from `range`.
    pub fn sorted(&mut self, len: usize, range: RangeInclusive<i32>) -> Vec<i32> {
        let mut values = self.values(len, range);
        values.sort_unstable();
        values
    }

    /// Values drawn from {0, 1, 2}.
    pub fn flags(&mut self, len: usize) -> Vec<i32> {
        self.values(len, 0..=2)
    }

    /// Values from `range` clamped below at zero.
    pub fn non_negative(&mut self, len: usize, range: RangeInclusive<i32>) -> Vec<i32> {
        let low = (*range.start()).max(0);
        let high = (*range.end()).max(low);
        self.values(len, low..=high)
    }

    /// Shuffled array in which one value occupies `len / 2 + 1` positions.
    pub fn with_majority(&mut self, len: usize, range: RangeInclusive<i32>) -> Vec<i32> {
        if len == 0 {
            return Vec::new();
        }
        let majority = self.rng.gen_range(range.clone());
        let mut values = vec![majority; len / 2 + 1];
        let rest = len - values.len();
        values.extend(self.values(rest, range));
        values.shuffle(&mut self.rng);
        values
    }

    /// Array of `len` elements satisfying `shape`.
    pub fn shaped(&mut self, shape: InputShape, len: usize, range: RangeInclusive<i32>) -> Vec<i32> {
        match shape {
            InputShape::Any => self.values(len, range),
            InputShape::Sorted => self.sorted(len, range),
            InputShape::Flags => self.flags(len),
            InputShape::NonNegative => self.non_negative(len, range),
            InputShape::Majority => self.with_majority(len, range),
        }
    }
}
