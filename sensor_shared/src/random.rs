//! Randomness abstraction.
//!
//! The simulator only ever needs "a uniform float in `[min, max]`", so that
//! is the whole trait. Tests can script the draws; production code uses a
//! seeded `StdRng`.

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Source of uniform draws.
pub trait RandomSource {
    /// Returns a value drawn uniformly from the inclusive range `[min, max]`.
    ///
    /// Callers guarantee `min <= max`.
    fn uniform(&mut self, min: f32, max: f32) -> f32;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn uniform(&mut self, min: f32, max: f32) -> f32 {
        (**self).uniform(min, max)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn uniform(&mut self, min: f32, max: f32) -> f32 {
        (**self).uniform(min, max)
    }
}

/// `StdRng`-backed source.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Deterministic source; equal seeds give equal draw sequences.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Non-reproducible source seeded from the OS.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn uniform(&mut self, min: f32, max: f32) -> f32 {
        if min >= max {
            return min;
        }
        self.rng.gen_range(min..=max)
    }
}
