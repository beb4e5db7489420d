use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded randomness source for a single game session. Tests pin the seed;
/// production sessions draw one from the thread RNG.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range(&mut self, range: Range<usize>) -> usize {
        self.rng.random_range(range)
    }
}
