//! Seeded random source backed by `rand_chacha`.

use combat_core::RandomNumberService;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// [`RandomNumberService`] over a ChaCha8 stream.
///
/// Equal seeds replay identical hit rolls.
#[derive(Clone, Debug)]
pub struct ChaChaRandom {
    rng: ChaCha8Rng,
}

impl ChaChaRandom {
    pub fn seed_from_u64(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomNumberService for ChaChaRandom {
    fn range(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        self.rng.gen_range(min..max)
    }
}
