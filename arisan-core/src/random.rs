//! Index selection over the remaining pool.
//!
//! Seeded draws use ChaCha12 seeded through `SeedableRng::seed_from_u64`, and
//! the index is the first `gen_range(0..len)` sample taken over `u64`. Both
//! steps are value-stable across platforms, so a recorded `(seed, pool_size)`
//! pair always replays to the same index.
//!
//! Reference values: seed 42 over a pool of 3 selects index 1 (so
//! `["Ani", "Budi", "Cici"]` yields "Budi"); over a pool of 5, seeds 0, 1, 7
//! and 12345 select 0, 3, 0 and 1.

use rand::rngs::OsRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha12Rng;

/// Source of uniform indices, either reproducible or entropy-backed
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: ChaCha12Rng,
    seed: Option<u64>,
}

impl RandomSource {
    /// Deterministic stream for the given seed
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha12Rng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Non-reproducible stream seeded from the OS
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha12Rng::from_entropy(),
            seed: None,
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Uniform index in `[0, bound)`, or `None` when `bound` is zero
    pub fn next_index(&mut self, bound: usize) -> Option<usize> {
        if bound == 0 {
            return None;
        }
        let idx = self.rng.gen_range(0..bound as u64);
        usize::try_from(idx).ok()
    }
}

/// Pick one index of `pool`. `None` means the pool was empty.
pub fn draw_index<T>(pool: &[T], seed: Option<u64>) -> Option<usize> {
    let mut source = match seed {
        Some(seed) => RandomSource::from_seed(seed),
        None => RandomSource::from_entropy(),
    };
    let idx = source.next_index(pool.len());
    tracing::debug!(
        "Selected index {:?} of {} (seed {:?})",
        idx,
        pool.len(),
        seed
    );
    idx
}

/// Index a recorded draw should have produced
pub fn replay(seed: u64, pool_size: usize) -> Option<usize> {
    RandomSource::from_seed(seed).next_index(pool_size)
}

/// Fresh 32-bit seed for draws the caller left unseeded
pub fn generate_seed() -> u32 {
    OsRng.next_u32()
}
