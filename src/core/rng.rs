//! Random number generation for deck shuffling.
//!
//! ## Key Features
//!
//! - **Request-scoped**: every match seeds its own generator, from OS entropy
//!   unless a seed is configured. Nothing is seeded globally.
//! - **Deterministic**: same seed produces identical shuffles.
//! - **Forkable**: each side gets an independent branch of the match RNG.
//!
//! ```
//! use planar_duel::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut side_rng = rng.fork();
//!
//! let mut a = vec![1, 2, 3, 4, 5, 6, 7, 8];
//! let mut b = a.clone();
//! rng.shuffle(&mut a);
//! side_rng.shuffle(&mut b);
//! a.sort();
//! assert_eq!(a, vec![1, 2, 3, 4, 5, 6, 7, 8]);
//! ```

use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Shuffling RNG with forking.
///
/// Uses ChaCha8 for speed while keeping shuffles unbiased.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create a new RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().next_u64())
    }

    /// Seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Shuffle a slice in place (Fisher-Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}
