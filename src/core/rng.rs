//! Deterministic random number generation for dice and deck shuffles.
//!
//! One seed per engine. Dice and shuffles draw from separate context
//! streams, so reshuffling for a new game never shifts the dice.
//!
//! ```
//! use spaceopoly::core::GameRng;
//!
//! let rng = GameRng::new(42);
//! let mut dice = rng.for_context("dice");
//!
//! let roll = dice.roll_die();
//! assert!((1..=6).contains(&roll));
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Derive an independent stream named `context`.
    ///
    /// Depends only on the seed, never on how much this stream has drawn.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Roll one six-sided die.
    pub fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=6)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}
