//! Deterministic random number generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical boards and dice
//! - **Context streams**: Independent sequences for board layout and dice
//!
//! ```
//! use snakes_ladders::core::GameRng;
//!
//! let root = GameRng::new(42);
//! let mut dice = root.for_context("dice");
//! let mut again = GameRng::new(42).for_context("dice");
//!
//! assert_eq!(dice.roll_die(), again.roll_die());
//! ```

use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};
use std::ops::RangeInclusive;

/// Number of faces on the die.
pub const DIE_FACES: u8 = 6;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from a fresh random seed.
    ///
    /// The chosen seed is still available through [`GameRng::seed`], so an
    /// unseeded game can be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);

        Self::new(hasher.finish())
    }

    /// Roll a six-sided die: uniform over `1..=6`.
    pub fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=DIE_FACES)
    }

    /// Draw two distinct values uniformly from `range`.
    ///
    /// Returns `None` if the range holds fewer than two values.
    pub fn sample_distinct(&mut self, range: RangeInclusive<u8>) -> Option<(u8, u8)> {
        let (lo, hi) = (*range.start(), *range.end());
        if hi <= lo {
            return None;
        }
        let picked = index::sample(&mut self.inner, usize::from(hi - lo) + 1, 2);
        Some((lo + picked.index(0) as u8, lo + picked.index(1) as u8))
    }
}
