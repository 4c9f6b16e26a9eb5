//! Random board generation by rejection sampling.
//!
//! Two distinct cells are drawn from 2..=99. The pair is kept when it points
//! the right way for the feature being placed and neither cell is taken yet;
//! otherwise it is thrown away and another pair is drawn. Ladders are placed
//! first, then snakes.

use rustc_hash::FxHashSet;

use super::layout::Board;
use crate::core::{BoardError, Cell, GameConfig, GameRng, DEFAULT_LADDERS, DEFAULT_SNAKES};

/// Draw budget shared by all placements of one board.
pub const DEFAULT_MAX_ATTEMPTS: u64 = 1_000_000;

const FIRST_CANDIDATE: u8 = 2;
const LAST_CANDIDATE: u8 = 99;

/// Places snakes and ladders on a fresh board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardGenerator {
    /// Snakes to place.
    pub snakes: usize,
    /// Ladders to place.
    pub ladders: usize,
    /// Pair draws allowed before giving up.
    pub max_attempts: u64,
}

impl Default for BoardGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_SNAKES, DEFAULT_LADDERS)
    }
}

impl BoardGenerator {
    pub fn new(snakes: usize, ladders: usize) -> Self {
        Self {
            snakes,
            ladders,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Generator for the feature counts in `config`.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.snakes, config.ladders)
    }

    #[must_use]
    pub fn with_max_attempts(mut self, attempts: u64) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Generate a board. Deterministic for a given `rng` state.
    ///
    /// ```
    /// use snakes_ladders::board::BoardGenerator;
    /// use snakes_ladders::core::GameRng;
    ///
    /// let board = BoardGenerator::default().generate(&mut GameRng::new(1)).unwrap();
    /// assert_eq!(board.snake_count(), 8);
    /// assert_eq!(board.ladder_count(), 8);
    /// ```
    pub fn generate(&self, rng: &mut GameRng) -> Result<Board, BoardError> {
        let mut used = FxHashSet::default();
        let mut attempts = 0u64;

        let ladders = self.place(self.ladders, |a, b| a < b, rng, &mut used, &mut attempts)?;
        let snakes = self.place(self.snakes, |a, b| a > b, rng, &mut used, &mut attempts)?;

        Board::new(snakes, ladders)
    }

    fn place(
        &self,
        count: usize,
        oriented: impl Fn(Cell, Cell) -> bool,
        rng: &mut GameRng,
        used: &mut FxHashSet<Cell>,
        attempts: &mut u64,
    ) -> Result<Vec<(Cell, Cell)>, BoardError> {
        let mut placed = Vec::with_capacity(count);

        while placed.len() < count {
            if *attempts >= self.max_attempts {
                return Err(BoardError::Exhausted { attempts: *attempts });
            }
            *attempts += 1;

            let Some((a, b)) = rng.sample_distinct(FIRST_CANDIDATE..=LAST_CANDIDATE) else {
                return Err(BoardError::Exhausted { attempts: *attempts });
            };
            let (Some(start), Some(end)) = (Cell::new(a), Cell::new(b)) else {
                continue;
            };

            if oriented(start, end) && !used.contains(&start) && !used.contains(&end) {
                used.insert(start);
                used.insert(end);
                placed.push((start, end));
            }
        }

        Ok(placed)
    }
}
