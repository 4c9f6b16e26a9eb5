//! Error types.
//!
//! - `ConfigError`: rejected before a game starts; shown to the user.
//! - `BoardError`: an invalid hand-built board, or the generator ran out of attempts.
//! - `EngineError`: misuse of a running engine.

use super::cell::Cell;
use super::player::PlayerId;

/// Errors that can occur while validating a game configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("player count must be between {min} and {max}, got {got}")]
    PlayerCount { min: usize, max: usize, got: usize },

    #[error("Magic key must be an integer between 1 and 6.")]
    MagicKeyOutOfRange(i64),

    #[error("Magic key must be an integer between 1 and 6.")]
    MagicKeyNotANumber(String),

    #[error("magic-key mode requires a magic key value")]
    MissingMagicKey,

    #[error("unknown game mode '{0}' (expected 'normal' or 'magic-key')")]
    UnknownMode(String),

    #[error("{requested} snakes and ladders requested, at most {max} fit on the board")]
    TooManyFeatures { requested: usize, max: usize },
}

/// Errors that can occur while building or generating a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("cell {0} is outside 1-100")]
    OutOfRange(u8),

    #[error("cell {0} cannot hold a snake or ladder endpoint")]
    ReservedCell(Cell),

    #[error("cell {0} is used by more than one snake or ladder endpoint")]
    SharedEndpoint(Cell),

    #[error("snake from {start} to {end} must go down")]
    SnakeGoesUp { start: Cell, end: Cell },

    #[error("ladder from {start} to {end} must go up")]
    LadderGoesDown { start: Cell, end: Cell },

    #[error("gave up placing snakes and ladders after {attempts} attempts")]
    Exhausted { attempts: u64 },
}

/// Errors returned by `GameEngine` operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("the game is over, {winner} already won")]
    GameOver { winner: PlayerId },

    #[error("die value {0} is outside 1-6")]
    InvalidRoll(u8),
}
