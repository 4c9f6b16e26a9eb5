//! Core types: cells, players, RNG, configuration, errors.
//!
//! These are shared by the board generator, the engine and any renderer.

pub mod cell;
pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use cell::{Cell, BOARD_SIDE};
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::{GameRng, DIE_FACES};
pub use config::{
    GameConfig, GameConfigBuilder, GameMode, MagicKey, ModeKind, DEFAULT_LADDERS, DEFAULT_SNAKES,
    MAX_FEATURES, MAX_PLAYERS, MIN_PLAYERS,
};
pub use error::{BoardError, ConfigError, EngineError};
