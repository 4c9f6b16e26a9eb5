//! # snakes-ladders
//!
//! A two-to-four player Snake & Ladders engine with randomly generated
//! boards and an optional "magic key" rule.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: A seed fixes both the board and every die roll.
//!
//! 2. **Renderer-Agnostic**: The engine reports each state change through the
//!    `Renderer` trait and never draws anything itself.
//!
//! 3. **Validated Up Front**: Bad configuration is rejected by
//!    `GameConfigBuilder::build` before a game exists.
//!
//! ## Modules
//!
//! - `core`: Cells, players, RNG, configuration, errors
//! - `board`: Snake/ladder layout and its random generator
//! - `engine`: The turn state machine
//! - `render`: Renderer trait, event log, text output

pub mod core;
pub mod board;
pub mod engine;
pub mod render;

// Re-export commonly used types
pub use crate::core::{
    BoardError, Cell, ConfigError, EngineError, GameConfig, GameConfigBuilder, GameMode, GameRng,
    MagicKey, Player, PlayerId, PlayerMap,
};

pub use crate::board::{Board, BoardGenerator, FeatureKind};

pub use crate::engine::{GameEngine, TurnOutcome, TurnRecord, TurnState};

pub use crate::render::{draw_board, EventLog, GameEvent, NullRenderer, Renderer, TextRenderer, TokenColor};
