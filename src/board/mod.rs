//! The board: snake and ladder layout plus its random generator.
//!
//! A `Board` is created once at game start and never changes afterwards.

mod generator;
mod layout;

pub use generator::{BoardGenerator, DEFAULT_MAX_ATTEMPTS};
pub use layout::{Board, FeatureKind};
