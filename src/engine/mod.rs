//! Game engine: turn order, movement, the magic-key rule and the win check.
//!
//! ```text
//! AwaitingRoll(p) --roll--> [resolve] --> AwaitingRoll(next(p))
//!                                    \--> GameOver(p)
//! ```
//!
//! The resolve step runs entirely inside one call; nothing else can observe
//! the engine mid-turn.

mod game;
mod record;

pub use game::GameEngine;
pub use record::{TurnOutcome, TurnRecord, TurnState};
