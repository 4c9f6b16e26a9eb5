//! Turn state and turn history.

use serde::{Deserialize, Serialize};

use crate::board::FeatureKind;
use crate::core::{Cell, PlayerId};

/// Where the engine is between calls.
///
/// Resolving a roll happens inside a single call and is never observable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    /// Waiting for `player` to roll.
    AwaitingRoll(PlayerId),
    /// `winner` reached the goal; the engine accepts no more rolls.
    GameOver(PlayerId),
}

/// What a single roll did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Magic-key mode: the roll was not the key. No movement.
    KeyMissed,
    /// Magic-key mode: the roll was the key. No movement this turn.
    KeyAcquired,
    /// The roll would pass the goal. No movement.
    Overshoot { position: Cell },
    /// The token moved: rolled onto `landed`, finished on `to`.
    Moved { from: Cell, landed: Cell, to: Cell },
    /// The token reached the goal.
    Won { from: Cell, landed: Cell },
}

impl TurnOutcome {
    /// Snake or ladder taken on this roll, if any.
    #[must_use]
    pub fn feature(&self) -> Option<FeatureKind> {
        let (landed, to) = match *self {
            TurnOutcome::Moved { landed, to, .. } => (landed, to),
            TurnOutcome::Won { landed, .. } => (landed, Cell::GOAL),
            _ => return None,
        };
        match landed.cmp(&to) {
            std::cmp::Ordering::Greater => Some(FeatureKind::Snake),
            std::cmp::Ordering::Less => Some(FeatureKind::Ladder),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Position after the roll, if the token moved.
    #[must_use]
    pub fn destination(&self) -> Option<Cell> {
        match *self {
            TurnOutcome::Moved { to, .. } => Some(to),
            TurnOutcome::Won { .. } => Some(Cell::GOAL),
            _ => None,
        }
    }
}

/// One resolved roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// 1-based count of rolls in this game.
    pub turn: u32,
    /// Who rolled.
    pub player: PlayerId,
    /// Die value.
    pub roll: u8,
    /// What happened.
    pub outcome: TurnOutcome,
}

impl std::fmt::Display for TurnRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {} rolled {}: ", self.turn, self.player, self.roll)?;
        match self.outcome {
            TurnOutcome::KeyMissed => write!(f, "no magic key yet, turn passes"),
            TurnOutcome::KeyAcquired => write!(f, "found the magic key"),
            TurnOutcome::Overshoot { position } => {
                write!(f, "overshoots the goal, stays on {}", position)
            }
            TurnOutcome::Moved { from, landed, to } => match self.outcome.feature() {
                Some(kind) => write!(f, "{} -> {} ({} to {})", from, landed, kind, to),
                None => write!(f, "{} -> {}", from, to),
            },
            TurnOutcome::Won { from, landed } => match self.outcome.feature() {
                Some(kind) => write!(f, "{} -> {} ({} to {}), wins", from, landed, kind, Cell::GOAL),
                None => write!(f, "{} -> {}, wins", from, Cell::GOAL),
            },
        }
    }
}
