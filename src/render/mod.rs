//! Renderer boundary.
//!
//! The engine never draws anything. After each state transition it calls a
//! `Renderer`, which may paint a window, print to a terminal, or just record
//! what happened.
//!
//! - `Renderer`: the notification interface
//! - `EventLog`: records every notification as a `GameEvent`
//! - `NullRenderer`: ignores everything
//! - `TextRenderer`: human-readable lines plus an ASCII board

mod event;
mod text;

pub use event::{EventLog, GameEvent, NullRenderer};
pub use text::{draw_board, TextRenderer, TokenColor};

use crate::board::FeatureKind;
use crate::core::{Cell, PlayerId};

/// Receives engine notifications, in the order they happen within a turn.
pub trait Renderer {
    /// A die was rolled for the current player.
    fn on_dice_rolled(&mut self, value: u8);

    /// A token now stands on `position`.
    fn on_position_changed(&mut self, player: PlayerId, position: Cell);

    /// It is now `player`'s turn.
    fn on_turn_changed(&mut self, player: PlayerId);

    /// `player` reached the goal. No further notifications follow.
    fn on_game_over(&mut self, winner: PlayerId);

    /// `player` rolled the magic key.
    fn on_key_acquired(&mut self, _player: PlayerId) {}

    /// `player` landed on a snake or ladder at `from` and was carried to `to`.
    fn on_feature(&mut self, _player: PlayerId, _kind: FeatureKind, _from: Cell, _to: Cell) {}
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn on_dice_rolled(&mut self, value: u8) {
        (**self).on_dice_rolled(value);
    }

    fn on_position_changed(&mut self, player: PlayerId, position: Cell) {
        (**self).on_position_changed(player, position);
    }

    fn on_turn_changed(&mut self, player: PlayerId) {
        (**self).on_turn_changed(player);
    }

    fn on_game_over(&mut self, winner: PlayerId) {
        (**self).on_game_over(winner);
    }

    fn on_key_acquired(&mut self, player: PlayerId) {
        (**self).on_key_acquired(player);
    }

    fn on_feature(&mut self, player: PlayerId, kind: FeatureKind, from: Cell, to: Cell) {
        (**self).on_feature(player, kind, from, to);
    }
}
