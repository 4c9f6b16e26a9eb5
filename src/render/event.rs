//! Recorded engine notifications.

use serde::{Deserialize, Serialize};

use super::Renderer;
use crate::board::FeatureKind;
use crate::core::{Cell, PlayerId};

/// One renderer notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    DiceRolled(u8),
    PositionChanged { player: PlayerId, position: Cell },
    TurnChanged(PlayerId),
    GameOver(PlayerId),
    KeyAcquired(PlayerId),
    Feature {
        player: PlayerId,
        kind: FeatureKind,
        from: Cell,
        to: Cell,
    },
}

/// Renderer that records every notification.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take the recorded events, leaving the log empty.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Renderer for EventLog {
    fn on_dice_rolled(&mut self, value: u8) {
        self.events.push(GameEvent::DiceRolled(value));
    }

    fn on_position_changed(&mut self, player: PlayerId, position: Cell) {
        self.events.push(GameEvent::PositionChanged { player, position });
    }

    fn on_turn_changed(&mut self, player: PlayerId) {
        self.events.push(GameEvent::TurnChanged(player));
    }

    fn on_game_over(&mut self, winner: PlayerId) {
        self.events.push(GameEvent::GameOver(winner));
    }

    fn on_key_acquired(&mut self, player: PlayerId) {
        self.events.push(GameEvent::KeyAcquired(player));
    }

    fn on_feature(&mut self, player: PlayerId, kind: FeatureKind, from: Cell, to: Cell) {
        self.events.push(GameEvent::Feature { player, kind, from, to });
    }
}

/// Renderer that ignores every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn on_dice_rolled(&mut self, _value: u8) {}
    fn on_position_changed(&mut self, _player: PlayerId, _position: Cell) {}
    fn on_turn_changed(&mut self, _player: PlayerId) {}
    fn on_game_over(&mut self, _winner: PlayerId) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_log_records_in_order() {
        let mut log = EventLog::new();
        let p1 = PlayerId::new(1);
        let cell = Cell::new(22).unwrap();

        log.on_dice_rolled(2);
        log.on_feature(p1, FeatureKind::Ladder, Cell::new(3).unwrap(), cell);
        log.on_position_changed(p1, cell);
        log.on_turn_changed(PlayerId::new(0));

        assert_eq!(log.len(), 4);
        assert_eq!(log.events()[0], GameEvent::DiceRolled(2));
        assert_eq!(
            log.events()[2],
            GameEvent::PositionChanged { player: p1, position: cell }
        );

        let drained = log.drain();
        assert_eq!(drained.len(), 4);
        assert!(log.is_empty());
    }

    #[test]
    fn test_through_mut_reference() {
        fn notify<R: Renderer>(mut renderer: R) {
            renderer.on_game_over(PlayerId::new(0));
            renderer.on_key_acquired(PlayerId::new(1));
        }

        let mut log = EventLog::new();
        notify(&mut log);
        assert_eq!(
            log.events(),
            &[GameEvent::GameOver(PlayerId::new(0)), GameEvent::KeyAcquired(PlayerId::new(1))]
        );
    }

    #[test]
    fn test_event_serialization() {
        let event = GameEvent::PositionChanged {
            player: PlayerId::new(2),
            position: Cell::new(57).unwrap(),
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
