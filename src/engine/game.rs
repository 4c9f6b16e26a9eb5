//! The turn state machine.

use crate::board::{Board, BoardGenerator};
use crate::core::{
    BoardError, Cell, EngineError, GameConfig, GameRng, Player, PlayerId, PlayerMap, DIE_FACES,
};
use crate::render::Renderer;

use super::record::{TurnOutcome, TurnRecord, TurnState};

/// One game of Snake & Ladders.
///
/// Owns the board, the players and the dice. Each call to
/// [`GameEngine::roll_dice`] plays exactly one turn: roll, move, resolve a
/// snake or ladder, check for a win, pass the turn. The renderer is told
/// about every step.
///
/// ## Example
///
/// ```
/// use snakes_ladders::core::GameConfig;
/// use snakes_ladders::engine::GameEngine;
/// use snakes_ladders::render::EventLog;
///
/// let config = GameConfig::builder().player_count(3).seed(Some(42)).build().unwrap();
/// let mut engine = GameEngine::new(config).unwrap();
/// let mut log = EventLog::new();
///
/// while !engine.is_over() {
///     engine.roll_dice(&mut log).unwrap();
/// }
/// assert!(engine.roll_dice(&mut log).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: GameConfig,
    board: Board,
    players: PlayerMap<Player>,
    state: TurnState,
    dice: GameRng,
    seed: u64,
    history: Vec<TurnRecord>,
}

impl GameEngine {
    /// Start a game on a freshly generated board.
    ///
    /// Board and dice use separate streams of the configured seed, so the
    /// same seed always gives the same board and the same rolls.
    pub fn new(config: GameConfig) -> Result<Self, BoardError> {
        let root = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let board = BoardGenerator::from_config(&config).generate(&mut root.for_context("board"))?;
        Ok(Self::assemble(config, board, &root))
    }

    /// Start a game on a fixed board.
    pub fn with_board(config: GameConfig, board: Board) -> Self {
        let root = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self::assemble(config, board, &root)
    }

    fn assemble(config: GameConfig, board: Board, root: &GameRng) -> Self {
        let names = &config.player_names;
        let players = PlayerMap::new(names.len(), |p| Player::new(names[p.index()].clone()));

        Self {
            board,
            players,
            state: TurnState::AwaitingRoll(PlayerId::new(0)),
            dice: root.for_context("dice"),
            seed: root.seed(),
            history: Vec::new(),
            config,
        }
    }

    // === Turn Cycle ===

    /// Roll the die for the current player and play the turn.
    ///
    /// Returns [`EngineError::GameOver`] once someone has won; the engine
    /// never resumes play after that.
    pub fn roll_dice<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> Result<TurnRecord, EngineError> {
        self.current_player()?;
        let roll = self.dice.roll_die();
        self.play_roll(roll, renderer)
    }

    /// Play the current player's turn with a known die value.
    pub fn play_roll<R: Renderer + ?Sized>(
        &mut self,
        roll: u8,
        renderer: &mut R,
    ) -> Result<TurnRecord, EngineError> {
        let player = self.current_player()?;
        if !(1..=DIE_FACES).contains(&roll) {
            return Err(EngineError::InvalidRoll(roll));
        }

        renderer.on_dice_rolled(roll);
        let outcome = self.resolve(player, roll, renderer);

        let record = TurnRecord {
            turn: self.history.len() as u32 + 1,
            player,
            roll,
            outcome,
        };
        self.history.push(record);

        if let TurnOutcome::Won { .. } = outcome {
            self.state = TurnState::GameOver(player);
            renderer.on_game_over(player);
        } else {
            let next = player.next(self.players.player_count());
            self.state = TurnState::AwaitingRoll(next);
            renderer.on_turn_changed(next);
        }

        Ok(record)
    }

    fn resolve<R: Renderer + ?Sized>(&mut self, player: PlayerId, roll: u8, renderer: &mut R) -> TurnOutcome {
        if let Some(key) = self.config.mode.magic_key() {
            let seat = &mut self.players[player];
            if !seat.has_key {
                if roll != key.value() {
                    return TurnOutcome::KeyMissed;
                }
                seat.has_key = true;
                renderer.on_key_acquired(player);
                return TurnOutcome::KeyAcquired;
            }
        }

        let from = self.players[player].position;
        let Some(landed) = from.advance(roll) else {
            return TurnOutcome::Overshoot { position: from };
        };

        let (to, feature) = self.board.resolve(landed);
        if let Some(kind) = feature {
            renderer.on_feature(player, kind, landed, to);
        }

        self.players[player].position = to;
        renderer.on_position_changed(player, to);

        if to.is_goal() {
            TurnOutcome::Won { from, landed }
        } else {
            TurnOutcome::Moved { from, landed, to }
        }
    }

    // === Queries ===

    /// Whose turn it is, or [`EngineError::GameOver`].
    pub fn current_player(&self) -> Result<PlayerId, EngineError> {
        match self.state {
            TurnState::AwaitingRoll(player) => Ok(player),
            TurnState::GameOver(winner) => Err(EngineError::GameOver { winner }),
        }
    }

    #[must_use]
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// The winner, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.state {
            TurnState::GameOver(winner) => Some(winner),
            TurnState::AwaitingRoll(_) => None,
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &Player {
        &self.players[player]
    }

    /// Position of `player`'s token.
    #[must_use]
    pub fn position(&self, player: PlayerId) -> Cell {
        self.players[player].position
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seed the board and dice were derived from; replays the game when
    /// passed back in the configuration.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Every resolved roll, oldest first.
    #[must_use]
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }
}
