//! Game configuration.
//!
//! Everything is collected once before play through `GameConfigBuilder`.
//! `build()` validates the whole configuration, so an invalid player count,
//! magic key or feature count is reported to whoever collected the input and
//! never reaches the engine.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::ConfigError;
use super::player::PlayerId;
use super::rng::DIE_FACES;

/// Fewest players in a game.
pub const MIN_PLAYERS: usize = 2;
/// Most players in a game.
pub const MAX_PLAYERS: usize = 4;
/// Default number of snakes on a generated board.
pub const DEFAULT_SNAKES: usize = 8;
/// Default number of ladders on a generated board.
pub const DEFAULT_LADDERS: usize = 8;
/// Most snakes plus ladders a board can hold: 98 candidate cells, two per feature.
pub const MAX_FEATURES: usize = 49;

/// Die value a player must roll once before their moves count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct MagicKey(u8);

impl MagicKey {
    /// Validate a key value.
    pub fn new(value: i64) -> Result<Self, ConfigError> {
        if (1..=i64::from(DIE_FACES)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ConfigError::MagicKeyOutOfRange(value))
        }
    }

    /// Parse a key typed by the user.
    ///
    /// ```
    /// use snakes_ladders::core::MagicKey;
    ///
    /// assert_eq!(MagicKey::parse(" 4 ").unwrap().value(), 4);
    /// assert!(MagicKey::parse("7").is_err());
    /// assert!(MagicKey::parse("four").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ConfigError> {
        let trimmed = input.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| ConfigError::MagicKeyNotANumber(trimmed.to_string()))?;
        Self::new(value)
    }

    /// The die value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for MagicKey {
    type Error = ConfigError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MagicKey> for u8 {
    fn from(key: MagicKey) -> u8 {
        key.0
    }
}

/// Rules variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Classic rules: every roll moves.
    #[default]
    Normal,
    /// Each player must roll the key value once before moving.
    MagicKey(MagicKey),
}

impl GameMode {
    /// The configured key, if any.
    #[must_use]
    pub fn magic_key(self) -> Option<MagicKey> {
        match self {
            GameMode::Normal => None,
            GameMode::MagicKey(key) => Some(key),
        }
    }
}

/// Mode name as typed by the user, before a key value is attached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeKind {
    Normal,
    MagicKey,
}

impl FromStr for ModeKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(ModeKind::Normal),
            "magic-key" | "magic_key" | "magic" => Ok(ModeKind::MagicKey),
            other => Err(ConfigError::UnknownMode(other.to_string())),
        }
    }
}

/// Validated configuration for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Display names, one per player, never blank.
    pub player_names: Vec<String>,

    /// Rules variant.
    pub mode: GameMode,

    /// Snakes placed on a generated board.
    pub snakes: usize,

    /// Ladders placed on a generated board.
    pub ladders: usize,

    /// Seed for board and dice. `None` draws a fresh one.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_names.len()
    }

    /// Start a builder.
    #[must_use]
    pub fn builder() -> GameConfigBuilder {
        GameConfigBuilder::new()
    }
}

/// Collects raw user input and validates it into a `GameConfig`.
#[derive(Clone, Debug)]
pub struct GameConfigBuilder {
    player_count: usize,
    names: Vec<String>,
    mode: ModeKind,
    magic_key: Option<String>,
    snakes: usize,
    ladders: usize,
    seed: Option<u64>,
}

impl Default for GameConfigBuilder {
    fn default() -> Self {
        Self {
            player_count: MIN_PLAYERS,
            names: Vec::new(),
            mode: ModeKind::Normal,
            magic_key: None,
            snakes: DEFAULT_SNAKES,
            ladders: DEFAULT_LADDERS,
            seed: None,
        }
    }
}

impl GameConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    /// Names in seat order. Missing or blank entries become `Player N`;
    /// entries beyond the player count are ignored.
    pub fn names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn normal(mut self) -> Self {
        self.mode = ModeKind::Normal;
        self.magic_key = None;
        self
    }

    /// Magic-key mode with the key as typed; validated in `build()`.
    pub fn magic_key(mut self, key: impl Into<String>) -> Self {
        self.mode = ModeKind::MagicKey;
        self.magic_key = Some(key.into());
        self
    }

    /// Set the mode by kind, leaving any key value in place.
    pub fn mode(mut self, mode: ModeKind) -> Self {
        self.mode = mode;
        self
    }

    /// Key value as typed, used only in magic-key mode.
    pub fn magic_key_input(mut self, key: Option<String>) -> Self {
        self.magic_key = key;
        self
    }

    pub fn snakes(mut self, count: usize) -> Self {
        self.snakes = count;
        self
    }

    pub fn ladders(mut self, count: usize) -> Self {
        self.ladders = count;
        self
    }

    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Validate and produce the configuration.
    pub fn build(self) -> Result<GameConfig, ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(ConfigError::PlayerCount {
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
                got: self.player_count,
            });
        }

        let mode = match self.mode {
            ModeKind::Normal => GameMode::Normal,
            ModeKind::MagicKey => {
                let input = self.magic_key.as_deref().ok_or(ConfigError::MissingMagicKey)?;
                GameMode::MagicKey(MagicKey::parse(input)?)
            }
        };

        let requested = self.snakes.checked_add(self.ladders).unwrap_or(usize::MAX);
        if requested > MAX_FEATURES {
            return Err(ConfigError::TooManyFeatures {
                requested,
                max: MAX_FEATURES,
            });
        }

        let player_names = PlayerId::all(self.player_count)
            .map(|player| {
                self.names
                    .get(player.index())
                    .map(|name| name.trim())
                    .filter(|name| !name.is_empty())
                    .map_or_else(|| player.to_string(), str::to_string)
            })
            .collect();

        Ok(GameConfig {
            player_names,
            mode,
            snakes: self.snakes,
            ladders: self.ladders,
            seed: self.seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::builder().build().unwrap();
        assert_eq!(config.player_count(), 2);
        assert_eq!(config.player_names, vec!["Player 1", "Player 2"]);
        assert_eq!(config.mode, GameMode::Normal);
        assert_eq!(config.snakes, 8);
        assert_eq!(config.ladders, 8);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_player_count_bounds() {
        for count in [0, 1, 5] {
            let err = GameConfig::builder().player_count(count).build().unwrap_err();
            assert_eq!(err, ConfigError::PlayerCount { min: 2, max: 4, got: count });
        }
        for count in 2..=4 {
            assert!(GameConfig::builder().player_count(count).build().is_ok());
        }
    }

    #[test]
    fn test_blank_names_default() {
        let config = GameConfig::builder()
            .player_count(4)
            .names(["Ada", "  ", "Grace"])
            .build()
            .unwrap();

        assert_eq!(config.player_names, vec!["Ada", "Player 2", "Grace", "Player 4"]);
    }

    #[test]
    fn test_extra_names_ignored() {
        let config = GameConfig::builder()
            .names(["A", "B", "C"])
            .build()
            .unwrap();
        assert_eq!(config.player_names, vec!["A", "B"]);
    }

    #[test]
    fn test_magic_key_validation() {
        let config = GameConfig::builder().magic_key("4").build().unwrap();
        assert_eq!(config.mode.magic_key().map(MagicKey::value), Some(4));

        assert_eq!(
            GameConfig::builder().magic_key("0").build().unwrap_err(),
            ConfigError::MagicKeyOutOfRange(0)
        );
        assert_eq!(
            GameConfig::builder().magic_key("7").build().unwrap_err(),
            ConfigError::MagicKeyOutOfRange(7)
        );
        assert_eq!(
            GameConfig::builder().magic_key("x").build().unwrap_err(),
            ConfigError::MagicKeyNotANumber("x".to_string())
        );
        assert_eq!(
            GameConfig::builder().mode(ModeKind::MagicKey).build().unwrap_err(),
            ConfigError::MissingMagicKey
        );
    }

    #[test]
    fn test_key_ignored_in_normal_mode() {
        let config = GameConfig::builder()
            .mode(ModeKind::Normal)
            .magic_key_input(Some("99".to_string()))
            .build()
            .unwrap();
        assert_eq!(config.mode, GameMode::Normal);
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("normal".parse::<ModeKind>(), Ok(ModeKind::Normal));
        assert_eq!("Magic-Key".parse::<ModeKind>(), Ok(ModeKind::MagicKey));
        assert_eq!("magic".parse::<ModeKind>(), Ok(ModeKind::MagicKey));
        assert_eq!(
            "turbo".parse::<ModeKind>(),
            Err(ConfigError::UnknownMode("turbo".to_string()))
        );
    }

    #[test]
    fn test_feature_cap() {
        assert!(GameConfig::builder().snakes(25).ladders(24).build().is_ok());
        assert_eq!(
            GameConfig::builder().snakes(25).ladders(25).build().unwrap_err(),
            ConfigError::TooManyFeatures { requested: 50, max: 49 }
        );
    }

    #[test]
    fn test_feature_cap_huge_counts() {
        assert_eq!(
            GameConfig::builder().snakes(usize::MAX).ladders(1).build().unwrap_err(),
            ConfigError::TooManyFeatures { requested: usize::MAX, max: 49 }
        );
        assert_eq!(
            GameConfig::builder().snakes(0).ladders(usize::MAX).build().unwrap_err(),
            ConfigError::TooManyFeatures { requested: usize::MAX, max: 49 }
        );
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::builder()
            .player_count(3)
            .magic_key("2")
            .seed(Some(7))
            .build()
            .unwrap();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);

        assert!(serde_json::from_str::<MagicKey>("9").is_err());
    }
}
