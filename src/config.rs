use std::path::Path;

use tracing::warn;

use crate::error::{ConfigError, GameError};
use crate::game::{BoardConfig, GameBoard, Player, PlayerProfile};

/// Display settings for both players.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub one: PlayerProfile,
    pub two: PlayerProfile,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            one: PlayerProfile::default_for(Player::One),
            two: PlayerProfile::default_for(Player::Two),
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub players: PlayersConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.board.validate()?;

        for (key, profile) in [("one", &self.players.one), ("two", &self.players.two)] {
            if profile.name.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "players.{key}.name must not be empty"
                )));
            }
            if profile.color.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "players.{key}.color must not be empty"
                )));
            }
        }

        Ok(())
    }

    /// Profiles in player order, as [`GameBoard::with_players`] expects them.
    pub fn player_profiles(&self) -> [PlayerProfile; 2] {
        [self.players.one.clone(), self.players.two.clone()]
    }

    /// Start a fresh game from this configuration.
    pub fn new_game(&self) -> Result<GameBoard, GameError> {
        GameBoard::with_players(self.board, self.player_profiles())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
