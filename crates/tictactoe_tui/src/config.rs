//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe::{Player, Symbol};
use tracing::{debug, info, instrument};

/// A player as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Display name.
    name: String,
    /// Symbol, `"X"` or `"O"`.
    symbol: Symbol,
}

impl PlayerConfig {
    /// Creates a player entry.
    pub fn new(name: impl Into<String>, symbol: Symbol) -> Self {
        Self {
            name: name.into(),
            symbol,
        }
    }

    /// Builds the session player.
    pub fn to_player(&self) -> Player {
        Player::new(self.name.clone(), self.symbol)
    }
}

/// Configuration for a game.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// First player, pre-filled in the setup form.
    #[serde(default = "default_player_one")]
    player_one: PlayerConfig,

    /// Second player.
    #[serde(default = "default_player_two")]
    player_two: PlayerConfig,

    /// File the terminal UI writes logs to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    log_level: String,
}

fn default_player_one() -> PlayerConfig {
    PlayerConfig::new("Player 1", Symbol::X)
}

fn default_player_two() -> PlayerConfig {
    PlayerConfig::new("Player 2", Symbol::O)
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe_tui.log")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_one: default_player_one(),
            player_two: default_player_two(),
            log_file: default_log_file(),
            log_level: default_log_level(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(
            player_one = %config.player_one.name,
            player_two = %config.player_two.name,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads from `path` if given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Checks that the players could start a session.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_one.name.trim().is_empty() || self.player_two.name.trim().is_empty() {
            return Err(ConfigError::new("Player names must not be empty".to_string()));
        }
        if self.player_one.symbol == self.player_two.symbol {
            return Err(ConfigError::new(format!(
                "Both players are configured as {}",
                self.player_one.symbol
            )));
        }
        Ok(())
    }

    /// Both players, in file order.
    pub fn players(&self) -> (Player, Player) {
        (self.player_one.to_player(), self.player_two.to_player())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
