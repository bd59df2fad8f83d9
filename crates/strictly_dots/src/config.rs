//! Game configuration loaded from TOML.

use super::grid::GridSize;
use super::roster::{Player, PlayerId, Roster};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Setup for a new game: board size and who is playing.
///
/// ```toml
/// grid_size = 5
/// players = ["Ada", "Grace", "Linus"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the dot lattice.
    #[serde(default = "default_grid_size")]
    #[getter(copy)]
    grid_size: u8,

    /// Player names in turn order.
    #[serde(default = "default_players")]
    players: Vec<String>,
}

fn default_grid_size() -> u8 {
    GridSize::DEFAULT.get()
}

fn default_players() -> Vec<String> {
    (0..Roster::MIN_PLAYERS)
        .map(|index| Player::default_name(PlayerId::new(index as u8 + 1)))
        .collect()
}

impl GameConfig {
    /// Creates a configuration. Values are validated when the game is built.
    #[instrument(skip(players))]
    pub fn new(grid_size: u8, players: Vec<String>) -> Self {
        Self { grid_size, players }
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        debug!(grid_size = config.grid_size, players = config.players.len(), "Config parsed");
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(grid_size = config.grid_size, "Config loaded successfully");
        Ok(config)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: default_grid_size(),
            players: default_players(),
        }
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
