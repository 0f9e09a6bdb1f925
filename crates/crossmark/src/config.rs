//! Game configuration loaded from TOML.

use crate::cli::Cli;
use crossmark_core::Marker;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a play session.
///
/// Every field is optional in the file; missing ones take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Name of the first player; prompted for when unset.
    first_player: Option<String>,

    /// Name of the second player; prompted for when unset.
    second_player: Option<String>,

    /// Marker for the first player; the first player chooses when unset.
    first_marker: Option<Marker>,

    /// Clear the terminal before drawing the board.
    clear_screen: bool,

    /// Offer a rematch after each game.
    rematch_prompt: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            first_player: None,
            second_player: None,
            first_marker: None,
            clear_screen: true,
            rematch_prompt: true,
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration, falling back to defaults if the file does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of file values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the merged names are blank or identical.
    pub fn with_cli(mut self, cli: &Cli) -> Result<Self, ConfigError> {
        if let Some(name) = &cli.first_player {
            self.first_player = Some(name.clone());
        }
        if let Some(name) = &cli.second_player {
            self.second_player = Some(name.clone());
        }
        if cli.first_marker.is_some() {
            self.first_marker = cli.first_marker;
        }
        if cli.no_clear {
            self.clear_screen = false;
        }
        if cli.single {
            self.rematch_prompt = false;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for name in [&self.first_player, &self.second_player].into_iter().flatten() {
            if name.trim().is_empty() {
                return Err(ConfigError::new("Player names must not be blank".to_string()));
            }
        }
        if let (Some(first), Some(second)) = (&self.first_player, &self.second_player)
            && first.trim() == second.trim()
        {
            return Err(ConfigError::new(format!(
                "Both players are named {:?}",
                first.trim()
            )));
        }
        Ok(())
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
