//! Game configuration loaded from TOML.

use cascade_core::{Difficulty, Starter};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "cascade.toml";

/// Settings for an interactive session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Difficulty tier. Prompted for when absent.
    #[serde(default)]
    difficulty: Option<Difficulty>,

    /// Who opens the first match.
    #[serde(default = "default_first_starter")]
    first_starter: Starter,

    /// Seed for the bot's random source.
    #[serde(default)]
    seed: Option<u64>,

    /// Bad answers tolerated per prompt.
    #[serde(default = "default_max_input_attempts")]
    max_input_attempts: u32,
}

#[instrument]
fn default_first_starter() -> Starter {
    Starter::Agent
}

#[instrument]
fn default_max_input_attempts() -> u32 {
    5
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: None,
            first_starter: default_first_starter(),
            seed: None,
            max_input_attempts: default_max_input_attempts(),
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

        if config.max_input_attempts == 0 {
            return Err(ConfigError::new(
                "max_input_attempts must be at least 1".to_string(),
            ));
        }

        info!(
            difficulty = ?config.difficulty,
            first_starter = %config.first_starter,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if given, else [`DEFAULT_CONFIG_FILE`] if it exists, else defaults.
    #[instrument(skip(path))]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides on top of file values.
    pub fn with_overrides(
        mut self,
        difficulty: Option<Difficulty>,
        first_starter: Option<Starter>,
        seed: Option<u64>,
    ) -> Self {
        if difficulty.is_some() {
            self.difficulty = difficulty;
        }
        if let Some(starter) = first_starter {
            self.first_starter = starter;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
