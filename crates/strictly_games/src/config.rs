//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for an interactive game.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Name shown on the human's turns.
    #[serde(default = "default_human_name")]
    human_name: String,

    /// Name shown on the AI's turns.
    #[serde(default = "default_ai_name")]
    ai_name: String,

    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_human_name() -> String {
    "Player".to_string()
}

fn default_ai_name() -> String {
    "AI".to_string()
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human_name: default_human_name(),
            ai_name: default_ai_name(),
            log_filter: default_log_filter(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(human = %config.human_name, ai = %config.ai_name, "Config loaded successfully");
        Ok(config)
    }

    /// Replaces the player names given on the command line.
    pub fn with_names(mut self, human_name: Option<String>, ai_name: Option<String>) -> Self {
        if let Some(name) = human_name {
            self.human_name = name;
        }
        if let Some(name) = ai_name {
            self.ai_name = name;
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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.human_name(), "Player");
        assert_eq!(config.ai_name(), "AI");
        assert_eq!(config.log_filter(), "warn");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: GameConfig = toml::from_str(r#"ai_name = "Deep Thought""#).unwrap();
        assert_eq!(config.ai_name(), "Deep Thought");
        assert_eq!(config.human_name(), "Player");
    }

    #[test]
    fn test_cli_names_override() {
        let config = GameConfig::default().with_names(Some("Ada".into()), None);
        assert_eq!(config.human_name(), "Ada");
        assert_eq!(config.ai_name(), "AI");
    }

    #[test]
    fn test_error_records_location() {
        let err = ConfigError::new("boom");
        assert!(err.file.ends_with("config.rs"));
        assert!(err.to_string().starts_with("Config error: boom at "));
    }
}
