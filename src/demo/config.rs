//! Demo configuration parsing.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use super::user::{User, sample_users};

/// Roster file loaded from TOML.
///
/// Both sections are optional; a missing `users` list means the built-in
/// sample roster.
#[derive(Debug, Default, Deserialize)]
pub struct RosterConfig {
    /// Log subscriber settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Users to convert.
    #[serde(default)]
    pub users: Option<Vec<User>>,
}

/// Subscriber settings for the demo.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive (e.g. "info" or "convert_collection=debug").
    pub level: String,
    /// Output format.
    pub format: LogFormat,
    /// Use ANSI colors when stderr is a terminal.
    pub color: bool,
    /// Include the event target.
    pub target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Text,
            color: true,
            target: false,
        }
    }
}

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl RosterConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::Io(path.as_ref().display().to_string(), e))?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::Parse)
    }

    /// The configured users, or the sample roster when none are listed.
    pub fn users(&self) -> Vec<User> {
        self.users.clone().unwrap_or_else(sample_users)
    }
}

/// Configuration error.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file '{0}': {1}")]
    Io(String, #[source] std::io::Error),
    /// TOML parse error.
    #[error("Failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}
