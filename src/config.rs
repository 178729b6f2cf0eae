//! Optional TOML configuration.
//!
//! Looked up at `<config_dir>/tinted-counter/config.toml` unless a path is
//! given explicitly. A missing file means defaults; a malformed one is an
//! error.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::types::DEFAULT_SELECTION;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Startup settings for the application view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Selection the component mounts with. Not validated; an id outside
    /// the option set keeps the initial background.
    pub initial_color: String,
    /// Card heading.
    pub title: String,
    /// Dropdown text shown before anything is chosen.
    pub placeholder: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            initial_color: DEFAULT_SELECTION.to_string(),
            title: "React Learning Demo".to_string(),
            placeholder: "Choose color".to_string(),
        }
    }
}

impl Config {
    /// Default location of the configuration file.
    ///
    /// Falls back to the current directory if the platform has no
    /// config directory.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("tinted-counter").join("config.toml")
    }

    /// Load from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Load from `path`, returning defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        debug!(path = %path.display(), ?config, "config loaded");
        Ok(config)
    }

    /// Override the initial selection, e.g. from the command line.
    pub fn with_initial_color(mut self, color: Option<String>) -> Self {
        if let Some(color) = color {
            self.initial_color = color;
        }
        self
    }
}

// ============================================================================
// TESTS
// ============================================================================
