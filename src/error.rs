//! Crate-level error type.
//!
//! The component itself cannot fail. Everything here comes from the
//! surroundings: config files, the terminal, JSON output.

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Terminal I/O failed: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
