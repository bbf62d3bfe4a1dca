//! Configuration loading errors.

use std::path::PathBuf;

use super::error_code::{self, BaselineErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid TOML in config: {0}")]
    Toml(#[from] toml::de::Error),
}

impl BaselineErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
