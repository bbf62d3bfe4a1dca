//! Feature registry loading errors.

use std::path::PathBuf;

use super::error_code::{self, BaselineErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Failed to read registry {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed registry data: {0}")]
    Json(#[from] serde_json::Error),
}

impl BaselineErrorCode for RegistryError {
    fn error_code(&self) -> &'static str {
        error_code::REGISTRY_ERROR
    }
}
