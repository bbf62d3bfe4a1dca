//! Errors that stop the CLI before a scan starts.

use std::path::PathBuf;

use baseline_core::errors::{error_code, BaselineErrorCode, ConfigError, RegistryError};

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Not a directory: {path}")]
    InvalidRoot { path: PathBuf },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl BaselineErrorCode for StartupError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidRoot { .. } => error_code::SCAN_ERROR,
            Self::Config(e) => e.error_code(),
            Self::Registry(e) => e.error_code(),
        }
    }
}
