//! Scanner-level errors: discovery and file reads.

use std::path::PathBuf;

use super::error_code::{self, BaselineErrorCode};
use super::parse_error::ParseError;

/// Errors local to one file during a scan.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Skipped {path}: {size} bytes exceeds the {limit} byte limit")]
    FileTooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl BaselineErrorCode for ScanError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::FileRead { .. } => error_code::FILE_READ_ERROR,
            Self::FileTooLarge { .. } => error_code::SCAN_ERROR,
            Self::Parse(e) => e.error_code(),
        }
    }
}
