//! Report serialization and output errors.

use std::path::PathBuf;

use super::error_code::{self, BaselineErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Failed to write report to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read report from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("Unknown report format: {0}")]
    UnknownFormat(String),
}

impl BaselineErrorCode for ReportError {
    fn error_code(&self) -> &'static str {
        error_code::REPORT_ERROR
    }
}
