//! Scanner data types.

use std::path::PathBuf;

use baseline_core::Dialect;

use crate::report::ScanResults;

/// A file found during discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFile {
    pub path: PathBuf,
    /// Path relative to the scan root, `/`-separated. Used in reports.
    pub relative: String,
    pub dialect: Dialect,
    /// Size in bytes at discovery time.
    pub size: u64,
}

/// A file that was discovered but could not be analyzed.
#[derive(Debug, Clone)]
pub struct FileFailure {
    pub file: String,
    pub code: &'static str,
    pub error: String,
}

/// Everything a scan produced.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub results: ScanResults,
    pub files_discovered: usize,
    pub files_scanned: usize,
    pub failures: Vec<FileFailure>,
}

impl ScanOutcome {
    pub fn no_files(&self) -> bool {
        self.files_discovered == 0
    }
}
