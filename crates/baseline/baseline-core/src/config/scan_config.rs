//! Scanner configuration.

use serde::{Deserialize, Serialize};

/// Configuration for file discovery.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScanConfig {
    /// Maximum file size in bytes. Default: 1MB (1_048_576).
    pub max_file_size: Option<u64>,
    /// Additional ignore patterns (gitignore syntax) beyond .gitignore/.baselineignore.
    #[serde(default)]
    pub extra_ignore: Vec<String>,
    /// Follow symbolic links. Default: false.
    pub follow_symlinks: Option<bool>,
    /// Honour .gitignore files. Default: true.
    pub respect_gitignore: Option<bool>,
}

impl ScanConfig {
    /// Returns the effective max file size, defaulting to 1MB.
    pub fn effective_max_file_size(&self) -> u64 {
        self.max_file_size.unwrap_or(1_048_576)
    }

    pub fn effective_follow_symlinks(&self) -> bool {
        self.follow_symlinks.unwrap_or(false)
    }

    pub fn effective_respect_gitignore(&self) -> bool {
        self.respect_gitignore.unwrap_or(true)
    }
}
