//! Feature registry configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RegistryConfig {
    /// web-features style JSON replacing the bundled snapshot.
    pub path: Option<PathBuf>,
}
