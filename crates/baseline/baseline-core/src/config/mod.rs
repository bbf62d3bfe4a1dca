//! Configuration loaded from `baseline.toml`.

pub mod registry_config;
pub mod scan_config;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub use registry_config::RegistryConfig;
pub use scan_config::ScanConfig;

/// File name looked up at the scan root when no explicit config is given.
pub const CONFIG_FILE_NAME: &str = "baseline.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BaselineConfig {
    pub scan: ScanConfig,
    pub registry: RegistryConfig,
}

impl BaselineConfig {
    /// Parse a configuration from a TOML string.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `<root>/baseline.toml` is used
    /// if present, otherwise defaults.
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path: PathBuf = match explicit {
            Some(p) => p.to_path_buf(),
            None => {
                let candidate = root.join(CONFIG_FILE_NAME);
                if !candidate.is_file() {
                    return Ok(Self::default());
                }
                candidate
            }
        };

        let source = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let mut config = Self::from_toml(&source)?;

        // Relative registry paths resolve against the config file's directory.
        if let (Some(registry_path), Some(dir)) = (&config.registry.path, path.parent()) {
            if registry_path.is_relative() {
                config.registry.path = Some(dir.join(registry_path));
            }
        }
        Ok(config)
    }
}
