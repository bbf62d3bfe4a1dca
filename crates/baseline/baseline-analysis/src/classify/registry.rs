//! Feature registry adapter over web-features style support data.

use std::path::Path;

use baseline_core::errors::RegistryError;
use baseline_core::FxHashMap;
use serde::Deserialize;

/// Support tier published by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaselineTier {
    /// "Widely available".
    High,
    /// "Newly available".
    Low,
    /// Not baseline in any tier.
    Limited,
}

/// Lookup from feature key to tier. `None` means the key is unknown.
pub trait FeatureRegistry: Send + Sync {
    fn tier(&self, feature_key: &str) -> Option<BaselineTier>;
}

#[derive(Deserialize)]
struct RawRegistry {
    #[serde(default)]
    features: FxHashMap<String, RawFeature>,
}

#[derive(Deserialize)]
struct RawFeature {
    status: Option<RawStatus>,
}

#[derive(Deserialize)]
struct RawStatus {
    baseline: Option<RawBaseline>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBaseline {
    Tier(String),
    Flag(bool),
}

impl From<RawBaseline> for BaselineTier {
    fn from(raw: RawBaseline) -> Self {
        match raw {
            RawBaseline::Tier(t) if t == "high" => Self::High,
            RawBaseline::Tier(t) if t == "low" => Self::Low,
            RawBaseline::Tier(_) | RawBaseline::Flag(_) => Self::Limited,
        }
    }
}

const BUNDLED: &str = include_str!("../../data/web-features.json");

/// Registry backed by a web-features JSON document.
#[derive(Debug, Clone, Default)]
pub struct WebFeaturesRegistry {
    tiers: FxHashMap<String, BaselineTier>,
}

impl WebFeaturesRegistry {
    /// Parse `{ "features": { key: { "status": { "baseline": "high" | "low" | false } } } }`.
    ///
    /// Features without a status are left out and report as unknown.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let raw: RawRegistry = serde_json::from_str(json)?;
        let tiers = raw
            .features
            .into_iter()
            .filter_map(|(key, feature)| {
                let tier: BaselineTier = feature.status?.baseline?.into();
                Some((key, tier))
            })
            .collect();
        Ok(Self { tiers })
    }

    pub fn load(path: &Path) -> Result<Self, RegistryError> {
        let json = std::fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// The snapshot compiled into the crate.
    pub fn bundled() -> Self {
        Self::from_json(BUNDLED).unwrap_or_else(|e| {
            tracing::error!(error = %e, "bundled feature data is malformed");
            Self::default()
        })
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}

impl FeatureRegistry for WebFeaturesRegistry {
    fn tier(&self, feature_key: &str) -> Option<BaselineTier> {
        self.tiers.get(feature_key).copied()
    }
}
