//! Occurrences and their classified form.

use serde::{Deserialize, Serialize};

/// One detected use of a cataloged feature, before classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    /// Human label shown in reports (e.g. "fetch with init options").
    pub display_name: String,
    /// Registry identifier (e.g. "fetch").
    pub feature_key: String,
    /// 1-based source line.
    pub line: u32,
    /// Path relative to the scan root, `/`-separated.
    pub file: String,
}

impl Occurrence {
    pub fn new(
        display_name: impl Into<String>,
        feature_key: impl Into<String>,
        line: u32,
        file: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            feature_key: feature_key.into(),
            line: line.max(1),
            file: file.into(),
        }
    }
}

/// Support verdict for one occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "baseline")]
    Baseline,
    #[serde(rename = "non-baseline")]
    NonBaseline,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Baseline => "baseline",
            Self::NonBaseline => "non-baseline",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An occurrence together with its support status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedFeature {
    pub occurrence: Occurrence,
    pub status: Status,
}

impl ClassifiedFeature {
    pub fn name(&self) -> &str {
        &self.occurrence.display_name
    }

    pub fn feature_key(&self) -> &str {
        &self.occurrence.feature_key
    }

    pub fn file(&self) -> &str {
        &self.occurrence.file
    }

    pub fn line(&self) -> u32 {
        self.occurrence.line
    }
}
