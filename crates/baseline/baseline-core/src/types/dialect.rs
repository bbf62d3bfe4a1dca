//! Supported source dialects.

use serde::{Deserialize, Serialize};

/// A source language the scanner knows how to match against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    Js,
    Css,
}

impl Dialect {
    /// All dialects, in the order they are reported.
    pub fn all() -> &'static [Dialect] {
        &[Self::Js, Self::Css]
    }

    /// Detect the dialect from a file extension. Unknown extensions yield `None`.
    pub fn from_extension(ext: Option<&str>) -> Option<Self> {
        match ext?.to_ascii_lowercase().as_str() {
            "js" => Some(Self::Js),
            "css" => Some(Self::Css),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Js => "JavaScript",
            Self::Css => "CSS",
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// File-type filter shared by discovery and report filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    #[default]
    All,
    Js,
    Css,
}

impl FileType {
    /// Parse `js`, `css`, or `all` (case-insensitive).
    pub fn parse_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Some(Self::All),
            "js" => Some(Self::Js),
            "css" => Some(Self::Css),
            _ => None,
        }
    }

    /// Whether files of `dialect` pass this filter.
    pub fn admits(&self, dialect: Dialect) -> bool {
        match self {
            Self::All => true,
            Self::Js => dialect == Dialect::Js,
            Self::Css => dialect == Dialect::Css,
        }
    }

    /// Whether a report path passes this filter, judged by its extension.
    pub fn matches_path(&self, path: &str) -> bool {
        let ext = path.rsplit_once('.').map(|(_, ext)| ext);
        match Dialect::from_extension(ext) {
            Some(dialect) => self.admits(dialect),
            None => *self == Self::All,
        }
    }
}
