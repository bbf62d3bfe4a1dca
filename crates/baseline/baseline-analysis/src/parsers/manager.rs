//! ParserManager: routes files to the correct dialect parser.

use std::path::Path;

use baseline_core::errors::ParseError;
use baseline_core::Dialect;

use super::languages::css::CssParser;
use super::languages::javascript::JavaScriptParser;
use super::types::ParsedSource;

/// Owns one parser per dialect.
pub struct ParserManager {
    javascript: JavaScriptParser,
    css: CssParser,
}

impl ParserManager {
    pub fn new() -> Self {
        Self {
            javascript: JavaScriptParser::new(),
            css: CssParser::new(),
        }
    }

    /// Detect the dialect from a file extension.
    pub fn detect_dialect(&self, path: &Path) -> Option<Dialect> {
        Dialect::from_extension(path.extension().and_then(|e| e.to_str()))
    }

    /// Parse a file, detecting its dialect from the extension.
    pub fn parse(&self, source: &[u8], path: &Path) -> Result<ParsedSource, ParseError> {
        let dialect = self.detect_dialect(path).ok_or_else(|| ParseError::UnsupportedDialect {
            extension: path
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("unknown")
                .to_string(),
        })?;
        self.parse_with_dialect(source, path, dialect)
    }

    /// Parse a file with a known dialect (skips detection).
    pub fn parse_with_dialect(
        &self,
        source: &[u8],
        path: &Path,
        dialect: Dialect,
    ) -> Result<ParsedSource, ParseError> {
        match dialect {
            Dialect::Js => self.javascript.parse(source, path),
            Dialect::Css => self.css.parse(source, path),
        }
    }
}

impl Default for ParserManager {
    fn default() -> Self {
        Self::new()
    }
}
