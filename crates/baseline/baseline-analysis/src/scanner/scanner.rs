//! Top-level Scanner orchestrating walker → parser → matcher → classifier.

use std::path::Path;
use std::time::Instant;

use baseline_core::config::ScanConfig;
use baseline_core::errors::{BaselineErrorCode, ScanError};
use baseline_core::{ClassifiedFeature, Dialect, FileType};

use crate::classify::Classifier;
use crate::detectors::{create_default_registry, MatchOptions, MatcherRegistry};
use crate::parsers::ParserManager;

use super::types::{DiscoveredFile, FileFailure, ScanOutcome};
use super::walker;

#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    /// Log every detection at info level.
    pub verbose: bool,
    /// Restrict discovery to one dialect.
    pub file_type: FileType,
}

/// Runs a full scan. One file at a time, in discovery order.
pub struct Scanner {
    config: ScanConfig,
    parsers: ParserManager,
    matchers: MatcherRegistry,
    classifier: Classifier,
    options: ScanOptions,
}

impl Scanner {
    pub fn new(config: ScanConfig, classifier: Classifier, options: ScanOptions) -> Self {
        Self {
            config,
            parsers: ParserManager::new(),
            matchers: create_default_registry(),
            classifier,
            options,
        }
    }

    /// Scan every eligible file under `root`.
    ///
    /// Per-file failures are logged and recorded in the outcome; they never
    /// abort the scan.
    pub fn scan(&self, root: &Path) -> ScanOutcome {
        let start = Instant::now();
        let files = walker::walk_directory(root, &self.config, self.options.file_type);

        let mut outcome = ScanOutcome {
            files_discovered: files.len(),
            ..Default::default()
        };

        for file in &files {
            match self.scan_file(file) {
                Ok(features) => {
                    outcome.files_scanned += 1;
                    outcome.results.extend(features);
                }
                Err(e) => {
                    tracing::warn!(path = %file.relative, error = %e, "skipping file");
                    outcome.failures.push(FileFailure {
                        file: file.relative.clone(),
                        code: e.error_code(),
                        error: e.to_string(),
                    });
                }
            }
        }

        tracing::info!(
            files = outcome.files_scanned,
            failed = outcome.failures.len(),
            features = outcome.results.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "scan complete"
        );
        outcome
    }

    /// Read, parse, match and classify one discovered file.
    ///
    /// Files over the configured size limit are rejected before reading.
    pub fn scan_file(&self, file: &DiscoveredFile) -> Result<Vec<ClassifiedFeature>, ScanError> {
        let limit = self.config.effective_max_file_size();
        if file.size > limit {
            return Err(ScanError::FileTooLarge {
                path: file.path.clone(),
                size: file.size,
                limit,
            });
        }
        let source = std::fs::read(&file.path).map_err(|source| ScanError::FileRead {
            path: file.path.clone(),
            source,
        })?;
        self.analyze_source(file.dialect, &source, &file.relative)
    }

    /// Analyze in-memory source as if it were the file `relative`.
    pub fn analyze_source(
        &self,
        dialect: Dialect,
        source: &[u8],
        relative: &str,
    ) -> Result<Vec<ClassifiedFeature>, ScanError> {
        let parsed = self
            .parsers
            .parse_with_dialect(source, Path::new(relative), dialect)?;
        if parsed.has_errors() {
            tracing::debug!(
                path = relative,
                recovered = parsed.recovered_errors.len(),
                "parsed with recoverable errors"
            );
        }

        let options = MatchOptions {
            verbose: self.options.verbose,
        };
        let occurrences = self
            .matchers
            .run(dialect, &parsed.tree, source, relative, options);
        Ok(self.classifier.classify_all(&occurrences))
    }
}
