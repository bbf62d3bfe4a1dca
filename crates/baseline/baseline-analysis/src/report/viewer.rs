//! Interactive viewer model over a saved report.
//!
//! Holds the unfiltered report; the filtered view and chart data are derived
//! on every call so no cached state can go stale.

use std::path::Path;

use baseline_core::errors::ReportError;
use baseline_core::FileType;

use super::filter::{NameFilter, ReportFilter};
use super::sink::{self, ReportFormat};
use super::types::{Report, Summary};

/// Where the CLI and viewer expect the last JSON report.
pub const DEFAULT_REPORT_PATH: &str = "baseline-report.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartBar {
    pub label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, Default)]
pub struct ReportViewer {
    report: Report,
    query: String,
    file_type: FileType,
}

impl ReportViewer {
    pub fn new(report: Report) -> Self {
        Self {
            report,
            query: String::new(),
            file_type: FileType::All,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ReportError> {
        sink::from_json(json).map(Self::new)
    }

    pub fn load(path: &Path) -> Result<Self, ReportError> {
        let json = std::fs::read_to_string(path).map_err(|source| ReportError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_file_type(&mut self, file_type: FileType) {
        self.file_type = file_type;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn file_type(&self) -> FileType {
        self.file_type
    }

    /// The unfiltered report as loaded.
    pub fn source(&self) -> &Report {
        &self.report
    }

    fn filter(&self) -> ReportFilter {
        let filter = ReportFilter::all().with_file_type(self.file_type);
        let query = self.query.trim();
        if query.is_empty() {
            filter
        } else {
            filter.with_name(NameFilter::substring(query))
        }
    }

    /// Records passing the current query and file type, with a fresh summary.
    pub fn view(&self) -> Report {
        let filter = self.filter();
        let features = self
            .report
            .features
            .iter()
            .filter(|record| filter.matches(*record))
            .cloned()
            .collect();
        Report::from_records(features)
    }

    pub fn summary(&self) -> Summary {
        self.view().summary
    }

    pub fn chart(&self) -> [ChartBar; 2] {
        let summary = self.summary();
        [
            ChartBar {
                label: "Baseline",
                count: summary.baseline,
            },
            ChartBar {
                label: "Non-Baseline",
                count: summary.non_baseline,
            },
        ]
    }

    /// Serialize the current view.
    pub fn export(&self, format: ReportFormat) -> Result<String, ReportError> {
        sink::render(&self.view(), format)
    }
}
