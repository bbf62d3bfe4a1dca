//! Report shapes shared by every sink.

use baseline_core::{ClassifiedFeature, Status};
use serde::{Deserialize, Serialize};

/// Per-status totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub baseline: usize,
    pub non_baseline: usize,
}

impl Summary {
    pub fn add(&mut self, status: Status) {
        match status {
            Status::Baseline => self.baseline += 1,
            Status::NonBaseline => self.non_baseline += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.baseline + self.non_baseline
    }

    pub fn from_statuses(statuses: impl IntoIterator<Item = Status>) -> Self {
        let mut summary = Self::default();
        for status in statuses {
            summary.add(status);
        }
        summary
    }
}

/// One row of a report: `name,status,file,line`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub name: String,
    pub status: Status,
    pub file: String,
    pub line: u32,
}

impl From<&ClassifiedFeature> for FeatureRecord {
    fn from(feature: &ClassifiedFeature) -> Self {
        Self {
            name: feature.occurrence.display_name.clone(),
            status: feature.status,
            file: feature.occurrence.file.clone(),
            line: feature.occurrence.line,
        }
    }
}

/// Summary counts plus the occurrence list, in file-then-detection order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub summary: Summary,
    pub features: Vec<FeatureRecord>,
}

impl Report {
    /// Build a report whose summary is computed from `features`.
    pub fn from_records(features: Vec<FeatureRecord>) -> Self {
        let summary = Summary::from_statuses(features.iter().map(|f| f.status));
        Self { summary, features }
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
