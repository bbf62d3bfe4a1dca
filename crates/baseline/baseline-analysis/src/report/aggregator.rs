//! ScanResults: the retained, unfiltered result set of one scan.
//!
//! Filtered reports are derived on demand; the underlying list is never
//! modified by filtering, so filters can be changed and re-applied freely.

use baseline_core::{ClassifiedFeature, FxHashMap};

use super::filter::ReportFilter;
use super::types::{FeatureRecord, Report, Summary};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResults {
    features: Vec<ClassifiedFeature>,
}

/// Features of one file in detection order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileGroup {
    pub file: String,
    pub features: Vec<ClassifiedFeature>,
}

impl ScanResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one file's classified features.
    pub fn extend(&mut self, features: impl IntoIterator<Item = ClassifiedFeature>) {
        self.features.extend(features);
    }

    pub fn features(&self) -> &[ClassifiedFeature] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Features admitted by `filter`, in scan order.
    pub fn filtered<'a>(
        &'a self,
        filter: &'a ReportFilter,
    ) -> impl Iterator<Item = &'a ClassifiedFeature> + 'a {
        self.features.iter().filter(move |f| filter.matches(*f))
    }

    /// Summary over the filtered set.
    pub fn summary(&self, filter: &ReportFilter) -> Summary {
        Summary::from_statuses(self.filtered(filter).map(|f| f.status))
    }

    /// Filtered report: summary and flat list.
    pub fn report(&self, filter: &ReportFilter) -> Report {
        Report::from_records(self.filtered(filter).map(FeatureRecord::from).collect())
    }

    /// Filtered features grouped by file, files in first-seen order.
    pub fn group_by_file(&self, filter: &ReportFilter) -> Vec<FileGroup> {
        let mut index: FxHashMap<&str, usize> = FxHashMap::default();
        let mut groups: Vec<FileGroup> = Vec::new();
        for feature in self.filtered(filter) {
            let file = feature.occurrence.file.as_str();
            let slot = *index.entry(file).or_insert_with(|| {
                groups.push(FileGroup {
                    file: file.to_string(),
                    features: Vec::new(),
                });
                groups.len() - 1
            });
            groups[slot].features.push(feature.clone());
        }
        groups
    }
}

impl FromIterator<ClassifiedFeature> for ScanResults {
    fn from_iter<I: IntoIterator<Item = ClassifiedFeature>>(iter: I) -> Self {
        Self {
            features: iter.into_iter().collect(),
        }
    }
}
