//! Side-effect-free report filters.

use baseline_core::{ClassifiedFeature, FileType, Status};

use super::types::FeatureRecord;

/// Anything a report filter can be evaluated against.
pub trait Filterable {
    fn display_name(&self) -> &str;
    fn file(&self) -> &str;
    fn status(&self) -> Status;
}

impl Filterable for ClassifiedFeature {
    fn display_name(&self) -> &str {
        &self.occurrence.display_name
    }
    fn file(&self) -> &str {
        &self.occurrence.file
    }
    fn status(&self) -> Status {
        self.status
    }
}

impl Filterable for FeatureRecord {
    fn display_name(&self) -> &str {
        &self.name
    }
    fn file(&self) -> &str {
        &self.file
    }
    fn status(&self) -> Status {
        self.status
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameMatch {
    /// Whole display name, case-insensitive. Used by the CLI.
    Exact,
    /// Case-insensitive substring. Used by the viewer while typing.
    Substring,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameFilter {
    query: String,
    mode: NameMatch,
}

impl NameFilter {
    pub fn new(query: &str, mode: NameMatch) -> Self {
        Self {
            query: query.to_lowercase(),
            mode,
        }
    }

    pub fn exact(query: &str) -> Self {
        Self::new(query, NameMatch::Exact)
    }

    pub fn substring(query: &str) -> Self {
        Self::new(query, NameMatch::Substring)
    }

    pub fn matches(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        match self.mode {
            NameMatch::Exact => name == self.query,
            NameMatch::Substring => name.contains(&self.query),
        }
    }
}

/// Feature-name and file-type filter; the default admits everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportFilter {
    pub name: Option<NameFilter>,
    pub file_type: FileType,
}

impl ReportFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: NameFilter) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_file_type(mut self, file_type: FileType) -> Self {
        self.file_type = file_type;
        self
    }

    /// The CLI's single filter value: `js`/`css` select a file type, anything
    /// else is an exact display-name match.
    pub fn from_cli_value(value: &str) -> Self {
        match FileType::parse_str(value) {
            Some(file_type @ (FileType::Js | FileType::Css)) => Self::all().with_file_type(file_type),
            _ => Self::all().with_name(NameFilter::exact(value)),
        }
    }

    pub fn matches<T: Filterable + ?Sized>(&self, item: &T) -> bool {
        self.file_type.matches_path(item.file())
            && self
                .name
                .as_ref()
                .map_or(true, |n| n.matches(item.display_name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, file: &str) -> FeatureRecord {
        FeatureRecord {
            name: name.to_string(),
            status: Status::Baseline,
            file: file.to_string(),
            line: 1,
        }
    }

    #[test]
    fn exact_and_substring_modes() {
        assert!(NameFilter::exact("FETCH").matches("fetch"));
        assert!(!NameFilter::exact("fetch").matches("fetch with init options"));
        assert!(NameFilter::substring("INIT").matches("fetch with init options"));
    }

    #[test]
    fn cli_value_selects_file_type_or_name() {
        assert_eq!(
            ReportFilter::from_cli_value("css"),
            ReportFilter::all().with_file_type(FileType::Css)
        );
        assert_eq!(
            ReportFilter::from_cli_value("JS").file_type,
            FileType::Js
        );
        let by_name = ReportFilter::from_cli_value("Promise.allSettled");
        assert!(by_name.matches(&record("promise.allsettled", "a.js")));
        assert!(!by_name.matches(&record("fetch", "a.js")));
    }

    #[test]
    fn file_type_and_name_combine() {
        let filter = ReportFilter::all()
            .with_file_type(FileType::Css)
            .with_name(NameFilter::substring("gap"));
        assert!(filter.matches(&record("gap", "s/site.css")));
        assert!(!filter.matches(&record("gap", "app.js")));
        assert!(!filter.matches(&record(":has", "s/site.css")));
    }
}
