//! Report sinks: JSON and CSV rendering, parsing, and file output.

use std::path::Path;
use std::str::FromStr;

use baseline_core::errors::ReportError;

use super::types::{FeatureRecord, Report};

pub const CSV_HEADER: [&str; 4] = ["name", "status", "file", "line"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Json,
    Csv,
}

impl FromStr for ReportFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(ReportError::UnknownFormat(other.to_string())),
        }
    }
}

/// Render a report in the given format.
pub fn render(report: &Report, format: ReportFormat) -> Result<String, ReportError> {
    match format {
        ReportFormat::Json => to_json(report),
        ReportFormat::Csv => to_csv(&report.features),
    }
}

pub fn to_json(report: &Report) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn from_json(json: &str) -> Result<Report, ReportError> {
    Ok(serde_json::from_str(json)?)
}

/// CSV with a header row, even when there are no records.
pub fn to_csv(records: &[FeatureRecord]) -> Result<String, ReportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER).map_err(csv_error)?;
    for record in records {
        let line = record.line.to_string();
        writer
            .write_record([
                record.name.as_str(),
                record.status.as_str(),
                record.file.as_str(),
                line.as_str(),
            ])
            .map_err(csv_error)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| ReportError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ReportError::Csv(e.to_string()))
}

/// Parse CSV produced by [`to_csv`] back into records.
pub fn from_csv(text: &str) -> Result<Vec<FeatureRecord>, ReportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());
    reader
        .deserialize::<FeatureRecord>()
        .map(|row| row.map_err(csv_error))
        .collect()
}

/// Write the rendered report to `path`.
pub fn write_report(path: &Path, report: &Report, format: ReportFormat) -> Result<(), ReportError> {
    let rendered = render(report, format)?;
    std::fs::write(path, rendered).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn csv_error(e: csv::Error) -> ReportError {
    ReportError::Csv(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use baseline_core::Status;

    fn records() -> Vec<FeatureRecord> {
        vec![
            FeatureRecord {
                name: "fetch with init options".to_string(),
                status: Status::Baseline,
                file: "src/a.js".to_string(),
                line: 2,
            },
            FeatureRecord {
                name: "container queries".to_string(),
                status: Status::NonBaseline,
                file: "styles/with,comma.css".to_string(),
                line: 10,
            },
        ]
    }

    #[test]
    fn json_shape() {
        let report = Report::from_records(records());
        let value: serde_json::Value = serde_json::from_str(&to_json(&report).unwrap()).unwrap();
        assert_eq!(value["summary"]["baseline"], 1);
        assert_eq!(value["summary"]["non_baseline"], 1);
        assert_eq!(value["features"][1]["status"], "non-baseline");
        assert_eq!(value["features"][0]["line"], 2);
        let first = value["features"][0].as_object().unwrap();
        let mut keys: Vec<_> = first.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["file", "line", "name", "status"]);
    }

    #[test]
    fn csv_has_header_even_when_empty() {
        assert_eq!(to_csv(&[]).unwrap(), "name,status,file,line\n");
    }

    #[test]
    fn csv_quotes_fields_that_need_it() {
        let csv = to_csv(&records()).unwrap();
        assert!(csv.contains("\"styles/with,comma.css\""));
        assert_eq!(from_csv(&csv).unwrap(), records());
    }

    #[test]
    fn format_parsing() {
        assert_eq!("CSV".parse::<ReportFormat>().unwrap(), ReportFormat::Csv);
        assert!("xml".parse::<ReportFormat>().is_err());
    }
}
