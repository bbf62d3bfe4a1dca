//! Aggregation, filtering, serialization, and the viewer model.

pub mod aggregator;
pub mod filter;
pub mod sink;
pub mod types;
pub mod viewer;

pub use aggregator::{FileGroup, ScanResults};
pub use filter::{NameFilter, NameMatch, ReportFilter};
pub use sink::ReportFormat;
pub use types::{FeatureRecord, Report, Summary};
pub use viewer::ReportViewer;
