//! Error types for every layer of the scanner.

pub mod config_error;
pub mod error_code;
pub mod parse_error;
pub mod registry_error;
pub mod report_error;
pub mod scan_error;

pub use config_error::ConfigError;
pub use error_code::BaselineErrorCode;
pub use parse_error::{ParseError, SelectorError};
pub use registry_error::RegistryError;
pub use report_error::ReportError;
pub use scan_error::ScanError;
