//! Stable error codes, printed as `[CODE] message` by front ends.

pub const SCAN_ERROR: &str = "SCAN_ERROR";
pub const FILE_READ_ERROR: &str = "FILE_READ_ERROR";
pub const PARSE_ERROR: &str = "PARSE_ERROR";
pub const UNSUPPORTED_DIALECT: &str = "UNSUPPORTED_DIALECT";
pub const SELECTOR_ERROR: &str = "SELECTOR_ERROR";
pub const REGISTRY_ERROR: &str = "REGISTRY_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const REPORT_ERROR: &str = "REPORT_ERROR";

/// Implemented by every error enum so callers can surface a stable code.
pub trait BaselineErrorCode {
    fn error_code(&self) -> &'static str;
}
