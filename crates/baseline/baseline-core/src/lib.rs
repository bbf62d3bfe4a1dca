//! # baseline-core
//!
//! Foundation crate for the baseline feature scanner.
//! Defines the shared types, errors, config, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::BaselineConfig;
pub use errors::error_code::BaselineErrorCode;
pub use types::collections::FxHashMap;
pub use types::dialect::{Dialect, FileType};
pub use types::feature::{ClassifiedFeature, Occurrence, Status};
