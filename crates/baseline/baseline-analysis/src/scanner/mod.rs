//! Scanner: discovery, per-file analysis, and accumulation.

pub mod scanner;
pub mod types;
pub mod walker;

pub use scanner::{ScanOptions, Scanner};
pub use types::{DiscoveredFile, FileFailure, ScanOutcome};
