//! Shared value types passed between the scanner, matchers, and report layers.

pub mod collections;
pub mod dialect;
pub mod feature;
