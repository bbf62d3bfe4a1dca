//! # baseline-analysis
//!
//! Detection engine for the baseline feature scanner.
//! Contains the scanner, parsers, dialect matchers, classifier,
//! aggregation, and report sinks.

pub mod classify;
pub mod detectors;
pub mod parsers;
pub mod report;
pub mod scanner;
