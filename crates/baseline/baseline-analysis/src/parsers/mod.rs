//! Parsers: tree-sitter grammars for each dialect plus error-tolerance checks.

pub mod error_tolerant;
pub mod languages;
pub mod manager;
pub mod types;

pub use manager::ParserManager;
pub use types::ParsedSource;
