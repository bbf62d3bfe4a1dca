//! Parser output types.

use baseline_core::Dialect;

/// A parsed file: the tree plus the error sites tree-sitter recovered from.
#[derive(Debug, Clone)]
pub struct ParsedSource {
    pub dialect: Dialect,
    pub tree: tree_sitter::Tree,
    /// Errors tolerated during recovery (empty for clean files).
    pub recovered_errors: Vec<ErrorSite>,
}

impl ParsedSource {
    pub fn has_errors(&self) -> bool {
        !self.recovered_errors.is_empty()
    }
}

/// Location of one ERROR or MISSING node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorSite {
    pub start_byte: usize,
    pub end_byte: usize,
    /// 1-based line.
    pub line: u32,
    /// True for a MISSING node (the parser inserted an expected token).
    pub missing: bool,
    /// Node kind; for MISSING nodes this is the expected token.
    pub kind: String,
}
