//! Per-dialect parser implementations.

pub mod css;
pub mod javascript;

use tree_sitter::{Parser, Tree};

use baseline_core::errors::ParseError;
use baseline_core::Dialect;
use std::path::Path;

/// Shared tree-sitter invocation used by every dialect parser.
pub fn parse_tree(
    source: &[u8],
    path: &Path,
    dialect: Dialect,
    ts_language: &tree_sitter::Language,
) -> Result<Tree, ParseError> {
    let mut parser = Parser::new();
    parser
        .set_language(ts_language)
        .map_err(|_e| ParseError::GrammarNotFound {
            dialect: dialect.name().to_string(),
        })?;

    parser.parse(source, None).ok_or_else(|| ParseError::TreeSitter {
        path: path.to_path_buf(),
        message: "tree-sitter returned None".to_string(),
    })
}
