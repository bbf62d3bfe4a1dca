//! JavaScript parser (module-scoped, error-tolerant).

use std::path::Path;

use baseline_core::errors::ParseError;
use baseline_core::Dialect;
use tree_sitter::Node;

use super::parse_tree;
use crate::parsers::error_tolerant::collect_errors;
use crate::parsers::types::ParsedSource;

pub struct JavaScriptParser {
    language: tree_sitter::Language,
}

impl JavaScriptParser {
    pub fn new() -> Self {
        Self {
            language: tree_sitter_javascript::LANGUAGE.into(),
        }
    }

    /// Parse `source`, keeping partial trees as long as something survived recovery.
    ///
    /// A file is rejected when it has syntax errors and none of its top-level
    /// statements came out clean. An empty program is valid.
    pub fn parse(&self, source: &[u8], path: &Path) -> Result<ParsedSource, ParseError> {
        let tree = parse_tree(source, path, Dialect::Js, &self.language)?;
        let root = tree.root_node();
        let recovered_errors = collect_errors(root);

        if !recovered_errors.is_empty() && !has_clean_statement(root) {
            return Err(ParseError::Unrecoverable {
                path: path.to_path_buf(),
                error_count: recovered_errors.len(),
                line: recovered_errors[0].line,
            });
        }

        if let Some(first) = recovered_errors.first() {
            tracing::debug!(
                path = %path.display(),
                errors = recovered_errors.len(),
                first_line = first.line,
                "recovered from syntax errors"
            );
        }

        Ok(ParsedSource {
            dialect: Dialect::Js,
            tree,
            recovered_errors,
        })
    }
}

impl Default for JavaScriptParser {
    fn default() -> Self {
        Self::new()
    }
}

fn has_clean_statement(root: Node) -> bool {
    if root.is_error() {
        return false;
    }
    let mut cursor = root.walk();
    let clean = root
        .named_children(&mut cursor)
        .filter(|n| !matches!(n.kind(), "comment" | "hash_bang_line"))
        .any(|n| !n.has_error());
    clean
}
