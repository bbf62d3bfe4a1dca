//! CSS parser.
//!
//! tree-sitter recovers from almost anything, so stylesheet validity is
//! decided here. The grammar lags behind the language in selector and
//! at-rule preludes (named container queries, range media features, import
//! layers), so errors confined to a prelude are tolerated; selector preludes
//! are re-checked by the selector grammar per rule. Damage to block structure
//! fails the whole stylesheet: a MISSING brace, an error that swallows one,
//! or any error outside every prelude.

use std::ops::Range;
use std::path::Path;

use baseline_core::errors::ParseError;
use baseline_core::Dialect;
use tree_sitter::Node;

use super::parse_tree;
use crate::parsers::error_tolerant::{collect_errors, describe};
use crate::parsers::types::{ErrorSite, ParsedSource};

pub struct CssParser {
    language: tree_sitter::Language,
}

impl CssParser {
    pub fn new() -> Self {
        Self {
            language: tree_sitter_css::LANGUAGE.into(),
        }
    }

    pub fn parse(&self, source: &[u8], path: &Path) -> Result<ParsedSource, ParseError> {
        let tree = parse_tree(source, path, Dialect::Css, &self.language)?;
        let root = tree.root_node();
        let recovered_errors = collect_errors(root);

        if !recovered_errors.is_empty() {
            let mut preludes = rule_preludes(root);
            preludes.extend(at_rule_preludes(root));
            let structural = recovered_errors
                .iter()
                .find(|site| is_structural(site, source, &preludes));
            if let Some(site) = structural {
                return Err(ParseError::Stylesheet {
                    path: path.to_path_buf(),
                    message: describe(site, source),
                });
            }
        }

        Ok(ParsedSource {
            dialect: Dialect::Css,
            tree,
            recovered_errors,
        })
    }
}

impl Default for CssParser {
    fn default() -> Self {
        Self::new()
    }
}

/// At-rules whose prelude may hold syntax the grammar does not know.
const AT_RULE_KINDS: &[&str] = &[
    "at_rule",
    "media_statement",
    "import_statement",
    "supports_statement",
];

fn is_structural(site: &ErrorSite, source: &[u8], preludes: &[Range<usize>]) -> bool {
    if site.missing && matches!(site.kind.as_str(), "{" | "}") {
        return true;
    }
    let end = site.end_byte.min(source.len());
    let text = &source[site.start_byte.min(end)..end];
    if text.iter().any(|&b| b == b'{' || b == b'}') {
        return true;
    }
    !preludes.iter().any(|range| range.contains(&site.start_byte))
}

/// Byte range of a style rule's selector prelude: from the rule start up to its block.
pub fn rule_prelude(rule_set: &Node) -> Option<Range<usize>> {
    let mut cursor = rule_set.walk();
    let block = rule_set
        .children(&mut cursor)
        .find(|child| child.kind() == "block")?;
    Some(rule_set.start_byte()..block.start_byte())
}

/// Prelude of an at-rule: from the at-keyword up to its block, or to the end
/// of the statement when it has none.
fn at_rule_prelude(statement: &Node) -> Range<usize> {
    let mut cursor = statement.walk();
    let block = statement
        .children(&mut cursor)
        .find(|child| child.kind() == "block");
    let end = block.map_or(statement.end_byte(), |b| b.start_byte());
    statement.start_byte()..end
}

fn at_rule_preludes(root: Node) -> Vec<Range<usize>> {
    let mut out = Vec::new();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if AT_RULE_KINDS.contains(&node.kind()) {
            out.push(at_rule_prelude(&node));
        }
        let mut cursor = node.walk();
        stack.extend(node.children(&mut cursor));
    }
    out
}

/// Preludes of every style rule in the tree, nested rules included.
pub fn rule_preludes(root: Node) -> Vec<Range<usize>> {
    let mut out = Vec::new();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.kind() == "rule_set" {
            if let Some(range) = rule_prelude(&node) {
                out.push(range);
            }
        }
        let mut cursor = node.walk();
        stack.extend(node.children(&mut cursor));
    }
    out
}
