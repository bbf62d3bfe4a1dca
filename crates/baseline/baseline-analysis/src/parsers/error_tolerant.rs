//! Collect the ERROR and MISSING nodes of a tree.

use tree_sitter::Node;

use super::types::ErrorSite;

/// 1-based line of a node's start.
pub fn line_of(node: &Node) -> u32 {
    node.start_position().row as u32 + 1
}

/// Walk every subtree that reports an error and record each ERROR/MISSING node.
///
/// Only descends into nodes with `has_error()`, so clean files cost one check.
pub fn collect_errors(root: Node) -> Vec<ErrorSite> {
    let mut sites = Vec::new();
    if root.has_error() {
        collect_recursive(root, &mut sites);
    }
    sites
}

fn collect_recursive(node: Node, sites: &mut Vec<ErrorSite>) {
    if node.is_error() || node.is_missing() {
        sites.push(ErrorSite {
            start_byte: node.start_byte(),
            end_byte: node.end_byte(),
            line: line_of(&node),
            missing: node.is_missing(),
            kind: node.kind().to_string(),
        });
        // An ERROR node's children are the skipped tokens; one site is enough.
        return;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.has_error() || child.is_missing() {
            collect_recursive(child, sites);
        }
    }
}

/// Human-readable description of an error site for log messages.
pub fn describe(site: &ErrorSite, source: &[u8]) -> String {
    if site.missing {
        return format!("missing `{}` at line {}", site.kind, site.line);
    }
    let end = site.end_byte.min(source.len()).min(site.start_byte + 40);
    let snippet = String::from_utf8_lossy(&source[site.start_byte.min(end)..end]);
    let snippet = snippet.lines().next().unwrap_or("").trim();
    if snippet.is_empty() {
        format!("syntax error at line {}", site.line)
    } else {
        format!("unexpected `{}` at line {}", snippet, site.line)
    }
}
