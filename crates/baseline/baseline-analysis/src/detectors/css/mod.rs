//! CSS matcher: walks every style rule, nested ones included.

pub mod rules;
pub mod selector;

use baseline_core::{Dialect, Occurrence};
use tree_sitter::{Node, Tree};

use self::rules::{DECLARATION_RULES, SELECTOR_RULES};
use super::first_match::FirstMatch;
use super::traits::{DetectionRule, DialectMatcher, MatchOptions};
use crate::parsers::error_tolerant::line_of;
use crate::parsers::languages::css::rule_prelude;

pub struct CssMatcher;

impl DialectMatcher for CssMatcher {
    fn id(&self) -> &str {
        "css-matcher"
    }

    fn dialect(&self) -> Dialect {
        Dialect::Css
    }

    fn rules(&self) -> Vec<DetectionRule> {
        SELECTOR_RULES
            .iter()
            .map(|r| r.rule)
            .chain(DECLARATION_RULES.iter().map(|r| r.rule))
            .collect()
    }

    fn match_tree(
        &self,
        tree: &Tree,
        source: &[u8],
        file: &str,
        options: MatchOptions,
    ) -> Vec<Occurrence> {
        let mut found = FirstMatch::new(file, options);
        let mut stack = vec![tree.root_node()];
        while let Some(node) = stack.pop() {
            if node.kind() == "rule_set" {
                match_rule(&node, source, file, &mut found);
            }
            let mut cursor = node.walk();
            let mut children: Vec<Node> = node.children(&mut cursor).collect();
            children.reverse();
            stack.extend(children);
        }
        found.into_occurrences()
    }
}

fn match_rule(rule_set: &Node, source: &[u8], file: &str, found: &mut FirstMatch<'_>) {
    let Some(prelude) = rule_prelude(rule_set) else {
        return;
    };
    let selector_text = String::from_utf8_lossy(&source[prelude]);
    let rule_line = line_of(rule_set);

    match selector::pseudo_classes(&selector_text) {
        Ok(pseudos) => {
            for pseudo in pseudos {
                for entry in SELECTOR_RULES {
                    if entry.pseudo_class == pseudo.name && !found.has(&entry.rule) {
                        let line = rule_line + newlines_before(&selector_text, pseudo.offset);
                        found.offer(&entry.rule, line);
                    }
                }
            }
        }
        Err(e) => {
            // Declarations of this rule are still scanned below.
            tracing::warn!(
                file,
                line = rule_line,
                selector = %selector_text.trim(),
                error = %e,
                "skipping unparsable selector"
            );
        }
    }

    let mut cursor = rule_set.walk();
    let Some(block) = rule_set.children(&mut cursor).find(|c| c.kind() == "block") else {
        return;
    };
    let mut cursor = block.walk();
    let declarations: Vec<Node> = block
        .named_children(&mut cursor)
        .filter(|c| c.kind() == "declaration")
        .collect();

    for declaration in declarations {
        let Some((property, value)) = split_declaration(&declaration, source) else {
            continue;
        };
        for entry in DECLARATION_RULES {
            if !found.has(&entry.rule) && entry.matches(property, &value) {
                found.offer(&entry.rule, line_of(&declaration));
            }
        }
    }
}

/// `(property, value)` of a declaration; the value excludes `:` and `;`.
fn split_declaration<'s>(declaration: &Node, source: &'s [u8]) -> Option<(&'s str, String)> {
    let mut cursor = declaration.walk();
    let property = declaration
        .named_children(&mut cursor)
        .find(|c| c.kind() == "property_name")?;
    let name = property.utf8_text(source).ok()?;
    let rest = &source[property.end_byte()..declaration.end_byte()];
    let value = String::from_utf8_lossy(rest)
        .trim()
        .trim_start_matches(':')
        .trim_end_matches(';')
        .trim()
        .to_string();
    Some((name, value))
}

fn newlines_before(text: &str, offset: usize) -> u32 {
    text.as_bytes()[..offset.min(text.len())]
        .iter()
        .filter(|&&b| b == b'\n')
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::ParserManager;
    use std::path::Path;

    fn detect(src: &str) -> Vec<(String, String, u32)> {
        let parsed = ParserManager::new()
            .parse(src.as_bytes(), Path::new("b.css"))
            .unwrap();
        CssMatcher
            .match_tree(&parsed.tree, src.as_bytes(), "b.css", MatchOptions::default())
            .into_iter()
            .map(|o| (o.feature_key, o.display_name, o.line))
            .collect()
    }

    fn key(k: &str, name: &str, line: u32) -> (String, String, u32) {
        (k.to_string(), name.to_string(), line)
    }

    #[test]
    fn has_and_gap_in_one_rule() {
        assert_eq!(
            detect("div:has(p) { gap: 1rem; }"),
            vec![key("nesting", ":has", 1), key("flexbox-gap", "gap", 1)]
        );
    }

    #[test]
    fn declaration_lines_come_from_the_declaration() {
        let found = detect(".card {\n  color: red;\n  aspect-ratio: 1;\n}\n");
        assert_eq!(found, vec![key("aspect-ratio", "aspect-ratio", 3)]);
    }

    #[test]
    fn container_properties_share_one_key() {
        let found = detect(".a { container-type: inline-size; }\n.b { container-name: sidebar; }\n");
        assert_eq!(found, vec![key("container-queries", "container queries", 1)]);
    }

    #[test]
    fn scroll_snap_prefix_and_subgrid_value() {
        let found = detect(
            ".s { scroll-snap-type: x mandatory; }\n.g { grid-template-columns: subgrid; }\n.h { grid-template-columns: 1fr 1fr; }\n",
        );
        assert_eq!(
            found,
            vec![key("scroll-snap", "scroll-snap", 1), key("subgrid", "subgrid", 2)]
        );
    }

    #[test]
    fn rules_inside_media_blocks_are_walked() {
        let found = detect("@media (min-width: 600px) {\n  .a { gap: 2px; }\n}\n");
        assert_eq!(found, vec![key("flexbox-gap", "gap", 2)]);
    }

    #[test]
    fn repeated_properties_report_once() {
        let found = detect("a { gap: 1px; }\nb { gap: 2px; }\nc:has(d) { }\ne:has(f) { }\n");
        assert_eq!(
            found,
            vec![key("flexbox-gap", "gap", 1), key("nesting", ":has", 3)]
        );
    }

    #[test]
    fn bad_selector_still_scans_declarations() {
        let found = detect("a:has() { gap: 1px; }\nb:has(c) { color: red; }\n");
        assert_eq!(
            found,
            vec![key("flexbox-gap", "gap", 1), key("nesting", ":has", 2)]
        );
    }

    #[test]
    fn named_container_query_rules_are_scanned() {
        let found = detect(
            ".sidebar { container-name: sidebar; }\n@container sidebar (min-width: 400px) {\n  .c { gap: 1px; }\n}\n",
        );
        assert_eq!(
            found,
            vec![
                key("container-queries", "container queries", 1),
                key("flexbox-gap", "gap", 3),
            ]
        );
    }

    #[test]
    fn range_media_query_keeps_the_stylesheet() {
        let found = detect(".a { gap: 1px; }\n@media (width >= 600px) {\n  .b { aspect-ratio: 1; }\n}\n");
        assert_eq!(
            found,
            vec![key("flexbox-gap", "gap", 1), key("aspect-ratio", "aspect-ratio", 3)]
        );
    }

    #[test]
    fn import_with_layer_keeps_the_stylesheet() {
        let found = detect("@import url('x.css') layer(base);\n.a { scroll-snap-align: start; }\n");
        assert_eq!(found, vec![key("scroll-snap", "scroll-snap", 2)]);
    }

    #[test]
    fn selector_spanning_lines_reports_the_pseudo_class_line() {
        let found = detect(".a,\n.b:has(p) {}\n");
        assert_eq!(found, vec![key("nesting", ":has", 2)]);
    }

    #[test]
    fn pseudo_elements_do_not_count() {
        assert!(detect("p::before { color: red; }").is_empty());
    }
}
