//! JavaScript matcher: a shallow pass over the program's top-level statements.
//!
//! Only three kinds of candidate node are inspected per top-level statement:
//! the expression of an expression statement, each declarator initializer of
//! a variable declaration, and a top-level function declaration itself.
//! Nested blocks, function bodies, conditionals and loops are not visited, so
//! a feature used only inside them is not reported.

pub mod rules;

use baseline_core::{Dialect, Occurrence};
use tree_sitter::{Node, Tree};

use self::rules::{Site, JS_RULES};
use super::first_match::FirstMatch;
use super::traits::{DetectionRule, DialectMatcher, MatchOptions};

pub struct JsMatcher;

impl DialectMatcher for JsMatcher {
    fn id(&self) -> &str {
        "js-matcher"
    }

    fn dialect(&self) -> Dialect {
        Dialect::Js
    }

    fn rules(&self) -> Vec<DetectionRule> {
        JS_RULES.iter().map(|r| r.rule).collect()
    }

    fn match_tree(
        &self,
        tree: &Tree,
        source: &[u8],
        file: &str,
        options: MatchOptions,
    ) -> Vec<Occurrence> {
        let mut found = FirstMatch::new(file, options);
        let root = tree.root_node();
        let mut cursor = root.walk();
        let statements: Vec<Node> = root.named_children(&mut cursor).collect();

        for statement in statements {
            for (site, node) in candidate_sites(statement) {
                for entry in JS_RULES {
                    if !entry.sites.contains(&site) || found.has(&entry.rule) {
                        continue;
                    }
                    if let Some(line) = (entry.predicate)(&node, source) {
                        found.offer(&entry.rule, line);
                    }
                }
            }
        }

        found.into_occurrences()
    }
}

/// Candidate nodes of one top-level statement, in source order.
fn candidate_sites(statement: Node) -> Vec<(Site, Node)> {
    let mut sites = Vec::new();
    match statement.kind() {
        "function_declaration" | "generator_function_declaration" => {
            sites.push((Site::Declaration, statement));
        }
        "expression_statement" => {
            let mut cursor = statement.walk();
            let expr = statement
                .named_children(&mut cursor)
                .find(|n| n.kind() != "comment");
            if let Some(expr) = expr {
                sites.push((Site::Statement, expr));
            }
        }
        "lexical_declaration" | "variable_declaration" => {
            let mut cursor = statement.walk();
            let values: Vec<Node> = statement
                .named_children(&mut cursor)
                .filter(|n| n.kind() == "variable_declarator")
                .filter_map(|d| d.child_by_field_name("value"))
                .collect();
            sites.extend(values.into_iter().map(|v| (Site::Initializer, v)));
        }
        _ => {}
    }
    sites
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::ParserManager;
    use std::path::Path;

    fn detect(src: &str) -> Vec<Occurrence> {
        let parsed = ParserManager::new()
            .parse(src.as_bytes(), Path::new("a.js"))
            .unwrap();
        JsMatcher.match_tree(&parsed.tree, src.as_bytes(), "a.js", MatchOptions::default())
    }

    fn keys(occurrences: &[Occurrence]) -> Vec<(&str, &str, u32)> {
        occurrences
            .iter()
            .map(|o| (o.feature_key.as_str(), o.display_name.as_str(), o.line))
            .collect()
    }

    #[test]
    fn abort_controller_initializer() {
        let found = detect("const c = new AbortController();");
        assert_eq!(
            found,
            vec![Occurrence::new("AbortController", "aborting", 1, "a.js")]
        );
    }

    #[test]
    fn abort_controller_statement() {
        let found = detect("// setup\nnew AbortController();\n");
        assert_eq!(keys(&found), vec![("aborting", "AbortController", 2)]);
    }

    #[test]
    fn repeated_shape_reports_once_with_first_line() {
        let found = detect(
            "const a = new AbortController();\nconst b = new AbortController();\nnew AbortController();\n",
        );
        assert_eq!(keys(&found), vec![("aborting", "AbortController", 1)]);
    }

    #[test]
    fn fetch_with_init_options_layers_a_second_occurrence() {
        let found = detect("fetch('/a');\nfetch('/b', { method: 'POST' });\n");
        assert_eq!(
            keys(&found),
            vec![("fetch", "fetch", 1), ("fetch", "fetch with init options", 2)]
        );
    }

    #[test]
    fn fetch_as_initializer_is_not_reported() {
        assert!(detect("const r = fetch('/a');").is_empty());
    }

    #[test]
    fn member_fetch_is_not_bare_fetch() {
        assert!(detect("window.fetch('/a');").is_empty());
    }

    #[test]
    fn promise_all_settled_statement() {
        let found = detect("Promise.allSettled([a, b]);");
        assert_eq!(keys(&found), vec![("promise-allsettled", "Promise.allSettled", 1)]);
        assert!(detect("Q.allSettled([a]);").is_empty());
    }

    #[test]
    fn async_forms() {
        assert_eq!(
            keys(&detect("async function load() {}")),
            vec![("async-await", "async/await", 1)]
        );
        assert_eq!(
            keys(&detect("const f = async () => 1;")),
            vec![("async-await", "async/await", 1)]
        );
        assert_eq!(
            keys(&detect("const v = 1;\nawait ready;\n")),
            vec![("async-await", "async/await", 2)]
        );
    }

    #[test]
    fn plain_function_is_not_async() {
        assert!(detect("function load() { return 1; }").is_empty());
    }

    #[test]
    fn intersection_observer_and_weak_ref() {
        let found = detect("const io = new IntersectionObserver(cb);\nconst w = new WeakRef(obj);\n");
        assert_eq!(
            keys(&found),
            vec![
                ("intersection-observer", "IntersectionObserver", 1),
                ("weak-references", "WeakRef", 2),
            ]
        );
    }

    #[test]
    fn weak_ref_statement_is_not_reported() {
        assert!(detect("new WeakRef(obj);").is_empty());
    }

    #[test]
    fn array_at_on_literal_or_identifier() {
        assert_eq!(
            keys(&detect("[1, 2, 3].at(-1);")),
            vec![("array-at", "Array.prototype.at", 1)]
        );
        assert_eq!(
            keys(&detect("const last = items.at(-1);")),
            vec![("array-at", "Array.prototype.at", 1)]
        );
        assert!(detect("const x = a.b.at(0);").is_empty());
    }

    #[test]
    fn nested_blocks_are_not_scanned() {
        let found = detect("function outer() {\n  const c = new AbortController();\n}\nif (x) { fetch('/a'); }\n");
        assert!(found.is_empty());
    }

    #[test]
    fn async_inside_function_body_is_not_scanned() {
        assert!(detect("function outer() { const f = async () => 1; }").is_empty());
    }
}
