//! The JavaScript rule table.
//!
//! Each entry pairs a rule with the sites it inspects and a structural
//! predicate. Adding a feature means adding a row here.

use baseline_core::Dialect;
use tree_sitter::Node;

use crate::detectors::traits::DetectionRule;
use crate::parsers::error_tolerant::line_of;

/// Where a candidate node came from within a top-level statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Site {
    /// The expression of an expression statement.
    Statement,
    /// The value of a `const`/`let`/`var` declarator.
    Initializer,
    /// A top-level function declaration.
    Declaration,
}

/// Returns the line of the matched node, or `None` when the shape is absent.
pub type NodePredicate = fn(&Node<'_>, &[u8]) -> Option<u32>;

pub struct JsRule {
    pub rule: DetectionRule,
    pub sites: &'static [Site],
    pub predicate: NodePredicate,
}

const fn js(feature_key: &'static str, display_name: &'static str) -> DetectionRule {
    DetectionRule {
        feature_key,
        display_name,
        dialect: Dialect::Js,
    }
}

pub static JS_RULES: &[JsRule] = &[
    JsRule {
        rule: js("aborting", "AbortController"),
        sites: &[Site::Statement, Site::Initializer],
        predicate: is_abort_controller,
    },
    JsRule {
        rule: js("fetch", "fetch"),
        sites: &[Site::Statement],
        predicate: is_fetch_call,
    },
    JsRule {
        rule: js("fetch", "fetch with init options"),
        sites: &[Site::Statement],
        predicate: is_fetch_with_init,
    },
    JsRule {
        rule: js("promise-allsettled", "Promise.allSettled"),
        sites: &[Site::Statement],
        predicate: is_promise_all_settled,
    },
    JsRule {
        rule: js("async-await", "async/await"),
        sites: &[Site::Declaration, Site::Statement, Site::Initializer],
        predicate: find_async_or_await,
    },
    JsRule {
        rule: js("intersection-observer", "IntersectionObserver"),
        sites: &[Site::Statement, Site::Initializer],
        predicate: is_intersection_observer,
    },
    JsRule {
        rule: js("array-at", "Array.prototype.at"),
        sites: &[Site::Statement, Site::Initializer],
        predicate: is_array_at_call,
    },
    JsRule {
        rule: js("weak-references", "WeakRef"),
        sites: &[Site::Initializer],
        predicate: is_weak_ref,
    },
];

fn text<'s>(node: &Node, source: &'s [u8]) -> &'s str {
    node.utf8_text(source).unwrap_or("")
}

fn is_identifier(node: &Node, source: &[u8], name: &str) -> bool {
    node.kind() == "identifier" && text(node, source) == name
}

/// Arguments of a call or `new`, skipping punctuation and comments.
fn arguments<'t>(node: &Node<'t>) -> Vec<Node<'t>> {
    let Some(args) = node.child_by_field_name("arguments") else {
        return Vec::new();
    };
    let mut cursor = args.walk();
    let list: Vec<Node<'t>> = args
        .named_children(&mut cursor)
        .filter(|n| n.kind() != "comment")
        .collect();
    list
}

/// `new <name>(...)`.
fn constructs(node: &Node, source: &[u8], name: &str) -> Option<u32> {
    if node.kind() != "new_expression" {
        return None;
    }
    let constructor = node.child_by_field_name("constructor")?;
    is_identifier(&constructor, source, name).then(|| line_of(node))
}

fn is_abort_controller(node: &Node, source: &[u8]) -> Option<u32> {
    constructs(node, source, "AbortController")
}

fn is_intersection_observer(node: &Node, source: &[u8]) -> Option<u32> {
    constructs(node, source, "IntersectionObserver")
}

fn is_weak_ref(node: &Node, source: &[u8]) -> Option<u32> {
    constructs(node, source, "WeakRef")
}

/// A call whose callee is the bare identifier `fetch`.
fn fetch_callee(node: &Node, source: &[u8]) -> bool {
    node.kind() == "call_expression"
        && node
            .child_by_field_name("function")
            .is_some_and(|callee| is_identifier(&callee, source, "fetch"))
}

fn is_fetch_call(node: &Node, source: &[u8]) -> Option<u32> {
    fetch_callee(node, source).then(|| line_of(node))
}

fn is_fetch_with_init(node: &Node, source: &[u8]) -> Option<u32> {
    if !fetch_callee(node, source) {
        return None;
    }
    let args = arguments(node);
    args.get(1)
        .is_some_and(|init| init.kind() == "object")
        .then(|| line_of(node))
}

/// `(object, property)` of a call whose callee is a member access.
fn member_callee<'t>(node: &Node<'t>) -> Option<(Node<'t>, Node<'t>)> {
    if node.kind() != "call_expression" {
        return None;
    }
    let callee = node.child_by_field_name("function")?;
    if callee.kind() != "member_expression" {
        return None;
    }
    Some((
        callee.child_by_field_name("object")?,
        callee.child_by_field_name("property")?,
    ))
}

fn is_promise_all_settled(node: &Node, source: &[u8]) -> Option<u32> {
    let (object, property) = member_callee(node)?;
    (is_identifier(&object, source, "Promise") && text(&property, source) == "allSettled")
        .then(|| line_of(node))
}

fn is_array_at_call(node: &Node, source: &[u8]) -> Option<u32> {
    let (object, property) = member_callee(node)?;
    let receiver_ok = matches!(object.kind(), "array" | "identifier");
    (receiver_ok && text(&property, source) == "at").then(|| line_of(node))
}

fn is_async_function(node: &Node) -> bool {
    if !matches!(
        node.kind(),
        "function_declaration"
            | "generator_function_declaration"
            | "function_expression"
            | "generator_function"
            | "arrow_function"
    ) {
        return false;
    }
    let mut cursor = node.walk();
    let is_async = node.children(&mut cursor).any(|c| c.kind() == "async");
    is_async
}

/// Search a candidate subtree for an async function or an await expression.
///
/// Stops at statement blocks and class bodies: only the expression shape of
/// the top-level statement is inspected, never nested statements.
fn find_async_or_await(node: &Node, _source: &[u8]) -> Option<u32> {
    let mut stack = vec![*node];
    while let Some(current) = stack.pop() {
        if current.kind() == "await_expression" || is_async_function(&current) {
            return Some(line_of(&current));
        }
        if matches!(current.kind(), "statement_block" | "class_body") {
            continue;
        }
        let mut cursor = current.walk();
        let mut children: Vec<Node> = current.named_children(&mut cursor).collect();
        // Reverse so the leftmost child is popped first.
        children.reverse();
        stack.extend(children);
    }
    None
}
