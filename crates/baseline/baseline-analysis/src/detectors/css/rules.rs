//! The CSS rule tables: selector pseudo-classes and declaration properties.

use baseline_core::Dialect;

use crate::detectors::traits::DetectionRule;

const fn css(feature_key: &'static str, display_name: &'static str) -> DetectionRule {
    DetectionRule {
        feature_key,
        display_name,
        dialect: Dialect::Css,
    }
}

/// A pseudo-class that marks a feature.
pub struct SelectorRule {
    pub rule: DetectionRule,
    /// Lowercased pseudo-class name, without the colon.
    pub pseudo_class: &'static str,
}

/// How a declaration's property name is matched (case-insensitive).
#[derive(Debug, Clone, Copy)]
pub enum PropertyMatch {
    Exact(&'static str),
    AnyOf(&'static [&'static str]),
    Prefix(&'static str),
}

impl PropertyMatch {
    pub fn matches(&self, property: &str) -> bool {
        match self {
            Self::Exact(name) => property.eq_ignore_ascii_case(name),
            Self::AnyOf(names) => names.iter().any(|n| property.eq_ignore_ascii_case(n)),
            Self::Prefix(prefix) => property
                .get(..prefix.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(prefix)),
        }
    }
}

pub struct DeclarationRule {
    pub rule: DetectionRule,
    pub property: PropertyMatch,
    /// Substring the value must contain, if any.
    pub value_contains: Option<&'static str>,
}

impl DeclarationRule {
    pub fn matches(&self, property: &str, value: &str) -> bool {
        self.property.matches(property)
            && self
                .value_contains
                .map_or(true, |needle| value.to_ascii_lowercase().contains(needle))
    }
}

// `:has` reports under `nesting`: the registry's own `has` entry carries a
// tier that does not reflect browser support.
pub static SELECTOR_RULES: &[SelectorRule] = &[SelectorRule {
    rule: css("nesting", ":has"),
    pseudo_class: "has",
}];

pub static DECLARATION_RULES: &[DeclarationRule] = &[
    DeclarationRule {
        rule: css("flexbox-gap", "gap"),
        property: PropertyMatch::Exact("gap"),
        value_contains: None,
    },
    DeclarationRule {
        rule: css("aspect-ratio", "aspect-ratio"),
        property: PropertyMatch::Exact("aspect-ratio"),
        value_contains: None,
    },
    DeclarationRule {
        rule: css("container-queries", "container queries"),
        property: PropertyMatch::AnyOf(&["container-type", "container-name", "container"]),
        value_contains: None,
    },
    DeclarationRule {
        rule: css("scroll-snap", "scroll-snap"),
        property: PropertyMatch::Prefix("scroll-snap"),
        value_contains: None,
    },
    DeclarationRule {
        rule: css("subgrid", "subgrid"),
        property: PropertyMatch::Exact("grid-template-columns"),
        value_contains: Some("subgrid"),
    },
];
