//! MatcherRegistry: one matcher per dialect, with panic isolation.

use baseline_core::{Dialect, Occurrence};
use tree_sitter::Tree;

use super::css::CssMatcher;
use super::javascript::JsMatcher;
use super::traits::{DetectionRule, DialectMatcher, MatchOptions};

/// Registry of dialect matchers.
pub struct MatcherRegistry {
    matchers: Vec<Box<dyn DialectMatcher>>,
}

impl MatcherRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            matchers: Vec::new(),
        }
    }

    /// Register a matcher. A later matcher for the same dialect replaces the earlier one.
    pub fn register(&mut self, matcher: Box<dyn DialectMatcher>) {
        self.matchers.retain(|m| m.dialect() != matcher.dialect());
        self.matchers.push(matcher);
    }

    pub fn matcher_for(&self, dialect: Dialect) -> Option<&dyn DialectMatcher> {
        self.matchers
            .iter()
            .find(|m| m.dialect() == dialect)
            .map(|m| m.as_ref())
    }

    /// Run the matcher for `dialect`.
    ///
    /// A matcher that panics yields no occurrences; the panic is logged and
    /// the scan moves on.
    pub fn run(
        &self,
        dialect: Dialect,
        tree: &Tree,
        source: &[u8],
        file: &str,
        options: MatchOptions,
    ) -> Vec<Occurrence> {
        let Some(matcher) = self.matcher_for(dialect) else {
            return Vec::new();
        };
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            matcher.match_tree(tree, source, file, options)
        }));
        match result {
            Ok(found) => found,
            Err(_) => {
                tracing::error!(matcher_id = matcher.id(), file, "matcher panicked");
                Vec::new()
            }
        }
    }

    /// Every rule of every registered matcher, in dialect then evaluation order.
    pub fn catalog(&self) -> Vec<DetectionRule> {
        let mut rules = Vec::new();
        for dialect in Dialect::all() {
            if let Some(m) = self.matcher_for(*dialect) {
                rules.extend(m.rules());
            }
        }
        rules
    }

    /// Total number of registered matchers.
    pub fn count(&self) -> usize {
        self.matchers.len()
    }
}

impl Default for MatcherRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a registry with the JS and CSS matchers.
pub fn create_default_registry() -> MatcherRegistry {
    let mut registry = MatcherRegistry::new();
    registry.register(Box::new(JsMatcher));
    registry.register(Box::new(CssMatcher));
    registry
}
