//! Detection rule metadata and the matcher trait.

use baseline_core::{Dialect, Occurrence};
use tree_sitter::Tree;

/// Static description of one recognisable feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectionRule {
    /// Registry identifier.
    pub feature_key: &'static str,
    /// Label shown in reports.
    pub display_name: &'static str,
    pub dialect: Dialect,
}

impl DetectionRule {
    /// De-duplication slot. Rules sharing a key (the two `fetch` shapes) are
    /// told apart by display name; every other key has exactly one rule.
    pub fn slot(&self) -> &'static str {
        self.display_name
    }
}

/// Per-run matcher options.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchOptions {
    /// Log every detection at `info` instead of `debug`.
    pub verbose: bool,
}

/// A matcher for one dialect, consuming a parsed tree.
pub trait DialectMatcher: Send + Sync {
    /// Unique identifier for this matcher.
    fn id(&self) -> &str;

    fn dialect(&self) -> Dialect;

    /// The rule catalog this matcher evaluates, in evaluation order.
    fn rules(&self) -> Vec<DetectionRule>;

    /// Match one file. Each rule slot appears at most once in the output.
    fn match_tree(
        &self,
        tree: &Tree,
        source: &[u8],
        file: &str,
        options: MatchOptions,
    ) -> Vec<Occurrence>;
}
