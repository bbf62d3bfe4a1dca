//! First-match-wins fold over candidate detections.

use baseline_core::{FxHashMap, Occurrence};

use super::traits::{DetectionRule, MatchOptions};

/// Accumulates the earliest occurrence per rule slot for one file.
///
/// A candidate for a slot that is already present is discarded along with its
/// line number.
pub struct FirstMatch<'a> {
    file: &'a str,
    options: MatchOptions,
    index: FxHashMap<&'static str, usize>,
    found: Vec<Occurrence>,
}

impl<'a> FirstMatch<'a> {
    pub fn new(file: &'a str, options: MatchOptions) -> Self {
        Self {
            file,
            options,
            index: FxHashMap::default(),
            found: Vec::new(),
        }
    }

    /// True if the rule's slot is already taken: callers skip the predicate.
    pub fn has(&self, rule: &DetectionRule) -> bool {
        self.index.contains_key(rule.slot())
    }

    /// Offer a candidate. Returns `false` if the slot was already filled.
    pub fn offer(&mut self, rule: &DetectionRule, line: u32) -> bool {
        if self.has(rule) {
            return false;
        }
        let occurrence = Occurrence::new(rule.display_name, rule.feature_key, line, self.file);
        if self.options.verbose {
            tracing::info!(
                file = self.file,
                line = occurrence.line,
                feature = rule.feature_key,
                "detected {}",
                rule.display_name
            );
        } else {
            tracing::debug!(
                file = self.file,
                line = occurrence.line,
                feature = rule.feature_key,
                "detected {}",
                rule.display_name
            );
        }
        self.index.insert(rule.slot(), self.found.len());
        self.found.push(occurrence);
        true
    }

    /// Occurrences in detection order.
    pub fn into_occurrences(self) -> Vec<Occurrence> {
        self.found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use baseline_core::Dialect;

    const FETCH: DetectionRule = DetectionRule {
        feature_key: "fetch",
        display_name: "fetch",
        dialect: Dialect::Js,
    };
    const FETCH_INIT: DetectionRule = DetectionRule {
        feature_key: "fetch",
        display_name: "fetch with init options",
        dialect: Dialect::Js,
    };

    #[test]
    fn later_candidates_are_discarded() {
        let mut fm = FirstMatch::new("a.js", MatchOptions::default());
        assert!(fm.offer(&FETCH, 3));
        assert!(!fm.offer(&FETCH, 9));
        let out = fm.into_occurrences();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].line, 3);
    }

    #[test]
    fn shared_key_with_distinct_names_keeps_both() {
        let mut fm = FirstMatch::new("a.js", MatchOptions::default());
        fm.offer(&FETCH, 1);
        fm.offer(&FETCH_INIT, 1);
        let out = fm.into_occurrences();
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|o| o.feature_key == "fetch"));
    }
}
