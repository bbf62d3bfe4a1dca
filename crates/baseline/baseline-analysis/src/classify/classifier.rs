//! Classifier: maps an occurrence to a baseline verdict.

use baseline_core::{ClassifiedFeature, Occurrence, Status};

use super::overrides::find_override;
use super::registry::{BaselineTier, FeatureRegistry, WebFeaturesRegistry};

pub struct Classifier {
    registry: Box<dyn FeatureRegistry>,
}

impl Classifier {
    pub fn new(registry: Box<dyn FeatureRegistry>) -> Self {
        Self { registry }
    }

    /// Classifier over the bundled registry snapshot.
    pub fn bundled() -> Self {
        Self::new(Box::new(WebFeaturesRegistry::bundled()))
    }

    /// Overrides first, then the registry: only the widely-available tier is
    /// `baseline`. Unknown keys are `non-baseline`.
    pub fn status_of(&self, feature_key: &str) -> Status {
        if let Some(entry) = find_override(feature_key) {
            tracing::trace!(feature = feature_key, reason = entry.reason, "baseline override");
            return Status::Baseline;
        }
        match self.registry.tier(feature_key) {
            Some(BaselineTier::High) => Status::Baseline,
            Some(BaselineTier::Low | BaselineTier::Limited) => Status::NonBaseline,
            None => {
                tracing::debug!(feature = feature_key, "feature not found in registry");
                Status::NonBaseline
            }
        }
    }

    pub fn classify(&self, occurrence: &Occurrence) -> ClassifiedFeature {
        ClassifiedFeature {
            status: self.status_of(&occurrence.feature_key),
            occurrence: occurrence.clone(),
        }
    }

    pub fn classify_all(&self, occurrences: &[Occurrence]) -> Vec<ClassifiedFeature> {
        occurrences.iter().map(|o| self.classify(o)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use baseline_core::FxHashMap;

    struct FixedRegistry(FxHashMap<&'static str, BaselineTier>);

    impl FeatureRegistry for FixedRegistry {
        fn tier(&self, key: &str) -> Option<BaselineTier> {
            self.0.get(key).copied()
        }
    }

    fn classifier(entries: &[(&'static str, BaselineTier)]) -> Classifier {
        Classifier::new(Box::new(FixedRegistry(entries.iter().copied().collect())))
    }

    #[test]
    fn only_high_tier_is_baseline() {
        let c = classifier(&[
            ("fetch", BaselineTier::High),
            ("view-transitions", BaselineTier::Low),
            ("thing", BaselineTier::Limited),
        ]);
        assert_eq!(c.status_of("fetch"), Status::Baseline);
        assert_eq!(c.status_of("view-transitions"), Status::NonBaseline);
        assert_eq!(c.status_of("thing"), Status::NonBaseline);
        assert_eq!(c.status_of("unknown"), Status::NonBaseline);
    }

    #[test]
    fn overrides_beat_the_registry() {
        let c = classifier(&[
            ("nesting", BaselineTier::Limited),
            ("subgrid", BaselineTier::Low),
        ]);
        assert_eq!(c.status_of("nesting"), Status::Baseline);
        assert_eq!(c.status_of("subgrid"), Status::Baseline);
        // Even when the registry does not know the key.
        assert_eq!(classifier(&[]).status_of("nesting"), Status::Baseline);
    }

    #[test]
    fn classify_does_not_alter_the_occurrence() {
        let occ = Occurrence::new(":has", "nesting", 4, "b.css");
        let classified = Classifier::bundled().classify(&occ);
        assert_eq!(classified.occurrence, occ);
        assert_eq!(classified.status, Status::Baseline);
    }
}
