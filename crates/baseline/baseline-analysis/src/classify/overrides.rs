//! Keys classified `baseline` regardless of registry data.
//!
//! Each entry names the upstream defect it works around. Remove an entry once
//! the registry publishes the correct tier.

/// One registry override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaselineOverride {
    pub feature_key: &'static str,
    /// The upstream misclassification this compensates for.
    pub reason: &'static str,
}

pub static BASELINE_OVERRIDES: &[BaselineOverride] = &[
    BaselineOverride {
        feature_key: "nesting",
        reason: "`:has` is reported under `nesting`; upstream lists the `has` selector in a low tier",
    },
    BaselineOverride {
        feature_key: "subgrid",
        reason: "upstream lists subgrid in a low tier despite support in all core browsers",
    },
];

/// The override entry for `feature_key`, if any.
pub fn find_override(feature_key: &str) -> Option<&'static BaselineOverride> {
    BASELINE_OVERRIDES
        .iter()
        .find(|o| o.feature_key == feature_key)
}
