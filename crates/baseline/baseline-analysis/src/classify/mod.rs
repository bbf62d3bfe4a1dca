//! Classification: registry lookup plus the documented override table.

pub mod classifier;
pub mod overrides;
pub mod registry;

pub use classifier::Classifier;
pub use overrides::{BaselineOverride, BASELINE_OVERRIDES};
pub use registry::{BaselineTier, FeatureRegistry, WebFeaturesRegistry};
