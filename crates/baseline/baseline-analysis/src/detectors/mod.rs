//! Dialect matchers: declarative rule tables walked by one generic loop per dialect.

pub mod css;
pub mod first_match;
pub mod javascript;
pub mod registry;
pub mod traits;

pub use registry::{create_default_registry, MatcherRegistry};
pub use traits::{DetectionRule, DialectMatcher, MatchOptions};
