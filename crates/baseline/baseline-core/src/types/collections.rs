//! Fast hash collections used across the workspace.

pub type FxHashMap<K, V> = rustc_hash::FxHashMap<K, V>;
