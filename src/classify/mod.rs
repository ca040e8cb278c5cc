//! Classification: taxonomy, classifier, group keys, and the shared cache.

pub mod cache;
pub mod classifier;
pub mod group;
pub mod taxonomy;
