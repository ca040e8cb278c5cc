//! Merge layer: the conflict-resolving engine and the class list builder.

pub mod class_list;
pub mod engine;
