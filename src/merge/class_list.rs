//! Builder for a component's class attribute.
//!
//! Components contribute classes in three tiers: fixed base classes,
//! classes that depend on props or state, and the caller's own `class`
//! override. [`ClassList`] always hands them to the merger in that order,
//! whatever order the builder methods were called in, so the caller's
//! override wins every conflict.

use std::borrow::Cow;

use crate::merge::engine::Merger;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList<'a> {
    base: Vec<Cow<'a, str>>,
    conditional: Vec<Cow<'a, str>>,
    overrides: Vec<Cow<'a, str>>,
}

impl<'a> ClassList<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fixed base fragment.
    pub fn base(mut self, fragment: impl Into<Cow<'a, str>>) -> Self {
        self.base.push(fragment.into());
        self
    }

    /// Add a fragment only when `condition` holds.
    pub fn when(mut self, condition: bool, fragment: impl Into<Cow<'a, str>>) -> Self {
        if condition {
            self.conditional.push(fragment.into());
        }
        self
    }

    /// Add a fragment if one is present, e.g. a variant's extra classes.
    pub fn when_some<S: Into<Cow<'a, str>>>(mut self, fragment: Option<S>) -> Self {
        if let Some(fragment) = fragment {
            self.conditional.push(fragment.into());
        }
        self
    }

    /// Add the caller-supplied override. It always goes last.
    pub fn with_override<S: Into<Cow<'a, str>>>(mut self, fragment: Option<S>) -> Self {
        if let Some(fragment) = fragment {
            self.overrides.push(fragment.into());
        }
        self
    }

    /// Fragments in merge order: base, conditional, override.
    pub fn fragments(&self) -> impl Iterator<Item = &str> + '_ {
        self.base
            .iter()
            .chain(&self.conditional)
            .chain(&self.overrides)
            .map(|fragment| &**fragment)
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_empty() && self.conditional.is_empty() && self.overrides.is_empty()
    }

    /// Merge through the process-wide default merger.
    pub fn resolve(&self) -> String {
        crate::merge(self.fragments())
    }

    /// Merge through a specific merger.
    pub fn resolve_with(&self, merger: &Merger) -> String {
        merger.merge(self.fragments())
    }
}
