//! Utility groups and classification results.

use std::fmt;
use std::sync::Arc;

use crate::token::modifier::ModifierChain;

/// How a matched group interacts with the token's modifier chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// The group is qualified by the modifier chain: `hover:p-2` and `p-4`
    /// live in different groups.
    Variant,
    /// The group name already says everything. Positional utilities
    /// (`top-*`, `inset-*`, `translate-*`) use this, so `hover:top-0` and
    /// `top-4` conflict.
    Global,
}

/// A classifier match: the style concern a base class sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Utility<'a> {
    /// Group name, e.g. `"px"`, `"text-color"`, `"translate-x"`.
    pub group: &'a str,
    pub scope: Scope,
}

impl<'a> Utility<'a> {
    pub const fn variant(group: &'a str) -> Self {
        Self {
            group,
            scope: Scope::Variant,
        }
    }

    pub const fn global(group: &'a str) -> Self {
        Self {
            group,
            scope: Scope::Global,
        }
    }
}

/// Conflict key: two tokens with equal keys override one another.
///
/// Cheap to clone; the text is shared.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupKey(Arc<str>);

impl GroupKey {
    /// Combine a matched utility with the token's modifier chain.
    ///
    /// Allocates the key text once; clones share it. Together with
    /// [`Classification::modifiers`] this is one of the two allocations a
    /// classification makes, paid once per distinct token when cached.
    pub fn new(chain: ModifierChain<'_>, utility: Utility<'_>) -> Self {
        match utility.scope {
            Scope::Variant if !chain.is_empty() => {
                GroupKey(format!("{}:{}", chain.as_str(), utility.group).into())
            }
            _ => GroupKey(utility.group.into()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of classifying one raw token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Conflict key, or `None` for custom classes that are always kept.
    pub group: Option<GroupKey>,
    /// The token's modifier chain as written (`""` when there is none).
    pub modifiers: Arc<str>,
}

impl Classification {
    /// Returns `true` if the token is not a recognised utility.
    pub fn is_custom(&self) -> bool {
        self.group.is_none()
    }
}
