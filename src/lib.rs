//! # class-merge
//!
//! Conflict-aware merging of utility CSS class lists.
//!
//! UI components build their `class` attribute from fixed base classes,
//! conditional classes and a caller-supplied override. When these disagree
//! (`p-2` from the base, `p-4` from the caller) only the last one should reach
//! the markup. This crate resolves those conflicts: later classes win within a
//! utility group, unrelated and unrecognised classes are kept in order, and
//! anything unsafe is dropped before it can reach the attribute.
//!
//! ```
//! assert_eq!(class_merge::merge(["px-2 py-1 bg-red-500", "p-3 bg-blue-500"]),
//!            "px-2 py-1 p-3 bg-blue-500");
//! ```
//!
//! ## Modules
//!
//! - **[`token`]** — logos tokenizer, safety validator, modifier extraction
//! - **[`classify`]** — utility taxonomy, classifier, group keys, concurrent cache
//! - **[`merge`](mod@merge)** — merge engine and the [`ClassList`] builder
//! - **[`config`]** — [`MergerConfig`] and its errors

use std::sync::LazyLock;

// Token layer
pub mod token;

// Classification
pub mod classify;

// Resolution
pub mod config;
pub mod merge;

pub use classify::cache::{CacheStats, ClassCache};
pub use classify::group::{Classification, GroupKey};
pub use config::{ConfigError, MergerConfig};
pub use merge::class_list::ClassList;
pub use merge::engine::Merger;
pub use token::safety::Rejection;

static DEFAULT_MERGER: LazyLock<Merger> = LazyLock::new(Merger::default);

/// The process-wide merger used by [`merge()`] and [`ClassList::resolve`].
///
/// Its cache is unbounded. Create a [`Merger`] with a bounded
/// [`MergerConfig`] when class names are generated at runtime.
pub fn default_merger() -> &'static Merger {
    &DEFAULT_MERGER
}

/// Merge ordered class fragments through the default merger.
///
/// Pass base classes first and the caller's override last; later classes win
/// conflicts.
pub fn merge<I>(fragments: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    DEFAULT_MERGER.merge(fragments)
}

/// Variadic form of [`merge()`]: `merge_classes!(base, variant, class)`.
///
/// Every argument must be usable as `&str`.
#[macro_export]
macro_rules! merge_classes {
    ($($fragment:expr),* $(,)?) => {
        $crate::merge::<&[&str]>(&[$(::core::convert::AsRef::<str>::as_ref(&$fragment)),*])
    };
}
