//! Modifier chain / base class extraction.
//!
//! `dark:hover:bg-red-500` splits into the chain `dark:hover` and the base
//! `bg-red-500`. Only colons at bracket depth zero separate variants, so
//! arbitrary variants such as `[&:hover]` or `data-[state=open]` stay intact.
//! Everything here works on borrowed slices of the original token.

use std::fmt;

/// Ordered variant prefixes of a class token, e.g. `dark:hover`.
///
/// Borrowed from the token; the empty chain means "no variants".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ModifierChain<'a> {
    raw: &'a str,
}

impl<'a> ModifierChain<'a> {
    /// The chain with no variants.
    pub const fn empty() -> Self {
        Self { raw: "" }
    }

    /// The chain exactly as written, variants joined by `:`.
    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    /// Returns `true` if the token had no variant prefix.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

impl fmt::Display for ModifierChain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw)
    }
}

/// Byte offsets of every colon outside `[...]` and `(...)`.
fn top_level_colons(s: &str) -> impl Iterator<Item = usize> + '_ {
    let mut depth: u32 = 0;
    s.bytes().enumerate().filter_map(move |(i, b)| {
        match b {
            b'[' | b'(' => depth += 1,
            b']' | b')' => depth = depth.saturating_sub(1),
            b':' if depth == 0 => return Some(i),
            _ => {}
        }
        None
    })
}

fn last_top_level_colon(s: &str) -> Option<usize> {
    top_level_colons(s).last()
}

/// Split a token on its last top-level colon into `(modifiers, base)`.
///
/// With no qualifying colon the chain is empty and the whole token is the
/// base class.
pub fn split_modifiers(token: &str) -> (ModifierChain<'_>, &str) {
    match last_top_level_colon(token) {
        Some(i) => (ModifierChain { raw: &token[..i] }, &token[i + 1..]),
        None => (ModifierChain::empty(), token),
    }
}
