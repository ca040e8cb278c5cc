//! Base class → utility group classification.
//!
//! Rules are tried in order and the first match wins:
//!
//! 1. exact keywords (display, position, flex direction, alignment, radius,
//!    font weight, font size, text alignment)
//! 2. spacing, sizing and gap prefixes, each prefix its own group
//! 3. text / background / border colors
//! 4. border width, opacity, z-index, grid columns and rows
//! 5. animation families
//! 6. translate and inset/offset prefixes (not scoped by modifiers)
//! 7. shadows
//!
//! Anything else is a custom class and classifies to `None`.

use crate::classify::group::{Classification, GroupKey, Utility};
use crate::classify::taxonomy::{exact_group, pattern_rules, Naming};
use crate::token::modifier::split_modifiers;

/// Classify a base class (modifiers already stripped).
///
/// The returned group borrows either from the static taxonomy or from `base`
/// itself, for prefix-named groups such as `px` or `translate-x`.
pub fn classify_base(base: &str) -> Option<Utility<'_>> {
    if let Some(group) = exact_group(base) {
        return Some(Utility::variant(group));
    }

    pattern_rules().iter().find_map(|rule| {
        let captures = rule.pattern.captures(base)?;
        let group = match rule.naming {
            Naming::Fixed(name) => name,
            Naming::Prefix => captures.get(1)?.as_str(),
        };
        Some(Utility {
            group,
            scope: rule.scope,
        })
    })
}

/// Classify a full token, modifiers included.
pub fn classify(token: &str) -> Classification {
    let (chain, base) = split_modifiers(token);
    Classification {
        group: classify_base(base).map(|utility| GroupKey::new(chain, utility)),
        modifiers: chain.as_str().into(),
    }
}
