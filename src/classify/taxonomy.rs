//! Utility taxonomy: the static keyword table and the ordered pattern rules.
//!
//! Both are process-wide and built once on first use. Order matters for the
//! pattern rules: the classifier stops at the first rule that matches.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::classify::group::Scope;

// ---------------------------------------------------------------------------
// Exact keyword table
// ---------------------------------------------------------------------------

const DISPLAY: &[&str] = &[
    "block",
    "inline-block",
    "inline",
    "flex",
    "inline-flex",
    "grid",
    "inline-grid",
    "table",
    "contents",
    "flow-root",
    "list-item",
    "hidden",
];

const POSITION: &[&str] = &["static", "fixed", "absolute", "relative", "sticky"];

const FLEX_DIRECTION: &[&str] = &["flex-row", "flex-row-reverse", "flex-col", "flex-col-reverse"];

const JUSTIFY_CONTENT: &[&str] = &[
    "justify-normal",
    "justify-start",
    "justify-end",
    "justify-center",
    "justify-between",
    "justify-around",
    "justify-evenly",
    "justify-stretch",
];

const ALIGN_ITEMS: &[&str] = &[
    "items-start",
    "items-end",
    "items-center",
    "items-baseline",
    "items-stretch",
];

const ALIGN_SELF: &[&str] = &[
    "self-auto",
    "self-start",
    "self-end",
    "self-center",
    "self-stretch",
    "self-baseline",
];

const ALIGN_CONTENT: &[&str] = &[
    "content-normal",
    "content-start",
    "content-end",
    "content-center",
    "content-between",
    "content-around",
    "content-evenly",
    "content-stretch",
];

const BORDER_RADIUS: &[&str] = &[
    "rounded",
    "rounded-none",
    "rounded-sm",
    "rounded-md",
    "rounded-lg",
    "rounded-xl",
    "rounded-2xl",
    "rounded-3xl",
    "rounded-full",
];

const FONT_WEIGHT: &[&str] = &[
    "font-thin",
    "font-extralight",
    "font-light",
    "font-normal",
    "font-medium",
    "font-semibold",
    "font-bold",
    "font-extrabold",
    "font-black",
];

const FONT_SIZE: &[&str] = &[
    "text-xs", "text-sm", "text-base", "text-lg", "text-xl", "text-2xl", "text-3xl", "text-4xl",
    "text-5xl",
];

// Kept out of the color rule, otherwise `text-left` would read as a color.
const TEXT_ALIGN: &[&str] = &[
    "text-left",
    "text-center",
    "text-right",
    "text-justify",
    "text-start",
    "text-end",
];

static EXACT: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let families: [(&'static str, &[&'static str]); 11] = [
        ("display", DISPLAY),
        ("position", POSITION),
        ("flex-direction", FLEX_DIRECTION),
        ("justify-content", JUSTIFY_CONTENT),
        ("align-items", ALIGN_ITEMS),
        ("align-self", ALIGN_SELF),
        ("align-content", ALIGN_CONTENT),
        ("border-radius", BORDER_RADIUS),
        ("font-weight", FONT_WEIGHT),
        ("font-size", FONT_SIZE),
        ("text-align", TEXT_ALIGN),
    ];
    families
        .iter()
        .flat_map(|(group, classes)| classes.iter().map(move |class| (*class, *group)))
        .collect()
});

/// Group of a non-parametric utility such as `flex` or `font-bold`.
pub fn exact_group(base: &str) -> Option<&'static str> {
    EXACT.get(base).copied()
}

// ---------------------------------------------------------------------------
// Pattern rules
// ---------------------------------------------------------------------------

/// Where the group name of a pattern match comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Naming {
    /// Always the same group.
    Fixed(&'static str),
    /// The literal prefix captured by the pattern's first group.
    Prefix,
}

/// One ordered classification rule.
#[derive(Debug)]
pub struct PatternRule {
    pub pattern: Regex,
    pub naming: Naming,
    pub scope: Scope,
}

const PALETTE: &str = "slate|gray|zinc|neutral|stone|red|orange|amber|yellow|lime|green|emerald|\
                       teal|cyan|sky|blue|indigo|violet|purple|fuchsia|pink|rose";

const SPECIAL_COLORS: &str = "inherit|current|transparent|black|white";

const THEME_COLORS: &str = "background|foreground|border|input|ring|primary|secondary|muted|\
                            accent|destructive|card|popover|sidebar";

const ARBITRARY: &str = r"\[.+\]";

fn color_pattern(prefix: &str) -> String {
    format!(
        r"^{prefix}-(?:(?:{PALETTE})-\d{{2,3}}|(?:{SPECIAL_COLORS})|(?:{THEME_COLORS})(?:-foreground)?|{ARBITRARY})(?:/(?:\d{{1,3}}|{ARBITRARY}))?$"
    )
}

fn rule(pattern: &str, naming: Naming, scope: Scope) -> PatternRule {
    PatternRule {
        pattern: Regex::new(pattern).expect("utility pattern must compile"),
        naming,
        scope,
    }
}

static PATTERN_RULES: LazyLock<Vec<PatternRule>> = LazyLock::new(|| {
    use Naming::{Fixed, Prefix};
    use Scope::{Global, Variant};

    let spacing_value = format!(r"(?:\d+(?:\.\d+)?|auto|px|{ARBITRARY})");
    let size_value = format!(r"(?:[0-9a-z./]+|{ARBITRARY})");

    vec![
        // Spacing: every prefix is its own group, so `p-4` never beats `px-4`.
        rule(
            &format!(r"^(px|py|pt|pr|pb|pl|p|mx|my|mt|mr|mb|ml|m)-{spacing_value}$"),
            Prefix,
            Variant,
        ),
        // Sizing.
        rule(
            &format!(r"^(min-w|min-h|max-w|max-h|w|h)-{size_value}$"),
            Prefix,
            Variant,
        ),
        // Gaps.
        rule(
            &format!(r"^(gap-x|gap-y|gap)-{spacing_value}$"),
            Prefix,
            Variant,
        ),
        // Colors, opacity modifier included.
        rule(&color_pattern("text"), Fixed("text-color"), Variant),
        rule(&color_pattern("bg"), Fixed("background-color"), Variant),
        rule(&color_pattern("border"), Fixed("border-color"), Variant),
        // Single-valued families.
        rule(r"^border(?:-\d+)?$", Fixed("border-width"), Variant),
        rule(r"^opacity-\d+$", Fixed("opacity"), Variant),
        rule(r"^z-(?:\d+|auto)$", Fixed("z-index"), Variant),
        rule(r"^grid-cols-(?:\d+|none)$", Fixed("grid-cols"), Variant),
        rule(r"^grid-rows-(?:\d+|none)$", Fixed("grid-rows"), Variant),
        // Animation. `duration-*` and `animate-duration-*` deliberately land
        // in different groups and do not override each other, even though
        // both end up setting the animation duration.
        rule(r"^duration-\d+$", Fixed("animation-duration"), Variant),
        rule(r"^animate-duration-\d+$", Fixed("animate-duration"), Variant),
        rule(r"^delay-\d+$", Fixed("animation-delay"), Variant),
        rule(r"^animate-ease-[a-z-]+$", Fixed("animate-ease"), Variant),
        rule(r"^ease-[a-z-]+$", Fixed("animation-timing-function"), Variant),
        // Last among the animation rules so it cannot shadow the ones above.
        rule(r"^animate-[a-z0-9]+$", Fixed("animation-name"), Variant),
        // Transforms and offsets: the prefix is the whole story.
        rule(
            &format!(r"^-?(translate-x|translate-y|translate)-{size_value}$"),
            Prefix,
            Global,
        ),
        rule(
            &format!(r"^-?(inset-x|inset-y|inset|top|right|bottom|left)-{size_value}$"),
            Prefix,
            Global,
        ),
        rule(
            &format!(r"^shadow(?:-(?:[a-z0-9]+|{ARBITRARY}))?$"),
            Fixed("box-shadow"),
            Variant,
        ),
    ]
});

/// The ordered pattern rules, consulted after the exact table.
pub fn pattern_rules() -> &'static [PatternRule] {
    &PATTERN_RULES
}
