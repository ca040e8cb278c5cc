//! Property tests for merge: idempotence, last-wins, ordering, custom class
//! preservation and sanitization over randomly assembled class fragments.
//!
//! `fragments()` only draws valid classes, arbitrary values included, so every
//! input token reaches the classifier. `mixed_fragments()` also draws hostile
//! and malformed tokens, which drop the fragment carrying them.

use std::collections::HashSet;

use class_merge::classify::classifier::classify;
use class_merge::merge;
use class_merge::token::safety::{check_fragment, is_safe};
use proptest::prelude::*;

const UTILITIES: &[&str] = &[
    "p-2",
    "p-4",
    "px-4",
    "py-1",
    "m-0",
    "mx-auto",
    "w-full",
    "w-1/2",
    "h-10",
    "gap-2",
    "flex",
    "block",
    "hidden",
    "absolute",
    "relative",
    "text-sm",
    "text-lg",
    "text-red-500",
    "text-blue-200/50",
    "bg-white",
    "bg-primary",
    "border",
    "border-2",
    "border-input",
    "rounded-md",
    "font-bold",
    "opacity-50",
    "z-10",
    "duration-300",
    "animate-duration-500",
    "animate-spin",
    "ease-in",
    "top-0",
    "-translate-x-2",
    "shadow-lg",
    "card",
    "custom-brand",
    "sr-only",
    "w-[calc(100%-2rem)]",
    "left-[50%]",
    "translate-x-[-50%]",
    "bg-[#ff00aa]/50",
    "text-[color:var(--brand)]",
    "p-[3px]",
    "grid-cols-[1fr_auto]",
    "[&>svg]:absolute",
    "[&_[data-x]:a]:flex",
    "[mask-type:luminance]",
];

const HOSTILE: &[&str] = &[
    "<b>",
    "café-theme",
    "javascript:alert(1)",
    "bg-[url(evil)]",
    "w-[expression(1)]",
    "onclick=\"x\"",
    "a;b",
    "{color:red}",
    "@import",
];

const MODIFIERS: &[&str] = &["", "hover:", "dark:", "md:", "dark:hover:", "data-[state=open]:"];

const FORBIDDEN: &[&str] = &["javascript", "expression", "url(", "import"];

fn token() -> impl Strategy<Value = String> {
    (
        prop::sample::select(MODIFIERS),
        prop::sample::select(UTILITIES),
    )
        .prop_map(|(modifier, utility)| format!("{modifier}{utility}"))
}

fn fragment() -> impl Strategy<Value = String> {
    prop::collection::vec(token(), 0..6).prop_map(|tokens| tokens.join(" "))
}

fn fragments() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(fragment(), 0..5)
}

fn hostile_token() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(HOSTILE).prop_map(String::from),
        (195usize..260).prop_map(|len| format!("w-{}", "1".repeat(len))),
    ]
}

fn mixed_fragment() -> impl Strategy<Value = String> {
    prop::collection::vec(prop_oneof![4 => token(), 1 => hostile_token()], 0..6)
        .prop_map(|tokens| tokens.join(" "))
}

fn mixed_fragments() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(mixed_fragment(), 0..5)
}

/// The tokens that pass both gates, in input order.
fn surviving(fragments: &[String]) -> Vec<&str> {
    fragments
        .iter()
        .filter(|f| check_fragment(f).is_ok())
        .flat_map(|f| f.split_whitespace())
        .filter(|t| is_safe(t))
        .collect()
}

fn flatten(fragments: &[String]) -> Vec<&str> {
    fragments.iter().flat_map(|f| f.split_whitespace()).collect()
}

proptest! {
    #[test]
    fn merge_is_idempotent(input in fragments()) {
        let once = merge(&input);
        let twice = merge([once.as_str()]);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn output_is_an_ordered_subsequence_of_input(input in fragments()) {
        let out = merge(&input);
        let mut remaining = flatten(&input).into_iter();
        for token in out.split(' ').filter(|t| !t.is_empty()) {
            prop_assert!(
                remaining.any(|candidate| candidate == token),
                "{} out of order in {:?}", token, out
            );
        }
    }

    #[test]
    fn only_the_last_of_each_group_survives(input in fragments()) {
        let tokens = flatten(&input);
        let out = merge(&input);
        let survivors: Vec<&str> = out.split(' ').filter(|t| !t.is_empty()).collect();

        let mut seen = HashSet::new();
        for token in &survivors {
            if let Some(key) = classify(token).group {
                prop_assert!(seen.insert(key), "{} duplicated a group in {:?}", token, out);
            }
        }

        let input_groups: HashSet<_> = tokens.iter().filter_map(|t| classify(t).group).collect();
        prop_assert_eq!(&seen, &input_groups);

        for key in &input_groups {
            let last = tokens.iter().rev().find(|t| classify(t).group.as_ref() == Some(key));
            let kept = survivors.iter().find(|t| classify(t).group.as_ref() == Some(key));
            prop_assert_eq!(last, kept);
        }
    }

    #[test]
    fn custom_classes_are_never_removed(input in fragments()) {
        let tokens = flatten(&input);
        let out = merge(&input);
        let custom_in: Vec<&str> = tokens.into_iter().filter(|t| classify(t).is_custom()).collect();
        let custom_out: Vec<&str> = out
            .split(' ')
            .filter(|t| !t.is_empty() && classify(t).is_custom())
            .collect();
        prop_assert_eq!(custom_out, custom_in);
    }

    #[test]
    fn mixed_merge_is_idempotent(input in mixed_fragments()) {
        let once = merge(&input);
        let twice = merge([once.as_str()]);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn mixed_output_is_safe_and_ordered(input in mixed_fragments()) {
        let out = merge(&input);
        let mut remaining = surviving(&input).into_iter();
        for token in out.split(' ').filter(|t| !t.is_empty()) {
            prop_assert!(is_safe(token), "{} is unsafe in {:?}", token, out);
            prop_assert!(
                remaining.any(|candidate| candidate == token),
                "{} out of order in {:?}", token, out
            );
        }
    }

    #[test]
    fn mixed_merge_equals_merge_of_survivors(input in mixed_fragments()) {
        let kept = surviving(&input);
        prop_assert_eq!(merge(&input), merge([kept.join(" ")]));
    }

    #[test]
    fn forbidden_words_never_survive(
        input in fragments(),
        word in prop::sample::select(FORBIDDEN),
        upper in any::<bool>(),
        slot in 0usize..6
    ) {
        let mut input = input;
        let word = if upper { word.to_uppercase() } else { word.to_string() };
        let position = slot.min(input.len());
        input.insert(position, format!("bg-[{word}x] p-1"));

        let out = merge(&input).to_ascii_lowercase();
        for forbidden in FORBIDDEN {
            prop_assert!(!out.contains(forbidden), "{:?} leaked into {:?}", forbidden, out);
        }
    }
}
