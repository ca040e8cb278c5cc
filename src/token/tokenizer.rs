//! logos-based class-list tokenizer.
//!
//! A class attribute is nothing more than whitespace-separated words, so the
//! lexer has a single token kind: a maximal run of non-whitespace characters.
//! Anything that is not ASCII whitespace ends up inside a [`Lexeme::Class`];
//! it is the validator's job to decide whether the run is acceptable.

use logos::{Logos, SpannedIter};

/// Lexeme produced by the class-list lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\n\r\f\x0B]+")]
pub enum Lexeme {
    /// One atomic class name, e.g. `hover:bg-red-500` or `w-[calc(100%-2rem)]`.
    #[regex(r"[^ \t\n\r\f\x0B]+")]
    Class,
}

/// An atomic class token and its position in the flattened input.
///
/// Positions are global across every fragment passed to a single merge call,
/// so a token from a later fragment always has a higher index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassToken<'a> {
    pub text: &'a str,
    pub index: usize,
}

/// Flatten an ordered list of fragments into one indexed token stream.
///
/// `start` is the index assigned to the first token produced; the returned
/// iterator numbers tokens consecutively from there.
pub struct Flatten<'a, I> {
    fragments: I,
    current: Option<(&'a str, SpannedIter<'a, Lexeme>)>,
    next_index: usize,
}

impl<'a, I> Flatten<'a, I>
where
    I: Iterator<Item = &'a str>,
{
    pub fn new(fragments: I, start: usize) -> Self {
        Self {
            fragments,
            current: None,
            next_index: start,
        }
    }

    /// Index that the next produced token will receive.
    pub fn next_index(&self) -> usize {
        self.next_index
    }
}

impl<'a, I> Iterator for Flatten<'a, I>
where
    I: Iterator<Item = &'a str>,
{
    type Item = ClassToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((fragment, lexer)) = self.current.as_mut() {
                let fragment: &'a str = *fragment;
                for (result, span) in lexer.by_ref() {
                    if result.is_ok() {
                        let index = self.next_index;
                        self.next_index += 1;
                        return Some(ClassToken {
                            text: &fragment[span],
                            index,
                        });
                    }
                }
            }
            let fragment = self.fragments.next()?;
            self.current = Some((fragment, Lexeme::lexer(fragment).spanned()));
        }
    }
}

/// Tokenize an ordered list of fragments into indexed class tokens.
pub fn tokenize<'a, I>(fragments: I) -> Vec<ClassToken<'a>>
where
    I: IntoIterator<Item = &'a str>,
{
    Flatten::new(fragments.into_iter(), 0).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: tokenize and return just the text.
    fn words(fragments: &[&str]) -> Vec<String> {
        tokenize(fragments.iter().copied())
            .into_iter()
            .map(|t| t.text.to_string())
            .collect()
    }

    #[test]
    fn test_single_fragment() {
        assert_eq!(words(&["flex p-4 text-sm"]), vec!["flex", "p-4", "text-sm"]);
    }

    #[test]
    fn test_mixed_whitespace_is_skipped() {
        assert_eq!(
            words(&["  flex\tp-4\n\r text-sm \x0B"]),
            vec!["flex", "p-4", "text-sm"]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(words(&[]).is_empty());
        assert!(words(&[""]).is_empty());
        assert!(words(&["   \t\n  "]).is_empty());
    }

    #[test]
    fn test_indices_are_global_across_fragments() {
        let tokens = tokenize(["flex p-2", "", "p-4 hover:underline"]);
        let pairs: Vec<(&str, usize)> = tokens.iter().map(|t| (t.text, t.index)).collect();
        assert_eq!(
            pairs,
            vec![("flex", 0), ("p-2", 1), ("p-4", 2), ("hover:underline", 3)]
        );
    }

    #[test]
    fn test_arbitrary_values_stay_whole() {
        assert_eq!(
            words(&["[&>svg]:absolute w-[calc(100%-2rem)] data-[state=open]:block"]),
            vec!["[&>svg]:absolute", "w-[calc(100%-2rem)]", "data-[state=open]:block"]
        );
    }

    #[test]
    fn test_non_ascii_is_kept_for_validator() {
        assert_eq!(words(&["p-2 ünïcode"]), vec!["p-2", "ünïcode"]);
    }

    #[test]
    fn test_flatten_start_offset() {
        let mut flat = Flatten::new(["a b"].into_iter(), 10);
        assert_eq!(flat.next_index(), 10);
        assert_eq!(flat.next(), Some(ClassToken { text: "a", index: 10 }));
        assert_eq!(flat.next(), Some(ClassToken { text: "b", index: 11 }));
        assert_eq!(flat.next(), None);
        assert_eq!(flat.next_index(), 12);
    }
}
