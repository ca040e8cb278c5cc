//! Safety validation for class fragments and atomic class tokens.
//!
//! Class strings reach the merger from component code and from callers, and
//! the result is written verbatim into markup. Anything that could smuggle
//! script or markup into the class attribute is rejected here, before any
//! classification happens. Rejections are values, never panics: the merge
//! engine drops the offending input and carries on.

/// Default upper bound on the byte length of one atomic class.
pub const MAX_TOKEN_LEN: usize = 200;

/// Substrings that are never allowed, matched ASCII case-insensitively.
const FORBIDDEN: [&str; 4] = ["expression", "javascript", "url(", "import"];

/// Why an input was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("class is empty or whitespace-only")]
    Empty,
    #[error("class is {len} bytes long, limit is {max}")]
    TooLong { len: usize, max: usize },
    #[error("contains forbidden pattern `{0}`")]
    Forbidden(&'static str),
    #[error("disallowed character {0:?}")]
    DisallowedChar(char),
}

/// Characters admitted inside a class name.
///
/// Wide enough for arbitrary-value syntax such as `w-1/2`,
/// `data-[state=open]:block`, `[&>svg]:absolute` and
/// `transition-[color,box-shadow]`.
pub fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '_' | '-'
                | ':'
                | '/'
                | '.'
                | '['
                | ']'
                | '('
                | ')'
                | '%'
                | '!'
                | '@'
                | '#'
                | '&'
                | '>'
                | '+'
                | '~'
                | '='
                | ','
                | ' '
        )
}

fn contains_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    let needle = needle.as_bytes();
    haystack.len() >= needle.len()
        && haystack
            .as_bytes()
            .windows(needle.len())
            .any(|window| window.eq_ignore_ascii_case(needle))
}

fn check_forbidden(input: &str) -> Result<(), Rejection> {
    match FORBIDDEN
        .iter()
        .find(|pattern| contains_ignore_ascii_case(input, pattern))
    {
        Some(pattern) => Err(Rejection::Forbidden(*pattern)),
        None => Ok(()),
    }
}

/// Validate one atomic class token.
///
/// Checks, in order: emptiness, length against `max_len`, forbidden
/// patterns, and the character allow-list.
pub fn check_token(token: &str, max_len: usize) -> Result<(), Rejection> {
    if token.trim().is_empty() {
        return Err(Rejection::Empty);
    }
    if token.len() > max_len {
        return Err(Rejection::TooLong {
            len: token.len(),
            max: max_len,
        });
    }
    check_forbidden(token)?;
    match token.chars().find(|&c| !is_allowed_char(c)) {
        Some(c) => Err(Rejection::DisallowedChar(c)),
        None => Ok(()),
    }
}

/// Validate a whole fragment before it is split into tokens.
///
/// A fragment is rejected as a unit, so markup such as
/// `<img src=x onerror=alert(1)>` cannot leak its harmless-looking words
/// (`src=x`) through as classes. The valid words sharing a fragment with a
/// rejected one are lost with it: `"p-4 café-theme"` contributes nothing.
/// Any ASCII whitespace is accepted as a
/// separator and there is no length limit at this level; an empty fragment is
/// fine and simply contributes nothing.
pub fn check_fragment(fragment: &str) -> Result<(), Rejection> {
    check_forbidden(fragment)?;
    match fragment
        .chars()
        .find(|&c| !(is_allowed_char(c) || c.is_ascii_whitespace() || c == '\x0B'))
    {
        Some(c) => Err(Rejection::DisallowedChar(c)),
        None => Ok(()),
    }
}

/// `true` if `token` passes [`check_token`] with the default length limit.
pub fn is_safe(token: &str) -> bool {
    check_token(token, MAX_TOKEN_LEN).is_ok()
}
