//! Character-class counting shared by the URL, host and subdomain features.
//!
//! A digit is any Unicode decimal digit (`\d`), not only ASCII `0-9`. Lengths
//! and counts are in characters, not bytes.

use regex::Regex;
use std::sync::LazyLock;

use crate::config::SPECIAL_CHARACTERS;

const DIGIT_PATTERN: &str = r"\d";

/// Helper function to safely compile a regex pattern, panicking with a detailed error message
/// if compilation fails. Used for static regex patterns that are compile-time constants.
fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

static DIGIT_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(DIGIT_PATTERN, "DIGIT_RE"));

/// Length in characters.
pub fn char_length(s: &str) -> usize {
    s.chars().count()
}

/// Occurrences of `c`.
pub fn count_char(s: &str, c: char) -> usize {
    s.matches(c).count()
}

/// Number of digit characters.
pub fn count_digits(s: &str) -> usize {
    DIGIT_RE.find_iter(s).count()
}

/// Whether `s` contains a digit.
pub fn has_digit(s: &str) -> bool {
    DIGIT_RE.is_match(s)
}

/// Whether some digit is immediately followed by the same digit (`11`, `٣٣`).
pub fn has_repeated_digits(s: &str) -> bool {
    let mut previous: Option<regex::Match<'_>> = None;
    for current in DIGIT_RE.find_iter(s) {
        if let Some(prev) = previous {
            if prev.end() == current.start() && prev.as_str() == current.as_str() {
                return true;
            }
        }
        previous = Some(current);
    }
    false
}

fn is_special(c: char) -> bool {
    SPECIAL_CHARACTERS.contains(&c)
}

/// Number of characters from `@#$%&-`.
pub fn count_special(s: &str) -> usize {
    s.chars().filter(|&c| is_special(c)).count()
}

/// Whether `s` contains any of `@#$%&-`.
pub fn has_special(s: &str) -> bool {
    s.chars().any(is_special)
}
