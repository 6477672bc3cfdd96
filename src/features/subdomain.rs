//! Aggregates over subdomain labels.
//!
//! Means over an empty label list are `0.0`; counts and flags are `0` and
//! `false`.

use super::charset::{char_length, count_char, count_digits, count_special, has_digit};
use super::charset::{has_repeated_digits, has_special};

fn mean<I>(values: I) -> f64
where
    I: ExactSizeIterator<Item = usize>,
{
    let n = values.len();
    if n == 0 {
        return 0.0;
    }
    values.sum::<usize>() as f64 / n as f64
}

/// Whether any label contains `c`.
///
/// Labels come from splitting on `.`, so `any_contains(labels, '.')` is
/// always `false` in practice. It is still computed rather than assumed.
pub fn any_contains(labels: &[&str], c: char) -> bool {
    labels.iter().any(|label| label.contains(c))
}

/// Mean label length in characters.
pub fn average_length(labels: &[&str]) -> f64 {
    mean(labels.iter().map(|label| char_length(label)))
}

/// Mean number of `c` per label.
pub fn average_count(labels: &[&str], c: char) -> f64 {
    mean(labels.iter().map(|label| count_char(label, c)))
}

/// Whether any label has a character from `@#$%&-`.
pub fn any_special(labels: &[&str]) -> bool {
    labels.iter().any(|label| has_special(label))
}

/// Characters from `@#$%&-` across all labels.
pub fn total_special(labels: &[&str]) -> usize {
    labels.iter().map(|label| count_special(label)).sum()
}

/// Whether any label contains a digit.
pub fn any_digit(labels: &[&str]) -> bool {
    labels.iter().any(|label| has_digit(label))
}

/// Digits across all labels.
pub fn total_digits(labels: &[&str]) -> usize {
    labels.iter().map(|label| count_digits(label)).sum()
}

/// Whether any single label has adjacent identical digits.
///
/// Digits are not compared across the `.` separating two labels.
pub fn any_repeated_digits(labels: &[&str]) -> bool {
    labels.iter().any(|label| has_repeated_digits(label))
}
