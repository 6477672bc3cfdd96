//! Shannon entropy over character frequencies.

use std::collections::BTreeMap;

/// Shannon entropy of `text` in bits (base 2), over its character distribution.
///
/// Returns `0.0` for an empty string. Characters are tallied in a sorted map,
/// so any permutation of the same characters gives a bit-identical result.
pub fn shannon_entropy(text: &str) -> f64 {
    if text.is_empty() {
        return 0.0;
    }

    let mut counts: BTreeMap<char, usize> = BTreeMap::new();
    let mut total = 0usize;
    for c in text.chars() {
        *counts.entry(c).or_insert(0) += 1;
        total += 1;
    }

    let total = total as f64;
    counts.values().fold(0.0, |entropy, &count| {
        let p = count as f64 / total;
        entropy - p * p.log2()
    })
}
