//! Host label splitting.
//!
//! Splits a host into its dot-separated labels and separates the subdomains
//! from the registrable part. The registrable part is always taken to be the
//! last two labels:
//!
//! - `www.example.com` → subdomains `["www"]`
//! - `a.b.example.com` → subdomains `["a", "b"]`
//! - `example.com`, `localhost`, `""` → no subdomains
//!
//! There is no Public Suffix List lookup, so `www.example.co.uk` reports
//! `www` and `example` as subdomains. The classifier was trained on features
//! computed this way.

use crate::config::REGISTRABLE_LABELS;

/// Splits a host on `.`, keeping empty labels.
pub fn host_labels(host: &str) -> Vec<&str> {
    host.split('.').collect()
}

/// Returns every label except the last two.
///
/// Empty when the host has two labels or fewer.
pub fn subdomains(host: &str) -> Vec<&str> {
    let mut labels = host_labels(host);
    labels.truncate(labels.len().saturating_sub(REGISTRABLE_LABELS));
    labels
}

/// Number of subdomain labels (0 when the host has two labels or fewer).
pub fn number_of_subdomains(host: &str) -> usize {
    host_labels(host).len().saturating_sub(REGISTRABLE_LABELS)
}
