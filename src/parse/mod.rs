//! Lenient URL splitting.
//!
//! URLs fed to the phishing classifier are adversarial and frequently malformed,
//! so this parser never rejects input. It splits a string into scheme,
//! authority, path, params, query and fragment the same way a non-strict
//! RFC 3986 splitter does:
//!
//! 1. `scheme:` if the text before the first `:` is a valid scheme
//! 2. `//authority` up to the first `/`, `?` or `#`
//! 3. `#fragment`, then `?query`
//! 4. `;params` on the last path segment, for schemes that use them
//!
//! Empty input yields a `ParsedUrl` whose fields are all empty.

use log::trace;

use crate::config::SCHEMES_WITH_PARAMS;

/// Components of a URL, split without validation.
///
/// Created once per input URL and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedUrl {
    /// Lowercased scheme, empty if none was recognized
    pub scheme: String,
    /// Authority (`host`, `host:port`, `user:pass@host:port`), empty if absent
    pub netloc: String,
    /// Path, excluding any `;params` suffix
    pub path: String,
    /// Parameters of the last path segment, without the leading `;`
    pub params: String,
    /// Query string without the leading `?`
    pub query: String,
    /// Fragment without the leading `#`
    pub fragment: String,
}

impl ParsedUrl {
    /// The authority with everything from its first `:` removed.
    ///
    /// For `www.example.com:8080` this is `www.example.com`. The cut happens at
    /// the first colon, so `user:pass@host` yields `user` and a bracketed IPv6
    /// literal yields `[`. Feature values depend on this exact behaviour.
    pub fn host(&self) -> &str {
        self.netloc
            .split_once(':')
            .map_or(self.netloc.as_str(), |(host, _)| host)
    }
}

/// Splits a URL into its components.
///
/// Leading control characters and spaces are dropped, as are tabs and line
/// breaks anywhere in the string. Never fails.
///
/// # Example
///
/// ```
/// use url_features::parse_url;
///
/// let parsed = parse_url("https://www.example.com:8080/login?user=abc#section");
/// assert_eq!(parsed.scheme, "https");
/// assert_eq!(parsed.netloc, "www.example.com:8080");
/// assert_eq!(parsed.host(), "www.example.com");
/// assert_eq!(parsed.path, "/login");
/// assert_eq!(parsed.query, "user=abc");
/// assert_eq!(parsed.fragment, "section");
/// ```
pub fn parse_url(url: &str) -> ParsedUrl {
    let cleaned: String = url
        .trim_start_matches(|c: char| c <= ' ')
        .chars()
        .filter(|c| !matches!(c, '\t' | '\r' | '\n'))
        .collect();

    let (scheme, rest) = split_scheme(&cleaned);
    let (netloc, rest) = split_netloc(rest);
    let (rest, fragment) = rest.split_once('#').unwrap_or((rest, ""));
    let (rest, query) = rest.split_once('?').unwrap_or((rest, ""));
    let (path, params) = if SCHEMES_WITH_PARAMS.contains(&scheme.as_str()) {
        split_params(rest)
    } else {
        (rest, "")
    };

    let parsed = ParsedUrl {
        scheme,
        netloc: netloc.to_string(),
        path: path.to_string(),
        params: params.to_string(),
        query: query.to_string(),
        fragment: fragment.to_string(),
    };
    trace!("Parsed {url:?} into {parsed:?}");
    parsed
}

fn is_scheme_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')
}

/// Returns the lowercased scheme and the remainder after its `:`.
fn split_scheme(url: &str) -> (String, &str) {
    if let Some((candidate, rest)) = url.split_once(':') {
        let starts_with_letter = candidate
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic());
        if starts_with_letter && candidate.chars().all(is_scheme_char) {
            return (candidate.to_ascii_lowercase(), rest);
        }
    }
    (String::new(), url)
}

/// Returns the authority and the remainder, if the input starts with `//`.
fn split_netloc(rest: &str) -> (&str, &str) {
    match rest.strip_prefix("//") {
        Some(after) => {
            let end = after.find(['/', '?', '#']).unwrap_or(after.len());
            after.split_at(end)
        }
        None => ("", rest),
    }
}

/// Splits `;params` off the last path segment.
fn split_params(path: &str) -> (&str, &str) {
    let segment_start = path.rfind('/').unwrap_or(0);
    match path[segment_start..].find(';') {
        Some(offset) => {
            let i = segment_start + offset;
            (&path[..i], &path[i + 1..])
        }
        None => (path, ""),
    }
}
