//! Per-feature extractors and the vector assembler.

use log::debug;

use super::charset::{
    char_length, count_char, count_digits, count_special, has_digit, has_repeated_digits,
    has_special,
};
use super::entropy::shannon_entropy;
use super::names::{FeatureName, FEATURE_ORDER};
use super::subdomain;
use super::vector::{FeatureValue, FeatureVector};
use crate::domain::{number_of_subdomains, subdomains};
use crate::error_handling::FeatureError;
use crate::parse::{parse_url, ParsedUrl};

/// Everything the extractors read, derived once per URL.
#[derive(Debug)]
pub struct ExtractionContext<'a> {
    /// The URL exactly as supplied
    pub url: &'a str,
    /// Split components of `url`
    pub parsed: &'a ParsedUrl,
    /// Authority without port
    pub host: &'a str,
    /// Host labels before the last two
    pub subdomains: Vec<&'a str>,
}

impl<'a> ExtractionContext<'a> {
    /// Derives host and subdomains from an already parsed URL.
    pub fn new(url: &'a str, parsed: &'a ParsedUrl) -> Self {
        let host = parsed.host();
        Self {
            url,
            parsed,
            host,
            subdomains: subdomains(host),
        }
    }
}

impl FeatureName {
    /// Computes this feature for one URL.
    ///
    /// Total: every input yields a value.
    pub fn extract(self, ctx: &ExtractionContext<'_>) -> FeatureValue {
        use FeatureName::*;

        let url = ctx.url;
        let host = ctx.host;
        let subs = ctx.subdomains.as_slice();
        let parsed = ctx.parsed;

        match self {
            UrlLength => char_length(url).into(),
            NumberOfDotsInUrl => count_char(url, '.').into(),
            HavingRepeatedDigitsInUrl => has_repeated_digits(url).into(),
            NumberOfDigitsInUrl => count_digits(url).into(),
            NumberOfSpecialCharInUrl => count_special(url).into(),
            NumberOfHyphensInUrl => count_char(url, '-').into(),
            NumberOfUnderlineInUrl => count_char(url, '_').into(),
            NumberOfSlashInUrl => (count_char(url, '/') + count_char(url, '\\')).into(),
            NumberOfQuestionmarkInUrl => count_char(url, '?').into(),
            NumberOfEqualInUrl => count_char(url, '=').into(),
            NumberOfAtInUrl => count_char(url, '@').into(),
            NumberOfDollarInUrl => count_char(url, '$').into(),
            NumberOfExclamationInUrl => count_char(url, '!').into(),
            NumberOfHashtagInUrl => count_char(url, '#').into(),
            NumberOfPercentInUrl => count_char(url, '%').into(),

            DomainLength => char_length(host).into(),
            NumberOfDotsInDomain => count_char(host, '.').into(),
            NumberOfHyphensInDomain => host.contains('-').into(),
            HavingSpecialCharactersInDomain => has_special(host).into(),
            NumberOfSpecialCharactersInDomain => count_special(host).into(),
            HavingDigitsInDomain => has_digit(host).into(),
            NumberOfDigitsInDomain => count_digits(host).into(),
            HavingRepeatedDigitsInDomain => has_repeated_digits(host).into(),

            NumberOfSubdomains => number_of_subdomains(host).into(),
            HavingDotInSubdomain => subdomain::any_contains(subs, '.').into(),
            HavingHyphenInSubdomain => subdomain::any_contains(subs, '-').into(),
            AverageSubdomainLength => subdomain::average_length(subs).into(),
            AverageNumberOfDotsInSubdomain => subdomain::average_count(subs, '.').into(),
            AverageNumberOfHyphensInSubdomain => subdomain::average_count(subs, '-').into(),
            HavingSpecialCharactersInSubdomain => subdomain::any_special(subs).into(),
            NumberOfSpecialCharactersInSubdomain => subdomain::total_special(subs).into(),
            HavingDigitsInSubdomain => subdomain::any_digit(subs).into(),
            NumberOfDigitsInSubdomain => subdomain::total_digits(subs).into(),
            HavingRepeatedDigitsInSubdomain => subdomain::any_repeated_digits(subs).into(),

            HavingPath => (!parsed.path.is_empty()).into(),
            PathLength => char_length(&parsed.path).into(),
            HavingQuery => (!parsed.query.is_empty()).into(),
            HavingFragment => (!parsed.fragment.is_empty()).into(),
            // The fragment is everything after the first `#`, so this only
            // fires when a second `#` follows.
            HavingAnchor => parsed.fragment.contains('#').into(),

            EntropyOfUrl => shannon_entropy(url).into(),
            EntropyOfDomain => shannon_entropy(host).into(),
        }
    }
}

/// Extracts the full feature vector for a URL.
///
/// Parses the URL once, then runs every extractor once in [`FEATURE_ORDER`].
/// Never fails: malformed URLs produce zero-valued features rather than errors.
///
/// # Example
///
/// ```
/// use url_features::{extract_features, FeatureName, FeatureValue};
///
/// let features = extract_features("https://www.example.com:8080/login?user=abc#section");
/// assert_eq!(features.get(FeatureName::DomainLength), FeatureValue::Int(15));
/// assert_eq!(features.get(FeatureName::NumberOfSubdomains), FeatureValue::Int(1));
/// assert_eq!(features.get(FeatureName::HavingQuery), FeatureValue::Bool(true));
/// ```
pub fn extract_features(url: &str) -> FeatureVector {
    let parsed = parse_url(url);
    let ctx = ExtractionContext::new(url, &parsed);
    let values = FEATURE_ORDER.map(|name| name.extract(&ctx));
    debug!(
        "Extracted {} features for {:?} (host {:?}, {} subdomains)",
        values.len(),
        url,
        ctx.host,
        ctx.subdomains.len()
    );
    FeatureVector::new(values)
}

/// Interprets raw bytes as URL text.
///
/// # Errors
///
/// Returns `FeatureError::InvalidInput` if `input` is not valid UTF-8.
pub fn decode_url(input: &[u8]) -> Result<&str, FeatureError> {
    std::str::from_utf8(input)
        .map_err(|e| FeatureError::InvalidInput(format!("URL is not valid UTF-8: {e}")))
}

/// Extracts features from raw bytes.
///
/// # Errors
///
/// Returns `FeatureError::InvalidInput` if `input` is not valid UTF-8.
pub fn try_extract_features(input: &[u8]) -> Result<FeatureVector, FeatureError> {
    decode_url(input).map(extract_features)
}
