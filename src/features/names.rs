//! Feature names and their published order.

use strum_macros::{AsRefStr, Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

use crate::config::FEATURE_COUNT;

/// Semantic type of a feature value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureKind {
    /// Non-negative count or length
    Int,
    /// Presence flag
    Bool,
    /// Mean or entropy
    Float,
}

/// One column of the feature vector.
///
/// Variants are declared in column order. The string form is the snake_case
/// column name the classifier was trained with (e.g. `url_length`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    AsRefStr,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum FeatureName {
    // Whole URL
    /// Characters in the raw URL
    UrlLength,
    /// `.` in the raw URL
    NumberOfDotsInUrl,
    /// A digit immediately followed by the same digit
    HavingRepeatedDigitsInUrl,
    /// Digits in the raw URL
    NumberOfDigitsInUrl,
    /// Characters from `@#$%&-` in the raw URL
    NumberOfSpecialCharInUrl,
    /// `-` in the raw URL
    NumberOfHyphensInUrl,
    /// `_` in the raw URL
    NumberOfUnderlineInUrl,
    /// `/` plus `\` in the raw URL
    NumberOfSlashInUrl,
    /// `?` in the raw URL
    NumberOfQuestionmarkInUrl,
    /// `=` in the raw URL
    NumberOfEqualInUrl,
    /// `@` in the raw URL
    NumberOfAtInUrl,
    /// `$` in the raw URL
    NumberOfDollarInUrl,
    /// `!` in the raw URL
    NumberOfExclamationInUrl,
    /// `#` in the raw URL
    NumberOfHashtagInUrl,
    /// `%` in the raw URL
    NumberOfPercentInUrl,
    // Host
    /// Characters in the host
    DomainLength,
    /// `.` in the host
    NumberOfDotsInDomain,
    /// Whether the host contains `-` (a flag, despite the name)
    NumberOfHyphensInDomain,
    /// Whether the host contains any of `@#$%&-`
    HavingSpecialCharactersInDomain,
    /// Characters from `@#$%&-` in the host
    NumberOfSpecialCharactersInDomain,
    /// Whether the host contains a digit
    HavingDigitsInDomain,
    /// Digits in the host
    NumberOfDigitsInDomain,
    /// Adjacent identical digits in the host
    HavingRepeatedDigitsInDomain,
    // Subdomains
    /// Host labels before the last two
    NumberOfSubdomains,
    /// Whether any subdomain label contains `.`
    HavingDotInSubdomain,
    /// Whether any subdomain label contains `-`
    HavingHyphenInSubdomain,
    /// Mean subdomain label length
    AverageSubdomainLength,
    /// Mean `.` count per subdomain label
    AverageNumberOfDotsInSubdomain,
    /// Mean `-` count per subdomain label
    AverageNumberOfHyphensInSubdomain,
    /// Whether any subdomain label contains one of `@#$%&-`
    HavingSpecialCharactersInSubdomain,
    /// Characters from `@#$%&-` across subdomain labels
    NumberOfSpecialCharactersInSubdomain,
    /// Whether any subdomain label contains a digit
    HavingDigitsInSubdomain,
    /// Digits across subdomain labels
    NumberOfDigitsInSubdomain,
    /// Adjacent identical digits within a subdomain label
    HavingRepeatedDigitsInSubdomain,
    // Path, query, fragment
    /// Non-empty path
    HavingPath,
    /// Characters in the path
    PathLength,
    /// Non-empty query
    HavingQuery,
    /// Non-empty fragment
    HavingFragment,
    /// Literal `#` inside the fragment
    HavingAnchor,
    // Entropy
    /// Shannon entropy of the raw URL, in bits
    EntropyOfUrl,
    /// Shannon entropy of the host, in bits
    EntropyOfDomain,
}

/// Column order expected by the classifier.
///
/// This is a wire contract: reordering it silently corrupts every prediction.
pub const FEATURE_ORDER: [FeatureName; FEATURE_COUNT] = [
    FeatureName::UrlLength,
    FeatureName::NumberOfDotsInUrl,
    FeatureName::HavingRepeatedDigitsInUrl,
    FeatureName::NumberOfDigitsInUrl,
    FeatureName::NumberOfSpecialCharInUrl,
    FeatureName::NumberOfHyphensInUrl,
    FeatureName::NumberOfUnderlineInUrl,
    FeatureName::NumberOfSlashInUrl,
    FeatureName::NumberOfQuestionmarkInUrl,
    FeatureName::NumberOfEqualInUrl,
    FeatureName::NumberOfAtInUrl,
    FeatureName::NumberOfDollarInUrl,
    FeatureName::NumberOfExclamationInUrl,
    FeatureName::NumberOfHashtagInUrl,
    FeatureName::NumberOfPercentInUrl,
    FeatureName::DomainLength,
    FeatureName::NumberOfDotsInDomain,
    FeatureName::NumberOfHyphensInDomain,
    FeatureName::HavingSpecialCharactersInDomain,
    FeatureName::NumberOfSpecialCharactersInDomain,
    FeatureName::HavingDigitsInDomain,
    FeatureName::NumberOfDigitsInDomain,
    FeatureName::HavingRepeatedDigitsInDomain,
    FeatureName::NumberOfSubdomains,
    FeatureName::HavingDotInSubdomain,
    FeatureName::HavingHyphenInSubdomain,
    FeatureName::AverageSubdomainLength,
    FeatureName::AverageNumberOfDotsInSubdomain,
    FeatureName::AverageNumberOfHyphensInSubdomain,
    FeatureName::HavingSpecialCharactersInSubdomain,
    FeatureName::NumberOfSpecialCharactersInSubdomain,
    FeatureName::HavingDigitsInSubdomain,
    FeatureName::NumberOfDigitsInSubdomain,
    FeatureName::HavingRepeatedDigitsInSubdomain,
    FeatureName::HavingPath,
    FeatureName::PathLength,
    FeatureName::HavingQuery,
    FeatureName::HavingFragment,
    FeatureName::HavingAnchor,
    FeatureName::EntropyOfUrl,
    FeatureName::EntropyOfDomain,
];

const _: () = assert!(FEATURE_COUNT == <FeatureName as strum::EnumCount>::COUNT);

impl FeatureName {
    /// Column name, e.g. `number_of_dots_in_url`.
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Position of this feature in the vector.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Type of value this feature produces.
    pub fn kind(self) -> FeatureKind {
        use FeatureName::*;
        match self {
            AverageSubdomainLength
            | AverageNumberOfDotsInSubdomain
            | AverageNumberOfHyphensInSubdomain
            | EntropyOfUrl
            | EntropyOfDomain => FeatureKind::Float,
            HavingRepeatedDigitsInUrl
            | NumberOfHyphensInDomain
            | HavingSpecialCharactersInDomain
            | HavingDigitsInDomain
            | HavingRepeatedDigitsInDomain
            | HavingDotInSubdomain
            | HavingHyphenInSubdomain
            | HavingSpecialCharactersInSubdomain
            | HavingDigitsInSubdomain
            | HavingRepeatedDigitsInSubdomain
            | HavingPath
            | HavingQuery
            | HavingFragment
            | HavingAnchor => FeatureKind::Bool,
            _ => FeatureKind::Int,
        }
    }
}
