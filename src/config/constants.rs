//! Configuration constants.
//!
//! Feature-contract constants shared by the extractors, the classifier seam and
//! the batch runner.

/// Number of entries in every feature vector.
///
/// This is the width of the column-ordered row the downstream classifier was
/// trained on. Changing it requires retraining.
pub const FEATURE_COUNT: usize = 41;

/// Characters counted as "special" by the URL, domain and subdomain extractors.
pub const SPECIAL_CHARACTERS: [char; 6] = ['@', '#', '$', '%', '&', '-'];

/// Probability (in percent) at or above which a URL is classified as phishing.
pub const PHISHING_THRESHOLD_PERCENT: f64 = 70.0;

/// Number of trailing host labels treated as the registrable domain.
///
/// Everything before these labels is a subdomain. This heuristic does not know
/// about multi-label public suffixes such as `co.uk`.
pub const REGISTRABLE_LABELS: usize = 2;

/// URL schemes whose last path segment may carry `;params`.
pub const SCHEMES_WITH_PARAMS: &[&str] = &[
    "", "ftp", "hdl", "prospero", "http", "imap", "https", "shttp", "rtsp", "rtspu", "sip",
    "sips", "mms", "sftp", "tel",
];

/// Emit a progress line every this many URLs during batch extraction.
pub const LOGGING_INTERVAL: usize = 1000;
