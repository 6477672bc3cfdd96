// Feature module tests.

use super::*;
use crate::config::FEATURE_COUNT;
use proptest::prelude::*;
use strum::IntoEnumIterator;
use FeatureValue::{Bool, Float, Int};

const CONTRACT_NAMES: [&str; FEATURE_COUNT] = [
    "url_length",
    "number_of_dots_in_url",
    "having_repeated_digits_in_url",
    "number_of_digits_in_url",
    "number_of_special_char_in_url",
    "number_of_hyphens_in_url",
    "number_of_underline_in_url",
    "number_of_slash_in_url",
    "number_of_questionmark_in_url",
    "number_of_equal_in_url",
    "number_of_at_in_url",
    "number_of_dollar_in_url",
    "number_of_exclamation_in_url",
    "number_of_hashtag_in_url",
    "number_of_percent_in_url",
    "domain_length",
    "number_of_dots_in_domain",
    "number_of_hyphens_in_domain",
    "having_special_characters_in_domain",
    "number_of_special_characters_in_domain",
    "having_digits_in_domain",
    "number_of_digits_in_domain",
    "having_repeated_digits_in_domain",
    "number_of_subdomains",
    "having_dot_in_subdomain",
    "having_hyphen_in_subdomain",
    "average_subdomain_length",
    "average_number_of_dots_in_subdomain",
    "average_number_of_hyphens_in_subdomain",
    "having_special_characters_in_subdomain",
    "number_of_special_characters_in_subdomain",
    "having_digits_in_subdomain",
    "number_of_digits_in_subdomain",
    "having_repeated_digits_in_subdomain",
    "having_path",
    "path_length",
    "having_query",
    "having_fragment",
    "having_anchor",
    "entropy_of_url",
    "entropy_of_domain",
];

fn assert_close(actual: FeatureValue, expected: f64) {
    match actual {
        Float(x) => assert!(
            (x - expected).abs() < 1e-9,
            "expected {expected}, got {x}"
        ),
        other => panic!("expected a float feature, got {other:?}"),
    }
}

#[test]
fn test_feature_order_matches_contract() {
    let names: Vec<&str> = FEATURE_ORDER.iter().map(|n| n.as_str()).collect();
    assert_eq!(names, CONTRACT_NAMES);
}

#[test]
fn test_feature_order_matches_declaration_order() {
    let declared: Vec<FeatureName> = FeatureName::iter().collect();
    assert_eq!(declared, FEATURE_ORDER.to_vec());
    for (i, name) in FEATURE_ORDER.iter().enumerate() {
        assert_eq!(name.index(), i);
    }
}

#[test]
fn test_feature_name_round_trips_through_str() {
    for name in FEATURE_ORDER {
        assert_eq!(name.as_str().parse::<FeatureName>().unwrap(), name);
        assert_eq!(name.to_string(), name.as_str());
    }
    assert!("not_a_feature".parse::<FeatureName>().is_err());
}

#[test]
fn test_feature_kind_counts() {
    let count = |kind| FEATURE_ORDER.iter().filter(|n| n.kind() == kind).count();
    assert_eq!(count(FeatureKind::Int), 22);
    assert_eq!(count(FeatureKind::Bool), 14);
    assert_eq!(count(FeatureKind::Float), 5);
}

#[test]
fn test_empty_url_is_all_zero() {
    let features = extract_features("");
    assert_eq!(features.len(), FEATURE_COUNT);
    for (name, value) in features.iter() {
        match value {
            Int(n) => assert_eq!(n, 0, "{name}"),
            Bool(b) => assert!(!b, "{name}"),
            Float(x) => assert_eq!(x, 0.0, "{name}"),
        }
    }
}

#[test]
fn test_values_match_declared_kind() {
    let features = extract_features("http://a--1.b-c.example.com/x?y#z");
    for (name, value) in features.iter() {
        let kind = match value {
            Int(_) => FeatureKind::Int,
            Bool(_) => FeatureKind::Bool,
            Float(_) => FeatureKind::Float,
        };
        assert_eq!(kind, name.kind(), "{name}");
    }
}

#[test]
fn test_scenario_login_url() {
    let f = extract_features("https://www.example.com:8080/login?user=abc#section");
    assert_eq!(f.get(FeatureName::UrlLength), Int(51));
    assert_eq!(f.get(FeatureName::DomainLength), Int(15));
    assert_eq!(f.get(FeatureName::NumberOfDotsInDomain), Int(2));
    assert_eq!(f.get(FeatureName::NumberOfSubdomains), Int(1));
    assert_eq!(f.get(FeatureName::AverageSubdomainLength), Float(3.0));
    assert_eq!(f.get(FeatureName::HavingPath), Bool(true));
    assert_eq!(f.get(FeatureName::PathLength), Int(6));
    assert_eq!(f.get(FeatureName::HavingQuery), Bool(true));
    assert_eq!(f.get(FeatureName::HavingFragment), Bool(true));
    assert_eq!(f.get(FeatureName::HavingAnchor), Bool(false));
    assert_eq!(f.get(FeatureName::NumberOfQuestionmarkInUrl), Int(1));
    assert_eq!(f.get(FeatureName::NumberOfEqualInUrl), Int(1));
    assert_eq!(f.get(FeatureName::NumberOfDigitsInUrl), Int(4));
    assert_eq!(f.get(FeatureName::NumberOfSlashInUrl), Int(3));
    // Port digits do not count toward the host
    assert_eq!(f.get(FeatureName::HavingDigitsInDomain), Bool(false));
    assert_close(f.get(FeatureName::EntropyOfUrl), 4.564007204462068);
    assert_close(f.get(FeatureName::EntropyOfDomain), 3.1898980954642875);
}

#[test]
fn test_scenario_hyphenated_subdomains() {
    let f = extract_features("http://a--1.b-c.example.com");
    assert_eq!(f.get(FeatureName::NumberOfSubdomains), Int(2));
    assert_eq!(f.get(FeatureName::HavingHyphenInSubdomain), Bool(true));
    assert_eq!(f.get(FeatureName::HavingDigitsInSubdomain), Bool(true));
    assert_eq!(f.get(FeatureName::HavingRepeatedDigitsInSubdomain), Bool(false));
    assert_eq!(f.get(FeatureName::AverageSubdomainLength), Float(3.5));
    assert_eq!(f.get(FeatureName::AverageNumberOfHyphensInSubdomain), Float(1.5));
    assert_eq!(f.get(FeatureName::NumberOfSpecialCharactersInSubdomain), Int(3));
    assert_eq!(f.get(FeatureName::NumberOfHyphensInDomain), Bool(true));
    assert_eq!(f.get(FeatureName::NumberOfSpecialCharactersInDomain), Int(3));
    assert_eq!(f.get(FeatureName::HavingPath), Bool(false));
}

#[test]
fn test_scenario_single_label_host() {
    let f = extract_features("http://localhost/");
    assert_eq!(f.get(FeatureName::DomainLength), Int(9));
    assert_eq!(f.get(FeatureName::NumberOfDotsInDomain), Int(0));
    assert_eq!(f.get(FeatureName::NumberOfSubdomains), Int(0));
    assert_eq!(f.get(FeatureName::AverageSubdomainLength), Float(0.0));
    assert_eq!(f.get(FeatureName::PathLength), Int(1));
}

#[test]
fn test_golden_phishing_url() {
    let f = extract_features(
        "http://secure-login.paypa1.com.verify-account.xyz/update.php?id=1122&session=$$%20#a#b",
    );
    let expected = [
        Int(86),
        Int(5),
        Bool(true),
        Int(7),
        Int(8),
        Int(2),
        Int(0),
        Int(3),
        Int(1),
        Int(2),
        Int(0),
        Int(2),
        Int(0),
        Int(2),
        Int(1),
        Int(42),
        Int(4),
        Bool(true),
        Bool(true),
        Int(2),
        Bool(true),
        Int(1),
        Bool(false),
        Int(3),
        Bool(false),
        Bool(true),
        Float(7.0),
        Float(0.0),
        Float(1.0 / 3.0),
        Bool(true),
        Int(1),
        Bool(true),
        Int(1),
        Bool(false),
        Bool(true),
        Int(11),
        Bool(true),
        Bool(true),
        Bool(true),
    ];
    for (i, want) in expected.iter().enumerate() {
        assert_eq!(f.values()[i], *want, "{}", FEATURE_ORDER[i]);
    }
    assert_close(f.get(FeatureName::EntropyOfUrl), 4.881287761206537);
    assert_close(f.get(FeatureName::EntropyOfDomain), 4.272804327334621);
}

#[test]
fn test_ip_host_and_backslashes() {
    let f = extract_features("http://192.168.11.5/wp_admin/!login\\x");
    assert_eq!(f.get(FeatureName::NumberOfSlashInUrl), Int(5));
    assert_eq!(f.get(FeatureName::NumberOfUnderlineInUrl), Int(1));
    assert_eq!(f.get(FeatureName::NumberOfExclamationInUrl), Int(1));
    assert_eq!(f.get(FeatureName::NumberOfDigitsInDomain), Int(9));
    assert_eq!(f.get(FeatureName::HavingRepeatedDigitsInDomain), Bool(true));
    assert_eq!(f.get(FeatureName::NumberOfSubdomains), Int(2));
    assert_eq!(f.get(FeatureName::NumberOfDigitsInSubdomain), Int(6));
    assert_eq!(f.get(FeatureName::HavingRepeatedDigitsInSubdomain), Bool(false));
    assert_eq!(f.get(FeatureName::PathLength), Int(18));
}

#[test]
fn test_anchor_needs_second_hash() {
    let f = extract_features("http://example.com/#section");
    assert_eq!(f.get(FeatureName::HavingFragment), Bool(true));
    assert_eq!(f.get(FeatureName::HavingAnchor), Bool(false));

    let f = extract_features("http://example.com/#a#b");
    assert_eq!(f.get(FeatureName::HavingAnchor), Bool(true));
    assert_eq!(f.get(FeatureName::NumberOfHashtagInUrl), Int(2));
}

#[test]
fn test_missing_scheme_has_no_host() {
    let f = extract_features("www.example.com/login");
    assert_eq!(f.get(FeatureName::DomainLength), Int(0));
    assert_eq!(f.get(FeatureName::PathLength), Int(21));
    assert_eq!(f.get(FeatureName::EntropyOfDomain), Float(0.0));
}

#[test]
fn test_whole_url_features_use_raw_input() {
    // Tabs and leading spaces are stripped for parsing but still counted
    let f = extract_features("  http://exa\tmple.com");
    assert_eq!(f.get(FeatureName::UrlLength), Int(21));
    assert_eq!(f.get(FeatureName::DomainLength), Int(11));
}

#[test]
fn test_params_excluded_from_path() {
    let f = extract_features("http://example.com/index.php;jsessionid=1");
    assert_eq!(f.get(FeatureName::PathLength), Int(10));
}

#[test]
fn test_numeric_row() {
    let f = extract_features("http://a--1.b-c.example.com");
    let row = f.to_numeric_row();
    assert_eq!(row.len(), FEATURE_COUNT);
    assert_eq!(row[FeatureName::UrlLength.index()], 27.0);
    assert_eq!(row[FeatureName::HavingHyphenInSubdomain.index()], 1.0);
    assert_eq!(row[FeatureName::HavingPath.index()], 0.0);
    assert_eq!(row[FeatureName::AverageSubdomainLength.index()], 3.5);
}

#[test]
fn test_json_keeps_contract_order() {
    let f = extract_features("http://localhost/");
    let json = serde_json::to_string(&f).unwrap();
    let mut last = 0;
    for name in CONTRACT_NAMES {
        let pos = json
            .find(&format!("\"{name}\":"))
            .unwrap_or_else(|| panic!("missing {name}"));
        assert!(pos >= last, "{name} out of order");
        last = pos;
    }
    assert!(json.starts_with("{\"url_length\":17,"));
    assert!(json.contains("\"having_path\":true"));
    assert!(json.contains("\"average_subdomain_length\":0.0"));
}

#[test]
fn test_try_extract_features_rejects_invalid_utf8() {
    let err = try_extract_features(&[0x68, 0x74, 0xff, 0xfe]).unwrap_err();
    assert!(matches!(err, crate::FeatureError::InvalidInput(_)));
}

#[test]
fn test_try_extract_features_accepts_text() {
    let f = try_extract_features(b"http://localhost/").unwrap();
    assert_eq!(f, extract_features("http://localhost/"));
}

#[test]
fn test_feature_value_display() {
    assert_eq!(Int(3).to_string(), "3");
    assert_eq!(Bool(true).to_string(), "true");
    assert_eq!(Float(1.5).to_string(), "1.5");
    assert_eq!(Float(0.0).to_string(), "0");
}

proptest! {
    #[test]
    fn test_cardinality_is_fixed(url in "\\PC{0,120}") {
        prop_assert_eq!(extract_features(&url).len(), FEATURE_COUNT);
    }

    #[test]
    fn test_extraction_is_idempotent(url in "\\PC{0,120}") {
        let first = serde_json::to_string(&extract_features(&url)).unwrap();
        let second = serde_json::to_string(&extract_features(&url)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_no_subdomains_means_zero_averages(
        scheme in "(http|https|ftp)",
        name in "[a-z0-9-]{1,20}",
        tld in "(\\.[a-z]{2,6})?",
        path in "(/[a-z]{0,10})?"
    ) {
        let url = format!("{}://{}{}{}", scheme, name, tld, path);
        let f = extract_features(&url);
        prop_assert_eq!(f.get(FeatureName::NumberOfSubdomains), Int(0));
        prop_assert_eq!(f.get(FeatureName::AverageSubdomainLength), Float(0.0));
        prop_assert_eq!(f.get(FeatureName::AverageNumberOfDotsInSubdomain), Float(0.0));
        prop_assert_eq!(f.get(FeatureName::AverageNumberOfHyphensInSubdomain), Float(0.0));
    }

    #[test]
    fn test_dot_in_subdomain_never_set_by_parsing(url in "\\PC{0,120}") {
        prop_assert_eq!(extract_features(&url).get(FeatureName::HavingDotInSubdomain), Bool(false));
    }

    #[test]
    fn test_entropy_is_finite(url in "\\PC{0,120}") {
        let f = extract_features(&url);
        for name in [FeatureName::EntropyOfUrl, FeatureName::EntropyOfDomain] {
            prop_assert!(f.get(name).as_f64().is_finite());
            prop_assert!(f.get(name).as_f64() >= 0.0);
        }
    }
}
