//! Tests for the validation, conversion, formatting and codec helpers.

use textkit::convert::{strings_to_booleans, strings_to_doubles, strings_to_longs};
use textkit::number::format_number;
use textkit::validate::{check_length, is_blanks, is_double, is_integers};

// ============================================================================
// Validation and conversion
// ============================================================================

#[test]
fn test_validated_values_convert() {
    let values = ["12", " 34 ", "-56"];
    assert!(is_integers(&values));
    assert_eq!(strings_to_longs(&values).unwrap(), vec![12, 34, -56]);
}

#[test]
fn test_conversion_reports_first_failure() {
    let err = strings_to_doubles(&["1.0", "oops", "also bad"]).unwrap_err();
    assert_eq!(err.index, 1);
    assert_eq!(err.value, "oops");
    assert!(!is_double("oops"));
}

#[test]
fn test_booleans_never_fail() {
    assert_eq!(strings_to_booleans(&["TRUE", "nope"]), vec![true, false]);
}

#[test]
fn test_form_field_checks() {
    let fields = ["alice", "", "secret"];
    assert!(is_blanks(&fields));
    assert!(check_length("alice", 3, 16));
    assert!(!check_length("al", 3, 16));
}

#[test]
fn test_number_formatting() {
    assert_eq!(format_number(9876543.21, 2, 2), "9,876,543.21");
    assert_eq!(format_number(0.5, 0, 3), "0.5");
    assert_eq!(format_number(12.0, 1, 3), "12.0");
}

// ============================================================================
// Feature-gated helpers
// ============================================================================

#[cfg(feature = "regex")]
#[test]
fn test_named_patterns() {
    use textkit::validate::{is_chinese_character, is_email, NamedPattern};

    assert!(is_email("support@example.org"));
    assert!("中文".chars().all(is_chinese_character));
    let pattern: NamedPattern = "email".parse().unwrap();
    assert!(pattern.matches("a.b@c.io"));
}

#[cfg(feature = "datetime")]
#[test]
fn test_dates() {
    use textkit::datetime::{format_date, parse_full_timestamp};
    use textkit::validate::{is_date, is_full_timestamp};

    assert!(is_date("2024-12-25"));
    assert!(is_full_timestamp("2024-12-25 18:30:00"));
    let dt = parse_full_timestamp("2024-12-25 18:30:00").unwrap();
    assert_eq!(format_date(&dt, None).unwrap(), "2024-12-25 18-30-00");
    assert_eq!(format_date(&dt, Some("%Y/%m/%d")).unwrap(), "2024/12/25");
}

#[cfg(feature = "url")]
#[test]
fn test_url_codec() {
    use textkit::codec::{decode_string_with, encode_string_with, UrlCodecError};

    let encoded = encode_string_with("東京 tower", "shift_jis").unwrap();
    assert_eq!(encoded, "%93%8C%8B%9E+tower");
    assert_eq!(decode_string_with(&encoded, "shift_jis").unwrap(), "東京 tower");
    assert!(matches!(
        encode_string_with("x", "no-such-charset"),
        Err(UrlCodecError::UnknownEncoding(_))
    ));
}

#[cfg(feature = "digest")]
#[test]
fn test_md5() {
    assert_eq!(
        textkit::digest::md5_hex("hello"),
        "5d41402abc4b2a76b9719d911017c592"
    );
}
