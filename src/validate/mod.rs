//! Validation predicates.
//!
//! Every predicate trims its input and treats blank input as invalid, so
//! `is_integer(" 42 ")` holds and `is_integer("")` does not.
//!
//! ```
//! use textkit::validate::{check_length, is_blank, is_integer, is_long};
//!
//! assert!(is_blank("  \t"));
//! assert!(is_integer(" 42 "));
//! assert!(!is_integer("4294967296"));
//! assert!(is_long("4294967296"));
//! assert!(check_length("hello", 1, 5));
//! ```

#[cfg(feature = "regex")]
pub mod patterns;

#[cfg(feature = "regex")]
pub use patterns::{
    is_chinese_character, is_email, matches_named, matches_regex, NamedPattern,
    UnknownPatternName,
};

/// Returns `true` if `s` is empty or only whitespace.
#[inline]
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Returns `true` if any of `values` is blank.
pub fn is_blanks<S: AsRef<str>>(values: &[S]) -> bool {
    values.iter().any(|s| is_blank(s.as_ref()))
}

/// Check that the character count of `s` lies in `min..=max`.
///
/// A bound of `0` disables that side of the check. Blank input never passes.
pub fn check_length(s: &str, min: usize, max: usize) -> bool {
    if is_blank(s) {
        return false;
    }
    let len = s.chars().count();
    if min == 0 {
        len <= max
    } else if max == 0 {
        len >= min
    } else {
        (min..=max).contains(&len)
    }
}

fn parses_as<T: core::str::FromStr>(s: &str) -> bool {
    let s = s.trim();
    !s.is_empty() && s.parse::<T>().is_ok()
}

/// Returns `true` if `s` parses as a 32-bit signed integer.
pub fn is_integer(s: &str) -> bool {
    parses_as::<i32>(s)
}

/// Returns `true` if `s` parses as a 64-bit signed integer.
pub fn is_long(s: &str) -> bool {
    parses_as::<i64>(s)
}

/// Returns `true` if `s` is `true` or `false`, ignoring ASCII case.
pub fn is_boolean(s: &str) -> bool {
    let s = s.trim();
    s.eq_ignore_ascii_case("true") || s.eq_ignore_ascii_case("false")
}

/// Returns `true` if `s` parses as a double-precision float.
pub fn is_double(s: &str) -> bool {
    parses_as::<f64>(s)
}

/// Returns `true` if every element passes [`is_integer`].
pub fn is_integers<S: AsRef<str>>(values: &[S]) -> bool {
    values.iter().all(|s| is_integer(s.as_ref()))
}

/// Returns `true` if every element passes [`is_long`].
pub fn is_longs<S: AsRef<str>>(values: &[S]) -> bool {
    values.iter().all(|s| is_long(s.as_ref()))
}

/// Returns `true` if every element passes [`is_boolean`].
pub fn is_booleans<S: AsRef<str>>(values: &[S]) -> bool {
    values.iter().all(|s| is_boolean(s.as_ref()))
}

/// Returns `true` if `s` is a `YYYY-MM-DD` calendar date.
#[cfg(feature = "datetime")]
pub fn is_date(s: &str) -> bool {
    !is_blank(s) && crate::datetime::parse_date(s).is_ok()
}

/// Same check as [`is_date`]; timestamps are accepted at day precision.
#[cfg(feature = "datetime")]
pub fn is_timestamp(s: &str) -> bool {
    is_date(s)
}

/// Returns `true` if `s` is a `YYYY-MM-DD HH:MM:SS` timestamp.
#[cfg(feature = "datetime")]
pub fn is_full_timestamp(s: &str) -> bool {
    !is_blank(s) && crate::datetime::parse_full_timestamp(s).is_ok()
}
