//! Conversions from string slices to typed vectors.
//!
//! Elements are trimmed before parsing, matching the predicates in
//! [`validate`](crate::validate): whatever passes `is_longs` converts with
//! `strings_to_longs`.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

/// Error for the first element that failed to convert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertError {
    /// Index of the offending element.
    pub index: usize,
    /// The offending element, as given.
    pub value: String,
    /// Name of the target type.
    pub target: &'static str,
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "element {} ({:?}) is not a valid {}",
            self.index, self.value, self.target
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConvertError {}

fn parse_all<T, S>(values: &[S], target: &'static str) -> Result<Vec<T>, ConvertError>
where
    T: FromStr,
    S: AsRef<str>,
{
    values
        .iter()
        .enumerate()
        .map(|(index, s)| {
            let s = s.as_ref();
            s.trim().parse::<T>().map_err(|_| ConvertError {
                index,
                value: s.to_string(),
                target,
            })
        })
        .collect()
}

/// Parse every element as an `i64`.
///
/// ```
/// use textkit::convert::strings_to_longs;
///
/// assert_eq!(strings_to_longs(&["1", " -2 "]).unwrap(), vec![1, -2]);
/// let err = strings_to_longs(&["1", "two"]).unwrap_err();
/// assert_eq!(err.index, 1);
/// ```
pub fn strings_to_longs<S: AsRef<str>>(values: &[S]) -> Result<Vec<i64>, ConvertError> {
    parse_all(values, "i64")
}

/// Parse every element as an `i32`.
pub fn strings_to_integers<S: AsRef<str>>(values: &[S]) -> Result<Vec<i32>, ConvertError> {
    parse_all(values, "i32")
}

/// Parse every element as an `f64`.
pub fn strings_to_doubles<S: AsRef<str>>(values: &[S]) -> Result<Vec<f64>, ConvertError> {
    parse_all(values, "f64")
}

/// Map every element to a `bool`: `true` (ignoring ASCII case) is `true`,
/// anything else is `false`. Never fails.
pub fn strings_to_booleans<S: AsRef<str>>(values: &[S]) -> Vec<bool> {
    values
        .iter()
        .map(|s| s.as_ref().trim().eq_ignore_ascii_case("true"))
        .collect()
}
