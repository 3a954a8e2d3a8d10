//! Date formatting and parsing.
//!
//! Patterns use `strftime` syntax as understood by [`chrono::format`].

use core::fmt;

use chrono::format::{Item, StrftimeItems};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, ParseResult, Utc};

/// Pattern used by [`format_date`] when none is given.
pub const DEFAULT_DATE_PATTERN: &str = "%Y-%m-%d %H-%M-%S";

const DATE_PATTERN: &str = "%Y-%m-%d";
const FULL_TIMESTAMP_PATTERN: &str = "%Y-%m-%d %H:%M:%S";

/// Error returned for a formatting pattern chrono cannot interpret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormatError {
    /// The rejected pattern.
    pub pattern: String,
}

impl fmt::Display for DateFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid date pattern '{}'", self.pattern)
    }
}

impl std::error::Error for DateFormatError {}

/// Format `dt` with `pattern`, or [`DEFAULT_DATE_PATTERN`] when `pattern` is
/// `None` or blank.
///
/// ```
/// use chrono::NaiveDate;
/// use textkit::datetime::format_date;
///
/// let dt = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap().and_hms_opt(8, 5, 0).unwrap();
/// assert_eq!(format_date(&dt, None).unwrap(), "2024-03-09 08-05-00");
/// assert_eq!(format_date(&dt, Some("%d/%m/%Y")).unwrap(), "09/03/2024");
/// ```
pub fn format_date(dt: &NaiveDateTime, pattern: Option<&str>) -> Result<String, DateFormatError> {
    let pattern = match pattern {
        Some(p) if !p.trim().is_empty() => p,
        _ => DEFAULT_DATE_PATTERN,
    };

    // Formatting an erroneous item fails inside Display, so reject it here
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(DateFormatError {
            pattern: pattern.to_string(),
        });
    }
    Ok(dt.format_with_items(items.into_iter()).to_string())
}

/// Parse a `YYYY-MM-DD` date, at midnight.
pub fn parse_date(s: &str) -> ParseResult<NaiveDateTime> {
    NaiveDate::parse_from_str(s.trim(), DATE_PATTERN).map(|d| d.and_time(NaiveTime::default()))
}

/// Parse a `YYYY-MM-DD HH:MM:SS` timestamp.
pub fn parse_full_timestamp(s: &str) -> ParseResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), FULL_TIMESTAMP_PATTERN)
}

/// A time-based identifier: the current Unix time in milliseconds.
pub fn unique_string() -> String {
    Utc::now().timestamp_millis().to_string()
}
