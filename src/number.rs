//! Number formatting with digit grouping.

use alloc::format;
use alloc::string::String;

/// Format `value` with `,` thousands grouping and between
/// `min_fraction_digits` and `max_fraction_digits` fraction digits.
///
/// The value is rounded to `max_fraction_digits` (ties to even), then
/// trailing zeros are dropped until `min_fraction_digits` remain. If
/// `max_fraction_digits < min_fraction_digits`, the minimum is lowered to the
/// maximum.
///
/// ```
/// use textkit::number::format_number;
///
/// assert_eq!(format_number(1234567.891, 0, 2), "1,234,567.89");
/// assert_eq!(format_number(1234.5, 2, 4), "1,234.50");
/// assert_eq!(format_number(-1234.5678, 0, 2), "-1,234.57");
/// ```
pub fn format_number(value: f64, min_fraction_digits: usize, max_fraction_digits: usize) -> String {
    if value.is_nan() {
        return String::from("NaN");
    }
    if value.is_infinite() {
        return String::from(if value > 0.0 { "∞" } else { "-∞" });
    }

    let min = min_fraction_digits.min(max_fraction_digits);
    let rounded = format!("{:.*}", max_fraction_digits, value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((&rounded, ""));

    let mut keep = frac_part.len();
    while keep > min && frac_part.as_bytes()[keep - 1] == b'0' {
        keep -= 1;
    }
    let frac_part = &frac_part[..keep];

    let is_zero = int_part.bytes().chain(frac_part.bytes()).all(|b| b == b'0');
    let mut out = String::with_capacity(rounded.len() + int_part.len() / 3 + 1);
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}
