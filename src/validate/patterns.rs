//! Named regular expressions and whole-string matching.
//!
//! The registry is compiled once, on first use, and shared read-only after
//! that.

use core::fmt;
use core::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

/// Patterns available by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedPattern {
    /// `local@domain.tld`, with `-+.'` allowed between word runs on the
    /// left and `-.` on the right.
    Email,
    /// One or more CJK unified ideographs in U+4E00..=U+9FA5.
    ChineseCharacter,
}

static REGISTRY: Lazy<[Regex; 2]> = Lazy::new(|| {
    [
        Regex::new(
            r"^[A-Za-z0-9_]+([-+.'][A-Za-z0-9_]+)*@[A-Za-z0-9_]+([-.][A-Za-z0-9_]+)*\.[A-Za-z0-9_]+([-.][A-Za-z0-9_]+)*$",
        )
        .expect("email pattern is valid"),
        Regex::new(r"^[\u{4E00}-\u{9FA5}]+$").expect("CJK pattern is valid"),
    ]
});

impl NamedPattern {
    /// All registered patterns.
    pub const ALL: [NamedPattern; 2] = [NamedPattern::Email, NamedPattern::ChineseCharacter];

    /// The registry name of this pattern.
    pub fn name(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::ChineseCharacter => "chinese",
        }
    }

    /// The compiled, anchored regex.
    pub fn regex(self) -> &'static Regex {
        &REGISTRY[self as usize]
    }

    /// Returns `true` if the whole of `s` matches.
    pub fn matches(self, s: &str) -> bool {
        self.regex().is_match(s)
    }
}

/// Error returned when parsing an unknown pattern name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPatternName(pub String);

impl fmt::Display for UnknownPatternName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown pattern name '{}'", self.0)
    }
}

impl std::error::Error for UnknownPatternName {}

impl FromStr for NamedPattern {
    type Err = UnknownPatternName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownPatternName(s.to_string()))
    }
}

impl fmt::Display for NamedPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns `true` if `pattern` matches the whole of `s`.
///
/// `pattern` is compiled on every call; use [`NamedPattern`] for the built-in
/// patterns.
///
/// ```
/// use textkit::validate::matches_regex;
///
/// assert!(matches_regex(r"\d+", "123").unwrap());
/// assert!(!matches_regex(r"\d+", "123abc").unwrap());
/// assert!(matches_regex(r"(", "x").is_err());
/// ```
pub fn matches_regex(pattern: &str, s: &str) -> Result<bool, regex::Error> {
    let anchored = Regex::new(&format!("^(?:{})$", pattern))?;
    Ok(anchored.is_match(s))
}

/// Returns `true` if the whole of `s` matches the named pattern.
pub fn matches_named(pattern: NamedPattern, s: &str) -> bool {
    pattern.matches(s)
}

/// Returns `true` if `s` looks like an e-mail address.
pub fn is_email(s: &str) -> bool {
    NamedPattern::Email.matches(s)
}

/// Returns `true` if `ch` is a CJK unified ideograph in U+4E00..=U+9FA5.
pub fn is_chinese_character(ch: char) -> bool {
    let mut buf = [0u8; 4];
    NamedPattern::ChineseCharacter.matches(ch.encode_utf8(&mut buf))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email() {
        assert!(is_email("user@example.com"));
        assert!(is_email("first.last+tag@mail.example.co.uk"));
        assert!(is_email("o'brien@example-mail.org"));
        assert!(!is_email("user@localhost"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("user@@example.com"));
        assert!(!is_email("user example@example.com"));
        assert!(!is_email(""));
    }

    #[test]
    fn chinese_characters() {
        assert!(is_chinese_character('中'));
        assert!(is_chinese_character('一'));
        assert!(is_chinese_character('\u{9FA5}'));
        assert!(!is_chinese_character('\u{9FA6}'));
        assert!(!is_chinese_character('a'));
        assert!(!is_chinese_character('ひ'));
        assert!(matches_named(NamedPattern::ChineseCharacter, "中文"));
        assert!(!matches_named(NamedPattern::ChineseCharacter, "中文abc"));
    }

    #[test]
    fn names_round_trip() {
        for pattern in NamedPattern::ALL {
            assert_eq!(pattern.name().parse::<NamedPattern>(), Ok(pattern));
            assert_eq!(pattern.to_string(), pattern.name());
        }
        assert_eq!("EMAIL".parse::<NamedPattern>(), Ok(NamedPattern::Email));
        assert_eq!(
            "phone".parse::<NamedPattern>(),
            Err(UnknownPatternName("phone".to_string()))
        );
    }

    #[test]
    fn whole_string_match() {
        assert!(matches_regex("a|b", "a").unwrap());
        assert!(!matches_regex("a|b", "ab").unwrap());
        assert!(matches_regex("[a-z]+", "hello").unwrap());
    }

    #[test]
    fn registry_is_shared() {
        assert!(core::ptr::eq(
            NamedPattern::Email.regex(),
            NamedPattern::Email.regex()
        ));
    }
}
