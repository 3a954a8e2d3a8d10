//! `application/x-www-form-urlencoded` encoding with charset labels.
//!
//! Text is first converted to bytes in the labelled charset (any WHATWG label
//! known to [`encoding_rs`], e.g. `"utf-8"`, `"gbk"`, `"shift_jis"`), then
//! percent-encoded with space written as `+`.
//!
//! ```
//! use textkit::codec::url::{decode_string, encode_string, encode_string_with};
//!
//! assert_eq!(encode_string("a b&c").unwrap(), "a+b%26c");
//! assert_eq!(encode_string("中").unwrap(), "%E4%B8%AD");
//! assert_eq!(encode_string_with("中", "gbk").unwrap(), "%D6%D0");
//! assert_eq!(decode_string("a+b%26c").unwrap(), "a b&c");
//! ```

use core::fmt;

use encoding_rs::Encoding;
use ::url::form_urlencoded;

/// Errors from the URL codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlCodecError {
    /// The charset label is not known.
    UnknownEncoding(String),
    /// A `%` is not followed by two hex digits.
    MalformedEscape {
        /// Byte offset of the `%`.
        offset: usize,
    },
    /// The decoded bytes are not valid in the charset.
    InvalidBytes {
        /// Name of the charset.
        encoding: &'static str,
    },
    /// A character has no representation in the charset.
    Unmappable {
        /// The first such character.
        ch: char,
        /// Name of the charset.
        encoding: &'static str,
    },
    /// A character above U+00FF cannot be reinterpreted as a byte.
    NotLatin1 {
        /// The offending character.
        ch: char,
    },
}

impl fmt::Display for UrlCodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownEncoding(label) => write!(f, "unknown character encoding '{}'", label),
            Self::MalformedEscape { offset } => {
                write!(f, "malformed percent escape at byte {}", offset)
            }
            Self::InvalidBytes { encoding } => {
                write!(f, "decoded bytes are not valid {}", encoding)
            }
            Self::Unmappable { ch, encoding } => {
                write!(f, "character {:?} cannot be encoded as {}", ch, encoding)
            }
            Self::NotLatin1 { ch } => write!(f, "character {:?} is outside Latin-1", ch),
        }
    }
}

impl std::error::Error for UrlCodecError {}

fn lookup(label: &str) -> Result<&'static Encoding, UrlCodecError> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| UrlCodecError::UnknownEncoding(label.to_string()))
}

/// Form-encode `s` as UTF-8. Blank input yields `""`; other input is trimmed.
pub fn encode_string(s: &str) -> Result<String, UrlCodecError> {
    encode_string_with(s, "utf-8")
}

/// Form-encode `s` in the charset named by `label`.
///
/// Blank input yields `""` without looking at `label`. A character the
/// charset cannot represent is an error.
pub fn encode_string_with(s: &str, label: &str) -> Result<String, UrlCodecError> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(String::new());
    }
    let encoding = lookup(label)?;
    let (bytes, _, had_unmappables) = encoding.encode(s);
    if had_unmappables {
        return Err(first_unmappable(s, encoding));
    }
    Ok(form_urlencoded::byte_serialize(&bytes).collect())
}

fn first_unmappable(s: &str, encoding: &'static Encoding) -> UrlCodecError {
    let mut buf = [0u8; 4];
    let ch = s
        .chars()
        .find(|ch| encoding.encode(ch.encode_utf8(&mut buf)).2)
        .unwrap_or(char::REPLACEMENT_CHARACTER);
    UrlCodecError::Unmappable {
        ch,
        encoding: encoding.name(),
    }
}

/// Decode form-encoded UTF-8. Blank input yields `""`; other input is trimmed.
pub fn decode_string(s: &str) -> Result<String, UrlCodecError> {
    decode_string_with(s, "utf-8")
}

/// Decode form-encoded text in the charset named by `label`.
///
/// Unlike a lenient decoder this rejects stray `%` signs and byte sequences
/// that are invalid in the charset. Blank input yields `""` without looking
/// at `label`.
pub fn decode_string_with(s: &str, label: &str) -> Result<String, UrlCodecError> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(String::new());
    }
    let encoding = lookup(label)?;
    let bytes = percent_decode(s)?;
    encoding
        .decode_without_bom_handling_and_without_replacement(&bytes)
        .map(|text| text.into_owned())
        .ok_or(UrlCodecError::InvalidBytes {
            encoding: encoding.name(),
        })
}

/// Reinterpret text that was decoded as Latin-1 but really holds UTF-8.
///
/// Each character of `s` must be at most U+00FF and is taken as one byte.
///
/// ```
/// use textkit::codec::url::decode_uri;
///
/// // "中" as UTF-8 bytes E4 B8 AD, mis-decoded as Latin-1
/// assert_eq!(decode_uri("\u{e4}\u{b8}\u{ad}").unwrap(), "中");
/// ```
pub fn decode_uri(s: &str) -> Result<String, UrlCodecError> {
    if s.trim().is_empty() {
        return Ok(String::new());
    }
    let bytes = s
        .chars()
        .map(|ch| u8::try_from(ch).map_err(|_| UrlCodecError::NotLatin1 { ch }))
        .collect::<Result<Vec<u8>, _>>()?;
    String::from_utf8(bytes).map_err(|_| UrlCodecError::InvalidBytes { encoding: "UTF-8" })
}

/// Percent-decode form data, with `+` as space.
///
/// `percent_encoding` passes a malformed `%` through unchanged, so escapes
/// are checked here first.
fn percent_decode(s: &str) -> Result<Vec<u8>, UrlCodecError> {
    let input = s.as_bytes();
    for offset in memchr::memchr_iter(b'%', input) {
        let well_formed = input
            .get(offset + 1..offset + 3)
            .is_some_and(|pair| pair.iter().all(u8::is_ascii_hexdigit));
        if !well_formed {
            return Err(UrlCodecError::MalformedEscape { offset });
        }
    }
    let spaced = s.replace('+', " ");
    Ok(percent_encoding::percent_decode(spaced.as_bytes()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    mod encode {
        use super::*;

        #[test]
        fn unreserved_are_kept() {
            assert_eq!(encode_string("AZaz09-_.*").unwrap(), "AZaz09-_.*");
        }

        #[test]
        fn reserved_are_escaped() {
            assert_eq!(encode_string("a=1&b=2/3").unwrap(), "a%3D1%26b%3D2%2F3");
        }

        #[test]
        fn trims_and_blank() {
            assert_eq!(encode_string("  x y  ").unwrap(), "x+y");
            assert_eq!(encode_string("   ").unwrap(), "");
        }

        #[test]
        fn unmappable_character_is_an_error() {
            assert_eq!(
                encode_string_with("a中b", "iso-8859-1"),
                Err(UrlCodecError::Unmappable {
                    ch: '中',
                    encoding: "windows-1252"
                })
            );
            assert_eq!(encode_string_with("中", "gbk").unwrap(), "%D6%D0");
        }

        #[test]
        fn blank_input_ignores_label() {
            assert_eq!(encode_string_with("  ", "bogus").unwrap(), "");
            assert_eq!(decode_string_with("", "bogus").unwrap(), "");
            assert!(decode_string_with("x", "bogus").is_err());
        }

        #[test]
        fn charset_labels() {
            assert_eq!(encode_string_with("é", "UTF-8").unwrap(), "%C3%A9");
            assert_eq!(encode_string_with("é", "latin1").unwrap(), "%E9");
            assert_eq!(
                encode_string_with("x", "klingon"),
                Err(UrlCodecError::UnknownEncoding("klingon".to_string()))
            );
        }
    }

    mod decode {
        use super::*;

        #[test]
        fn plus_and_escapes() {
            assert_eq!(decode_string("x+y%20z").unwrap(), "x y z");
            assert_eq!(decode_string("1%2B1").unwrap(), "1+1");
            assert_eq!(decode_string("%E4%B8%AD%e6%96%87").unwrap(), "中文");
        }

        #[test]
        fn charset_labels() {
            assert_eq!(decode_string_with("%D6%D0", "gbk").unwrap(), "中");
            assert_eq!(decode_string_with("%E9", "iso-8859-1").unwrap(), "é");
        }

        #[test]
        fn malformed_escape() {
            assert_eq!(
                decode_string("ab%2"),
                Err(UrlCodecError::MalformedEscape { offset: 2 })
            );
            assert_eq!(
                decode_string("%zz"),
                Err(UrlCodecError::MalformedEscape { offset: 0 })
            );
            assert_eq!(
                decode_string("a%41%+f"),
                Err(UrlCodecError::MalformedEscape { offset: 4 })
            );
        }

        #[test]
        fn invalid_utf8() {
            assert_eq!(
                decode_string("%FF"),
                Err(UrlCodecError::InvalidBytes { encoding: "UTF-8" })
            );
        }

        #[test]
        fn round_trip() {
            for text in ["hello world", "a&b=c", "日本語 テキスト", "100%"] {
                assert_eq!(decode_string(&encode_string(text).unwrap()).unwrap(), text);
            }
        }
    }

    #[test]
    fn latin1_reinterpretation() {
        assert_eq!(decode_uri("plain").unwrap(), "plain");
        assert_eq!(decode_uri("").unwrap(), "");
        assert_eq!(
            decode_uri("中"),
            Err(UrlCodecError::NotLatin1 { ch: '中' })
        );
        assert!(decode_uri("\u{ff}").is_err());
    }
}
