//! Escaping of the four reserved HTML characters.
//!
//! | Character | Entity   |
//! |-----------|----------|
//! | `&`       | `&amp;`  |
//! | `<`       | `&lt;`   |
//! | `>`       | `&gt;`   |
//! | `"`       | `&quot;` |
//!
//! Decoding is a single pass of the multi-pattern rewriter with `&amp;`
//! tried first, so `&amp;lt;` decodes to `&lt;` and not to `<`. Encoding is a
//! plain linear scan.

use alloc::borrow::Cow;
use alloc::string::String;

use super::config::MatchPolicy;
use super::rewrite::{rewrite_with, Action};

const ENTITIES: [&str; 4] = ["&amp;", "&lt;", "&gt;", "&quot;"];
const DECODED: [&str; 4] = ["&", "<", ">", "\""];

#[inline]
fn entity_for(byte: u8) -> Option<&'static str> {
    match byte {
        b'<' => Some("&lt;"),
        b'>' => Some("&gt;"),
        b'&' => Some("&amp;"),
        b'"' => Some("&quot;"),
        _ => None,
    }
}

/// Escape `<`, `>`, `&` and `"`.
///
/// Blank input yields `""`. Input with nothing to escape is returned
/// borrowed.
///
/// ```
/// use textkit::text::encode_html;
///
/// assert_eq!(
///     encode_html("<a href=\"x\">&y</a>"),
///     "&lt;a href=&quot;x&quot;&gt;&amp;y&lt;/a&gt;"
/// );
/// ```
pub fn encode_html(text: &str) -> Cow<'_, str> {
    if text.trim().is_empty() {
        return Cow::Borrowed("");
    }

    let bytes = text.as_bytes();
    let Some(first) = bytes.iter().position(|&b| entity_for(b).is_some()) else {
        return Cow::Borrowed(text);
    };

    let mut out = String::with_capacity(text.len() + text.len() / 8 + 8);
    out.push_str(&text[..first]);
    // All reserved characters are ASCII, so every cut below is a char boundary
    let mut run_start = first;
    for (i, &b) in bytes.iter().enumerate().skip(first) {
        if let Some(entity) = entity_for(b) {
            out.push_str(&text[run_start..i]);
            out.push_str(entity);
            run_start = i + 1;
        }
    }
    out.push_str(&text[run_start..]);
    Cow::Owned(out)
}

/// Unescape `&amp;`, `&lt;`, `&gt;` and `&quot;` in a single pass.
///
/// Blank input yields `""`. Other entities are left alone.
///
/// ```
/// use textkit::text::decode_html;
///
/// assert_eq!(decode_html("&lt;b&gt;&quot;hi&quot;&lt;/b&gt;"), "<b>\"hi\"</b>");
/// assert_eq!(decode_html("&amp;lt;"), "&lt;");
/// ```
pub fn decode_html(text: &str) -> Cow<'_, str> {
    if text.trim().is_empty() {
        return Cow::Borrowed("");
    }
    let action = Action::ReplaceEachWith(DECODED.to_vec());
    rewrite_with(text, &ENTITIES, &action, MatchPolicy::ArrayOrder)
}
