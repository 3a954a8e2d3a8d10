//! Encoding and decoding of text for transport.
//!
//! HTML entity escaping lives with the rewriting engine in
//! [`text::html`](crate::text::html).

pub mod url;

pub use self::url::{
    decode_string, decode_string_with, decode_uri, encode_string, encode_string_with,
    UrlCodecError,
};
