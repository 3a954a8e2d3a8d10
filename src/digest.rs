//! Message digests.

/// Lowercase hexadecimal MD5 digest of the UTF-8 bytes of `s`.
///
/// ```
/// use textkit::digest::md5_hex;
///
/// assert_eq!(md5_hex(""), "d41d8cd98f00b204e9800998ecf8427e");
/// ```
pub fn md5_hex(s: &str) -> String {
    format!("{:x}", md5::compute(s.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_digests() {
        assert_eq!(
            md5_hex("The quick brown fox jumps over the lazy dog"),
            "9e107d9d372bb6826bd81d3542a419d6"
        );
        assert_eq!(md5_hex("abc"), "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn always_32_hex_digits() {
        for input in ["", "a", "日本語", "\0"] {
            let digest = md5_hex(input);
            assert_eq!(digest.len(), 32);
            assert!(digest.bytes().all(|b| b.is_ascii_hexdigit() && !b.is_ascii_uppercase()));
        }
    }
}
