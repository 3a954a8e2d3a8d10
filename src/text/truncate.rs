//! Byte-bounded truncation.

/// Truncate `text` to at most `max_bytes` bytes of UTF-8.
///
/// Returns the longest prefix of `text` that fits the budget and ends on a
/// character boundary. A character that would cross the budget is dropped
/// whole. Empty or whitespace-only input yields `""`.
///
/// # Examples
///
/// ```
/// use textkit::text::truncate_to_byte_length;
///
/// assert_eq!(truncate_to_byte_length("hello", 3), "hel");
/// assert_eq!(truncate_to_byte_length("日本語", 7), "日本");
/// // The first character needs 3 bytes
/// assert_eq!(truncate_to_byte_length("日本語", 2), "");
/// ```
pub fn truncate_to_byte_length(text: &str, max_bytes: usize) -> &str {
    if text.trim().is_empty() {
        return "";
    }
    if text.len() <= max_bytes {
        return text;
    }

    // A UTF-8 character is at most 4 bytes, so this steps back at most 3 times
    let mut end = max_bytes;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn fits_unchanged() {
        let text = "short";
        assert_eq!(truncate_to_byte_length(text, 5).as_ptr(), text.as_ptr());
        assert_eq!(truncate_to_byte_length(text, 100), "short");
    }

    #[test]
    fn ascii_cut() {
        assert_eq!(truncate_to_byte_length("abcdef", 0), "");
        assert_eq!(truncate_to_byte_length("abcdef", 1), "a");
        assert_eq!(truncate_to_byte_length("abcdef", 5), "abcde");
    }

    #[test]
    fn blank_input() {
        assert_eq!(truncate_to_byte_length("", 10), "");
        assert_eq!(truncate_to_byte_length("   ", 10), "");
        assert_eq!(truncate_to_byte_length("\t\n", 0), "");
    }

    #[test]
    fn never_splits_a_character() {
        // é = 2 bytes, 日 = 3 bytes, 🎉 = 4 bytes
        let text = "aé日🎉";
        assert_eq!(truncate_to_byte_length(text, 1), "a");
        assert_eq!(truncate_to_byte_length(text, 2), "a");
        assert_eq!(truncate_to_byte_length(text, 3), "aé");
        assert_eq!(truncate_to_byte_length(text, 5), "aé");
        assert_eq!(truncate_to_byte_length(text, 6), "aé日");
        assert_eq!(truncate_to_byte_length(text, 9), "aé日");
        assert_eq!(truncate_to_byte_length(text, 10), "aé日🎉");
    }

    #[test]
    fn leading_wide_character_larger_than_budget() {
        assert_eq!(truncate_to_byte_length("日本", 2), "");
        assert_eq!(truncate_to_byte_length("🎉", 3), "");
    }

    proptest! {
        #[test]
        fn result_fits_budget(text in "\\PC*", budget in 0usize..64) {
            let out = truncate_to_byte_length(&text, budget);
            prop_assert!(out.len() <= budget);
            prop_assert!(text.starts_with(out));
        }

        #[test]
        fn result_is_longest_prefix(text in "[a-zé日🎉 ]{1,32}", budget in 0usize..64) {
            prop_assume!(!text.trim().is_empty());
            let out = truncate_to_byte_length(&text, budget);
            if out.len() < text.len() {
                let next = text[out.len()..].chars().next().unwrap();
                prop_assert!(out.len() + next.len_utf8() > budget);
            }
        }
    }
}
