//! Tests for multi-pattern rewriting and truncation through the public API.

use std::borrow::Cow;

use textkit::text::{
    find_first, highlight, replace_all, replace_all_any, replace_all_array,
    truncate_to_byte_length, Action, MatchPolicy, PatternSet, RewriteConfig, RewriteError,
    Rewriter,
};

// ============================================================================
// Documented scenarios
// ============================================================================

#[test]
fn test_highlight_scenario() {
    let out = highlight("hello world", &["world"], "<b>", "</b>").unwrap();
    assert_eq!(out, "hello <b>world</b>");
}

#[test]
fn test_byte_truncation_scenario() {
    let text = "日本語";
    assert_eq!(text.chars().next().unwrap().len_utf8(), 3);
    assert_eq!(truncate_to_byte_length(text, 2), "");
}

#[test]
fn test_tie_break_splits_at_first_listed_pattern() {
    // "b" (index 0) is found first although "a" is leftmost. The segment
    // before the split is rewritten on its own, so both end up replaced.
    let m = find_first("ab", &["b", "a"], MatchPolicy::ArrayOrder).unwrap();
    assert_eq!((m.pattern, m.start), (0, 1));
    assert_eq!(
        replace_all_array("ab", &["b", "a"], &["B", "A"]).unwrap(),
        "AB"
    );
}

#[test]
fn test_tie_break_visible_with_overlap() {
    let patterns = ["bc", "ab"];
    let replacements = ["X", "Y"];

    assert_eq!(
        replace_all_array("abc", &patterns, &replacements).unwrap(),
        "aX"
    );

    let rewriter = Rewriter::new(
        PatternSet::new(patterns).unwrap(),
        Action::ReplaceEachWith(replacements.to_vec()),
    )
    .unwrap()
    .with_config(RewriteConfig::leftmost());
    assert_eq!(rewriter.rewrite("abc"), "Yc");
}

// ============================================================================
// Identity
// ============================================================================

#[test]
fn test_no_match_is_borrowed() {
    let text = String::from("nothing matches here");
    for out in [
        replace_all(&text, "zzz", "x").unwrap(),
        replace_all_any(&text, &["q", "zz"], "x").unwrap(),
        replace_all_array(&text, &["q"], &["x"]).unwrap(),
        highlight(&text, &["q"], "<", ">").unwrap(),
    ] {
        assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == text.as_ptr()));
    }
}

#[test]
fn test_rewriter_is_reusable() {
    let rewriter = Rewriter::new(
        PatternSet::new(["\r\n", "\n", "\r"]).unwrap(),
        Action::ReplaceAllWith("\n"),
    )
    .unwrap();
    assert_eq!(rewriter.rewrite("a\r\nb\rc\n"), "a\nb\nc\n");
    assert_eq!(rewriter.rewrite("single line"), "single line");
}

// ============================================================================
// Configuration errors
// ============================================================================

#[test]
fn test_configuration_errors() {
    assert_eq!(
        Rewriter::new(
            PatternSet::new(["a", "b", "c"]).unwrap(),
            Action::ReplaceEachWith(vec!["1", "2"]),
        )
        .unwrap_err(),
        RewriteError::LengthMismatch {
            patterns: 3,
            replacements: 2
        }
    );
    assert_eq!(
        replace_all_any("abc", &["a", ""], "x").unwrap_err(),
        RewriteError::EmptyPattern { index: 1 }
    );
}

#[test]
fn test_error_is_std_error() {
    fn takes_error(_: &dyn std::error::Error) {}
    takes_error(&RewriteError::EmptyPattern { index: 0 });
}

// ============================================================================
// Larger inputs
// ============================================================================

#[test]
fn test_dense_matches() {
    let text = "<>".repeat(50_000);
    let out = highlight(&text, &["<", ">"], "[", "]").unwrap();
    assert_eq!(out, "[<][>]".repeat(50_000));
}

#[test]
fn test_matches_every_occurrence_with_unicode() {
    let text = "café ☕ café ☕";
    let out = replace_all_array(text, &["☕", "café"], &["tea", "bar"]).unwrap();
    assert_eq!(out, "bar tea bar tea");
}
