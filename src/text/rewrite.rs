//! Multi-pattern text rewriting.
//!
//! The rewriter splits a text at the winning match (see [`find_first`](super::find_first)),
//! rewrites the segment before the match, emits a replacement for the match
//! itself and then rewrites the segment after it. Each segment is processed
//! independently with the full pattern set, so the pattern order only decides
//! where a segment is split, not which occurrences end up rewritten.
//!
//! Segments are kept on an explicit work-list instead of the call stack:
//! the list grows with the number of matches, never with recursion depth.
//!
//! ```
//! use textkit::text::{highlight, replace_all_array};
//!
//! let out = highlight("hello world", &["world"], "<b>", "</b>").unwrap();
//! assert_eq!(out, "hello <b>world</b>");
//!
//! let out = replace_all_array("1 < 2", &["<", ">"], &["lt", "gt"]).unwrap();
//! assert_eq!(out, "1 lt 2");
//! ```

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use super::config::{MatchPolicy, RewriteConfig};
use super::scan::{Match, PatternSet, Scanner};

/// Configuration errors reported before any text is scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteError {
    /// The pattern at `index` is the empty string.
    EmptyPattern {
        /// Position of the empty pattern in the pattern list.
        index: usize,
    },
    /// Per-pattern replacements were given, but not one per pattern.
    LengthMismatch {
        /// Number of patterns.
        patterns: usize,
        /// Number of replacements.
        replacements: usize,
    },
}

impl fmt::Display for RewriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPattern { index } => {
                write!(f, "pattern {} is empty; empty patterns match everywhere", index)
            }
            Self::LengthMismatch {
                patterns,
                replacements,
            } => write!(
                f,
                "{} patterns but {} replacements; counts must be equal",
                patterns, replacements
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RewriteError {}

/// What to produce in place of each matched span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action<'r> {
    /// Replace every match with the same text.
    ReplaceAllWith(&'r str),
    /// Replace a match of pattern `i` with the `i`-th replacement.
    ReplaceEachWith(Vec<&'r str>),
    /// Keep the match and surround it with `prefix` and `suffix`.
    Wrap {
        /// Emitted before the matched span.
        prefix: &'r str,
        /// Emitted after the matched span.
        suffix: &'r str,
    },
}

/// A validated pattern set paired with an action.
///
/// # Examples
///
/// ```
/// use textkit::text::{Action, PatternSet, RewriteConfig, Rewriter};
///
/// let patterns = PatternSet::new(["bc", "ab"]).unwrap();
/// let rewriter = Rewriter::new(patterns, Action::ReplaceEachWith(vec!["X", "Y"])).unwrap();
/// assert_eq!(rewriter.rewrite("abc"), "aX");
///
/// let rewriter = rewriter.with_config(RewriteConfig::leftmost());
/// assert_eq!(rewriter.rewrite("abc"), "Yc");
/// ```
#[derive(Debug, Clone)]
pub struct Rewriter<'a> {
    patterns: PatternSet<'a>,
    action: Action<'a>,
    config: RewriteConfig,
}

impl<'a> Rewriter<'a> {
    /// Pair `patterns` with `action`.
    ///
    /// Fails with [`RewriteError::LengthMismatch`] if the action carries
    /// per-pattern replacements whose count differs from the pattern count.
    pub fn new(patterns: PatternSet<'a>, action: Action<'a>) -> Result<Self, RewriteError> {
        if let Action::ReplaceEachWith(replacements) = &action {
            if replacements.len() != patterns.len() {
                log::debug!(
                    "rejecting rewriter: {} patterns, {} replacements",
                    patterns.len(),
                    replacements.len()
                );
                return Err(RewriteError::LengthMismatch {
                    patterns: patterns.len(),
                    replacements: replacements.len(),
                });
            }
        }
        Ok(Self {
            patterns,
            action,
            config: RewriteConfig::default(),
        })
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: RewriteConfig) -> Self {
        self.config = config;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &RewriteConfig {
        &self.config
    }

    /// Rewrite `text`.
    ///
    /// Returns `text` itself, borrowed, when no pattern occurs in it.
    pub fn rewrite<'t>(&self, text: &'t str) -> Cow<'t, str> {
        rewrite_with(
            text,
            self.patterns.as_slice(),
            &self.action,
            self.config.policy,
        )
    }
}

enum Work<'s> {
    /// Byte range of the text still to be scanned.
    Segment { start: usize, end: usize },
    /// Text to copy to the output as-is.
    Emit(&'s str),
}

/// Core rewrite loop over already-validated patterns.
///
/// Segments come off the work-list in text order, which lets one
/// [`Scanner`] serve the whole rewrite.
pub(crate) fn rewrite_with<'t, P: AsRef<str>>(
    text: &'t str,
    patterns: &[P],
    action: &Action<'_>,
    policy: MatchPolicy,
) -> Cow<'t, str> {
    let mut scanner = Scanner::new(text, patterns);
    let Some(first) = scanner.find_in(0, text.len(), policy) else {
        return Cow::Borrowed(text);
    };

    let mut out = String::with_capacity(text.len());
    let mut work = Vec::new();
    let mut matches = 1usize;
    push_split(&mut work, text, 0, text.len(), first, action);

    while let Some(item) = work.pop() {
        match item {
            Work::Emit(s) => out.push_str(s),
            Work::Segment { start, end } if start == end => {}
            Work::Segment { start, end } => match scanner.find_in(start, end, policy) {
                Some(m) => {
                    matches += 1;
                    push_split(&mut work, text, start, end, m, action);
                }
                None => out.push_str(&text[start..end]),
            },
        }
    }

    log::trace!(
        "rewrote {} bytes into {} bytes ({} matches)",
        text.len(),
        out.len(),
        matches
    );
    Cow::Owned(out)
}

/// Queue `text[start..m.start]`, the replacement for `m` and `text[m.end()..end]`.
///
/// The work-list is LIFO, so items are pushed in reverse output order.
fn push_split<'s>(
    work: &mut Vec<Work<'s>>,
    text: &'s str,
    start: usize,
    end: usize,
    m: Match,
    action: &Action<'s>,
) {
    work.push(Work::Segment { start: m.end(), end });
    match action {
        Action::ReplaceAllWith(replacement) => work.push(Work::Emit(*replacement)),
        Action::ReplaceEachWith(replacements) => work.push(Work::Emit(replacements[m.pattern])),
        Action::Wrap { prefix, suffix } => {
            work.push(Work::Emit(*suffix));
            work.push(Work::Emit(&text[m.start..m.end()]));
            work.push(Work::Emit(*prefix));
        }
    }
    work.push(Work::Segment {
        start,
        end: m.start,
    });
}

// =============================================================================
// Convenience functions
// =============================================================================

/// Replace every non-overlapping occurrence of `pattern`, left to right.
///
/// ```
/// use textkit::text::replace_all;
///
/// assert_eq!(replace_all("aaa", "aa", "b").unwrap(), "ba");
/// assert!(replace_all("abc", "", "x").is_err());
/// ```
pub fn replace_all<'t>(
    text: &'t str,
    pattern: &str,
    replacement: &str,
) -> Result<Cow<'t, str>, RewriteError> {
    let patterns = PatternSet::new([pattern])?;
    Ok(Rewriter::new(patterns, Action::ReplaceAllWith(replacement))?.rewrite(text))
}

/// Replace occurrences of any of `patterns` with the same `replacement`.
pub fn replace_all_any<'t, P: AsRef<str>>(
    text: &'t str,
    patterns: &[P],
    replacement: &str,
) -> Result<Cow<'t, str>, RewriteError> {
    let patterns = PatternSet::new(patterns.iter().map(AsRef::as_ref))?;
    Ok(Rewriter::new(patterns, Action::ReplaceAllWith(replacement))?.rewrite(text))
}

/// Replace occurrences of `patterns[i]` with `replacements[i]`.
///
/// Fails if the two slices differ in length or any pattern is empty.
pub fn replace_all_array<'t, P: AsRef<str>, R: AsRef<str>>(
    text: &'t str,
    patterns: &[P],
    replacements: &[R],
) -> Result<Cow<'t, str>, RewriteError> {
    let patterns = PatternSet::new(patterns.iter().map(AsRef::as_ref))?;
    let replacements = replacements.iter().map(AsRef::as_ref).collect();
    Ok(Rewriter::new(patterns, Action::ReplaceEachWith(replacements))?.rewrite(text))
}

/// Surround occurrences of any of `patterns` with `prefix` and `suffix`.
///
/// Markers are never scanned, so a prefix or suffix that contains one of the
/// patterns is not highlighted again.
pub fn highlight<'t, P: AsRef<str>>(
    text: &'t str,
    patterns: &[P],
    prefix: &str,
    suffix: &str,
) -> Result<Cow<'t, str>, RewriteError> {
    let patterns = PatternSet::new(patterns.iter().map(AsRef::as_ref))?;
    Ok(Rewriter::new(patterns, Action::Wrap { prefix, suffix })?.rewrite(text))
}
