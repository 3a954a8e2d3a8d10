//! Literal multi-pattern scanning.
//!
//! [`find_first`] locates the match that drives the next split of the
//! rewriter. Patterns are plain substrings; there is no regex support here.
//!
//! Under [`MatchPolicy::ArrayOrder`] the patterns are tried one after another
//! and the first pattern that occurs *anywhere* wins:
//!
//! ```
//! use textkit::text::{find_first, MatchPolicy};
//!
//! // "b" is tried first and found at offset 1, even though "a" is at 0.
//! let m = find_first("ab", &["b", "a"], MatchPolicy::ArrayOrder).unwrap();
//! assert_eq!((m.pattern, m.start), (0, 1));
//!
//! let m = find_first("ab", &["b", "a"], MatchPolicy::Leftmost).unwrap();
//! assert_eq!((m.pattern, m.start), (1, 0));
//! ```

use alloc::vec::Vec;
use memchr::memmem;

use super::config::MatchPolicy;
use super::rewrite::RewriteError;

/// A single occurrence of one pattern in a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Index of the matching pattern in the pattern list.
    pub pattern: usize,
    /// Byte offset of the occurrence. Always a char boundary.
    pub start: usize,
    /// Byte length of the matched pattern.
    pub len: usize,
}

impl Match {
    /// Byte offset one past the end of the occurrence.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// An ordered list of non-empty literal patterns.
///
/// Order defines priority under [`MatchPolicy::ArrayOrder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSet<'p> {
    patterns: Vec<&'p str>,
}

impl<'p> PatternSet<'p> {
    /// Build a pattern set, rejecting empty patterns.
    ///
    /// An empty pattern would occur at every offset, so it is reported as
    /// [`RewriteError::EmptyPattern`] instead of being scanned.
    pub fn new<I>(patterns: I) -> Result<Self, RewriteError>
    where
        I: IntoIterator<Item = &'p str>,
    {
        let patterns: Vec<&'p str> = patterns.into_iter().collect();
        if let Some(index) = patterns.iter().position(|p| p.is_empty()) {
            log::debug!("rejecting pattern set: pattern {} is empty", index);
            return Err(RewriteError::EmptyPattern { index });
        }
        Ok(Self { patterns })
    }

    /// Number of patterns.
    #[inline]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns `true` if the set holds no patterns.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// The patterns in priority order.
    #[inline]
    pub fn as_slice(&self) -> &[&'p str] {
        &self.patterns
    }

    /// Find the winning match in `text` under `policy`.
    #[inline]
    pub fn find_first(&self, text: &str, policy: MatchPolicy) -> Option<Match> {
        find_first(text, &self.patterns, policy)
    }
}

/// Find the winning occurrence of any of `patterns` in `text`.
///
/// Returns `None` when no pattern occurs. Empty patterns never match; use
/// [`PatternSet::new`] to reject them up front.
pub fn find_first<P: AsRef<str>>(text: &str, patterns: &[P], policy: MatchPolicy) -> Option<Match> {
    let haystack = text.as_bytes();
    let mut occurrences = patterns.iter().enumerate().filter_map(|(pattern, p)| {
        let needle = p.as_ref().as_bytes();
        if needle.is_empty() {
            return None;
        }
        memmem::find(haystack, needle).map(|start| Match {
            pattern,
            start,
            len: needle.len(),
        })
    });

    match policy {
        MatchPolicy::ArrayOrder => occurrences.next(),
        // min_by_key keeps the first of equal keys, so ties go to the lower index
        MatchPolicy::Leftmost => occurrences.min_by_key(|m| m.start),
    }
}

/// Repeated scanning of one text over ranges that move left to right.
///
/// Remembers where each pattern next occurs, so a pattern is searched again
/// only once the scan has moved past its cached occurrence. Over a whole
/// rewrite each pattern sweeps the text about once. The start of every range
/// passed to [`Scanner::find_in`] must be at least the start of the previous
/// one.
pub(crate) struct Scanner<'t, 'p> {
    text: &'t [u8],
    finders: Vec<Option<memmem::Finder<'p>>>,
    next: Vec<Next>,
    #[cfg(test)]
    searched: usize,
}

#[derive(Debug, Clone, Copy)]
enum Next {
    Unknown,
    At(usize),
    Absent,
}

impl<'t, 'p> Scanner<'t, 'p> {
    pub(crate) fn new<P: AsRef<str>>(text: &'t str, patterns: &'p [P]) -> Self {
        let finders: Vec<_> = patterns
            .iter()
            .map(|p| {
                let needle = p.as_ref().as_bytes();
                (!needle.is_empty()).then(|| memmem::Finder::new(needle))
            })
            .collect();
        let next = finders
            .iter()
            .map(|f| if f.is_some() { Next::Unknown } else { Next::Absent })
            .collect();
        Self {
            text: text.as_bytes(),
            finders,
            next,
            #[cfg(test)]
            searched: 0,
        }
    }

    /// Start of the first occurrence of pattern `index` at or after `from`.
    fn next_start(&mut self, index: usize, from: usize) -> Option<usize> {
        match self.next[index] {
            Next::Absent => return None,
            Next::At(start) if start >= from => return Some(start),
            Next::At(_) | Next::Unknown => {}
        }
        let finder = self.finders[index].as_ref()?;
        let found = finder.find(&self.text[from..]).map(|i| from + i);
        #[cfg(test)]
        {
            self.searched += found.map_or(self.text.len(), |i| i + finder.needle().len()) - from;
        }
        self.next[index] = found.map_or(Next::Absent, Next::At);
        found
    }

    /// The winning match inside `text[start..end]` under `policy`.
    ///
    /// Gives the same answer as [`find_first`] on that slice, with offsets
    /// relative to the whole text.
    pub(crate) fn find_in(&mut self, start: usize, end: usize, policy: MatchPolicy) -> Option<Match> {
        let mut best: Option<Match> = None;
        for pattern in 0..self.finders.len() {
            let Some(at) = self.next_start(pattern, start) else {
                continue;
            };
            let len = self.finders[pattern].as_ref().map_or(0, |f| f.needle().len());
            // later occurrences start after `at`, so they end past `end` too
            if at + len > end {
                continue;
            }
            let m = Match { pattern, start: at, len };
            match policy {
                MatchPolicy::ArrayOrder => return Some(m),
                MatchPolicy::Leftmost => {
                    if best.map_or(true, |b| at < b.start) {
                        best = Some(m);
                    }
                }
            }
        }
        best
    }
}
