//! Configuration for multi-pattern rewriting.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the scanner chooses between several patterns that all occur in a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MatchPolicy {
    /// The first pattern (by position in the pattern list) that occurs
    /// anywhere in the text wins, at its first occurrence. A later pattern
    /// occurring earlier in the text is ignored for this split.
    #[default]
    ArrayOrder,
    /// The occurrence with the smallest offset wins. Occurrences starting at
    /// the same offset go to the lower pattern index.
    Leftmost,
}

/// Configuration for [`Rewriter`](super::Rewriter).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RewriteConfig {
    /// Match selection policy (default: [`MatchPolicy::ArrayOrder`])
    pub policy: MatchPolicy,
}

impl RewriteConfig {
    /// Configuration using array-order match selection (the default).
    pub fn array_order() -> Self {
        Self::default()
    }

    /// Configuration using leftmost match selection.
    pub fn leftmost() -> Self {
        Self {
            policy: MatchPolicy::Leftmost,
        }
    }

    /// Set the match selection policy.
    pub fn with_policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }
}
