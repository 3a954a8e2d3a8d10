//! Text transformation.
//!
//! This module holds the literal multi-pattern rewriting engine and the
//! operations built on it.
//!
//! ## Rewriting
//!
//! [`Rewriter`] pairs a [`PatternSet`] with an [`Action`] and rewrites texts
//! by splitting them at matches. The free functions [`replace_all`],
//! [`replace_all_any`], [`replace_all_array`] and [`highlight`] cover the
//! common cases:
//!
//! ```
//! use textkit::text::{replace_all, replace_all_array};
//!
//! assert_eq!(replace_all("a.b.c", ".", "/").unwrap(), "a/b/c");
//! assert_eq!(
//!     replace_all_array("yes or no", &["yes", "no"], &["no", "yes"]).unwrap(),
//!     "no or yes"
//! );
//! ```
//!
//! Which occurrence splits a text first is decided by [`MatchPolicy`]. The
//! default, [`MatchPolicy::ArrayOrder`], lets the first listed pattern that
//! occurs anywhere win; [`MatchPolicy::Leftmost`] picks the earliest
//! occurrence instead. The two only differ when patterns overlap.
//!
//! ## HTML entities
//!
//! [`encode_html`] and [`decode_html`] handle `&`, `<`, `>` and `"`.
//!
//! ## Truncation
//!
//! [`truncate_to_byte_length`] cuts text to a UTF-8 byte budget without
//! splitting characters.

pub mod config;
pub mod html;
pub mod rewrite;
pub mod scan;
pub mod truncate;

// Re-export commonly used types
pub use config::{MatchPolicy, RewriteConfig};
pub use html::{decode_html, encode_html};
pub use rewrite::{
    highlight, replace_all, replace_all_any, replace_all_array, Action, RewriteError, Rewriter,
};
pub use scan::{find_first, Match, PatternSet};
pub use truncate::truncate_to_byte_length;
