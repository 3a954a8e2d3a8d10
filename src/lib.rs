//! # textkit
//!
//! String toolkit built around a literal multi-pattern rewriting engine.
//!
//! ## Module Organization
//!
//! - [`text`] - Multi-pattern replace/highlight, HTML entities, byte-bounded truncation
//! - [`validate`] - Blank, length, numeric, date and regex predicates
//! - [`convert`] - String slices to typed vectors
//! - [`number`] - Grouped number formatting
//! - [`codec`] - Form URL encoding with charset labels (feature `url`)
//! - [`datetime`] - Date formatting and parsing (feature `datetime`)
//! - [`digest`] - MD5 hex digests (feature `digest`)
//!
//! ## Quick Start
//!
//! ```
//! use textkit::text::{decode_html, encode_html, highlight, truncate_to_byte_length};
//!
//! let html = encode_html("<b>Tom & Jerry</b>");
//! assert_eq!(html, "&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;");
//! assert_eq!(decode_html(&html), "<b>Tom & Jerry</b>");
//!
//! let marked = highlight("Tom & Jerry", &["Tom", "Jerry"], "[", "]").unwrap();
//! assert_eq!(marked, "[Tom] & [Jerry]");
//!
//! assert_eq!(truncate_to_byte_length("日本語", 7), "日本");
//! ```
//!
//! ## Features
//!
//! - `std` (default) - Enable std; without it the `text`, `convert`,
//!   `number` and numeric `validate` APIs still work on `alloc`
//! - `regex` (default) - Named pattern registry and regex predicates
//! - `url` (default) - Form URL codec
//! - `datetime` (default) - Date predicates, formatting and parsing
//! - `digest` (default) - MD5 digests
//! - `serde` - Serialization of [`text::RewriteConfig`]
//! - `cli` - The `textkit` binary

// Use no_std unless std feature is enabled or we're in test mode
#![cfg_attr(not(any(test, feature = "std")), no_std)]

// When using no_std, we need to explicitly link the alloc crate
#[cfg(not(any(test, feature = "std")))]
extern crate alloc;

// When using std, re-export alloc types from std for compatibility
#[cfg(any(test, feature = "std"))]
extern crate std as alloc;

// =============================================================================
// Core modules
// =============================================================================

/// Multi-pattern rewriting, HTML entities and truncation.
pub mod text;

// =============================================================================
// Helper modules
// =============================================================================

/// Validation predicates.
pub mod validate;

/// Conversions from string slices to typed vectors.
pub mod convert;

/// Number formatting.
pub mod number;

/// Encoding and decoding for transport.
#[cfg(feature = "url")]
pub mod codec;

/// Date formatting and parsing.
#[cfg(feature = "datetime")]
pub mod datetime;

/// Message digests.
#[cfg(feature = "digest")]
pub mod digest;

// =============================================================================
// Public re-exports
// =============================================================================

pub use text::{
    decode_html, encode_html, highlight, replace_all, replace_all_any, replace_all_array,
    truncate_to_byte_length, Action, MatchPolicy, PatternSet, RewriteConfig, RewriteError,
    Rewriter,
};
