//! A lightweight wildcard pattern matching library.
//!
//! This crate decides whether a whole text matches a glob-like pattern. One matching
//! algorithm is shared by two character domains:
//!
//! - [`narrow`] works on byte strings and classifies ASCII digits as numeric
//! - [`wide`] works on `char` (and UTF-16) strings and classifies any Unicode numeric
//!   character as numeric
//!
//! # Pattern Syntax
//!
//! - `*` - Matches zero or more symbols
//! - `?` - Matches exactly one symbol
//! - `#` - Matches one or more consecutive numeric symbols
//! - Any other symbol matches itself, case-sensitively
//!
//! There are no escapes and no character classes. Matching is always anchored at both ends.
//!
//! # Examples
//!
//! ```
//! use wildcard::{narrow, wide};
//!
//! assert!(narrow::matches(b"*.txt", b"report.v2.txt"));
//! assert!(!narrow::matches(b"*.txt", b"report.txt.bak"));
//!
//! assert!(narrow::matches(b"v#.*", b"v12.final"));
//! assert!(!narrow::matches(b"v#.*", b"v.final"));
//!
//! // Wide matching treats non-ASCII digits as numeric too.
//! assert!(wide::matches_str("build-#", "build-٤٢"));
//! assert!(!narrow::matches("build-#".as_bytes(), "build-٤٢".as_bytes()));
//! ```
//!
//! # Custom classification
//!
//! The generic [`matches`] function accepts any [`Classify`] implementation, including closures:
//!
//! ```
//! let hex = |b: u8| b.is_ascii_hexdigit();
//! assert!(wildcard::matches(b"0x#", b"0xdeadBEEF", &hex));
//! ```
//!
//! # Complexity
//!
//! Matching never recurses and is polynomial in the pattern and text lengths for any input,
//! including patterns with many consecutive or interleaved wildcards.

mod classify;
mod pattern;
mod symbol;

pub mod narrow;
pub mod wide;

pub use classify::{AsciiDigit, Classify, UnicodeNumeric};
pub use pattern::{matches, min_len};
pub use symbol::{Symbol, until_nul};
