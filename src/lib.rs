//! # str-match
//!
//! A library for finding the lines of a text corpus that match any of a set of
//! patterns.
//!
//! Three matching semantics are supported, selected by [`RunMode`]:
//!
//! - **Exact**: the line is equal to the pattern
//! - **Substring**: the pattern occurs somewhere in the line
//! - **Bounded edit**: the Levenshtein distance between line and pattern is
//!   within a small threshold (1 by default)
//!
//! Results are produced pattern by pattern, and within each pattern in corpus
//! order. A line matching several patterns is reported once for each of them.
//! Lines are compared as bytes, so input need not be valid UTF-8.
//!
//! ## Example
//!
//! ```rust
//! use str_match::{match_lines, RunMode};
//!
//! let corpus = ["cat", "cats", "dog"];
//! let matches = match_lines(&corpus, &["cat"], RunMode::BoundedEdit).unwrap();
//! assert_eq!(matches, [b"cat".as_slice(), b"cats".as_slice()]);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Run mode selection
//! - [`matching`]: Matching engine and edit distance
//! - [`parsing`]: Loading corpus and pattern files
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use core::mode::RunMode;
pub use matching::distance::{bounded_distance, distance, try_distance, MatchError};
pub use matching::engine::{
    match_lines, LineMatch, MatchEngine, MatchingConfig, DEFAULT_EDIT_THRESHOLD,
    DEFAULT_MAX_MATRIX_CELLS,
};
