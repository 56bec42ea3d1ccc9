//! Line matching engine and edit distance.
//!
//! - [`MatchEngine`]: runs every pattern against every corpus line
//! - [`distance`]: Levenshtein distance used by bounded-edit matching
//!
//! ## Strategies
//!
//! Lines and patterns are byte strings (`AsRef<[u8]>`); they need not be UTF-8.
//!
//! 1. **Exact**: the line equals the pattern byte for byte
//! 2. **Substring**: the pattern occurs anywhere in the line
//! 3. **Bounded edit**: the Levenshtein distance between line and pattern is at
//!    most [`MatchingConfig::edit_threshold`] (default [`DEFAULT_EDIT_THRESHOLD`])
//!
//! ## Example
//!
//! ```rust
//! use str_match::{MatchEngine, RunMode};
//!
//! let corpus = ["cat", "cats", "dog"];
//! let engine = MatchEngine::new(RunMode::BoundedEdit);
//!
//! for m in engine.find_matches(&corpus, &["cat"]).unwrap() {
//!     println!("{} (distance {:?})", String::from_utf8_lossy(m.line), m.distance);
//! }
//! ```

pub mod distance;
pub mod engine;

pub use distance::{bounded_distance, distance, try_distance, MatchError};
pub use engine::{
    match_lines, LineMatch, MatchEngine, MatchingConfig, DEFAULT_EDIT_THRESHOLD,
    DEFAULT_MAX_MATRIX_CELLS,
};
