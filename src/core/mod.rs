//! Core data types shared by the matching engine and the CLI.
//!
//! - [`RunMode`]: selects exact, substring, or bounded-edit matching
//!
//! ## Mode Selection
//!
//! The mode is chosen by the first character of the user's mode argument:
//!
//! | Char | Mode | Match when |
//! |------|------|------------|
//! | 1    | Exact | line equals pattern |
//! | 2    | Substring | pattern occurs in line |
//! | 3    | BoundedEdit | edit distance within threshold |
//!
//! Any other character falls back to Exact.

pub mod mode;

pub use mode::RunMode;
