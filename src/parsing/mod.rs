//! Loading corpus and pattern files.
//!
//! Both the input corpus and the pattern set are plain text files with one
//! entry per line. See [`lines::split_lines`] for the exact line rules.
//!
//! ## Example
//!
//! ```rust,no_run
//! use str_match::parsing::lines::read_lines;
//! use std::path::Path;
//!
//! let corpus = read_lines(Path::new("input.txt")).unwrap();
//! let patterns = read_lines(Path::new("patterns.txt")).unwrap();
//! ```

pub mod lines;
