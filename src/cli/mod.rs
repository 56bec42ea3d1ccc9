//! Command-line interface for str-match.
//!
//! ## Usage
//!
//! ```text
//! # Exact matching (mode 1)
//! str-match input.txt patterns.txt 1
//!
//! # Substring matching
//! str-match input.txt patterns.txt 2
//!
//! # Lines within edit distance 2 of a pattern, as JSON
//! str-match input.txt patterns.txt 3 --max-distance 2 --format json
//! ```

use clap::Parser;

pub mod search;

#[derive(Parser)]
#[command(name = "str-match")]
#[command(version)]
#[command(about = "Find input lines matching any pattern exactly, by substring, or by edit distance")]
#[command(
    long_about = "str-match reads an input file and a pattern file, one entry per line, and prints every input line that matches at least one pattern.\n\nRun modes:\n  1 - exact match\n  2 - substring match\n  3 - bounded edit distance (Levenshtein)\n\nAny other mode falls back to exact matching. A line is printed once for each pattern it matches."
)]
pub struct Cli {
    #[command(flatten)]
    pub search: search::SearchArgs,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
