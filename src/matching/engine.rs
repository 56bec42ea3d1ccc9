use memchr::memmem;
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::core::mode::RunMode;
use crate::matching::distance::{bounded_distance, MatchError};

/// Default maximum edit distance for a bounded-edit match
pub const DEFAULT_EDIT_THRESHOLD: usize = 1;

/// Default cap on distance matrix cells for one comparison (2 GiB on 64-bit targets)
pub const DEFAULT_MAX_MATRIX_CELLS: usize = 1 << 28;

/// Configuration for the matching engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchingConfig {
    /// Maximum Levenshtein distance accepted in bounded-edit mode
    pub edit_threshold: usize,

    /// Largest distance matrix one comparison may allocate
    pub max_matrix_cells: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            edit_threshold: DEFAULT_EDIT_THRESHOLD,
            max_matrix_cells: DEFAULT_MAX_MATRIX_CELLS,
        }
    }
}

/// A corpus line accepted by one pattern
///
/// Lines and patterns are raw bytes; when serialized they are written as
/// strings with invalid UTF-8 replaced by U+FFFD.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineMatch<'a> {
    /// Position of the pattern in the pattern set
    pub pattern_index: usize,

    /// Position of the line in the corpus
    pub line_index: usize,

    #[serde(serialize_with = "serialize_lossy")]
    pub pattern: &'a [u8],

    #[serde(serialize_with = "serialize_lossy")]
    pub line: &'a [u8],

    /// Edit distance between line and pattern (bounded-edit mode only)
    pub distance: Option<usize>,
}

fn serialize_lossy<S: Serializer>(bytes: &&[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&String::from_utf8_lossy(bytes))
}

/// One pattern prepared for the selected mode
enum Strategy<'p> {
    Exact(&'p [u8]),
    Substring(memmem::Finder<'p>),
    BoundedEdit(&'p [u8]),
}

/// Outcome of testing one line against one pattern
struct Comparison {
    matched: bool,
    distance: Option<usize>,
}

/// The main matching engine
///
/// Patterns are visited in order, and for each pattern every corpus line is
/// tested in order. A line accepted by several patterns is reported once per
/// pattern. Lines and patterns are compared as bytes, so any content is
/// accepted, valid UTF-8 or not.
#[derive(Debug, Clone, Copy)]
pub struct MatchEngine {
    mode: RunMode,
    config: MatchingConfig,
}

impl MatchEngine {
    /// Create a new matching engine with default configuration
    #[must_use]
    pub fn new(mode: RunMode) -> Self {
        Self {
            mode,
            config: MatchingConfig::default(),
        }
    }

    /// Create a new matching engine with custom configuration
    #[must_use]
    pub fn with_config(mode: RunMode, config: MatchingConfig) -> Self {
        Self { mode, config }
    }

    #[must_use]
    pub fn mode(&self) -> RunMode {
        self.mode
    }

    #[must_use]
    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Find every (pattern, line) pair accepted by the selected strategy.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::ResourceExhaustion` if a distance matrix cannot be
    /// allocated in bounded-edit mode. No partial results are returned.
    pub fn find_matches<'a, C, P>(
        &self,
        corpus: &'a [C],
        patterns: &'a [P],
    ) -> Result<Vec<LineMatch<'a>>, MatchError>
    where
        C: AsRef<[u8]>,
        P: AsRef<[u8]>,
    {
        debug!(
            mode = %self.mode,
            lines = corpus.len(),
            patterns = patterns.len(),
            "Starting match run"
        );

        let mut matches = Vec::new();

        for (pattern_index, pattern) in patterns.iter().enumerate() {
            let pattern = pattern.as_ref();
            let strategy = self.prepare(pattern);

            for (line_index, line) in corpus.iter().enumerate() {
                let line = line.as_ref();
                let comparison = self.compare(&strategy, line)?;

                if comparison.matched {
                    matches.push(LineMatch {
                        pattern_index,
                        line_index,
                        pattern,
                        line,
                        distance: comparison.distance,
                    });
                }
            }
        }

        debug!(matches = matches.len(), "Match run complete");
        Ok(matches)
    }

    /// Matching corpus lines in pattern-major, then corpus order.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::ResourceExhaustion` if a distance matrix cannot be
    /// allocated in bounded-edit mode.
    pub fn match_lines<'a, C, P>(
        &self,
        corpus: &'a [C],
        patterns: &'a [P],
    ) -> Result<Vec<&'a [u8]>, MatchError>
    where
        C: AsRef<[u8]>,
        P: AsRef<[u8]>,
    {
        Ok(self
            .find_matches(corpus, patterns)?
            .into_iter()
            .map(|m| m.line)
            .collect())
    }

    fn prepare<'p>(&self, pattern: &'p [u8]) -> Strategy<'p> {
        match self.mode {
            RunMode::Exact => Strategy::Exact(pattern),
            RunMode::Substring => Strategy::Substring(memmem::Finder::new(pattern)),
            RunMode::BoundedEdit => Strategy::BoundedEdit(pattern),
        }
    }

    fn compare(&self, strategy: &Strategy, line: &[u8]) -> Result<Comparison, MatchError> {
        let comparison = match strategy {
            Strategy::Exact(pattern) => Comparison {
                matched: line == *pattern,
                distance: None,
            },
            Strategy::Substring(finder) => Comparison {
                matched: finder.find(line).is_some(),
                distance: None,
            },
            Strategy::BoundedEdit(pattern) => {
                let d = bounded_distance(line, pattern, self.config.max_matrix_cells)?;
                Comparison {
                    matched: d <= self.config.edit_threshold,
                    distance: Some(d),
                }
            }
        };
        Ok(comparison)
    }
}

/// Match `patterns` against `corpus` under `mode` with the default configuration.
///
/// # Errors
///
/// Returns `MatchError::ResourceExhaustion` if a distance matrix cannot be
/// allocated in bounded-edit mode.
///
/// # Examples
///
/// ```
/// use str_match::{match_lines, RunMode};
///
/// let corpus = ["abc", "abd", "abc"];
/// let matches = match_lines(&corpus, &["abc"], RunMode::Exact).unwrap();
/// assert_eq!(matches, [b"abc", b"abc"]);
/// ```
pub fn match_lines<'a, C, P>(
    corpus: &'a [C],
    patterns: &'a [P],
    mode: RunMode,
) -> Result<Vec<&'a [u8]>, MatchError>
where
    C: AsRef<[u8]>,
    P: AsRef<[u8]>,
{
    MatchEngine::new(mode).match_lines(corpus, patterns)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_MODES: [RunMode; 3] = [RunMode::Exact, RunMode::Substring, RunMode::BoundedEdit];

    fn text<'a>(lines: Vec<&'a [u8]>) -> Vec<&'a str> {
        lines
            .into_iter()
            .map(|line| std::str::from_utf8(line).unwrap())
            .collect()
    }

    #[test]
    fn test_exact_keeps_duplicates_in_corpus_order() {
        let corpus = ["abc", "abd", "abc"];
        let result = text(match_lines(&corpus, &["abc"], RunMode::Exact).unwrap());
        assert_eq!(result, ["abc", "abc"]);
    }

    #[test]
    fn test_exact_is_case_and_whitespace_sensitive() {
        let corpus = ["abc", "ABC", "abc ", " abc"];
        let result = text(match_lines(&corpus, &["abc"], RunMode::Exact).unwrap());
        assert_eq!(result, ["abc"]);
    }

    #[test]
    fn test_substring() {
        let corpus = ["hello world", "foo"];
        let result = text(match_lines(&corpus, &["lo w"], RunMode::Substring).unwrap());
        assert_eq!(result, ["hello world"]);
    }

    #[test]
    fn test_empty_substring_matches_every_line() {
        let corpus = ["hello", "", "foo"];
        let result = text(match_lines(&corpus, &[""], RunMode::Substring).unwrap());
        assert_eq!(result, ["hello", "", "foo"]);
    }

    #[test]
    fn test_bounded_edit() {
        let corpus = ["cat", "cats", "dog"];
        let result = text(match_lines(&corpus, &["cat"], RunMode::BoundedEdit).unwrap());
        assert_eq!(result, ["cat", "cats"]);
    }

    #[test]
    fn test_bounded_edit_reports_distances() {
        let corpus = ["cat", "cats", "dog", "at"];
        let engine = MatchEngine::new(RunMode::BoundedEdit);
        let matches = engine.find_matches(&corpus, &["cat"]).unwrap();

        let found: Vec<(&[u8], Option<usize>)> =
            matches.iter().map(|m| (m.line, m.distance)).collect();
        assert_eq!(
            found,
            [
                (b"cat".as_slice(), Some(0)),
                (b"cats".as_slice(), Some(1)),
                (b"at".as_slice(), Some(1))
            ]
        );
    }

    #[test]
    fn test_custom_edit_threshold() {
        let corpus = ["cat", "cats", "dog", "kitten"];
        let config = MatchingConfig {
            edit_threshold: 3,
            ..MatchingConfig::default()
        };
        let engine = MatchEngine::with_config(RunMode::BoundedEdit, config);
        assert_eq!(
            text(engine.match_lines(&corpus, &["cat"]).unwrap()),
            ["cat", "cats", "dog"]
        );

        let config = MatchingConfig {
            edit_threshold: 0,
            ..MatchingConfig::default()
        };
        let strict = MatchEngine::with_config(RunMode::BoundedEdit, config);
        assert_eq!(text(strict.match_lines(&corpus, &["cat"]).unwrap()), ["cat"]);
    }

    #[test]
    fn test_default_threshold() {
        assert_eq!(DEFAULT_EDIT_THRESHOLD, 1);
        assert_eq!(MatchingConfig::default().edit_threshold, DEFAULT_EDIT_THRESHOLD);
        assert_eq!(
            MatchEngine::new(RunMode::BoundedEdit).config().edit_threshold,
            DEFAULT_EDIT_THRESHOLD
        );
    }

    #[test]
    fn test_unrecognized_mode_behaves_like_exact() {
        let corpus = ["abc", "abcd", "xabc", "abd"];
        let patterns = ["abc", "abd"];
        let fallback = match_lines(&corpus, &patterns, RunMode::from_char('9')).unwrap();
        let exact = match_lines(&corpus, &patterns, RunMode::Exact).unwrap();
        assert_eq!(fallback, exact);
        assert_eq!(text(fallback), ["abc", "abd"]);
    }

    #[test]
    fn test_empty_inputs_yield_nothing() {
        let empty: [&str; 0] = [];
        for mode in ALL_MODES {
            assert!(match_lines(&empty, &["abc"], mode).unwrap().is_empty());
            assert!(match_lines(&["abc"], &empty, mode).unwrap().is_empty());
            assert!(match_lines(&empty, &empty, mode).unwrap().is_empty());
        }
    }

    #[test]
    fn test_pattern_major_order() {
        let corpus = ["b", "a", "ab"];
        let patterns = ["a", "b"];
        let matches = MatchEngine::new(RunMode::Substring)
            .find_matches(&corpus, &patterns)
            .unwrap();

        let order: Vec<(usize, usize)> = matches
            .iter()
            .map(|m| (m.pattern_index, m.line_index))
            .collect();
        assert_eq!(order, [(0, 1), (0, 2), (1, 0), (1, 2)]);

        let lines: Vec<&[u8]> = matches.iter().map(|m| m.line).collect();
        assert_eq!(text(lines), ["a", "ab", "b", "ab"]);
    }

    #[test]
    fn test_line_reported_once_per_matching_pattern() {
        let corpus = ["cat"];
        let patterns = ["cat", "bat", "cat"];
        let result = text(match_lines(&corpus, &patterns, RunMode::BoundedEdit).unwrap());
        assert_eq!(result, ["cat", "cat", "cat"]);
    }

    #[test]
    fn test_deterministic() {
        let corpus = vec!["alpha".to_string(), "alpine".to_string(), "beta".to_string()];
        let patterns = vec!["alp".to_string(), "a".to_string()];
        for mode in ALL_MODES {
            let first = match_lines(&corpus, &patterns, mode).unwrap();
            let second = match_lines(&corpus, &patterns, mode).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_inputs_not_mutated() {
        let corpus = vec!["one".to_string(), "two".to_string()];
        let patterns = vec!["one".to_string()];
        let before = (corpus.clone(), patterns.clone());
        let _ = match_lines(&corpus, &patterns, RunMode::BoundedEdit).unwrap();
        assert_eq!((corpus, patterns), before);
    }

    #[test]
    fn test_distance_only_in_bounded_edit() {
        let corpus = ["abc"];
        for mode in [RunMode::Exact, RunMode::Substring] {
            let matches = MatchEngine::new(mode).find_matches(&corpus, &["abc"]).unwrap();
            assert_eq!(matches.len(), 1);
            assert_eq!(matches[0].distance, None);
        }
    }

    #[test]
    fn test_non_utf8_lines() {
        let corpus: [&[u8]; 3] = [b"caf\xe9", b"abc", b"caf\xe9s"];
        let exact = match_lines(&corpus, &[b"caf\xe9"], RunMode::Exact).unwrap();
        assert_eq!(exact, [b"caf\xe9"]);

        let substring = match_lines(&corpus, &[b"\xe9"], RunMode::Substring).unwrap();
        assert_eq!(substring, [b"caf\xe9".as_slice(), b"caf\xe9s".as_slice()]);

        let edit = match_lines(&corpus, &[b"cafe"], RunMode::BoundedEdit).unwrap();
        assert_eq!(edit, [b"caf\xe9"]);
    }

    #[test]
    fn test_resource_exhaustion_propagates() {
        let config = MatchingConfig {
            max_matrix_cells: 16,
            ..MatchingConfig::default()
        };
        let engine = MatchEngine::with_config(RunMode::BoundedEdit, config);

        // "cat" x "cat" fits in 16 cells, "kitten" x "cat" needs 7x4
        assert_eq!(text(engine.match_lines(&["cat"], &["cat"]).unwrap()), ["cat"]);
        let err = engine.find_matches(&["cat", "kitten"], &["cat"]).unwrap_err();
        assert_eq!(err, MatchError::ResourceExhaustion { rows: 7, cols: 4 });
    }

    #[test]
    fn test_matrix_cap_ignored_outside_bounded_edit() {
        let config = MatchingConfig {
            max_matrix_cells: 0,
            ..MatchingConfig::default()
        };
        for mode in [RunMode::Exact, RunMode::Substring] {
            let engine = MatchEngine::with_config(mode, config);
            let result = text(engine.match_lines(&["kitten"], &["kitten"]).unwrap());
            assert_eq!(result, ["kitten"]);
        }
    }
}
