//! Levenshtein edit distance over byte strings.
//!
//! The distance is computed with the Wagner–Fischer recurrence over a full
//! `(m+1) x (n+1)` matrix that lives for exactly one call. Strings are compared
//! byte by byte, so a multi-byte UTF-8 character counts as several units.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("Cannot allocate a {rows}x{cols} distance matrix")]
    ResourceExhaustion { rows: usize, cols: usize },
}

/// Dense row-major table of partial edit distances
struct DistanceMatrix {
    cells: Vec<usize>,
    cols: usize,
}

impl DistanceMatrix {
    /// Allocate a zeroed matrix of at most `max_cells` cells, reporting
    /// allocation failure instead of aborting.
    fn try_new(rows: usize, cols: usize, max_cells: usize) -> Result<Self, MatchError> {
        let exhausted = || MatchError::ResourceExhaustion { rows, cols };

        let len = rows
            .checked_mul(cols)
            .filter(|&len| len <= max_cells)
            .ok_or_else(exhausted)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| exhausted())?;
        cells.resize(len, 0);

        Ok(Self { cells, cols })
    }

    #[inline]
    fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.cols + j]
    }

    #[inline]
    fn set(&mut self, i: usize, j: usize, value: usize) {
        self.cells[i * self.cols + j] = value;
    }

    /// Run the recurrence for `s` (rows) against `t` (columns) and return D[m][n]
    fn fill(mut self, s: &[u8], t: &[u8]) -> usize {
        let (m, n) = (s.len(), t.len());

        for i in 0..=m {
            self.set(i, 0, i);
        }
        for j in 0..=n {
            self.set(0, j, j);
        }

        for i in 1..=m {
            for j in 1..=n {
                let value = if s[i - 1] == t[j - 1] {
                    self.get(i - 1, j - 1)
                } else {
                    1 + min3(
                        self.get(i - 1, j),     // deletion
                        self.get(i, j - 1),     // insertion
                        self.get(i - 1, j - 1), // substitution
                    )
                };
                self.set(i, j, value);
            }
        }

        self.get(m, n)
    }
}

#[inline]
fn min3(a: usize, b: usize, c: usize) -> usize {
    a.min(b).min(c)
}

/// Levenshtein distance between `s` and `t`.
///
/// # Panics
///
/// Panics if the distance matrix cannot be allocated; use [`try_distance`] to
/// observe that as an error instead.
///
/// # Examples
///
/// ```
/// use str_match::matching::distance::distance;
///
/// assert_eq!(distance("kitten", "sitting"), 3);
/// assert_eq!(distance("", "abc"), 3);
/// assert_eq!(distance(b"caf\xe9", b"cafe"), 1);
/// ```
#[must_use]
pub fn distance(s: impl AsRef<[u8]>, t: impl AsRef<[u8]>) -> usize {
    try_distance(s, t).unwrap_or_else(|err| panic!("{err}"))
}

/// Levenshtein distance between `s` and `t`, surfacing allocation failure.
///
/// # Errors
///
/// Returns `MatchError::ResourceExhaustion` if the distance matrix for the two
/// strings cannot be allocated.
pub fn try_distance(s: impl AsRef<[u8]>, t: impl AsRef<[u8]>) -> Result<usize, MatchError> {
    bounded_distance(s.as_ref(), t.as_ref(), usize::MAX)
}

/// Levenshtein distance whose matrix may hold at most `max_cells` cells.
///
/// # Errors
///
/// Returns `MatchError::ResourceExhaustion` if `(|s|+1) * (|t|+1)` exceeds
/// `max_cells` or the matrix cannot be allocated.
pub fn bounded_distance(s: &[u8], t: &[u8], max_cells: usize) -> Result<usize, MatchError> {
    Ok(DistanceMatrix::try_new(s.len() + 1, t.len() + 1, max_cells)?.fill(s, t))
}
