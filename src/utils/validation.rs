//! Input size limits.

use crate::parsing::lines::LoadError;

/// Maximum number of lines accepted from a single input file (DOS protection)
pub const MAX_LINES: usize = 1_000_000;

/// Check if adding another line would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new line.
///
/// # Errors
///
/// Returns `LoadError::TooManyLines` with the count the file would reach if
/// adding one more line exceeds `MAX_LINES`.
///
/// # Examples
///
/// ```
/// use str_match::utils::validation::{check_line_limit, MAX_LINES};
///
/// assert!(check_line_limit(0).is_ok());
/// assert!(check_line_limit(MAX_LINES).is_err());
/// ```
pub fn check_line_limit(count: usize) -> Result<(), LoadError> {
    if count >= MAX_LINES {
        Err(LoadError::TooManyLines(count + 1))
    } else {
        Ok(())
    }
}
