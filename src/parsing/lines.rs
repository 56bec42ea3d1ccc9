use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::utils::validation::{check_line_limit, MAX_LINES};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Too many lines: {0} exceeds maximum allowed ({MAX_LINES})")]
    TooManyLines(usize),
}

/// Read a file into its lines as raw bytes
///
/// Any byte content is accepted; lines need not be valid UTF-8.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, or
/// `LoadError::TooManyLines` if the limit is exceeded.
pub fn read_lines(path: &Path) -> Result<Vec<Vec<u8>>, LoadError> {
    let content = std::fs::read(path)?;
    let lines = split_lines(&content)?;
    debug!(path = %path.display(), lines = lines.len(), "Loaded lines");
    Ok(lines)
}

/// Split bytes into lines.
///
/// Lines end at `\n` and a trailing `\r` is dropped. A final line without a
/// newline is kept, and a trailing newline does not produce an extra empty
/// line. Empty lines in the middle of the text are kept.
///
/// # Errors
///
/// Returns `LoadError::TooManyLines` if the data has more than `MAX_LINES` lines.
pub fn split_lines(data: &[u8]) -> Result<Vec<Vec<u8>>, LoadError> {
    let mut lines = Vec::new();
    let mut start = 0;

    for end in memchr::memchr_iter(b'\n', data) {
        check_line_limit(lines.len())?;
        lines.push(strip_cr(&data[start..end]).to_vec());
        start = end + 1;
    }

    if start < data.len() {
        check_line_limit(lines.len())?;
        lines.push(strip_cr(&data[start..]).to_vec());
    }

    Ok(lines)
}

fn strip_cr(line: &[u8]) -> &[u8] {
    line.strip_suffix(b"\r").unwrap_or(line)
}
