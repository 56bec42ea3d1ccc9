use serde::Serialize;

/// Matching semantics selected for a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    /// Line must equal the pattern exactly
    #[default]
    Exact,
    /// Pattern must occur somewhere within the line
    Substring,
    /// Line must be within the edit threshold of the pattern
    BoundedEdit,
}

impl RunMode {
    /// Map a single mode character to a run mode.
    ///
    /// `'1'`, `'2'` and `'3'` select exact, substring and bounded-edit
    /// matching. Every other character selects [`RunMode::Exact`].
    ///
    /// # Examples
    ///
    /// ```
    /// use str_match::RunMode;
    ///
    /// assert_eq!(RunMode::from_char('3'), RunMode::BoundedEdit);
    /// assert_eq!(RunMode::from_char('9'), RunMode::Exact);
    /// ```
    #[must_use]
    pub fn from_char(c: char) -> Self {
        match c {
            '1' => Self::Exact,
            '2' => Self::Substring,
            '3' => Self::BoundedEdit,
            _ => Self::default(),
        }
    }

    /// Map user input to a run mode using only its first character.
    ///
    /// An empty string selects [`RunMode::Exact`].
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        arg.chars().next().map_or_else(Self::default, Self::from_char)
    }
}

impl std::fmt::Display for RunMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::Substring => write!(f, "substring"),
            Self::BoundedEdit => write!(f, "bounded-edit"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognized_mode_chars() {
        assert_eq!(RunMode::from_char('1'), RunMode::Exact);
        assert_eq!(RunMode::from_char('2'), RunMode::Substring);
        assert_eq!(RunMode::from_char('3'), RunMode::BoundedEdit);
    }

    #[test]
    fn test_unrecognized_mode_falls_back_to_exact() {
        for c in ['0', '4', '9', 'x', ' ', '-'] {
            assert_eq!(RunMode::from_char(c), RunMode::Exact, "mode char {c:?}");
        }
        assert_eq!(RunMode::default(), RunMode::Exact);
    }

    #[test]
    fn test_from_arg_uses_first_char() {
        assert_eq!(RunMode::from_arg("3"), RunMode::BoundedEdit);
        assert_eq!(RunMode::from_arg("2xyz"), RunMode::Substring);
        assert_eq!(RunMode::from_arg("31"), RunMode::BoundedEdit);
        assert_eq!(RunMode::from_arg("exact"), RunMode::Exact);
        assert_eq!(RunMode::from_arg(""), RunMode::Exact);
    }
}
