//! Error types for completing partials.

/// A partial could not be completed because required fields were absent.
///
/// Field paths are dotted from the root shape, so a missing `co2` inside a
/// nested `soda_water` is reported as `soda_water.co2`.
///
/// # Examples
///
/// ```rust
/// use recursive_partial::IncompleteError;
///
/// let error = IncompleteError::new(vec![
///     "soda_water.co2".to_string(),
///     "sugar".to_string(),
/// ]);
/// assert_eq!(
///     format!("{}", error),
///     "missing required fields: soda_water.co2, sugar"
/// );
/// assert!(error.is_missing("sugar"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncompleteError {
    /// Dotted paths of the absent fields, in declaration order.
    pub missing: Vec<String>,
}

impl IncompleteError {
    /// Creates an error listing the given missing field paths.
    #[must_use]
    pub const fn new(missing: Vec<String>) -> Self {
        Self { missing }
    }

    /// Returns `true` when `path` is one of the missing fields.
    #[must_use]
    pub fn is_missing(&self, path: &str) -> bool {
        self.missing.iter().any(|missing| missing == path)
    }
}

impl std::fmt::Display for IncompleteError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "missing required fields: {}",
            self.missing.join(", ")
        )
    }
}

impl std::error::Error for IncompleteError {}

static_assertions::assert_impl_all!(IncompleteError: Send, Sync, std::error::Error);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn display_lists_every_path() {
        let error = IncompleteError::new(vec!["a".to_string(), "b.c".to_string()]);

        assert_eq!(error.to_string(), "missing required fields: a, b.c");
    }

    #[rstest]
    #[case("a", true)]
    #[case("b.c", true)]
    #[case("b", false)]
    fn is_missing_matches_whole_paths(#[case] path: &str, #[case] expected: bool) {
        let error = IncompleteError::new(vec!["a".to_string(), "b.c".to_string()]);

        assert_eq!(error.is_missing(path), expected);
    }
}
