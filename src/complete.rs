//! Building full values out of partials.
//!
//! Completion is the inverse of [`RecursivePartial::into_partial`]: it
//! succeeds when every leaf of the partial is present, and otherwise
//! reports every absent leaf at once.

use crate::RecursivePartial;
use crate::error::IncompleteError;

/// A shape that can be rebuilt from a partial holding every leaf.
///
/// Implemented by `#[derive(RecursivePartial)]`. Fields marked
/// `#[partial(skip)]` are filled with `Default::default()`.
///
/// # Laws
///
/// ```text
/// T::try_complete(x.into_partial()) == Ok(x)
/// ```
///
/// # Examples
///
/// ```rust
/// use recursive_partial::{Complete, RecursivePartial};
///
/// #[derive(Debug, PartialEq, RecursivePartial)]
/// struct SodaWater {
///     co2: u32,
///     water: u32,
/// }
///
/// #[derive(Debug, PartialEq, RecursivePartial)]
/// struct CokeFormula {
///     #[partial(nested)]
///     soda_water: SodaWater,
///     sugar: u32,
/// }
///
/// let error = CokeFormula::try_complete(PartialCokeFormula {
///     soda_water: Some(PartialSodaWater { co2: Some(10), water: None }),
///     sugar: None,
/// })
/// .unwrap_err();
///
/// assert_eq!(error.missing, vec!["soda_water.water", "sugar"]);
/// ```
pub trait Complete: RecursivePartial {
    /// Completes `partial`, pushing the path of every absent leaf below
    /// `path` onto `missing`.
    ///
    /// Returns `None` when at least one leaf was absent.
    fn complete_at(partial: Self::Partial, path: &str, missing: &mut Vec<String>) -> Option<Self>;

    /// Completes `partial`, or lists every absent leaf.
    ///
    /// # Errors
    ///
    /// Returns [`IncompleteError`] when any leaf is absent.
    fn try_complete(partial: Self::Partial) -> Result<Self, IncompleteError> {
        let mut missing = Vec::new();
        match Self::complete_at(partial, "", &mut missing) {
            Some(value) if missing.is_empty() => Ok(value),
            _ => Err(IncompleteError::new(missing)),
        }
    }
}

impl<T: Complete> Complete for Box<T> {
    fn complete_at(partial: Self::Partial, path: &str, missing: &mut Vec<String>) -> Option<Self> {
        T::complete_at(*partial, path, missing).map(Box::new)
    }
}

/// Joins a field name onto a dotted path; the root path is empty.
///
/// ```rust
/// use recursive_partial::complete::field_path;
///
/// assert_eq!(field_path("", "sugar"), "sugar");
/// assert_eq!(field_path("soda_water", "co2"), "soda_water.co2");
/// ```
#[must_use]
pub fn field_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_owned()
    } else {
        format!("{prefix}.{name}")
    }
}
