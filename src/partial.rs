//! The recursive partial transformation.
//!
//! A *shape* is a struct with named fields. Its *partial* is the struct with
//! the same fields where every field is optional, and where every field
//! holding a record shape holds the partial of that shape instead:
//!
//! ```text
//! struct CokeFormula {            struct PartialCokeFormula {
//!     soda_water: SodaWater,  =>      soda_water: Option<PartialSodaWater>,
//!     sugar: u32,                     sugar: Option<u32>,
//! }                               }
//! ```
//!
//! Fields that are not record shapes (numbers, strings, collections,
//! functions, `Option`s) are leaves: only their optionality changes.
//!
//! Whether a field is a record shape is decided explicitly with
//! `#[partial(nested)]` when deriving; nothing is inferred from the type.
//!
//! # Saturation
//!
//! A partial is its own partial: `<PartialT as RecursivePartial>::Partial`
//! is `PartialT`. Applying the transformation twice changes nothing.

/// A shape with a recursive partial form.
///
/// Usually implemented with `#[derive(RecursivePartial)]`.
///
/// # Laws
///
/// - `Self::Partial::default()` is the empty partial: no field is present.
/// - `into_partial` is total: every field of the result is present.
///
/// # Examples
///
/// ```rust
/// use recursive_partial::RecursivePartial;
///
/// #[derive(Debug, PartialEq, RecursivePartial)]
/// struct SodaWater {
///     co2: u32,
///     water: u32,
/// }
///
/// let partial = SodaWater { co2: 10, water: 40 }.into_partial();
/// assert_eq!(partial.co2, Some(10));
/// assert_eq!(partial.water, Some(40));
///
/// let empty = PartialSodaWater::default();
/// assert!(empty.is_empty());
/// ```
pub trait RecursivePartial: Sized {
    /// The recursive partial of `Self`.
    type Partial: Default;

    /// Lifts a full value into its partial with every field present.
    #[must_use]
    fn into_partial(self) -> Self::Partial;
}

/// A boxed shape is partial through a boxed partial.
impl<T: RecursivePartial> RecursivePartial for Box<T> {
    type Partial = Box<T::Partial>;

    fn into_partial(self) -> Self::Partial {
        Box::new((*self).into_partial())
    }
}

#[cfg(all(test, feature = "derive"))]
mod tests {
    use super::*;
    use rstest::rstest;
    use static_assertions::assert_type_eq_all;

    #[derive(Debug, PartialEq, crate::RecursivePartial)]
    #[partial(derive(Debug, PartialEq))]
    struct Inner {
        value: i32,
    }

    #[derive(Debug, PartialEq, crate::RecursivePartial)]
    #[partial(derive(Debug, PartialEq))]
    struct Outer {
        #[partial(nested)]
        inner: Box<Inner>,
        label: String,
    }

    assert_type_eq_all!(<Box<Inner> as RecursivePartial>::Partial, Box<PartialInner>);
    assert_type_eq_all!(<PartialOuter as RecursivePartial>::Partial, PartialOuter);

    #[rstest]
    fn box_into_partial_lifts_inner_value() {
        let boxed = Box::new(Inner { value: 7 });

        assert_eq!(boxed.into_partial(), Box::new(PartialInner { value: Some(7) }));
    }

    #[rstest]
    fn into_partial_fills_every_field() {
        let outer = Outer {
            inner: Box::new(Inner { value: 1 }),
            label: "outer".to_string(),
        };

        assert_eq!(
            outer.into_partial(),
            PartialOuter {
                inner: Some(Box::new(PartialInner { value: Some(1) })),
                label: Some("outer".to_string()),
            }
        );
    }

    #[rstest]
    fn partial_into_partial_is_identity() {
        let partial = PartialOuter {
            inner: None,
            label: Some("only label".to_string()),
        };

        assert_eq!(
            partial.into_partial(),
            PartialOuter {
                inner: None,
                label: Some("only label".to_string()),
            }
        );
    }

    #[rstest]
    fn default_partial_is_empty() {
        assert!(PartialOuter::default().is_empty());
        assert!(!PartialInner { value: Some(0) }.is_empty());
    }
}
