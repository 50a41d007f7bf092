//! Overlaying partials onto full values, and onto each other.
//!
//! An overlay applies the fields present in a partial on top of a base:
//!
//! - a present leaf replaces the base value
//! - a present nested partial is overlaid onto the nested base value
//! - an absent field keeps the base value
//!
//! Partials overlay onto partials the same way (`combine_partials`), with
//! the right-hand side winning on every leaf present on both sides.
//!
//! # Laws
//!
//! For all `x: T`, `a`, `b`, `c: T::Partial`:
//!
//! ## Identity
//!
//! ```text
//! x.overlaid(T::Partial::default()) == x
//! ```
//!
//! ## Composition
//!
//! ```text
//! x.overlaid(a).overlaid(b) == x.overlaid(a.overlaid(b))
//! ```
//!
//! ## Associativity of combined partials
//!
//! ```text
//! a.overlaid(b).overlaid(c) == a.overlaid(b.overlaid(c))
//! ```
//!
//! ## Full overwrite
//!
//! ```text
//! x.overlaid(y.into_partial()) == y
//! ```

use crate::RecursivePartial;

/// A shape whose partial can be applied on top of it.
///
/// Implemented by `#[derive(RecursivePartial)]` for both the shape and its
/// generated partial struct.
///
/// # Examples
///
/// ```rust
/// use recursive_partial::{Overlay, RecursivePartial};
///
/// #[derive(Clone, Debug, PartialEq, RecursivePartial)]
/// struct SodaWater {
///     co2: u32,
///     water: u32,
/// }
///
/// #[derive(Clone, Debug, PartialEq, RecursivePartial)]
/// struct CokeFormula {
///     #[partial(nested)]
///     soda_water: SodaWater,
///     sugar: u32,
/// }
///
/// let defaults = CokeFormula {
///     soda_water: SodaWater { co2: 10, water: 40 },
///     sugar: 50,
/// };
///
/// let formula = defaults.overlaid(PartialCokeFormula {
///     soda_water: Some(PartialSodaWater {
///         water: Some(35),
///         ..Default::default()
///     }),
///     ..Default::default()
/// });
///
/// assert_eq!(formula.soda_water, SodaWater { co2: 10, water: 35 });
/// assert_eq!(formula.sugar, 50);
/// ```
pub trait Overlay: RecursivePartial {
    /// Applies the fields present in `overrides` to `self`.
    fn overlay(&mut self, overrides: Self::Partial);

    /// Consuming form of [`overlay`](Overlay::overlay).
    #[must_use]
    fn overlaid(mut self, overrides: Self::Partial) -> Self {
        self.overlay(overrides);
        self
    }

    /// Merges `overrides` into `base`; fields present in `overrides` win,
    /// nested partials present on both sides are merged recursively.
    fn combine_partials(base: &mut Self::Partial, overrides: Self::Partial);
}

impl<T: Overlay> Overlay for Box<T> {
    fn overlay(&mut self, overrides: Self::Partial) {
        (**self).overlay(*overrides);
    }

    fn combine_partials(base: &mut Self::Partial, overrides: Self::Partial) {
        T::combine_partials(&mut **base, *overrides);
    }
}

/// Combines a sequence of partials from left to right.
///
/// Later layers win over earlier ones. An empty sequence yields the empty
/// partial.
///
/// # Examples
///
/// ```rust
/// use recursive_partial::{RecursivePartial, combine_all};
///
/// #[derive(RecursivePartial)]
/// struct Server {
///     host: String,
///     port: u16,
/// }
///
/// let layers = vec![
///     PartialServer { host: Some("localhost".to_string()), port: Some(80) },
///     PartialServer { host: None, port: Some(8080) },
/// ];
///
/// let combined = combine_all::<Server, _>(layers);
/// assert_eq!(combined.host.as_deref(), Some("localhost"));
/// assert_eq!(combined.port, Some(8080));
/// ```
pub fn combine_all<T, I>(layers: I) -> T::Partial
where
    T: Overlay,
    I: IntoIterator<Item = T::Partial>,
{
    layers
        .into_iter()
        .fold(T::Partial::default(), |mut accumulator, layer| {
            T::combine_partials(&mut accumulator, layer);
            accumulator
        })
}
