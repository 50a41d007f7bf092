//! # recursive-partial
//!
//! Recursive partial structs for Rust: every field optional, nested records
//! partial themselves.
//!
//! ## Overview
//!
//! `#[derive(RecursivePartial)]` generates, for a struct `Shape`, a struct
//! `PartialShape` where every field is wrapped in `Option`. Fields marked
//! `#[partial(nested)]` hold the partial of their own type, so the
//! transformation applies at every depth; all other fields are leaves and
//! keep their type.
//!
//! Merging a partial back into a full value is a separate concern:
//!
//! - **Overlay**: apply a partial on top of a full value, or merge partials
//! - **Factory**: build values from defaults plus overrides
//! - **Complete**: rebuild a full value from a partial, reporting every
//!   absent leaf
//!
//! ## Feature Flags
//!
//! - `derive` (default): `#[derive(RecursivePartial)]`
//! - `serde`: `#[partial(serde)]` derives `Serialize`/`Deserialize` for
//!   partial structs
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use recursive_partial::prelude::*;
//!
//! #[derive(Clone, Debug, PartialEq, RecursivePartial)]
//! struct SodaWater {
//!     co2: u32,
//!     water: u32,
//! }
//!
//! #[derive(Clone, Debug, PartialEq, RecursivePartial)]
//! struct CokeFormula {
//!     #[partial(nested)]
//!     soda_water: SodaWater,
//!     sugar: u32,
//! }
//!
//! fn coke_formula(overrides: PartialCokeFormula) -> CokeFormula {
//!     let defaults = CokeFormula {
//!         soda_water: SodaWater { co2: 10, water: 40 },
//!         sugar: 50,
//!     };
//!     defaults.overlaid(overrides)
//! }
//!
//! assert_eq!(
//!     coke_formula(PartialCokeFormula::default()),
//!     CokeFormula {
//!         soda_water: SodaWater { co2: 10, water: 40 },
//!         sugar: 50,
//!     }
//! );
//!
//! let formula = coke_formula(PartialCokeFormula {
//!     soda_water: Some(PartialSodaWater {
//!         water: Some(35),
//!         ..Default::default()
//!     }),
//!     ..Default::default()
//! });
//! assert_eq!(formula.soda_water.water, 35);
//! assert_eq!(formula.soda_water.co2, 10);
//! ```
//!
//! Unknown fields and wrong leaf types are rejected by the compiler:
//!
//! ```rust,compile_fail
//! # use recursive_partial::prelude::*;
//! # #[derive(RecursivePartial)]
//! # struct SodaWater { co2: u32, water: u32 }
//! let overrides = PartialSodaWater { soda: Some(1), ..Default::default() };
//! ```
//!
//! ```rust,compile_fail
//! # use recursive_partial::prelude::*;
//! # #[derive(RecursivePartial)]
//! # struct SodaWater { co2: u32, water: u32 }
//! let overrides = PartialSodaWater { water: Some("40"), ..Default::default() };
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

// Generated code names this crate by its absolute path.
extern crate self as recursive_partial;

/// Prelude module for convenient imports.
///
/// Re-exports the traits, the derive macro and the factory helpers.
///
/// # Usage
///
/// ```rust
/// use recursive_partial::prelude::*;
/// ```
pub mod prelude {
    pub use crate::complete::Complete;
    pub use crate::factory::{Factory, with_overrides};
    pub use crate::overlay::{Overlay, combine_all};
    pub use crate::partial::RecursivePartial;

    #[cfg(feature = "derive")]
    pub use recursive_partial_derive::RecursivePartial;
}

pub mod complete;
pub mod error;
pub mod factory;
pub mod overlay;
pub mod partial;

pub use complete::Complete;
pub use error::IncompleteError;
pub use factory::{Factory, with_overrides};
pub use overlay::{Overlay, combine_all};
pub use partial::RecursivePartial;

#[cfg(feature = "derive")]
pub use recursive_partial_derive::RecursivePartial;

#[doc(hidden)]
pub mod __private {
    #[cfg(feature = "serde")]
    pub use serde;

    /// Deserialises a field that is present in the document, so an explicit
    /// `null` on an `Option` leaf becomes `Some(None)` ("override with
    /// `None`") rather than `None` ("no override").
    ///
    /// # Errors
    ///
    /// Returns the deserializer's error when the value is not an `Option<T>`.
    #[cfg(feature = "serde")]
    pub fn deserialize_present_option<'de, D, T>(
        deserializer: D,
    ) -> Result<Option<Option<T>>, D::Error>
    where
        D: serde::Deserializer<'de>,
        Option<T>: serde::Deserialize<'de>,
    {
        <Option<T> as serde::Deserialize<'de>>::deserialize(deserializer).map(Some)
    }
}
