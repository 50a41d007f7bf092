//! Derive macro for recursive-partial.
//!
//! This crate provides `#[derive(RecursivePartial)]`, which generates a
//! "partial" twin of a struct: every field becomes optional and fields marked
//! `#[partial(nested)]` hold the partial of their own type, recursively.
//!
//! # Example
//!
//! ```rust,ignore
//! use recursive_partial::{Overlay, RecursivePartial};
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
//! // Generated:
//! // struct PartialCokeFormula {
//! //     soda_water: Option<PartialSodaWater>,
//! //     sugar: Option<u32>,
//! // }
//!
//! let overrides = PartialCokeFormula {
//!     soda_water: Some(PartialSodaWater { water: Some(35), ..Default::default() }),
//!     ..Default::default()
//! };
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod attributes;
mod bounds;
mod partial;

use proc_macro::TokenStream;

/// Derive macro generating the recursive partial of a struct.
///
/// For a struct `Shape`, generates `PartialShape` with the same fields,
/// visibility and generics, each field wrapped in `Option`. A field marked
/// `#[partial(nested)]` of type `S` becomes
/// `Option<<S as RecursivePartial>::Partial>`; every other field is a leaf
/// and keeps its type inside the `Option`.
///
/// # Requirements
///
/// - The type must be a struct with named fields, or a unit struct
/// - Nested field types must implement `RecursivePartial`, `Overlay` and
///   `Complete` (deriving `RecursivePartial` provides all three)
/// - Skipped fields must implement `Default`
///
/// # Generated Code
///
/// ```rust,ignore
/// struct PartialShape { /* Option fields */ }
/// impl Default for PartialShape { ... }
/// impl PartialShape { pub const fn is_empty(&self) -> bool { ... } }
/// impl RecursivePartial for Shape { type Partial = PartialShape; ... }
/// impl RecursivePartial for PartialShape { type Partial = PartialShape; ... }
/// impl Overlay for Shape { ... }
/// impl Overlay for PartialShape { ... }
/// impl Complete for Shape { ... }
/// ```
///
/// # Container Attributes
///
/// - `#[partial(name = "Overrides")]`: name of the generated struct
/// - `#[partial(derive(Debug, Clone))]`: derives for the generated struct
/// - `#[partial(attr(...))]`: raw attribute copied to the generated struct
/// - `#[partial(serde)]`: derive `Serialize`/`Deserialize`, omitting `None`
///   fields and rejecting unknown keys (needs the `serde` feature)
/// - `#[partial(crate = "path")]`: path of the runtime crate when renamed
///
/// # Field Attributes
///
/// - `#[partial(nested)]`: the field is a record shape, recurse into it
/// - `#[partial(skip)]`: leave the field out of the partial
/// - `#[partial(attr(...))]`: raw attribute copied to the generated field
///
/// # Leaves
///
/// Without `nested`, a field is never recursed into, whatever its type:
///
/// ```rust,ignore
/// #[derive(RecursivePartial)]
/// struct Leaves {
///     list: Vec<SodaWater>,         // Option<Vec<SodaWater>>
///     maybe: Option<SodaWater>,     // Option<Option<SodaWater>>
///     callback: fn(u32) -> u32,     // Option<fn(u32) -> u32>
/// }
/// ```
///
/// # Generics
///
/// Generic structs are supported. A nested field whose type mentions a
/// generic parameter adds the matching bound to the generated impls:
///
/// ```rust,ignore
/// #[derive(RecursivePartial)]
/// struct Layer<T> {
///     #[partial(nested)]
///     settings: T,
///     priority: u8,
/// }
///
/// // struct PartialLayer<T> where T: RecursivePartial {
/// //     settings: Option<<T as RecursivePartial>::Partial>,
/// //     priority: Option<u8>,
/// // }
/// ```
#[proc_macro_derive(RecursivePartial, attributes(partial))]
pub fn derive_recursive_partial(input: TokenStream) -> TokenStream {
    partial::derive_recursive_partial_impl(input)
}
