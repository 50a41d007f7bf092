//! # Layered Configuration Sample
//!
//! Resolves a service configuration from a stack of YAML or JSON layer
//! files using `recursive-partial`.
//!
//! ## Module Structure
//!
//! - `config`: Configuration shape and its derived partials
//! - `layer`: Layer parsing, combining, and resolution
//! - `error`: Loading and resolution errors

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod layer;
