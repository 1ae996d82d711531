//! Value system for nullable wrappers
//!
//! This module provides the generic [`Nullable`] wrapper and the traits and
//! types it converts through.
//!
//! ## Items
//!
//! - **`Nullable`** - value plus validity flag, with text, document and driver conversions
//! - **`Scalar`** - per-type strategy: zero value, grammar, kinds and overflow rules
//! - **`DriverValue`** - closed set of driver kinds, bridged to `sea_query::Value`
//! - `serde` impls for `Nullable` so wrappers can be struct fields

pub mod driver;
pub mod nullable;
pub mod scalar;
mod serialize;


pub use driver::DriverValue;
pub use nullable::Nullable;
pub use scalar::{document_kind, Scalar};
