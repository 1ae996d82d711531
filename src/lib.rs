//! # Nullable
//!
//! Nullable scalar values that know whether they hold something meaningful.
//!
//! Every wrapper is a [`Nullable<T>`] holding a `value` and a `valid` flag.
//! An invalid wrapper reads as the type's zero value and encodes as null in
//! every external representation:
//!
//! - **Text**: [`Nullable::set_from_text`], [`Nullable::to_text`] and
//!   [`std::str::FromStr`], e.g. for command-line flags or text config.
//! - **JSON documents**: [`Nullable::to_document`],
//!   [`Nullable::set_from_document`] and the `serde` impls, so wrappers can be
//!   struct fields.
//! - **Driver values**: [`Nullable::to_driver_value`] and
//!   [`Nullable::set_from_driver_value`] over the closed [`DriverValue`] set,
//!   bridged to `sea_query::Value` with the `sea-query` feature.
//!
//! ```rust
//! use nullable::{NullInt, NullString};
//!
//! let mut id = NullInt::default();
//! id.set_from_document(b"42").unwrap();
//! assert_eq!(id.value_or_zero(), 42);
//!
//! let name = NullString::from_value_or_zero(String::new());
//! assert_eq!(name.to_document().unwrap(), b"null");
//! assert_eq!(name.to_string(), nullable::INVALID_NULLABLE_STRING);
//! ```

pub mod error;
pub mod types;
pub mod value;

pub use error::{Error, ErrorClass};
pub use value::{DriverValue, Nullable, Scalar};

/// Returned by `Display` when the nullable is not valid.
pub const INVALID_NULLABLE_STRING: &str = "<invalid>";

/// Document literal for `true`.
pub const DOCUMENT_TRUE: &[u8] = b"true";

/// Document literal for `false`.
pub const DOCUMENT_FALSE: &[u8] = b"false";

/// Document literal for null.
pub const DOCUMENT_NULL: &[u8] = b"null";

/// Nullable `bool`.
pub type NullBool = Nullable<bool>;

/// Nullable platform-width signed integer.
pub type NullInt = Nullable<isize>;

/// Nullable platform-width unsigned integer.
pub type NullUint = Nullable<usize>;

/// Nullable `f64`.
pub type NullFloat64 = Nullable<f64>;

/// Nullable `String`.
pub type NullString = Nullable<String>;

/// Nullable timestamp with offset and nanosecond precision.
pub type NullTime = Nullable<chrono::DateTime<chrono::FixedOffset>>;
