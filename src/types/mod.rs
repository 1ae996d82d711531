//! Per-type strategies behind the nullable aliases.
//!
//! Each submodule implements [`crate::Scalar`] for one underlying type:
//!
//! - `bool` - fixed token set for text input
//! - `isize` / `usize` - integer literals with base prefixes and underscores
//! - `f64` - decimal and exponent forms; non-finite values cannot be documents
//! - `String` - text input never fails
//! - `DateTime<FixedOffset>` - RFC 3339 with nanoseconds

mod bool;
mod float64;
mod int;
pub(crate) mod literal;
mod string;
mod time;
mod uint;

pub use time::{format_rfc3339_nano, zero_time};
