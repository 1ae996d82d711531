//! Platform-width unsigned integer (`usize`).
//!
//! Like [`super::int`] without a sign. Driver values are signed `int64`, so
//! encoding fails above `i64::MAX` and decoding fails for negative sources.

use std::fmt;

use serde::Serializer;

use crate::error::{Error, ErrorClass};
use crate::types::literal::parse_int_literal;
use crate::value::{DriverValue, Scalar};

/// Converts a document number to `usize` through its `f64` value, like
/// [`super::int`] does for `isize`.
fn number_to_usize(number: &serde_json::Number) -> Result<usize, Error> {
    let v = number.as_f64().unwrap_or(f64::NAN);
    let bound = 2f64.powi(usize::BITS as i32);
    let narrowed = v as usize;
    if v >= 0.0 && v < bound && narrowed as f64 == v {
        Ok(narrowed)
    } else {
        Err(Error::conversion(ErrorClass::Json, v, "f64", "usize"))
    }
}

impl Scalar for usize {
    const TYPE_NAME: &'static str = "usize";
    const DOCUMENT_KIND: &'static str = "number";
    const DRIVER_KIND: &'static str = "int64";

    fn zero() -> Self {
        0
    }

    fn fmt_display(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }

    fn encode_text(&self) -> Result<Vec<u8>, Error> {
        Ok(self.to_string().into_bytes())
    }

    fn encode_document(&self) -> Result<Vec<u8>, Error> {
        Ok(self.to_string().into_bytes())
    }

    fn parse_text(input: &str) -> Result<Self, Error> {
        parse_int_literal(input, false)
            .and_then(|literal| usize::try_from(literal.magnitude).ok())
            .ok_or_else(|| Error::parse(ErrorClass::Parse, input, Self::TYPE_NAME))
    }

    fn decode_document(document: serde_json::Value) -> Result<Self, Error> {
        match document {
            serde_json::Value::Number(ref number) => number_to_usize(number),
            other => Err(Self::document_type_error(&other)),
        }
    }

    fn to_driver(&self) -> Result<DriverValue, Error> {
        i64::try_from(*self)
            .map(DriverValue::Int64)
            .map_err(|_| Error::conversion(ErrorClass::Sql, self, Self::TYPE_NAME, "int64"))
    }

    fn from_driver(value: DriverValue) -> Result<Self, Error> {
        match value {
            // Checked on the 64-bit source, before any narrowing
            DriverValue::Int64(v) if v < 0 => {
                Err(Error::conversion(ErrorClass::Sql, v, "int64", Self::TYPE_NAME))
            }
            DriverValue::Int64(v) => {
                usize::try_from(v).map_err(|_| Error::conversion(ErrorClass::Sql, v, "int64", Self::TYPE_NAME))
            }
            other => Err(Self::driver_type_error(&other)),
        }
    }

    fn serialize_value<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(*self as u64)
    }

    #[cfg(feature = "sea-query")]
    fn query_null() -> sea_query::Value {
        sea_query::Value::BigInt(None)
    }
}
