//! Platform-width signed integer (`isize`).
//!
//! Text uses the integer literal grammar in [`super::literal`]. Documents are
//! numbers that must be integral and in range; driver values are `int64`.

use std::fmt;

use serde::Serializer;

use crate::error::{Error, ErrorClass};
use crate::types::literal::parse_int_literal;
use crate::value::{DriverValue, Scalar};

/// Converts a document number to `isize`.
///
/// Documents carry every number as an `f64`; the value must narrow to
/// `isize` and widen back to the same `f64`. The explicit range check is
/// needed since `as` saturates.
fn number_to_isize(number: &serde_json::Number) -> Result<isize, Error> {
    let v = number.as_f64().unwrap_or(f64::NAN);
    let bound = 2f64.powi(isize::BITS as i32 - 1);
    let narrowed = v as isize;
    if v >= -bound && v < bound && narrowed as f64 == v {
        Ok(narrowed)
    } else {
        Err(Error::conversion(ErrorClass::Json, v, "f64", "isize"))
    }
}

impl Scalar for isize {
    const TYPE_NAME: &'static str = "isize";
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
        let literal = parse_int_literal(input, true)
            .ok_or_else(|| Error::parse(ErrorClass::Parse, input, Self::TYPE_NAME))?;
        let value = if literal.negative {
            0i128 - i128::from(literal.magnitude)
        } else {
            i128::from(literal.magnitude)
        };
        isize::try_from(value).map_err(|_| Error::parse(ErrorClass::Parse, input, Self::TYPE_NAME))
    }

    fn decode_document(document: serde_json::Value) -> Result<Self, Error> {
        match document {
            serde_json::Value::Number(ref number) => number_to_isize(number),
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
            DriverValue::Int64(v) => {
                isize::try_from(v).map_err(|_| Error::conversion(ErrorClass::Sql, v, "int64", Self::TYPE_NAME))
            }
            other => Err(Self::driver_type_error(&other)),
        }
    }

    fn serialize_value<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(*self as i64)
    }

    #[cfg(feature = "sea-query")]
    fn query_null() -> sea_query::Value {
        sea_query::Value::BigInt(None)
    }
}
