//! `bool`.

use std::fmt;

use serde::Serializer;

use crate::error::{Error, ErrorClass};
use crate::value::{DriverValue, Scalar};
use crate::{DOCUMENT_FALSE, DOCUMENT_TRUE};

impl Scalar for bool {
    const TYPE_NAME: &'static str = "bool";
    const DOCUMENT_KIND: &'static str = "boolean";
    const DRIVER_KIND: &'static str = "bool";

    fn zero() -> Self {
        false
    }

    fn fmt_display(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }

    fn encode_text(&self) -> Result<Vec<u8>, Error> {
        Ok(self.to_string().into_bytes())
    }

    fn encode_document(&self) -> Result<Vec<u8>, Error> {
        let literal = if *self { DOCUMENT_TRUE } else { DOCUMENT_FALSE };
        Ok(literal.to_vec())
    }

    /// Case-sensitive, untrimmed match against the recognized tokens.
    fn parse_text(input: &str) -> Result<Self, Error> {
        match input {
            "1" | "t" | "T" | "true" | "True" | "TRUE" => Ok(true),
            "0" | "f" | "F" | "false" | "False" | "FALSE" => Ok(false),
            _ => Err(Error::parse(ErrorClass::Parse, input, Self::TYPE_NAME)),
        }
    }

    fn decode_document(document: serde_json::Value) -> Result<Self, Error> {
        match document {
            serde_json::Value::Bool(v) => Ok(v),
            other => Err(Self::document_type_error(&other)),
        }
    }

    fn to_driver(&self) -> Result<DriverValue, Error> {
        Ok(DriverValue::Bool(*self))
    }

    fn from_driver(value: DriverValue) -> Result<Self, Error> {
        match value {
            DriverValue::Bool(v) => Ok(v),
            other => Err(Self::driver_type_error(&other)),
        }
    }

    fn serialize_value<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(*self)
    }

    #[cfg(feature = "sea-query")]
    fn query_null() -> sea_query::Value {
        sea_query::Value::Bool(None)
    }
}
