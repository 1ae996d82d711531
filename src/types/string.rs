//! `String`.
//!
//! Text input cannot fail to parse. The one asymmetry: encoded text bytes
//! distinguish "no bytes at all" (invalid) from "zero bytes" (a valid empty
//! string), while direct text input treats the empty string as invalid.

use std::fmt;

use serde::Serializer;

use crate::error::{Error, ErrorClass};
use crate::value::{DriverValue, Scalar};

impl Scalar for String {
    const TYPE_NAME: &'static str = "String";
    const DOCUMENT_KIND: &'static str = "string";
    const DRIVER_KIND: &'static str = "string";

    fn zero() -> Self {
        String::new()
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn fmt_display(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }

    fn encode_text(&self) -> Result<Vec<u8>, Error> {
        Ok(self.as_bytes().to_vec())
    }

    fn encode_document(&self) -> Result<Vec<u8>, Error> {
        serde_json::to_vec(self).map_err(|_| Error::marshal(ErrorClass::Json, self, Self::TYPE_NAME))
    }

    fn parse_text(input: &str) -> Result<Self, Error> {
        Ok(input.to_string())
    }

    fn decode_text_bytes(text: Option<&[u8]>) -> Result<Option<Self>, Error> {
        let Some(bytes) = text else {
            return Ok(None);
        };
        std::str::from_utf8(bytes)
            .map(|s| Some(s.to_string()))
            .map_err(|_| Error::unmarshal(ErrorClass::Text, bytes, Self::TYPE_NAME))
    }

    fn decode_document(document: serde_json::Value) -> Result<Self, Error> {
        match document {
            serde_json::Value::String(v) => Ok(v),
            other => Err(Self::document_type_error(&other)),
        }
    }

    fn to_driver(&self) -> Result<DriverValue, Error> {
        Ok(DriverValue::String(self.clone()))
    }

    fn from_driver(value: DriverValue) -> Result<Self, Error> {
        match value {
            DriverValue::String(v) => Ok(v),
            other => Err(Self::driver_type_error(&other)),
        }
    }

    fn serialize_value<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self)
    }

    #[cfg(feature = "sea-query")]
    fn query_null() -> sea_query::Value {
        sea_query::Value::String(None)
    }
}
