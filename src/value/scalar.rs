//! `Scalar` trait: the per-type strategy behind [`Nullable`](super::Nullable).
//!
//! `Nullable<T>` implements the validity bookkeeping once. Everything that
//! depends on the wrapped type (zero value, text grammar, document and driver
//! kinds, overflow rules) lives in the `Scalar` impl for `T`, see
//! [`crate::types`].

use std::fmt;

use serde::Serializer;

use crate::error::{Error, ErrorClass};
use crate::value::DriverValue;

/// Types that can be wrapped in a [`Nullable`](super::Nullable).
///
/// Implementations never see null or empty inputs: the wrapper handles those
/// before delegating.
pub trait Scalar: Clone + PartialEq + fmt::Debug {
    /// Type name used in error messages.
    const TYPE_NAME: &'static str;

    /// Document kind accepted by [`Scalar::decode_document`].
    const DOCUMENT_KIND: &'static str;

    /// Driver kind accepted by [`Scalar::from_driver`].
    const DRIVER_KIND: &'static str;

    /// The natural zero value.
    fn zero() -> Self;

    /// Whether `self` is the zero value.
    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// Canonical human-readable form. Must not fail.
    fn fmt_display(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Text encoding of a valid value.
    fn encode_text(&self) -> Result<Vec<u8>, Error>;

    /// Document literal of a valid value.
    fn encode_document(&self) -> Result<Vec<u8>, Error>;

    /// Parse non-empty text input. Failures are `Error::Parse`.
    fn parse_text(input: &str) -> Result<Self, Error>;

    /// Decode raw text bytes.
    ///
    /// `None` means no bytes were supplied at all. `Ok(None)` asks the
    /// wrapper to become invalid.
    fn decode_text_bytes(text: Option<&[u8]>) -> Result<Option<Self>, Error> {
        let bytes = text.unwrap_or_default();
        let input = std::str::from_utf8(bytes)
            .map_err(|_| Error::unmarshal(ErrorClass::Text, bytes, Self::TYPE_NAME))?;
        if input.is_empty() {
            return Ok(None);
        }
        Self::parse_text(input)
            .map(Some)
            .map_err(|_| Error::unmarshal(ErrorClass::Text, bytes, Self::TYPE_NAME))
    }

    /// Decode a non-null document value.
    fn decode_document(document: serde_json::Value) -> Result<Self, Error>;

    /// Driver value of a valid value.
    fn to_driver(&self) -> Result<DriverValue, Error>;

    /// Decode a non-null driver value.
    fn from_driver(value: DriverValue) -> Result<Self, Error>;

    /// Serialize a valid value the way [`Scalar::encode_document`] writes it.
    fn serialize_value<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error>;

    /// Typed null used when binding an invalid wrapper into a query.
    #[cfg(feature = "sea-query")]
    fn query_null() -> sea_query::Value;

    /// `TypeError` for a document of the wrong kind.
    fn document_type_error(document: &serde_json::Value) -> Error {
        Error::type_mismatch(
            ErrorClass::Json,
            document_kind(document),
            &[Self::DOCUMENT_KIND, "null"],
        )
    }

    /// `TypeError` for a driver value of the wrong kind.
    fn driver_type_error(value: &DriverValue) -> Error {
        Error::type_mismatch(ErrorClass::Sql, value.kind(), &[Self::DRIVER_KIND, "null"])
    }
}

/// Kind name of a document value, as used in `TypeError`s.
pub fn document_kind(document: &serde_json::Value) -> &'static str {
    match document {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_kind_names() {
        assert_eq!(document_kind(&json!(null)), "null");
        assert_eq!(document_kind(&json!(true)), "boolean");
        assert_eq!(document_kind(&json!(1.5)), "number");
        assert_eq!(document_kind(&json!("x")), "string");
        assert_eq!(document_kind(&json!([1])), "array");
        assert_eq!(document_kind(&json!({"a": 1})), "object");
    }

    #[test]
    fn test_default_text_bytes_decoding() {
        assert_eq!(<isize as Scalar>::decode_text_bytes(None), Ok(None));
        assert_eq!(<isize as Scalar>::decode_text_bytes(Some(b"".as_slice())), Ok(None));
        assert_eq!(<isize as Scalar>::decode_text_bytes(Some(b"0x10".as_slice())), Ok(Some(16)));
        assert!(matches!(
            <isize as Scalar>::decode_text_bytes(Some(b"1.5".as_slice())),
            Err(Error::Unmarshal { class: ErrorClass::Text, .. })
        ));
        assert!(matches!(
            <bool as Scalar>::decode_text_bytes(Some(&[0xffu8, 0xfe][..])),
            Err(Error::Unmarshal { .. })
        ));
    }
}
