//! The generic nullable wrapper.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, ErrorClass};
use crate::value::{DriverValue, Scalar};
use crate::{DOCUMENT_NULL, INVALID_NULLABLE_STRING};

/// A scalar value with a validity flag.
///
/// When `valid` is `false`, `value` is meaningless: every accessor reports
/// the zero value instead, and every encoder emits null. Decoders that fail
/// or see null/empty input leave the wrapper invalid with `value` reset to
/// the zero value, so ignoring an error still leaves a safe wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nullable<T> {
    /// The underlying value, meaningful only when `valid` is `true`.
    pub value: T,

    /// Validity flag.
    pub valid: bool,
}

impl<T: Scalar> Default for Nullable<T> {
    fn default() -> Self {
        Self {
            value: T::zero(),
            valid: false,
        }
    }
}

impl<T: Scalar> Nullable<T> {
    /// Creates a valid wrapper around `value`.
    pub fn from_value(value: T) -> Self {
        Self { value, valid: true }
    }

    /// Creates a wrapper that is valid iff `value` is `Some`.
    pub fn from_option(value: Option<T>) -> Self {
        value.map_or_else(Self::default, Self::from_value)
    }

    /// Creates a wrapper around `value` that is invalid if `value` is the
    /// zero value.
    pub fn from_value_or_zero(value: T) -> Self {
        let valid = !value.is_zero();
        Self { value, valid }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Borrows the value if valid.
    pub fn as_option(&self) -> Option<&T> {
        if self.valid {
            Some(&self.value)
        } else {
            None
        }
    }

    /// Consumes the wrapper, returning the value if valid.
    pub fn into_option(self) -> Option<T> {
        if self.valid {
            Some(self.value)
        } else {
            None
        }
    }

    /// Returns the value if valid, otherwise the zero value.
    pub fn value_or_zero(&self) -> T {
        if self.valid {
            self.value.clone()
        } else {
            T::zero()
        }
    }

    /// Sets the value. The wrapper becomes valid.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.valid = true;
    }

    /// Sets the value from `value` if `Some`, otherwise only clears the
    /// validity flag.
    pub fn set_option(&mut self, value: Option<T>) {
        self.valid = value.is_some();
        if let Some(v) = value {
            self.value = v;
        }
    }

    /// Sets the value; the wrapper is valid iff `value` is not the zero value.
    pub fn set_value_or_zero(&mut self, value: T) {
        self.valid = !value.is_zero();
        self.value = value;
    }

    /// Makes the wrapper invalid and resets the value to the zero value.
    pub fn invalidate(&mut self) {
        self.value = T::zero();
        self.valid = false;
    }

    /// Text encoding of the value, or `None` if invalid.
    pub fn to_text(&self) -> Result<Option<Vec<u8>>, Error> {
        if self.valid {
            self.value.encode_text().map(Some)
        } else {
            Ok(None)
        }
    }

    /// Document literal of the value, or `null` if invalid.
    pub fn to_document(&self) -> Result<Vec<u8>, Error> {
        if self.valid {
            self.value.encode_document()
        } else {
            Ok(DOCUMENT_NULL.to_vec())
        }
    }

    /// Driver value of the value, or [`DriverValue::Null`] if invalid.
    pub fn to_driver_value(&self) -> Result<DriverValue, Error> {
        if self.valid {
            self.value.to_driver()
        } else {
            Ok(DriverValue::Null)
        }
    }

    /// Parses text input. The empty string makes the wrapper invalid without
    /// error; unparsable input makes it invalid and returns `Error::Parse`.
    pub fn set_from_text(&mut self, input: &str) -> Result<(), Error> {
        if input.is_empty() {
            self.invalidate();
            return Ok(());
        }
        match T::parse_text(input) {
            Ok(value) => {
                self.set(value);
                Ok(())
            }
            Err(err) => self.reject(err),
        }
    }

    /// Decodes encoded text bytes, `None` meaning no bytes at all.
    ///
    /// Follows [`Nullable::set_from_text`] but fails with `Error::Unmarshal`.
    pub fn set_from_text_bytes(&mut self, text: Option<&[u8]>) -> Result<(), Error> {
        match T::decode_text_bytes(text) {
            Ok(Some(value)) => {
                self.set(value);
                Ok(())
            }
            Ok(None) => {
                self.invalidate();
                Ok(())
            }
            Err(err) => self.reject(err),
        }
    }

    /// Decodes a single JSON document value.
    ///
    /// `null` makes the wrapper invalid without error. Malformed documents
    /// return `Error::Unmarshal`, documents of another kind `Error::Type`.
    pub fn set_from_document(&mut self, data: &[u8]) -> Result<(), Error> {
        let document: serde_json::Value = match serde_json::from_slice(data) {
            Ok(document) => document,
            Err(_) => return self.reject(Error::unmarshal(ErrorClass::Json, data, T::TYPE_NAME)),
        };
        if document.is_null() {
            self.invalidate();
            return Ok(());
        }
        match T::decode_document(document) {
            Ok(value) => {
                self.set(value);
                Ok(())
            }
            Err(err) => self.reject(err),
        }
    }

    /// Assigns from a driver value. Null makes the wrapper invalid without
    /// error; other kinds than the expected one return `Error::Type`.
    pub fn set_from_driver_value(&mut self, value: DriverValue) -> Result<(), Error> {
        if value.is_null() {
            self.invalidate();
            return Ok(());
        }
        match T::from_driver(value) {
            Ok(value) => {
                self.set(value);
                Ok(())
            }
            Err(err) => self.reject(err),
        }
    }

    /// Binds the wrapper as a `sea_query::Value`, using the type's typed null
    /// when invalid.
    #[cfg(feature = "sea-query")]
    pub fn to_query_value(&self) -> Result<sea_query::Value, Error> {
        Ok(self
            .to_driver_value()?
            .into_query_value()
            .unwrap_or_else(T::query_null))
    }

    /// Assigns from a `sea_query::Value` through [`DriverValue`].
    #[cfg(feature = "sea-query")]
    pub fn set_from_query_value(&mut self, value: sea_query::Value) -> Result<(), Error> {
        match DriverValue::try_from(value) {
            Ok(value) => self.set_from_driver_value(value),
            Err(err) => self.reject(err),
        }
    }

    fn reject(&mut self, err: Error) -> Result<(), Error> {
        self.invalidate();
        log::debug!("rejected {} input for {}: {}", err.class(), T::TYPE_NAME, err);
        Err(err)
    }
}

impl<T: Scalar> fmt::Display for Nullable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.valid {
            self.value.fmt_display(f)
        } else {
            f.write_str(INVALID_NULLABLE_STRING)
        }
    }
}

impl<T: Scalar> FromStr for Nullable<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut nullable = Self::default();
        nullable.set_from_text(s)?;
        Ok(nullable)
    }
}

impl<T: Scalar> From<T> for Nullable<T> {
    fn from(value: T) -> Self {
        Self::from_value(value)
    }
}

impl<T: Scalar> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        Self::from_option(value)
    }
}

impl<T: Scalar> From<Nullable<T>> for Option<T> {
    fn from(value: Nullable<T>) -> Self {
        value.into_option()
    }
}
