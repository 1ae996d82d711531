//! Tagged driver values.
//!
//! [`DriverValue`] is the closed set of native kinds exchanged with a
//! database binding layer. With the `sea-query` feature it converts to and
//! from `sea_query::Value`, normalizing the builder's many integer and float
//! variants the way a driver would.

use chrono::{DateTime, FixedOffset};

#[cfg(feature = "sea-query")]
use crate::error::{Error, ErrorClass};

/// A value as exchanged with a database driver.
#[derive(Debug, Clone, PartialEq)]
pub enum DriverValue {
    Null,
    Bool(bool),
    Int64(i64),
    Float64(f64),
    String(String),
    Timestamp(DateTime<FixedOffset>),
}

impl DriverValue {
    /// Kind name, as used in `TypeError`s.
    pub fn kind(&self) -> &'static str {
        match self {
            DriverValue::Null => "null",
            DriverValue::Bool(_) => "bool",
            DriverValue::Int64(_) => "int64",
            DriverValue::Float64(_) => "float64",
            DriverValue::String(_) => "string",
            DriverValue::Timestamp(_) => "timestamp",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, DriverValue::Null)
    }

    /// Convert into a `sea_query::Value`.
    ///
    /// Returns `None` for [`DriverValue::Null`]: the builder only knows typed
    /// nulls, so the caller has to pick one.
    #[cfg(feature = "sea-query")]
    pub fn into_query_value(self) -> Option<sea_query::Value> {
        match self {
            DriverValue::Null => None,
            DriverValue::Bool(v) => Some(v.into()),
            DriverValue::Int64(v) => Some(v.into()),
            DriverValue::Float64(v) => Some(v.into()),
            DriverValue::String(v) => Some(v.into()),
            DriverValue::Timestamp(v) => Some(v.into()),
        }
    }
}

impl From<bool> for DriverValue {
    fn from(v: bool) -> Self {
        DriverValue::Bool(v)
    }
}

impl From<i64> for DriverValue {
    fn from(v: i64) -> Self {
        DriverValue::Int64(v)
    }
}

impl From<f64> for DriverValue {
    fn from(v: f64) -> Self {
        DriverValue::Float64(v)
    }
}

impl From<String> for DriverValue {
    fn from(v: String) -> Self {
        DriverValue::String(v)
    }
}

impl From<&str> for DriverValue {
    fn from(v: &str) -> Self {
        DriverValue::String(v.to_string())
    }
}

impl From<DateTime<FixedOffset>> for DriverValue {
    fn from(v: DateTime<FixedOffset>) -> Self {
        DriverValue::Timestamp(v)
    }
}

impl<T: Into<DriverValue>> From<Option<T>> for DriverValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(DriverValue::Null, Into::into)
    }
}

/// Variant name of a builder value, e.g. `Json` for `Json(Some(..))`.
#[cfg(feature = "sea-query")]
pub(crate) fn query_value_kind(value: &sea_query::Value) -> String {
    let debug = format!("{:?}", value);
    match debug.find('(') {
        Some(end) => debug[..end].to_string(),
        None => debug,
    }
}

#[cfg(feature = "sea-query")]
impl TryFrom<sea_query::Value> for DriverValue {
    type Error = Error;

    fn try_from(value: sea_query::Value) -> Result<Self, Self::Error> {
        use sea_query::Value;

        match value {
            Value::Bool(Some(v)) => Ok(DriverValue::Bool(v)),
            Value::TinyInt(Some(v)) => Ok(DriverValue::Int64(v.into())),
            Value::SmallInt(Some(v)) => Ok(DriverValue::Int64(v.into())),
            Value::Int(Some(v)) => Ok(DriverValue::Int64(v.into())),
            Value::BigInt(Some(v)) => Ok(DriverValue::Int64(v)),
            Value::TinyUnsigned(Some(v)) => Ok(DriverValue::Int64(v.into())),
            Value::SmallUnsigned(Some(v)) => Ok(DriverValue::Int64(v.into())),
            Value::Unsigned(Some(v)) => Ok(DriverValue::Int64(v.into())),
            Value::BigUnsigned(Some(v)) => i64::try_from(v)
                .map(DriverValue::Int64)
                .map_err(|_| Error::conversion(ErrorClass::Sql, v, "BigUnsigned", "int64")),
            Value::Float(Some(v)) => Ok(DriverValue::Float64(v.into())),
            Value::Double(Some(v)) => Ok(DriverValue::Float64(v)),
            Value::String(Some(v)) => Ok(DriverValue::String(v)),
            Value::ChronoDateTimeWithTimeZone(Some(_)) => {
                <DateTime<FixedOffset> as sea_query::ValueType>::try_from(value)
                    .map(DriverValue::Timestamp)
                    .map_err(|_| {
                        Error::type_mismatch(ErrorClass::Sql, "ChronoDateTimeWithTimeZone", &["timestamp"])
                    })
            }
            Value::Bool(None)
            | Value::TinyInt(None)
            | Value::SmallInt(None)
            | Value::Int(None)
            | Value::BigInt(None)
            | Value::TinyUnsigned(None)
            | Value::SmallUnsigned(None)
            | Value::Unsigned(None)
            | Value::BigUnsigned(None)
            | Value::Float(None)
            | Value::Double(None)
            | Value::String(None)
            | Value::Bytes(None)
            | Value::ChronoDateTimeWithTimeZone(None) => Ok(DriverValue::Null),
            other => Err(Error::type_mismatch(
                ErrorClass::Sql,
                query_value_kind(&other),
                &["bool", "int64", "float64", "string", "timestamp", "null"],
            )),
        }
    }
}
