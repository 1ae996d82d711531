//! Timestamps (`DateTime<FixedOffset>`).
//!
//! The canonical form is RFC 3339 with nanoseconds, trailing fractional
//! zeros trimmed. `Display` still renders years outside `0..=9999` and
//! offsets with a seconds part; text and document encoding refuse both with
//! `Error::Marshal`, since RFC 3339 only has four-digit years and whole-minute
//! offsets. Parsing is strict: `T` and `Z` must be upper case, no space
//! separator.

use std::fmt;

use chrono::{DateTime, Datelike, FixedOffset, Timelike};
use once_cell::sync::Lazy;
use serde::ser::{Error as _, Serializer};

use crate::error::{Error, ErrorClass};
use crate::value::{DriverValue, Scalar};

/// Seconds from the Unix epoch to 0001-01-01T00:00:00Z.
const ZERO_TIME_UNIX_SECONDS: i64 = -62_135_596_800;

static ZERO_TIME: Lazy<DateTime<FixedOffset>> = Lazy::new(|| {
    DateTime::from_timestamp(ZERO_TIME_UNIX_SECONDS, 0)
        .unwrap_or_default()
        .fixed_offset()
});

/// The zero instant, 0001-01-01T00:00:00Z.
pub fn zero_time() -> DateTime<FixedOffset> {
    *ZERO_TIME
}

/// Formats `t` as RFC 3339 with nanoseconds, trailing zeros trimmed.
pub fn format_rfc3339_nano(t: &DateTime<FixedOffset>) -> String {
    let mut out = t.format("%Y-%m-%dT%H:%M:%S").to_string();
    let nanos = t.nanosecond() % 1_000_000_000;
    if nanos != 0 {
        let fraction = format!("{:09}", nanos);
        out.push('.');
        out.push_str(fraction.trim_end_matches('0'));
    }
    if t.offset().local_minus_utc() == 0 {
        out.push('Z');
    } else {
        out.push_str(&t.format("%:z").to_string());
    }
    out
}

fn encodable(t: &DateTime<FixedOffset>) -> bool {
    (0..=9999).contains(&t.year()) && t.offset().local_minus_utc() % 60 == 0
}

// chrono's parser also takes a space or lower-case `t` between date and
// time, and a lower-case `z`.
fn strict_rfc3339(input: &str) -> bool {
    input.as_bytes().get(10) == Some(&b'T') && !input.ends_with('z')
}

impl Scalar for DateTime<FixedOffset> {
    const TYPE_NAME: &'static str = "DateTime<FixedOffset>";
    const DOCUMENT_KIND: &'static str = "string";
    const DRIVER_KIND: &'static str = "timestamp";

    fn zero() -> Self {
        zero_time()
    }

    fn fmt_display(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_rfc3339_nano(self))
    }

    fn encode_text(&self) -> Result<Vec<u8>, Error> {
        if !encodable(self) {
            return Err(Error::marshal(ErrorClass::Text, format_rfc3339_nano(self), Self::TYPE_NAME));
        }
        Ok(format_rfc3339_nano(self).into_bytes())
    }

    fn encode_document(&self) -> Result<Vec<u8>, Error> {
        if !encodable(self) {
            return Err(Error::marshal(ErrorClass::Json, format_rfc3339_nano(self), Self::TYPE_NAME));
        }
        serde_json::to_vec(&format_rfc3339_nano(self))
            .map_err(|_| Error::marshal(ErrorClass::Json, format_rfc3339_nano(self), Self::TYPE_NAME))
    }

    fn parse_text(input: &str) -> Result<Self, Error> {
        if !strict_rfc3339(input) {
            return Err(Error::parse(ErrorClass::Parse, input, Self::TYPE_NAME));
        }
        DateTime::parse_from_rfc3339(input).map_err(|_| Error::parse(ErrorClass::Parse, input, Self::TYPE_NAME))
    }

    /// A string that is not RFC 3339 is a `Error::Parse`: the kind was right.
    fn decode_document(document: serde_json::Value) -> Result<Self, Error> {
        match document {
            serde_json::Value::String(ref s) => Self::parse_text(s),
            other => Err(Self::document_type_error(&other)),
        }
    }

    fn to_driver(&self) -> Result<DriverValue, Error> {
        Ok(DriverValue::Timestamp(*self))
    }

    fn from_driver(value: DriverValue) -> Result<Self, Error> {
        match value {
            DriverValue::Timestamp(v) => Ok(v),
            other => Err(Self::driver_type_error(&other)),
        }
    }

    fn serialize_value<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if !encodable(self) {
            return Err(S::Error::custom(Error::marshal(
                ErrorClass::Json,
                format_rfc3339_nano(self),
                Self::TYPE_NAME,
            )));
        }
        serializer.serialize_str(&format_rfc3339_nano(self))
    }

    #[cfg(feature = "sea-query")]
    fn query_null() -> sea_query::Value {
        sea_query::Value::ChronoDateTimeWithTimeZone(None)
    }
}
