//! Error types for nullable conversions.
//!
//! Every failing operation returns an [`Error`]. The variant tells which phase
//! failed (parsing, decoding, narrowing, kind check or encoding), and the
//! [`ErrorClass`] tells which representation was involved.

use std::fmt;

/// Representation an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    /// Direct text input
    Parse,
    /// JSON documents
    Json,
    /// Driver values
    Sql,
    /// Encoded text bytes
    Text,
}

impl ErrorClass {
    /// Prefix used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorClass::Parse => "parse",
            ErrorClass::Json => "json",
            ErrorClass::Sql => "sql",
            ErrorClass::Text => "text",
        }
    }
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for nullable conversions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A valid value could not be encoded
    Marshal {
        class: ErrorClass,
        value: String,
        src_type: &'static str,
    },
    /// Raw input could not be decoded at all
    Unmarshal {
        class: ErrorClass,
        data: String,
        dest_type: &'static str,
    },
    /// A value of the right kind does not fit the destination without loss
    Conversion {
        class: ErrorClass,
        value: String,
        src_type: &'static str,
        dest_type: &'static str,
    },
    /// Non-empty text does not follow the destination's grammar
    Parse {
        class: ErrorClass,
        input: String,
        dest_type: &'static str,
    },
    /// A decoded value has the wrong kind
    Type {
        class: ErrorClass,
        found: String,
        expected: Vec<&'static str>,
    },
}

impl Error {
    pub(crate) fn marshal(class: ErrorClass, value: impl fmt::Display, src_type: &'static str) -> Self {
        Error::Marshal {
            class,
            value: value.to_string(),
            src_type,
        }
    }

    pub(crate) fn unmarshal(class: ErrorClass, data: &[u8], dest_type: &'static str) -> Self {
        Error::Unmarshal {
            class,
            data: String::from_utf8_lossy(data).into_owned(),
            dest_type,
        }
    }

    pub(crate) fn conversion(
        class: ErrorClass,
        value: impl fmt::Display,
        src_type: &'static str,
        dest_type: &'static str,
    ) -> Self {
        Error::Conversion {
            class,
            value: value.to_string(),
            src_type,
            dest_type,
        }
    }

    pub(crate) fn parse(class: ErrorClass, input: &str, dest_type: &'static str) -> Self {
        Error::Parse {
            class,
            input: input.to_string(),
            dest_type,
        }
    }

    pub(crate) fn type_mismatch(
        class: ErrorClass,
        found: impl Into<String>,
        expected: &[&'static str],
    ) -> Self {
        Error::Type {
            class,
            found: found.into(),
            expected: expected.to_vec(),
        }
    }

    /// Representation the error originated from.
    pub fn class(&self) -> ErrorClass {
        match self {
            Error::Marshal { class, .. }
            | Error::Unmarshal { class, .. }
            | Error::Conversion { class, .. }
            | Error::Parse { class, .. }
            | Error::Type { class, .. } => *class,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Marshal {
                class,
                value,
                src_type,
            } => write!(f, "{}: cannot marshal {} of type {}", class, value, src_type),
            Error::Unmarshal {
                class,
                data,
                dest_type,
            } => write!(
                f,
                "{}: cannot unmarshal '{}' into value of type {}",
                class, data, dest_type
            ),
            Error::Conversion {
                class,
                value,
                src_type,
                dest_type,
            } => write!(
                f,
                "{}: cannot convert {} of type {} into value of type {}",
                class, value, src_type, dest_type
            ),
            Error::Parse {
                class,
                input,
                dest_type,
            } => write!(
                f,
                "{}: cannot parse '{}' into value of type {}",
                class, input, dest_type
            ),
            Error::Type {
                class,
                found,
                expected,
            } => write!(
                f,
                "{}: invalid type (expected {}, got {})",
                class,
                expected.join(" or "),
                found
            ),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marshal_message() {
        let err = Error::marshal(ErrorClass::Json, 0.25, "f64");
        assert_eq!(err.to_string(), "json: cannot marshal 0.25 of type f64");
    }

    #[test]
    fn test_unmarshal_message() {
        let err = Error::unmarshal(ErrorClass::Text, b"1.2", "isize");
        assert_eq!(
            err.to_string(),
            "text: cannot unmarshal '1.2' into value of type isize"
        );
    }

    #[test]
    fn test_unmarshal_keeps_invalid_utf8_readable() {
        let err = Error::unmarshal(ErrorClass::Json, &[b'x', 0xff], "bool");
        assert!(matches!(err, Error::Unmarshal { ref data, .. } if data.starts_with('x')));
    }

    #[test]
    fn test_conversion_message() {
        let err = Error::conversion(ErrorClass::Sql, -1, "int64", "usize");
        assert_eq!(
            err.to_string(),
            "sql: cannot convert -1 of type int64 into value of type usize"
        );
    }

    #[test]
    fn test_parse_message() {
        let err = Error::parse(ErrorClass::Parse, "x", "bool");
        assert_eq!(err.to_string(), "parse: cannot parse 'x' into value of type bool");
    }

    #[test]
    fn test_type_message_joins_expected_kinds() {
        let err = Error::type_mismatch(ErrorClass::Json, "string", &["number", "null"]);
        assert_eq!(
            err.to_string(),
            "json: invalid type (expected number or null, got string)"
        );

        let single = Error::type_mismatch(ErrorClass::Sql, "bool", &["int64"]);
        assert_eq!(single.to_string(), "sql: invalid type (expected int64, got bool)");
    }

    #[test]
    fn test_class_accessor() {
        assert_eq!(Error::parse(ErrorClass::Parse, "", "f64").class(), ErrorClass::Parse);
        assert_eq!(
            Error::type_mismatch(ErrorClass::Sql, "bool", &["string"]).class(),
            ErrorClass::Sql
        );
        assert_eq!(ErrorClass::Text.to_string(), "text");
    }
}
