//! `serde` support for [`Nullable`].
//!
//! An invalid wrapper serializes as none (JSON `null`); a valid one as the
//! same literal [`Nullable::to_document`] writes. Deserialization goes through
//! a self-describing `serde_json::Value`, so the per-type document rules
//! (kind checks, integer overflow, RFC 3339 parsing) apply unchanged.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::value::{Nullable, Scalar};

impl<T: Scalar> Serialize for Nullable<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.valid {
            self.value.serialize_value(serializer)
        } else {
            serializer.serialize_none()
        }
    }
}

impl<'de, T: Scalar> Deserialize<'de> for Nullable<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let document = serde_json::Value::deserialize(deserializer)?;
        if document.is_null() {
            return Ok(Self::default());
        }
        T::decode_document(document)
            .map(Self::from_value)
            .map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use crate::{NullBool, NullFloat64, NullInt, NullString};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Record {
        id: NullInt,
        name: NullString,
        #[serde(default)]
        active: NullBool,
    }

    #[test]
    fn test_serialize_struct_fields() {
        let record = Record {
            id: NullInt::from_value(7),
            name: NullString::default(),
            active: NullBool::from_value(true),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"id":7,"name":null,"active":true}"#);
    }

    #[test]
    fn test_deserialize_struct_fields() {
        let record: Record = serde_json::from_str(r#"{"id":null,"name":"bob"}"#).unwrap();
        assert_eq!(record.id, NullInt::default());
        assert_eq!(record.name, NullString::from_value("bob".to_string()));
        assert_eq!(record.active, NullBool::default());
    }

    #[test]
    fn test_deserialize_applies_document_rules() {
        let err = serde_json::from_str::<Record>(r#"{"id":0.5,"name":null}"#).unwrap_err();
        assert!(err.to_string().contains("cannot convert"));

        let err = serde_json::from_str::<Record>(r#"{"id":1,"name":1}"#).unwrap_err();
        assert!(err.to_string().contains("invalid type"));
    }

    #[test]
    fn test_non_finite_float_is_a_serializer_error() {
        assert!(serde_json::to_string(&NullFloat64::from_value(f64::NAN)).is_err());
        assert_eq!(serde_json::to_string(&NullFloat64::default()).unwrap(), "null");
    }
}
