//! `f64`.
//!
//! Documents cannot carry NaN or infinities, so encoding those is an
//! `Error::Marshal`; text and driver values carry them fine.
//!
//! Text uses the shortest round-trip digits, in exponent form (`1e+21`,
//! `2.5e-07`) when the decimal exponent is below -4 or at least 6.

use std::fmt;

use serde::ser::{Error as _, Serializer};

use crate::error::{Error, ErrorClass};
use crate::value::{DriverValue, Scalar};

/// Decimal exponents outside `-4..EXPONENT_FORM_AT` use exponent form.
const EXPONENT_FORM_AT: i32 = 6;

/// Formats `v` with the fewest digits that parse back to `v`.
pub(crate) fn format_shortest(v: f64) -> String {
    if v.is_infinite() {
        return if v > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }
    if !v.is_finite() {
        return v.to_string();
    }
    let scientific = format!("{:e}", v);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return v.to_string();
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    if (-4..EXPONENT_FORM_AT).contains(&exponent) {
        v.to_string()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    }
}

impl Scalar for f64 {
    const TYPE_NAME: &'static str = "f64";
    const DOCUMENT_KIND: &'static str = "number";
    const DRIVER_KIND: &'static str = "float64";

    fn zero() -> Self {
        0.0
    }

    fn fmt_display(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_shortest(*self))
    }

    fn encode_text(&self) -> Result<Vec<u8>, Error> {
        Ok(format_shortest(*self).into_bytes())
    }

    fn encode_document(&self) -> Result<Vec<u8>, Error> {
        if !self.is_finite() {
            return Err(Error::marshal(ErrorClass::Json, self, Self::TYPE_NAME));
        }
        serde_json::to_vec(self).map_err(|_| Error::marshal(ErrorClass::Json, self, Self::TYPE_NAME))
    }

    fn parse_text(input: &str) -> Result<Self, Error> {
        input
            .parse::<f64>()
            .map_err(|_| Error::parse(ErrorClass::Parse, input, Self::TYPE_NAME))
    }

    fn decode_document(document: serde_json::Value) -> Result<Self, Error> {
        match document {
            serde_json::Value::Number(ref number) => number
                .as_f64()
                .ok_or_else(|| Error::conversion(ErrorClass::Json, number, "number", Self::TYPE_NAME)),
            other => Err(Self::document_type_error(&other)),
        }
    }

    fn to_driver(&self) -> Result<DriverValue, Error> {
        Ok(DriverValue::Float64(*self))
    }

    fn from_driver(value: DriverValue) -> Result<Self, Error> {
        match value {
            DriverValue::Float64(v) => Ok(v),
            other => Err(Self::driver_type_error(&other)),
        }
    }

    fn serialize_value<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if !self.is_finite() {
            return Err(S::Error::custom(Error::marshal(ErrorClass::Json, self, Self::TYPE_NAME)));
        }
        serializer.serialize_f64(*self)
    }

    #[cfg(feature = "sea-query")]
    fn query_null() -> sea_query::Value {
        sea_query::Value::Double(None)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::{Error, ErrorClass};
    use crate::value::DriverValue;
    use crate::NullFloat64;

    #[test]
    fn test_set_from_text() {
        let cases: &[(&str, f64)] = &[
            ("0", 0.0),
            ("1.5", 1.5),
            ("-1e+10", -1e10),
            ("2.5E-3", 0.0025),
            (".5", 0.5),
        ];
        for &(input, value) in cases {
            let mut f = NullFloat64::default();
            f.set_from_text(input).unwrap();
            assert_eq!(f, NullFloat64::from_value(value), "input {:?}", input);
        }

        let mut f = NullFloat64::from_value(1.0);
        f.set_from_text("").unwrap();
        assert!(!f.valid);

        for input in ["x", "1.2.3", "1e", "0x10"] {
            assert!(matches!(f.set_from_text(input), Err(Error::Parse { .. })), "input {:?}", input);
        }
    }

    #[test]
    fn test_set_from_text_bytes() {
        let mut f = NullFloat64::default();
        f.set_from_text_bytes(Some(b"0.25".as_slice())).unwrap();
        assert_eq!(f.value_or_zero(), 0.25);

        let err = f.set_from_text_bytes(Some(b"abc".as_slice())).unwrap_err();
        assert!(matches!(err, Error::Unmarshal { class: ErrorClass::Text, .. }));
    }

    #[test]
    fn test_set_from_document() {
        let mut f = NullFloat64::default();
        f.set_from_document(b"0.1").unwrap();
        assert_eq!(f, NullFloat64::from_value(0.1));

        f.set_from_document(b"3").unwrap();
        assert_eq!(f, NullFloat64::from_value(3.0));

        f.set_from_document(b"null").unwrap();
        assert!(!f.valid);

        f.set(1.0);
        let err = f.set_from_document(br#""1.5""#).unwrap_err();
        assert!(matches!(err, Error::Type { ref found, .. } if found == "string"));
        assert!(!f.valid);

        assert!(matches!(f.set_from_document(b"1.5x"), Err(Error::Unmarshal { .. })));
    }

    #[test]
    fn test_to_document() {
        assert_eq!(NullFloat64::from_value(0.5).to_document(), Ok(b"0.5".to_vec()));
        assert_eq!(NullFloat64::default().to_document(), Ok(b"null".to_vec()));

        for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = NullFloat64::from_value(v).to_document().unwrap_err();
            assert!(matches!(err, Error::Marshal { class: ErrorClass::Json, .. }));
        }
    }

    #[test]
    fn test_display_and_text() {
        assert_eq!(NullFloat64::from_value(1.0).to_string(), "1");
        assert_eq!(NullFloat64::from_value(-0.125).to_string(), "-0.125");
        assert_eq!(NullFloat64::from_value(2.5).to_text(), Ok(Some(b"2.5".to_vec())));
        assert_eq!(NullFloat64::from_value(f64::INFINITY).to_text(), Ok(Some(b"+Inf".to_vec())));
    }

    #[test]
    fn test_exponent_form() {
        let cases: &[(f64, &str)] = &[
            (0.0, "0"),
            (123456.0, "123456"),
            (1234567.0, "1.234567e+06"),
            (1e21, "1e+21"),
            (1e300, "1e+300"),
            (-2.5e-7, "-2.5e-07"),
            (0.0001, "0.0001"),
            (0.00001, "1e-05"),
            (f64::NEG_INFINITY, "-Inf"),
            (f64::NAN, "NaN"),
        ];
        for &(value, text) in cases {
            assert_eq!(super::format_shortest(value), text, "value {:?}", value);
        }

        let mut f = NullFloat64::default();
        for &(value, text) in cases.iter().filter(|(v, _)| !v.is_nan()) {
            f.set_from_text(text).unwrap();
            assert_eq!(f.value, value, "text {:?}", text);
        }
    }

    #[test]
    fn test_driver_values() {
        assert_eq!(NullFloat64::from_value(1.5).to_driver_value(), Ok(DriverValue::Float64(1.5)));

        let mut f = NullFloat64::default();
        f.set_from_driver_value(DriverValue::Float64(-2.0)).unwrap();
        assert_eq!(f, NullFloat64::from_value(-2.0));

        // no implicit widening from int64
        let err = f.set_from_driver_value(DriverValue::Int64(2)).unwrap_err();
        assert!(matches!(err, Error::Type { class: ErrorClass::Sql, .. }));
        assert!(!f.valid);
    }

    #[test]
    fn test_negative_zero_is_zero() {
        assert!(!NullFloat64::from_value_or_zero(-0.0).valid);
        assert!(NullFloat64::from_value_or_zero(f64::NAN).valid);
    }
}
