use serde_json::{Number, Value};

use super::OptValue;
use crate::error::Error;

/// An optional `f64`.
///
/// Text parsing accepts any finite decimal number; `NaN` and infinities are
/// rejected because they have no JSON form. Rendering uses the shortest text
/// that parses back to the same value.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct OptFloat(Option<f64>);

impl OptFloat {
    /// Accepts any `f64`. A `NaN` or infinite value has no JSON number and is
    /// written as `null`, so it reads back as empty; use
    /// [`try_new`](Self::try_new) to keep such values out.
    pub fn new(value: f64) -> Self {
        OptFloat(Some(value))
    }

    /// Same as [`new`](Self::new), but rejects `NaN` and infinities the way
    /// text parsing does.
    pub fn try_new(value: f64) -> Result<Self, Error> {
        if value.is_finite() {
            Ok(OptFloat::new(value))
        } else {
            Err(Error::FloatFormat)
        }
    }
}

impl From<f64> for OptFloat {
    fn from(value: f64) -> Self {
        OptFloat::new(value)
    }
}

impl OptValue for OptFloat {
    type Value = f64;

    fn is_defined(&self) -> bool {
        self.0.is_some()
    }

    fn get(&self) -> Option<f64> {
        self.0
    }

    fn to_text(&self) -> String {
        self.0.map(|f| f.to_string()).unwrap_or_default()
    }

    fn parse_text(text: &str) -> Result<Self, Error> {
        if text.is_empty() {
            return Ok(OptFloat::default());
        }
        text.parse::<f64>()
            .map_err(|_| Error::FloatFormat)
            .and_then(OptFloat::try_new)
    }

    fn to_json(&self) -> Value {
        self.0
            .and_then(Number::from_f64)
            .map_or(Value::Null, Value::Number)
    }

    fn from_json(value: &Value) -> Result<Self, Error> {
        match value {
            Value::Null => Ok(OptFloat::default()),
            Value::Number(n) => n.as_f64().map(OptFloat::new).ok_or(Error::FloatFormat),
            _ => Err(Error::FloatFormat),
        }
    }
}

opt_value_impls!(OptFloat);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opt::test_support::assert_round_trips;
    use serde_json::json;

    #[test]
    fn defined_values_round_trip() {
        assert_round_trips(OptFloat::new(1.5));
        assert_round_trips(OptFloat::new(-0.001));
        assert_round_trips(OptFloat::new(3.0));
        assert_round_trips(OptFloat::new(1e300));
    }

    #[test]
    fn integers_parse_as_floats() {
        assert_eq!(OptFloat::parse_text("3").unwrap(), OptFloat::new(3.0));
        assert_eq!(OptFloat::from_json(&json!(3)).unwrap(), OptFloat::new(3.0));
    }

    #[test]
    fn bad_text() {
        for text in ["x", "NaN", "inf", "1.5.1"] {
            assert_eq!(OptFloat::parse_text(text), Err(Error::FloatFormat), "{text}");
        }
    }

    #[test]
    fn non_finite_values() {
        for f in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(OptFloat::try_new(f), Err(Error::FloatFormat), "{f}");
            let lossy = OptFloat::new(f);
            assert!(lossy.is_defined());
            assert_eq!(lossy.to_json(), Value::Null);
        }
        assert_eq!(OptFloat::try_new(2.5).unwrap(), OptFloat::new(2.5));
    }

    #[test]
    fn bad_json() {
        for value in [json!("1.5"), json!(true), json!([]), json!({})] {
            assert_eq!(OptFloat::from_json(&value), Err(Error::FloatFormat), "{value}");
        }
    }
}
