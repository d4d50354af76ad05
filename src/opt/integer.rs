use serde_json::Value;

use super::OptValue;
use crate::error::Error;

/// An optional `i64`.
///
/// Text is plain decimal. The JSON form is a number; floats with no
/// fractional part (`3.0`) are accepted, anything else is an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OptInt(Option<i64>);

impl OptInt {
    pub fn new(value: i64) -> Self {
        OptInt(Some(value))
    }
}

impl From<i64> for OptInt {
    fn from(value: i64) -> Self {
        OptInt::new(value)
    }
}

impl OptValue for OptInt {
    type Value = i64;

    fn is_defined(&self) -> bool {
        self.0.is_some()
    }

    fn get(&self) -> Option<i64> {
        self.0
    }

    fn to_text(&self) -> String {
        self.0.map(|n| n.to_string()).unwrap_or_default()
    }

    fn parse_text(text: &str) -> Result<Self, Error> {
        if text.is_empty() {
            return Ok(OptInt::default());
        }
        text.parse::<i64>()
            .map(OptInt::new)
            .map_err(|_| Error::IntFormat)
    }

    fn to_json(&self) -> Value {
        self.0.map_or(Value::Null, Value::from)
    }

    fn from_json(value: &Value) -> Result<Self, Error> {
        match value {
            Value::Null => Ok(OptInt::default()),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    return Ok(OptInt::new(i));
                }
                match n.as_f64() {
                    Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
                        Ok(OptInt::new(f as i64))
                    }
                    _ => Err(Error::IntFormat),
                }
            }
            _ => Err(Error::IntFormat),
        }
    }
}

opt_value_impls!(OptInt);
