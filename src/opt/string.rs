use serde_json::Value;

use super::OptValue;
use crate::error::Error;

/// An optional `String`.
///
/// Text is taken as-is, except that `""` is the empty state. Use
/// [`OptStringNonEmpty`](crate::OptStringNonEmpty) when an explicitly empty
/// string should never be treated as a value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct OptString(Option<String>);

impl OptString {
    pub fn new(value: impl Into<String>) -> Self {
        OptString(Some(value.into()))
    }

    /// Borrow the value without copying it.
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl From<&str> for OptString {
    fn from(value: &str) -> Self {
        OptString::new(value)
    }
}

impl From<String> for OptString {
    fn from(value: String) -> Self {
        OptString::new(value)
    }
}

impl OptValue for OptString {
    type Value = String;

    fn is_defined(&self) -> bool {
        self.0.is_some()
    }

    fn get(&self) -> Option<String> {
        self.0.clone()
    }

    fn to_text(&self) -> String {
        self.0.clone().unwrap_or_default()
    }

    fn parse_text(text: &str) -> Result<Self, Error> {
        if text.is_empty() {
            return Ok(OptString::default());
        }
        Ok(OptString::new(text))
    }

    fn to_json(&self) -> Value {
        self.0.clone().map_or(Value::Null, Value::String)
    }

    fn from_json(value: &Value) -> Result<Self, Error> {
        match value {
            Value::Null => Ok(OptString::default()),
            Value::String(s) => Ok(OptString::new(s.as_str())),
            _ => Err(Error::StringFormat),
        }
    }
}

opt_value_impls!(OptString);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opt::test_support::assert_round_trips;
    use serde_json::json;

    #[test]
    fn defined_values_round_trip() {
        assert_round_trips(OptString::new("a"));
        assert_round_trips(OptString::new("with, comma = and equals"));
    }

    #[test]
    fn get_or_else() {
        assert_eq!(OptString::default().get_or_else("z".into()), "z");
        assert_eq!(OptString::new("a").get_or_else("z".into()), "a");
    }

    #[test]
    fn empty_json_string_is_defined() {
        let o = OptString::from_json(&json!("")).unwrap();
        assert!(o.is_defined());
        assert_eq!(o.as_deref(), Some(""));
    }

    #[test]
    fn bad_json() {
        for value in [json!(1), json!(true), json!([]), json!({})] {
            assert_eq!(OptString::from_json(&value), Err(Error::StringFormat), "{value}");
        }
    }
}
