use serde_json::Value;

use super::OptValue;
use crate::error::Error;

/// An optional `bool`, so that `false` and "not set" can be told apart.
///
/// Text parsing accepts `true`/`false`, `yes`/`no` (any case) and `1`/`0`.
/// Rendering always gives `true`, `false`, or `""`. The JSON form is a JSON
/// boolean or `null`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct OptBool(Option<bool>);

impl OptBool {
    pub fn new(value: bool) -> Self {
        OptBool(Some(value))
    }
}

impl From<bool> for OptBool {
    fn from(value: bool) -> Self {
        OptBool::new(value)
    }
}

impl OptValue for OptBool {
    type Value = bool;

    fn is_defined(&self) -> bool {
        self.0.is_some()
    }

    fn get(&self) -> Option<bool> {
        self.0
    }

    fn to_text(&self) -> String {
        match self.0 {
            Some(true) => "true".to_string(),
            Some(false) => "false".to_string(),
            None => String::new(),
        }
    }

    fn parse_text(text: &str) -> Result<Self, Error> {
        if text.is_empty() {
            return Ok(OptBool::default());
        }
        let is = |word: &str| text.eq_ignore_ascii_case(word);
        if text == "1" || is("true") || is("yes") {
            Ok(OptBool::new(true))
        } else if text == "0" || is("false") || is("no") {
            Ok(OptBool::new(false))
        } else {
            Err(Error::BoolFormat)
        }
    }

    fn to_json(&self) -> Value {
        self.0.map_or(Value::Null, Value::Bool)
    }

    fn from_json(value: &Value) -> Result<Self, Error> {
        match value {
            Value::Null => Ok(OptBool::default()),
            Value::Bool(b) => Ok(OptBool::new(*b)),
            _ => Err(Error::BoolFormat),
        }
    }
}

opt_value_impls!(OptBool);
