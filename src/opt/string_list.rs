use serde_json::Value;

use super::OptValue;
use crate::error::Error;

/// An optional list of strings.
///
/// The empty state is not the same as a defined, zero-length list; only
/// [`is_defined`](OptValue::is_defined) tells them apart.
///
/// As text, the value is a comma-delimited string (`"a,b"`), and a string
/// without commas is a one-element list. Parsing text into an already-defined
/// list *appends*, so a config source that repeats a key builds the list up
/// one entry at a time. In JSON the value may be `null`, a single string, or
/// an array of strings; it is always written as `null` or an array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct OptStringList(Option<Vec<String>>);

impl OptStringList {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        OptStringList(Some(values.into_iter().map(Into::into).collect()))
    }

    /// Number of values; zero when empty.
    pub fn len(&self) -> usize {
        self.0.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<String>> for OptStringList {
    fn from(values: Vec<String>) -> Self {
        OptStringList(Some(values))
    }
}

impl OptValue for OptStringList {
    type Value = Vec<String>;

    fn is_defined(&self) -> bool {
        self.0.is_some()
    }

    fn get(&self) -> Option<Vec<String>> {
        self.0.clone()
    }

    fn to_text(&self) -> String {
        self.0.as_deref().map(|v| v.join(",")).unwrap_or_default()
    }

    fn parse_text(text: &str) -> Result<Self, Error> {
        if text.is_empty() {
            return Ok(OptStringList::default());
        }
        Ok(OptStringList::new(text.split(',')))
    }

    fn to_json(&self) -> Value {
        match &self.0 {
            Some(values) => Value::Array(values.iter().cloned().map(Value::String).collect()),
            None => Value::Null,
        }
    }

    fn from_json(value: &Value) -> Result<Self, Error> {
        match value {
            Value::Null => Ok(OptStringList::default()),
            Value::String(s) => Ok(OptStringList::new([s.as_str()])),
            Value::Array(items) => items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
                .map(OptStringList::from)
                .ok_or(Error::StringListFormat),
            _ => Err(Error::StringListFormat),
        }
    }

    fn unmarshal_text(&mut self, text: &str) -> Result<(), Error> {
        let Some(more) = Self::parse_text(text)?.0 else {
            return Ok(());
        };
        match &mut self.0 {
            Some(existing) => existing.extend(more),
            None => self.0 = Some(more),
        }
        Ok(())
    }
}

opt_value_impls!(OptStringList);
