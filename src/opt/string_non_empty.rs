use serde_json::Value;

use super::{OptString, OptValue};
use crate::error::Error;

/// An [`OptString`] that, when defined, is never `""`.
///
/// Constructing from an empty string gives the empty state. In JSON, an
/// explicit `""` is rejected since it can only be a mistake; use `null` or
/// leave the key out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct OptStringNonEmpty(OptString);

impl OptStringNonEmpty {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let inner = if value.is_empty() {
            OptString::default()
        } else {
            OptString::new(value)
        };
        // Cannot fail: only a defined "" is rejected.
        Self::checked(inner).unwrap_or_default()
    }

    fn checked(inner: OptString) -> Result<Self, Error> {
        match inner.as_deref() {
            Some("") => Err(Error::MustBeNonEmptyString),
            _ => Ok(OptStringNonEmpty(inner)),
        }
    }

    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl TryFrom<OptString> for OptStringNonEmpty {
    type Error = Error;

    fn try_from(inner: OptString) -> Result<Self, Error> {
        Self::checked(inner)
    }
}

impl From<OptStringNonEmpty> for OptString {
    fn from(value: OptStringNonEmpty) -> Self {
        value.0
    }
}

impl OptValue for OptStringNonEmpty {
    type Value = String;

    fn is_defined(&self) -> bool {
        self.0.is_defined()
    }

    fn get(&self) -> Option<String> {
        self.0.get()
    }

    fn to_text(&self) -> String {
        self.0.to_text()
    }

    fn parse_text(text: &str) -> Result<Self, Error> {
        Self::checked(OptString::parse_text(text)?)
    }

    fn to_json(&self) -> Value {
        self.0.to_json()
    }

    fn from_json(value: &Value) -> Result<Self, Error> {
        Self::checked(OptString::from_json(value)?)
    }
}

opt_value_impls!(OptStringNonEmpty);
