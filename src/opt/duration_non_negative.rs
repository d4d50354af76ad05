use chrono::TimeDelta;
use serde_json::Value;

use super::{OptDuration, OptValue};
use crate::error::Error;

/// An [`OptDuration`] that, when defined, is never negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OptDurationNonNegative(OptDuration);

impl OptDurationNonNegative {
    pub fn new(value: TimeDelta) -> Result<Self, Error> {
        Self::checked(OptDuration::new(value))
    }

    fn checked(inner: OptDuration) -> Result<Self, Error> {
        match inner.get() {
            Some(d) if d < TimeDelta::zero() => Err(Error::MustNotBeNegative),
            _ => Ok(OptDurationNonNegative(inner)),
        }
    }
}

impl TryFrom<OptDuration> for OptDurationNonNegative {
    type Error = Error;

    fn try_from(inner: OptDuration) -> Result<Self, Error> {
        Self::checked(inner)
    }
}

impl From<OptDurationNonNegative> for OptDuration {
    fn from(value: OptDurationNonNegative) -> Self {
        value.0
    }
}

impl OptValue for OptDurationNonNegative {
    type Value = TimeDelta;

    fn is_defined(&self) -> bool {
        self.0.is_defined()
    }

    fn get(&self) -> Option<TimeDelta> {
        self.0.get()
    }

    fn to_text(&self) -> String {
        self.0.to_text()
    }

    fn parse_text(text: &str) -> Result<Self, Error> {
        Self::checked(OptDuration::parse_text(text)?)
    }

    fn to_json(&self) -> Value {
        self.0.to_json()
    }

    fn from_json(value: &Value) -> Result<Self, Error> {
        Self::checked(OptDuration::from_json(value)?)
    }
}

opt_value_impls!(OptDurationNonNegative);
