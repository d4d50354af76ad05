use serde_json::Value;

use super::{OptInt, OptValue};
use crate::error::Error;

/// An [`OptInt`] that, when defined, is always greater than zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OptIntGreaterThanZero(OptInt);

impl OptIntGreaterThanZero {
    pub fn new(value: i64) -> Result<Self, Error> {
        Self::checked(OptInt::new(value))
    }

    fn checked(inner: OptInt) -> Result<Self, Error> {
        match inner.get() {
            Some(n) if n <= 0 => Err(Error::MustBeGreaterThanZero),
            _ => Ok(OptIntGreaterThanZero(inner)),
        }
    }
}

impl TryFrom<OptInt> for OptIntGreaterThanZero {
    type Error = Error;

    fn try_from(inner: OptInt) -> Result<Self, Error> {
        Self::checked(inner)
    }
}

impl From<OptIntGreaterThanZero> for OptInt {
    fn from(value: OptIntGreaterThanZero) -> Self {
        value.0
    }
}

impl OptValue for OptIntGreaterThanZero {
    type Value = i64;

    fn is_defined(&self) -> bool {
        self.0.is_defined()
    }

    fn get(&self) -> Option<i64> {
        self.0.get()
    }

    fn to_text(&self) -> String {
        self.0.to_text()
    }

    fn parse_text(text: &str) -> Result<Self, Error> {
        Self::checked(OptInt::parse_text(text)?)
    }

    fn to_json(&self) -> Value {
        self.0.to_json()
    }

    fn from_json(value: &Value) -> Result<Self, Error> {
        Self::checked(OptInt::from_json(value)?)
    }
}

opt_value_impls!(OptIntGreaterThanZero);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opt::test_support::assert_round_trips;
    use serde_json::json;

    #[test]
    fn accepts_positive() {
        assert_round_trips(OptIntGreaterThanZero::new(1).unwrap());
        assert_round_trips(OptIntGreaterThanZero::new(i64::MAX).unwrap());
        assert_eq!(OptIntGreaterThanZero::parse_text("3").unwrap().get(), Some(3));
    }

    #[test]
    fn rejects_zero_and_negative_on_every_path() {
        assert_eq!(OptIntGreaterThanZero::new(0), Err(Error::MustBeGreaterThanZero));
        assert_eq!(OptIntGreaterThanZero::new(-1), Err(Error::MustBeGreaterThanZero));
        assert_eq!(
            OptIntGreaterThanZero::parse_text("0"),
            Err(Error::MustBeGreaterThanZero)
        );
        assert_eq!(
            OptIntGreaterThanZero::from_json(&json!(-5)),
            Err(Error::MustBeGreaterThanZero)
        );
        assert_eq!(
            OptIntGreaterThanZero::try_from(OptInt::new(0)),
            Err(Error::MustBeGreaterThanZero)
        );
    }

    #[test]
    fn format_errors_pass_through() {
        assert_eq!(OptIntGreaterThanZero::parse_text("x"), Err(Error::IntFormat));
        assert_eq!(OptIntGreaterThanZero::from_json(&json!("1")), Err(Error::IntFormat));
    }

    #[test]
    fn failed_unmarshal_leaves_value_alone() {
        let mut o = OptIntGreaterThanZero::new(4).unwrap();
        assert_eq!(o.unmarshal_text("-4"), Err(Error::MustBeGreaterThanZero));
        assert_eq!(o.get(), Some(4));
    }
}
