use serde_json::Value;
use url::Url;

use super::{OptUrl, OptValue, UrlRef};
use crate::error::Error;

/// An [`OptUrl`] that, when defined, is always absolute (has a scheme).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct OptUrlAbsolute(OptUrl);

impl OptUrlAbsolute {
    /// A [`Url`] is absolute by construction, so this cannot fail.
    pub fn new(url: Url) -> Self {
        OptUrlAbsolute(OptUrl::new(url))
    }

    pub fn from_ref(url: UrlRef) -> Result<Self, Error> {
        Self::checked(OptUrl::new(url))
    }

    fn checked(inner: OptUrl) -> Result<Self, Error> {
        match inner.as_ref() {
            Some(url) if !url.is_absolute() => Err(Error::UrlNotAbsolute),
            _ => Ok(OptUrlAbsolute(inner)),
        }
    }

    pub fn as_url(&self) -> Option<&Url> {
        self.0.as_ref().and_then(UrlRef::as_absolute)
    }
}

impl TryFrom<OptUrl> for OptUrlAbsolute {
    type Error = Error;

    fn try_from(inner: OptUrl) -> Result<Self, Error> {
        Self::checked(inner)
    }
}

impl From<OptUrlAbsolute> for OptUrl {
    fn from(value: OptUrlAbsolute) -> Self {
        value.0
    }
}

impl OptValue for OptUrlAbsolute {
    type Value = Url;

    fn is_defined(&self) -> bool {
        self.0.is_defined()
    }

    fn get(&self) -> Option<Url> {
        self.as_url().cloned()
    }

    fn to_text(&self) -> String {
        self.0.to_text()
    }

    fn parse_text(text: &str) -> Result<Self, Error> {
        Self::checked(OptUrl::parse_text(text)?)
    }

    fn to_json(&self) -> Value {
        self.0.to_json()
    }

    fn from_json(value: &Value) -> Result<Self, Error> {
        Self::checked(OptUrl::from_json(value)?)
    }
}

opt_value_impls!(OptUrlAbsolute);
