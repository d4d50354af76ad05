use std::fmt;

use serde_json::Value;
use url::Url;

use super::OptValue;
use crate::error::Error;

/// A parsed URL or URI reference: either absolute, or relative
/// (`"relative/url"`, `"/path?q=1"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UrlRef {
    Absolute(Url),
    Relative(RelativeRef),
}

/// A relative reference that has passed [`UrlRef::parse`]. It can only be
/// built there, so its text always parses back to the same value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativeRef(String);

impl RelativeRef {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RelativeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl UrlRef {
    pub fn parse(text: &str) -> Result<UrlRef, Error> {
        match Url::parse(text) {
            Ok(url) => Ok(UrlRef::Absolute(url)),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                // A colon in the first segment of a relative reference would
                // be read as a scheme, so "::" or ":x" is malformed.
                let first_segment = text.split(['/', '?', '#']).next().unwrap_or_default();
                if first_segment.contains(':') {
                    return Err(Error::UrlFormat);
                }
                let base = Url::parse("http://localhost/").map_err(|_| Error::UrlFormat)?;
                base.join(text).map_err(|_| Error::UrlFormat)?;
                Ok(UrlRef::Relative(RelativeRef(text.to_string())))
            }
            Err(_) => Err(Error::UrlFormat),
        }
    }

    pub fn is_absolute(&self) -> bool {
        matches!(self, UrlRef::Absolute(_))
    }

    pub fn as_absolute(&self) -> Option<&Url> {
        match self {
            UrlRef::Absolute(url) => Some(url),
            UrlRef::Relative(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            UrlRef::Absolute(url) => url.as_str(),
            UrlRef::Relative(r) => r.as_str(),
        }
    }
}

impl fmt::Display for UrlRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Url> for UrlRef {
    fn from(url: Url) -> Self {
        UrlRef::Absolute(url)
    }
}

/// An optional URL, absolute or relative.
///
/// Text and JSON forms are the URL string; absolute URLs are normalized the
/// way [`url::Url`] serializes them. Use
/// [`OptUrlAbsolute`](crate::OptUrlAbsolute) to reject relative references.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct OptUrl(Option<UrlRef>);

impl OptUrl {
    pub fn new(url: impl Into<UrlRef>) -> Self {
        OptUrl(Some(url.into()))
    }

    /// Borrow the value without copying it.
    pub fn as_ref(&self) -> Option<&UrlRef> {
        self.0.as_ref()
    }
}

impl OptValue for OptUrl {
    type Value = UrlRef;

    fn is_defined(&self) -> bool {
        self.0.is_some()
    }

    fn get(&self) -> Option<UrlRef> {
        self.0.clone()
    }

    fn to_text(&self) -> String {
        self.0.as_ref().map(UrlRef::to_string).unwrap_or_default()
    }

    fn parse_text(text: &str) -> Result<Self, Error> {
        if text.is_empty() {
            return Ok(OptUrl::default());
        }
        UrlRef::parse(text).map(OptUrl::new)
    }

    fn to_json(&self) -> Value {
        self.0
            .as_ref()
            .map_or(Value::Null, |u| Value::String(u.to_string()))
    }

    fn from_json(value: &Value) -> Result<Self, Error> {
        match value {
            Value::Null => Ok(OptUrl::default()),
            Value::String(s) => OptUrl::parse_text(s),
            _ => Err(Error::UrlFormat),
        }
    }
}

opt_value_impls!(OptUrl);
