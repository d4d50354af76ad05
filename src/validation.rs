//! Path-qualified error accumulation.
//!
//! A [`ValidationResult`] collects every problem found while validating or
//! populating a config struct, in the order it was found. Each entry carries a
//! [`ValidationPath`] so callers can tell which field failed without parsing
//! error strings.

use std::fmt;

use crate::error::Error;

/// A field name, or a nested series of field names, identifying where an
/// error occurred.
///
/// Validating a struct whose field `a` is a struct with an invalid field `b`
/// yields the path `["a", "b"]`, rendered as `a.b`. An empty path means the
/// error is not tied to any field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ValidationPath(Vec<String>);

impl ValidationPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Returns this path with `other` appended.
    pub fn join(&self, other: &ValidationPath) -> ValidationPath {
        let mut segments = self.0.clone();
        segments.extend(other.0.iter().cloned());
        ValidationPath(segments)
    }

    /// Rewrites the last segment as `prefix + segment + suffix`.
    pub(crate) fn decorate_leaf(mut self, prefix: &str, suffix: &str) -> ValidationPath {
        if let Some(last) = self.0.last_mut() {
            *last = format!("{prefix}{last}{suffix}");
        }
        self
    }
}

impl fmt::Display for ValidationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

impl<S: Into<String>> FromIterator<S> for ValidationPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        ValidationPath(iter.into_iter().map(Into::into).collect())
    }
}

impl From<&str> for ValidationPath {
    fn from(segment: &str) -> Self {
        ValidationPath(vec![segment.to_string()])
    }
}

impl From<String> for ValidationPath {
    fn from(segment: String) -> Self {
        ValidationPath(vec![segment])
    }
}

impl<const N: usize> From<[&str; N]> for ValidationPath {
    fn from(segments: [&str; N]) -> Self {
        segments.into_iter().collect()
    }
}

/// An invalid value condition for a parsed value or a struct field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub path: ValidationPath,
    pub error: Error,
}

impl ValidationError {
    pub fn new(path: impl Into<ValidationPath>, error: Error) -> Self {
        Self {
            path: path.into(),
            error,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.error)
        } else {
            write!(f, "{}: {}", self.path, self.error)
        }
    }
}

impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Two or more errors, rendered as a comma-delimited list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationAggregateError(pub Vec<ValidationError>);

impl fmt::Display for ValidationAggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationAggregateError {}

/// A single error representing everything in a failed [`ValidationResult`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationFailure {
    #[error(transparent)]
    Single(ValidationError),

    #[error(transparent)]
    Aggregate(ValidationAggregateError),
}

impl ValidationFailure {
    /// All underlying errors, in the order they were recorded.
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            ValidationFailure::Single(err) => std::slice::from_ref(err),
            ValidationFailure::Aggregate(agg) => &agg.0,
        }
    }
}

/// Accumulates errors from field validation and population.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if nothing has been recorded.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// A copy of every recorded error.
    pub fn errors(&self) -> Vec<ValidationError> {
        self.errors.clone()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// `None` if there were no errors, the error itself if there was exactly
    /// one, otherwise an aggregate of all of them.
    pub fn as_error(&self) -> Option<ValidationFailure> {
        match self.errors.as_slice() {
            [] => None,
            [only] => Some(ValidationFailure::Single(only.clone())),
            all => Some(ValidationFailure::Aggregate(ValidationAggregateError(
                all.to_vec(),
            ))),
        }
    }

    /// Same as [`as_error`](Self::as_error), shaped for `?`.
    pub fn into_result(self) -> Result<(), ValidationFailure> {
        match self.as_error() {
            Some(failure) => Err(failure),
            None => Ok(()),
        }
    }

    /// Records an error at `path`. A `None` error is ignored.
    pub fn add_error(&mut self, path: impl Into<ValidationPath>, error: impl Into<Option<Error>>) {
        if let Some(error) = error.into() {
            self.errors.push(ValidationError::new(path, error));
        }
    }

    /// Appends every error from `other`, with `prefix` prepended to its path.
    pub fn add_all(&mut self, prefix: impl Into<ValidationPath>, other: ValidationResult) {
        let prefix = prefix.into();
        self.errors.extend(
            other
                .errors
                .into_iter()
                .map(|e| ValidationError::new(prefix.join(&e.path), e.error)),
        );
    }
}

impl IntoIterator for ValidationResult {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}
