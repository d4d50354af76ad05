use thiserror::Error;

/// Every failure this crate can report.
///
/// Format and constraint errors come from parsing a single value. Usage errors
/// (`NotAStruct`, `UnsupportedTarget`, `UnknownTagOption`) come from handing the
/// traversal something of the wrong shape. Both kinds end up inside a
/// [`ValidationResult`](crate::ValidationResult) rather than aborting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("not a valid boolean value (must be true/false, yes/no, or 0/1)")]
    BoolFormat,

    #[error("not a valid integer")]
    IntFormat,

    #[error("not a valid number")]
    FloatFormat,

    #[error(r#"not a valid duration (must use format "1ms", "1s", "1m", "1h", or a combination like "1h30m")"#)]
    DurationFormat,

    #[error(r#"not a valid byte size (must use format "512B", "10KiB", "3MB", "1GiB512MiB", etc.)"#)]
    BytesFormat,

    #[error("not a valid URL/URI")]
    UrlFormat,

    #[error("value must be a string or null")]
    StringFormat,

    #[error("string list value must be a string, an array of strings, or null")]
    StringListFormat,

    #[error("value must be greater than zero")]
    MustBeGreaterThanZero,

    #[error("value must not be negative")]
    MustNotBeNegative,

    #[error("value must not be an empty string")]
    MustBeNonEmptyString,

    #[error("must be an absolute URL/URI")]
    UrlNotAbsolute,

    #[error("value is required")]
    Required,

    #[error("{operation} was called on something other than a struct")]
    NotAStruct { operation: &'static str },

    #[error("could not read into value of type {type_name}")]
    UnsupportedTarget { type_name: &'static str },

    #[error("unrecognized field tag option {0:?}")]
    UnknownTagOption(String),

    /// An application-supplied error, recorded through
    /// [`VarReader::add_error`](crate::VarReader::add_error) or
    /// [`ValidationResult::add_error`](crate::ValidationResult::add_error).
    #[error("{0}")]
    Custom(String),
}

impl Error {
    pub fn custom(message: impl Into<String>) -> Self {
        Error::Custom(message.into())
    }
}
