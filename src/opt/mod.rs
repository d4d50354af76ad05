//! Optional value types.
//!
//! Every `Opt*` type is either *defined* (it holds a value of the wrapped
//! type) or *empty* (nothing was specified). `Default` gives the empty state.
//! All of them share the [`OptValue`] contract:
//!
//! - An empty string always parses to the empty state. Anything else is
//!   type-specific and fails with a typed [`Error`].
//! - Rendering to text gives `""` when empty, or a canonical form that parses
//!   back to the same value.
//! - The JSON form is `null` when empty, or a scalar of the natural type
//!   (never a bool encoded as `0/1`, never a number encoded as a string).
//! - Wrapped values are returned by copy, so a config struct never hands out
//!   access to its own storage.
//!
//! Each type also implements `Display`, `FromStr`, `serde::Serialize` and
//! `serde::Deserialize` through the same mapping, so it can be dropped into a
//! serde-based config struct as well as read by [`VarReader`](crate::VarReader).
//! Mark such fields `#[serde(default)]` so that a missing key means empty.

use crate::error::Error;

/// Implements the trait plumbing shared by every optional type in terms of its
/// [`OptValue`] impl.
macro_rules! opt_value_impls {
    ($($ty:ty),* $(,)?) => {$(
        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&$crate::OptValue::to_text(self))
            }
        }

        impl ::std::str::FromStr for $ty {
            type Err = $crate::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty as $crate::OptValue>::parse_text(s)
            }
        }

        impl ::serde::Serialize for $ty {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                if $crate::OptValue::is_defined(self) {
                    ::serde::Serialize::serialize(&$crate::OptValue::to_json(self), serializer)
                } else {
                    serializer.serialize_none()
                }
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $ty {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = <::serde_json::Value as ::serde::Deserialize>::deserialize(deserializer)?;
                <$ty as $crate::OptValue>::from_json(&value).map_err(::serde::de::Error::custom)
            }
        }

        impl $crate::ConfigValue for $ty {
            fn is_unset(&self) -> bool {
                !$crate::OptValue::is_defined(self)
            }

            fn set_text(&mut self, text: &str) -> Result<(), $crate::Error> {
                $crate::OptValue::unmarshal_text(self, text)
            }
        }

        $crate::leaf_field!($ty);
    )*};
}

mod boolean;
mod bytes;
mod duration;
mod float;
mod integer;
mod string;
mod string_list;
mod url_ref;

// Constrained variants: same contract, plus a predicate that every
// construction path goes through.
mod duration_non_negative;
mod int_greater_than_zero;
mod string_non_empty;
mod url_absolute;

pub use boolean::OptBool;
pub use bytes::OptBytes;
pub use duration::OptDuration;
pub use duration_non_negative::OptDurationNonNegative;
pub use float::OptFloat;
pub use int_greater_than_zero::OptIntGreaterThanZero;
pub use integer::OptInt;
pub use string::OptString;
pub use string_list::OptStringList;
pub use string_non_empty::OptStringNonEmpty;
pub use url_absolute::OptUrlAbsolute;
pub use url_ref::{OptUrl, RelativeRef, UrlRef};

/// The contract shared by every optional value type.
pub trait OptValue: Default + Clone + PartialEq + std::fmt::Debug {
    /// The wrapped type.
    type Value;

    /// True if a value is present, false if empty.
    fn is_defined(&self) -> bool;

    /// A copy of the wrapped value, if defined.
    fn get(&self) -> Option<Self::Value>;

    /// The wrapped value if defined, otherwise `default`.
    fn get_or_else(&self, default: Self::Value) -> Self::Value {
        self.get().unwrap_or(default)
    }

    /// `""` if empty, otherwise the canonical text form.
    fn to_text(&self) -> String;

    /// Parse the text form. `""` always gives the empty state.
    fn parse_text(text: &str) -> Result<Self, Error>;

    /// `Null` if empty, otherwise the type's JSON scalar.
    fn to_json(&self) -> serde_json::Value;

    /// Parse the JSON form. `Null` gives the empty state.
    fn from_json(value: &serde_json::Value) -> Result<Self, Error>;

    /// Parse `text` into `self`, leaving it unchanged on error.
    ///
    /// Multi-valued types override this to accumulate rather than replace, so
    /// a source that repeats the same key several times builds up a list.
    fn unmarshal_text(&mut self, text: &str) -> Result<(), Error> {
        *self = Self::parse_text(text)?;
        Ok(())
    }
}

/// The text form of `value` if it is defined, otherwise `fallback`.
///
/// ```
/// use configtypes::{string_or_else, OptBool};
///
/// assert_eq!(string_or_else(&OptBool::new(true), "undefined"), "true");
/// assert_eq!(string_or_else(&OptBool::default(), "undefined"), "undefined");
/// ```
pub fn string_or_else<T: OptValue>(value: &T, fallback: &str) -> String {
    if value.is_defined() {
        value.to_text()
    } else {
        fallback.to_string()
    }
}
