//! Optional configuration values, and tag-driven population and validation
//! of config structs from environment variables.
//!
//! Configuration usually starts life as flat strings: environment variables,
//! command-line flags, key/value files. The hard part is not parsing them but
//! knowing, afterwards, which settings were actually given. A `u16` port of
//! `0` could be a deliberate zero or a missing variable. configtypes keeps
//! that distinction in the type.
//!
//! ```
//! use configtypes::{validate_struct, ConfigStruct, OptDuration, OptInt, OptValue, VarReader};
//!
//! #[derive(Default, ConfigStruct)]
//! struct ServerConfig {
//!     #[conf("PORT,required")]
//!     pub port: OptInt,
//!     #[conf("TIMEOUT")]
//!     pub timeout: OptDuration,
//! }
//!
//! let reader = VarReader::from_pairs([("APP_PORT", "8080"), ("APP_TIMEOUT", "1m30s")]);
//! let mut config = ServerConfig::default();
//! reader.with_prefix("APP_").read_struct(&mut config, true);
//! reader.result().into_result()?;
//!
//! assert_eq!(config.port.get(), Some(8080));
//! assert_eq!(config.timeout.to_string(), "1m30s");
//! assert!(validate_struct(&config, true).is_ok());
//! # Ok::<(), configtypes::ValidationFailure>(())
//! ```
//!
//! # Optional values
//!
//! Each `Opt*` type is either *defined* or *empty*, and `Default` is empty.
//! They all implement [`OptValue`]:
//!
//! | Type | Wraps | Text form |
//! |------|-------|-----------|
//! | [`OptBool`] | `bool` | `true`/`false`; also accepts `yes`/`no`, `1`/`0`, any case |
//! | [`OptInt`] | `i64` | decimal |
//! | [`OptFloat`] | `f64` | decimal |
//! | [`OptString`] | `String` | as-is |
//! | [`OptStringList`] | `Vec<String>` | comma-separated |
//! | [`OptDuration`] | [`chrono::TimeDelta`] | `500ms`, `30s`, `1h30m` |
//! | [`OptBytes`] | `u64` | `512B`, `10GiB`, `1GiB512MiB` |
//! | [`OptUrl`] | [`UrlRef`] | any absolute or relative URL |
//!
//! The empty string always parses to the empty state, and the empty state
//! always renders as `""` (text) or `null` (JSON). Defined values round-trip
//! through both forms.
//!
//! The constrained variants [`OptIntGreaterThanZero`],
//! [`OptDurationNonNegative`], [`OptStringNonEmpty`] and [`OptUrlAbsolute`]
//! add a predicate that every construction path checks, so no defined
//! instance can ever hold an out-of-range value.
//!
//! All of these also implement `Display`, `FromStr`, and serde's
//! `Serialize`/`Deserialize`, so they fit into any serde-based config loader.
//!
//! # Config structs
//!
//! `#[derive(ConfigStruct)]` describes the public fields of a struct so they
//! can be walked without runtime reflection. A field annotation is either
//! `#[conf("NAME")]` or `#[conf("NAME,required")]`:
//!
//! - **Leaves** are the `Opt*` types and the primitives `bool`, `f64`,
//!   `String`, `i32`, `i64`, `u16`, `u32`, `u64` and `usize`. Other leaf types
//!   can opt in by implementing [`ConfigValue`] and calling
//!   [`leaf_field!`].
//! - **Nested structs** are any field whose type also derives
//!   `ConfigStruct`. They are only visited when an operation is asked to
//!   recurse. Leave them unnamed: a struct cannot be read from a single
//!   variable, so [`VarReader`] reports a named one as an unsupported target.
//! - A leaf with no annotation is ignored.
//! - `#[conf(skip)]` leaves a public field out entirely, so its type does not
//!   need to implement [`ConfigField`].
//!
//! # Populating from variables
//!
//! [`VarReader`] looks up variables by name in a snapshot of the environment
//! (or any name/value map) and parses them into targets. It can read one
//! value at a time with [`read`](VarReader::read) or a whole struct with
//! [`read_struct`](VarReader::read_struct). Scoped views add a prefix or
//! suffix to every name while sharing the same error accumulator.
//!
//! # Validation
//!
//! [`validate_struct`] checks that every `required` field holds a non-default
//! value, which for the `Opt*` types means *defined*. Errors carry a
//! [`ValidationPath`] of Rust field names (`nested.port`).
//!
//! # Error handling
//!
//! Nothing in this crate aborts a traversal. Parse failures, missing required
//! values and misuse are all collected as [`ValidationError`]s in a
//! [`ValidationResult`]; [`ValidationResult::as_error`] turns them into a
//! single error value when you need one. Single-value parsing returns
//! [`Error`] directly.
//!
//! # Logging
//!
//! The reader logs through the [`log`] facade: each variable read at
//! `debug`, each miss at `trace`. Install any `log` backend to see them.

extern crate self as configtypes;

pub mod error;

mod env;
mod field;
mod opt;
mod reader;
mod tag;
mod validate;
mod validation;
mod walk;

#[cfg(test)]
mod fixtures;

pub use configtypes_derive::ConfigStruct;
pub use error::Error;
pub use field::{
    ConfigField, ConfigStruct, ConfigValue, Field, FieldDescriptor, FieldMut, FieldSlot, Slot,
    SlotMut,
};
pub use opt::{
    string_or_else, OptBool, OptBytes, OptDuration, OptDurationNonNegative, OptFloat, OptInt,
    OptIntGreaterThanZero, OptString, OptStringList, OptStringNonEmpty, OptUrl, OptUrlAbsolute,
    OptValue, RelativeRef, UrlRef,
};
pub use reader::VarReader;
pub use tag::FieldTag;
pub use validate::validate_struct;
pub use validation::{
    ValidationAggregateError, ValidationError, ValidationFailure, ValidationPath,
    ValidationResult,
};
