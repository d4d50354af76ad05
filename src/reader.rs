//! Populating values and structs from a flat name/value source.

use std::cell::{Ref, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use log::{debug, trace};

use crate::env;
use crate::error::Error;
use crate::field::{ConfigField, ConfigStruct, ConfigValue, FieldSlot};
use crate::validation::{ValidationPath, ValidationResult};
use crate::walk::{walk, Step};

/// Reads string values from named variables, such as environment variables,
/// into optional values, primitives, or whole structs, accumulating errors as
/// it goes.
///
/// A reader never aborts. Parse failures, missing required variables, and
/// misuse (reading into a struct, a malformed `#[conf]` tag) are all recorded
/// in a [`ValidationResult`] that [`result`](Self::result) returns.
///
/// Scoped views created with [`with_prefix`](Self::with_prefix) and
/// [`with_suffix`](Self::with_suffix) share the same source and the same
/// result, so everything read through any of them is reported together. The
/// shared state is single-threaded by construction (`VarReader` is not
/// `Send`).
///
/// ```
/// use configtypes::{OptBool, OptValue, VarReader};
///
/// let reader = VarReader::from_pairs([("B_X", "true")]);
/// let mut x = OptBool::default();
/// assert!(reader.with_prefix("B_").read("X", &mut x));
/// assert_eq!(x.get(), Some(true));
/// assert!(reader.result().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct VarReader {
    values: Rc<HashMap<String, String>>,
    result: Rc<RefCell<ValidationResult>>,
    prefix: String,
    suffix: String,
}

impl VarReader {
    fn with_values(values: HashMap<String, String>) -> Self {
        Self {
            values: Rc::new(values),
            result: Rc::default(),
            prefix: String::new(),
            suffix: String::new(),
        }
    }

    /// A reader over a snapshot of the process environment.
    pub fn from_environment() -> Self {
        Self::with_values(env::environment_values())
    }

    /// A reader over `NAME=value` entries, each split on its first `=`.
    /// Entries with no `=` are ignored.
    pub fn from_env_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_values(env::entries_to_values(entries))
    }

    /// A reader over a copy of `values`.
    pub fn from_values(values: &HashMap<String, String>) -> Self {
        Self::with_values(values.clone())
    }

    /// A reader over name/value pairs. Later pairs win.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::with_values(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// A copy of every error recorded so far, by this reader or any view
    /// derived from it.
    pub fn result(&self) -> ValidationResult {
        self.result.borrow().clone()
    }

    /// Borrow the shared result without copying it. Must not be held across
    /// another call on this reader.
    pub fn result_ref(&self) -> Ref<'_, ValidationResult> {
        self.result.borrow()
    }

    /// Record an error. The last segment of `path` gets this reader's prefix
    /// and suffix, the same as errors the reader records itself.
    pub fn add_error(&self, path: impl Into<ValidationPath>, error: Error) {
        let path = path.into().decorate_leaf(&self.prefix, &self.suffix);
        debug!("recording error at {path:?}: {error}");
        self.result.borrow_mut().add_error(path, error);
    }

    /// Read variable `name` into `target`.
    ///
    /// The variable looked up is `prefix + name + suffix`. If it exists,
    /// its text is parsed into `target`; on a parse error the error is
    /// recorded and `target` is left unchanged. If it does not exist,
    /// nothing happens.
    ///
    /// Returns true if the variable was found, whether or not it parsed.
    /// Reading into a struct records [`Error::UnsupportedTarget`] and
    /// returns false.
    pub fn read(&self, name: &str, target: &mut dyn ConfigField) -> bool {
        self.read_target(name, target, false)
    }

    /// Same as [`read`](Self::read), but a missing variable is recorded as
    /// [`Error::Required`].
    pub fn read_required(&self, name: &str, target: &mut dyn ConfigField) -> bool {
        self.read_target(name, target, true)
    }

    /// Populate every `#[conf("NAME")]` field of `target`, as with
    /// [`read`](Self::read), or [`read_required`](Self::read_required) for
    /// `#[conf("NAME,required")]`.
    ///
    /// With `recursive`, untagged nested struct fields are populated too.
    /// Their variable names are used as written, not qualified by the field
    /// name. A nested struct field tagged with a name is treated like
    /// [`read`](Self::read) into a struct and records
    /// [`Error::UnsupportedTarget`], recursive or not. Passing something
    /// that is not a struct records [`Error::NotAStruct`].
    pub fn read_struct(&self, target: &mut dyn ConfigField, recursive: bool) {
        match target.slot_mut() {
            FieldSlot::Struct(fields) => self.read_fields(fields, recursive),
            FieldSlot::Value(_) => self.add_error(
                ValidationPath::new(),
                Error::NotAStruct {
                    operation: "read_struct",
                },
            ),
        }
    }

    /// A view that looks up `prefix + name` for every name, nested outside
    /// any prefix this reader already has.
    pub fn with_prefix(&self, prefix: &str) -> VarReader {
        VarReader {
            values: Rc::clone(&self.values),
            result: Rc::clone(&self.result),
            prefix: format!("{prefix}{}", self.prefix),
            suffix: self.suffix.clone(),
        }
    }

    /// A view that looks up `name + suffix` for every name, after any suffix
    /// this reader already has.
    pub fn with_suffix(&self, suffix: &str) -> VarReader {
        VarReader {
            values: Rc::clone(&self.values),
            result: Rc::clone(&self.result),
            prefix: self.prefix.clone(),
            suffix: format!("{}{suffix}", self.suffix),
        }
    }

    /// Every variable whose name starts with `prefix`, with `prefix`
    /// stripped. This ignores any prefix or suffix of the reader itself.
    ///
    /// ```
    /// use configtypes::VarReader;
    ///
    /// let reader = VarReader::from_pairs([("a", "1"), ("b_x", "2"), ("b_y", "3")]);
    /// let found = reader.find_prefixed_values("b_");
    /// assert_eq!(found.len(), 2);
    /// assert_eq!(found["x"], "2");
    /// assert_eq!(found["y"], "3");
    /// ```
    pub fn find_prefixed_values(&self, prefix: &str) -> HashMap<String, String> {
        self.values
            .iter()
            .filter_map(|(name, value)| {
                name.strip_prefix(prefix)
                    .map(|rest| (rest.to_string(), value.clone()))
            })
            .collect()
    }

    fn key(&self, name: &str) -> String {
        format!("{}{name}{}", self.prefix, self.suffix)
    }

    fn read_target(&self, name: &str, target: &mut dyn ConfigField, required: bool) -> bool {
        let type_name = target.type_name();
        match target.slot_mut() {
            FieldSlot::Value(value) => self.read_value(name, value, required),
            FieldSlot::Struct(_) => {
                self.add_error(name, Error::UnsupportedTarget { type_name });
                false
            }
        }
    }

    fn read_value(&self, name: &str, target: &mut dyn ConfigValue, required: bool) -> bool {
        let key = self.key(name);
        let Some(text) = self.values.get(&key) else {
            trace!("{key} is not set");
            if required {
                self.add_error(name, Error::Required);
            }
            return false;
        };
        debug!("reading {key}");
        if let Err(error) = target.set_text(text) {
            self.add_error(name, error);
        }
        true
    }

    fn read_fields(&self, target: &mut dyn ConfigStruct, recursive: bool) {
        for step in walk(target.fields_mut()) {
            match step {
                Step::Leaf { tag, value, .. } => {
                    if !tag.name.is_empty() {
                        self.read_value(&tag.name, value, tag.required);
                    }
                }
                // A named field is read as a single variable, which a struct
                // cannot take.
                Step::Nested { tag, value, .. } if !tag.name.is_empty() => {
                    self.add_error(
                        tag.name.as_str(),
                        Error::UnsupportedTarget {
                            type_name: value.struct_type_name(),
                        },
                    );
                }
                Step::Nested { name, value, .. } => {
                    if recursive {
                        self.read_fields(value, true);
                    } else {
                        trace!("not descending into {name}");
                    }
                }
                Step::InvalidTag { name, error } => self.add_error(name, error),
            }
        }
    }
}
