//! Required-field validation.

use crate::error::Error;
use crate::field::{ConfigField, ConfigStruct, FieldSlot};
use crate::validation::{ValidationPath, ValidationResult};
use crate::walk::{walk, Step};

/// Check that every field tagged `required` holds a non-default value.
///
/// For optional types that means the field must be defined; a required
/// `u16` must be non-zero, a required `String` non-empty, and so on. With
/// `recursive`, nested structs are checked too and their errors are prefixed
/// with the field name (`nested.port`). Paths use Rust field names, not tag
/// names.
///
/// Passing something that is not a struct gives a single
/// [`Error::NotAStruct`] with an empty path.
///
/// ```
/// use configtypes::{validate_struct, ConfigStruct, OptInt};
///
/// #[derive(Default, ConfigStruct)]
/// struct Limits {
///     #[conf(",required")]
///     pub max_connections: OptInt,
/// }
///
/// let result = validate_struct(&Limits::default(), false);
/// assert_eq!(result.as_error().unwrap().to_string(), "max_connections: value is required");
/// ```
pub fn validate_struct(value: &dyn ConfigField, recursive: bool) -> ValidationResult {
    match value.slot() {
        FieldSlot::Struct(fields) => validate_fields(fields, recursive),
        FieldSlot::Value(_) => {
            let mut result = ValidationResult::new();
            result.add_error(
                ValidationPath::new(),
                Error::NotAStruct {
                    operation: "validate_struct",
                },
            );
            result
        }
    }
}

fn validate_fields(value: &dyn ConfigStruct, recursive: bool) -> ValidationResult {
    let mut result = ValidationResult::new();
    for step in walk(value.fields()) {
        match step {
            Step::Leaf { name, tag, value } => {
                if tag.required && value.is_unset() {
                    result.add_error(name, Error::Required);
                }
            }
            Step::Nested { name, value, .. } => {
                if recursive {
                    result.add_all(name, validate_fields(value, true));
                }
            }
            Step::InvalidTag { name, error } => result.add_error(name, error),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::*;
    use crate::opt::{OptBool, OptInt, OptValue};
    use crate::validation::ValidationError;

    #[test]
    fn required_fields_unset() {
        let result = validate_struct(&Flat::default(), false);
        assert_eq!(
            result.errors(),
            vec![
                ValidationError::new("required_opt", Error::Required),
                ValidationError::new("required_int", Error::Required),
            ]
        );
    }

    #[test]
    fn required_fields_set() {
        let value = Flat {
            required_opt: OptBool::new(false),
            required_int: 3,
            ..Flat::default()
        };
        assert!(validate_struct(&value, false).is_ok());
    }

    #[test]
    fn defined_false_satisfies_required() {
        let value = Flat {
            required_opt: OptBool::new(false),
            required_int: 1,
            ..Flat::default()
        };
        assert!(value.required_opt.is_defined());
        assert!(validate_struct(&value, true).is_ok());
    }

    #[test]
    fn nested_is_ignored_unless_recursive() {
        let value = Outer::default();
        assert_eq!(
            validate_struct(&value, false).errors(),
            vec![
                ValidationError::new("top", Error::Required),
                ValidationError::new("last", Error::Required),
            ]
        );
    }

    #[test]
    fn nested_errors_are_prefixed_in_place() {
        let value = Outer::default();
        assert_eq!(
            validate_struct(&value, true).errors(),
            vec![
                ValidationError::new("top", Error::Required),
                ValidationError::new(["nested", "int"], Error::Required),
                ValidationError::new(["nested", "deeper", "flag"], Error::Required),
                ValidationError::new("last", Error::Required),
            ]
        );
        assert_eq!(
            validate_struct(&value, true).as_error().unwrap().to_string(),
            "top: value is required, nested.int: value is required, \
             nested.deeper.flag: value is required, last: value is required"
        );
    }

    #[test]
    fn nested_satisfied() {
        let mut value = Outer::default();
        value.top = OptInt::new(1);
        value.nested.int = OptInt::new(2);
        value.nested.deeper.flag = true;
        value.last = "x".into();
        assert!(validate_struct(&value, true).is_ok());
    }

    #[test]
    fn nested_name_does_not_matter_to_validation() {
        let value = NamedNested::default();
        assert!(validate_struct(&value, false).is_ok());
        assert_eq!(
            validate_struct(&value, true).errors(),
            vec![
                ValidationError::new(["nested", "int"], Error::Required),
                ValidationError::new(["nested", "deeper", "flag"], Error::Required),
            ]
        );
    }

    #[test]
    fn skipped_fields_are_not_described() {
        let value = WithSkipped {
            raw: vec![1, 2],
            ..WithSkipped::default()
        };
        assert_eq!(
            validate_struct(&value, true).errors(),
            vec![ValidationError::new("id", Error::Required)]
        );
        assert_eq!(crate::ConfigStruct::fields(&value).len(), 1);
    }

    #[test]
    fn bad_tag_is_reported_and_walk_continues() {
        let result = validate_struct(&BadTag::default(), false);
        assert_eq!(
            result.errors(),
            vec![
                ValidationError::new("bad", Error::UnknownTagOption("sometimes".into())),
                ValidationError::new("after", Error::Required),
            ]
        );
    }

    #[test]
    fn non_struct_is_an_error() {
        let result = validate_struct(&OptInt::new(1), true);
        assert_eq!(
            result.errors(),
            vec![ValidationError::new(
                ValidationPath::new(),
                Error::NotAStruct {
                    operation: "validate_struct"
                }
            )]
        );
        assert_eq!(
            result.as_error().unwrap().to_string(),
            "validate_struct was called on something other than a struct"
        );
    }
}
