//! The traversal shared by [`validate_struct`](crate::validate_struct) and
//! [`VarReader::read_struct`](crate::VarReader::read_struct).

use log::trace;

use crate::error::Error;
use crate::field::{FieldDescriptor, FieldSlot};
use crate::tag::FieldTag;

/// What the walker found at one field.
pub(crate) enum Step<V, S> {
    /// A leaf with a non-empty tag.
    Leaf {
        name: &'static str,
        tag: FieldTag,
        value: V,
    },
    /// A nested struct. Whether to descend, and what its tag means, is up to
    /// the caller.
    Nested {
        name: &'static str,
        tag: FieldTag,
        value: S,
    },
    /// The field's annotation could not be parsed. The field is skipped.
    InvalidTag { name: &'static str, error: Error },
}

/// Yields one step per field that needs attention, in declaration order.
///
/// Tags are parsed first, so a malformed tag is reported even on a nested
/// field. Leaves with an empty tag are skipped, which is not an error.
pub(crate) fn walk<V, S>(
    fields: Vec<FieldDescriptor<FieldSlot<V, S>>>,
) -> impl Iterator<Item = Step<V, S>> {
    fields.into_iter().filter_map(|field| {
        let tag = match FieldTag::parse(field.tag) {
            Ok(tag) => tag,
            Err(error) => {
                return Some(Step::InvalidTag {
                    name: field.name,
                    error,
                });
            }
        };
        match field.slot {
            FieldSlot::Struct(value) => Some(Step::Nested {
                name: field.name,
                tag,
                value,
            }),
            FieldSlot::Value(_) if tag.is_empty() => {
                trace!("skipping untagged field {}", field.name);
                None
            }
            FieldSlot::Value(value) => Some(Step::Leaf {
                name: field.name,
                tag,
                value,
            }),
        }
    })
}
