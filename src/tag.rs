//! Parsing of `#[conf("...")]` field annotations.

use crate::error::Error;

/// The parsed form of a `#[conf("NAME")]` or `#[conf("NAME,required")]`
/// annotation.
///
/// An empty `name` means the field is not read by name. It is still walked
/// when it holds a nested struct, and still validated when it is `required`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldTag {
    pub name: String,
    pub required: bool,
}

impl FieldTag {
    /// Parse a raw annotation. Whitespace around each part is ignored, and
    /// `required` is the only recognized option.
    pub fn parse(tag: &str) -> Result<FieldTag, Error> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Ok(FieldTag::default());
        }

        let mut parts = tag.split(',');
        let mut parsed = FieldTag {
            name: parts.next().unwrap_or_default().trim().to_string(),
            required: false,
        };
        for option in parts.map(str::trim) {
            match option {
                "required" => parsed.required = true,
                other => return Err(Error::UnknownTagOption(other.to_string())),
            }
        }
        Ok(parsed)
    }

    /// Neither named nor required: nothing to do for a leaf.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && !self.required
    }
}
