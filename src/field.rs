//! Field descriptors: the static stand-in for runtime reflection.
//!
//! `#[derive(ConfigStruct)]` describes each public field of a struct as a
//! [`FieldDescriptor`] carrying the Rust field name, the raw `#[conf("...")]`
//! tag, and a [`FieldSlot`] that is either a leaf value or a nested struct.
//! Which of the two a field is depends only on its type's [`ConfigField`]
//! impl: optional-value types and primitives are always leaves, only derived
//! structs are nested.

use crate::error::Error;
use crate::opt::{OptBool, OptFloat, OptInt, OptValue};

/// A leaf value that can be checked for required-ness and set from text.
pub trait ConfigValue {
    /// True when the value is its type's default, or the empty state for
    /// optional types. A `required` field in this state fails validation.
    fn is_unset(&self) -> bool;

    /// Parse `text` into this value. On error the value is left unchanged.
    fn set_text(&mut self, text: &str) -> Result<(), Error>;
}

/// A struct whose public fields can be walked. Usually derived.
pub trait ConfigStruct {
    fn fields(&self) -> Vec<Field<'_>>;
    fn fields_mut(&mut self) -> Vec<FieldMut<'_>>;

    /// Used in error messages.
    fn struct_type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Either a leaf value or a nested struct.
pub enum FieldSlot<V, S> {
    Value(V),
    Struct(S),
}

pub type Slot<'a> = FieldSlot<&'a dyn ConfigValue, &'a dyn ConfigStruct>;
pub type SlotMut<'a> = FieldSlot<&'a mut dyn ConfigValue, &'a mut dyn ConfigStruct>;

/// One field of a [`ConfigStruct`], in declaration order.
pub struct FieldDescriptor<T> {
    /// The Rust field name, used for validation paths.
    pub name: &'static str,
    /// The raw `#[conf("...")]` annotation, or `""` when there is none.
    pub tag: &'static str,
    pub slot: T,
}

impl<T> FieldDescriptor<T> {
    pub fn new(name: &'static str, tag: &'static str, slot: T) -> Self {
        Self { name, tag, slot }
    }
}

pub type Field<'a> = FieldDescriptor<Slot<'a>>;
pub type FieldMut<'a> = FieldDescriptor<SlotMut<'a>>;

/// Any type that can appear as a field of a [`ConfigStruct`].
///
/// This is the capability check the walker relies on: the impl decides
/// whether a value is a leaf or something to recurse into.
pub trait ConfigField {
    fn slot(&self) -> Slot<'_>;
    fn slot_mut(&mut self) -> SlotMut<'_>;
    fn type_name(&self) -> &'static str;
}

/// Implement [`ConfigField`] for types that already implement
/// [`ConfigValue`], marking them as leaves.
///
/// ```ignore
/// impl configtypes::ConfigValue for LogLevel { /* ... */ }
/// configtypes::leaf_field!(LogLevel);
/// ```
#[macro_export]
macro_rules! leaf_field {
    ($($ty:ty),* $(,)?) => {$(
        impl $crate::ConfigField for $ty {
            fn slot(&self) -> $crate::Slot<'_> {
                $crate::FieldSlot::Value(self)
            }

            fn slot_mut(&mut self) -> $crate::SlotMut<'_> {
                $crate::FieldSlot::Value(self)
            }

            fn type_name(&self) -> &'static str {
                ::std::any::type_name::<$ty>()
            }
        }
    )*};
}

impl ConfigValue for bool {
    fn is_unset(&self) -> bool {
        !*self
    }

    fn set_text(&mut self, text: &str) -> Result<(), Error> {
        if let Some(value) = OptBool::parse_text(text)?.get() {
            *self = value;
        }
        Ok(())
    }
}

impl ConfigValue for f64 {
    fn is_unset(&self) -> bool {
        *self == 0.0
    }

    fn set_text(&mut self, text: &str) -> Result<(), Error> {
        if let Some(value) = OptFloat::parse_text(text)?.get() {
            *self = value;
        }
        Ok(())
    }
}

impl ConfigValue for String {
    fn is_unset(&self) -> bool {
        self.is_empty()
    }

    fn set_text(&mut self, text: &str) -> Result<(), Error> {
        *self = text.to_string();
        Ok(())
    }
}

macro_rules! integer_value {
    ($($ty:ty),*) => {$(
        impl ConfigValue for $ty {
            fn is_unset(&self) -> bool {
                *self == 0
            }

            fn set_text(&mut self, text: &str) -> Result<(), Error> {
                if let Some(value) = OptInt::parse_text(text)?.get() {
                    *self = <$ty>::try_from(value).map_err(|_| Error::IntFormat)?;
                }
                Ok(())
            }
        }
    )*};
}

integer_value!(i64, i32, u16, u32, u64, usize);

leaf_field!(bool, f64, String, i64, i32, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives_are_leaves() {
        let mut n = 0i64;
        assert!(matches!(n.slot(), FieldSlot::Value(_)));
        assert!(matches!(n.slot_mut(), FieldSlot::Value(_)));
        assert_eq!(n.type_name(), "i64");
    }

    #[test]
    fn bool_accepts_all_spellings() {
        let mut b = false;
        b.set_text("YES").unwrap();
        assert!(b);
        b.set_text("0").unwrap();
        assert!(!b);
        assert_eq!(b.set_text("maybe"), Err(Error::BoolFormat));
    }

    #[test]
    fn empty_text_leaves_primitive_untouched() {
        let mut n = 7i32;
        n.set_text("").unwrap();
        assert_eq!(n, 7);

        let mut f = 2.5f64;
        f.set_text("").unwrap();
        assert_eq!(f, 2.5);
    }

    #[test]
    fn integer_out_of_range_is_a_format_error() {
        let mut port = 80u16;
        assert_eq!(port.set_text("70000"), Err(Error::IntFormat));
        assert_eq!(port, 80);
        assert_eq!(port.set_text("-1"), Err(Error::IntFormat));
        port.set_text("8080").unwrap();
        assert_eq!(port, 8080);
    }

    #[test]
    fn string_is_identity() {
        let mut s = String::from("old");
        s.set_text("a=b,c").unwrap();
        assert_eq!(s, "a=b,c");
    }

    #[test]
    fn zero_values_are_unset() {
        assert!(false.is_unset());
        assert!(0u32.is_unset());
        assert!(0.0f64.is_unset());
        assert!(String::new().is_unset());
        assert!(!true.is_unset());
        assert!(!1usize.is_unset());
        assert!(!"x".to_string().is_unset());
    }
}
