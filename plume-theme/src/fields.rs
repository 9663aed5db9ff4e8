//! Field tables backing [ThemeColors](crate::theme::ThemeColors) and
//! [ThemeMetrics](crate::theme::ThemeMetrics).
//!
//! Each authored theme field has a document key and a compiled-in default. The
//! `theme_fields!` macro generates the struct, its defaults and name-based access
//! from a single table, so the document reader and writer can never drift from
//! the struct definition.

use indexmap::IndexMap;
use serde_json::Value;
use vello::peniko::Color;

use crate::color::{parse_hex_color, to_hex};
use crate::document::DocumentReader;

/// A value that can be read from and written to a theme document.
pub trait DocumentValue: Sized {
    /// Read a literal value. Returns [None] when `value` is not a literal of this type.
    fn from_document(value: &Value) -> Option<Self>;

    /// Write the value as a document literal.
    fn to_document(&self) -> Value;
}

impl DocumentValue for Color {
    fn from_document(value: &Value) -> Option<Self> {
        value.as_str().and_then(parse_hex_color)
    }

    fn to_document(&self) -> Value {
        Value::String(to_hex(*self))
    }
}

impl DocumentValue for f64 {
    fn from_document(value: &Value) -> Option<Self> {
        value.as_f64().filter(|number| number.is_finite())
    }

    fn to_document(&self) -> Value {
        serde_json::Number::from_f64(*self)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}

impl DocumentValue for u64 {
    fn from_document(value: &Value) -> Option<Self> {
        value.as_u64().or_else(|| {
            value
                .as_f64()
                .filter(|number| number.is_finite() && *number >= 0.0)
                .map(|number| number.round() as u64)
        })
    }

    fn to_document(&self) -> Value {
        Value::from(*self)
    }
}

impl DocumentValue for bool {
    fn from_document(value: &Value) -> Option<Self> {
        value.as_bool()
    }

    fn to_document(&self) -> Value {
        Value::Bool(*self)
    }
}

/// Reads and writes a field table through its document keys.
pub trait FieldTable {
    /// Every document key of the table, in declaration order.
    const KEYS: &'static [&'static str];

    /// Overwrite every field the document provides a usable value for.
    ///
    /// Fields the document omits, or gives a value of the wrong type, keep
    /// their current value.
    fn read_fields(&mut self, reader: &DocumentReader<'_>);

    /// Append every field as a document entry.
    fn write_fields(&self, out: &mut IndexMap<String, Value>);
}

/// Generate a struct of authored theme fields with document keys and defaults.
macro_rules! theme_fields {
    (
        $(#[$struct_meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $ty:ty => $key:literal = $default:expr,
            )*
        }
    ) => {
        $(#[$struct_meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                pub $field: $ty,
            )*
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $( $field: $default, )*
                }
            }
        }

        impl $crate::fields::FieldTable for $name {
            const KEYS: &'static [&'static str] = &[$($key),*];

            fn read_fields(&mut self, reader: &$crate::document::DocumentReader<'_>) {
                $(
                    if let Some(value) = reader.resolve::<$ty>($key) {
                        self.$field = value;
                    }
                )*
            }

            fn write_fields(
                &self,
                out: &mut indexmap::IndexMap<String, serde_json::Value>,
            ) {
                $(
                    out.insert(
                        $key.to_string(),
                        $crate::fields::DocumentValue::to_document(&self.$field),
                    );
                )*
            }
        }
    };
}

pub(crate) use theme_fields;
