//! Field creation factory
//!
//! Consolidates field construction so callers and tests do not repeat the
//! common-part + variant literal pattern. A freshly added field is an
//! unnamed string field with an empty value.

use crate::schema::types::{FieldType, FieldVariant, NestedField, NumberField, StringField};

/// Factory for creating fields with standardized defaults.
pub struct FieldFactory;

impl FieldFactory {
    /// Create an unnamed, empty-valued field of the given type.
    pub fn create_field(field_type: FieldType) -> FieldVariant {
        match field_type {
            FieldType::String => FieldVariant::String(StringField::new("")),
            FieldType::Number => FieldVariant::Number(NumberField::new("")),
            FieldType::Nested => FieldVariant::Nested(NestedField::new("")),
        }
    }

    /// Create a named string field with a value.
    pub fn create_string_field(name: &str, value: &str) -> FieldVariant {
        FieldVariant::String(StringField::new(name).with_value(value))
    }

    /// Create a named number field with raw numeric text.
    pub fn create_number_field(name: &str, value: &str) -> FieldVariant {
        FieldVariant::Number(NumberField::new(name).with_value(value))
    }

    /// Create a named nested field with the given subfields.
    pub fn create_nested_field(name: &str, children: Vec<FieldVariant>) -> FieldVariant {
        FieldVariant::Nested(NestedField::new(name).with_children(children))
    }
}
