use serde::{Deserialize, Serialize};

use crate::schema::types::field::{Field, FieldCommon, FieldType, NestedField, NumberField, StringField};

/// Enumeration over all field variants.
///
/// The wire form is internally tagged on `"type"`, with the common id and
/// name flattened into the same object:
/// `{"id": …, "name": …, "type": "string", "value": …}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldVariant {
    /// Text value
    String(StringField),
    /// Raw numeric text, coerced at generation time
    Number(NumberField),
    /// Ordered subfields
    Nested(NestedField),
}

impl FieldVariant {
    /// Returns the identity/name part shared by every variant.
    pub fn common(&self) -> &FieldCommon {
        match self {
            Self::String(f) => &f.inner,
            Self::Number(f) => &f.inner,
            Self::Nested(f) => &f.inner,
        }
    }

    /// Returns the subfields when this is a nested field.
    pub fn children(&self) -> Option<&[FieldVariant]> {
        match self {
            Self::Nested(f) => Some(&f.children),
            _ => None,
        }
    }

    pub fn as_nested_mut(&mut self) -> Option<&mut NestedField> {
        match self {
            Self::Nested(f) => Some(f),
            _ => None,
        }
    }
}

impl Field for FieldVariant {
    fn id(&self) -> &str {
        match self {
            Self::String(f) => f.id(),
            Self::Number(f) => f.id(),
            Self::Nested(f) => f.id(),
        }
    }

    fn name(&self) -> &str {
        match self {
            Self::String(f) => f.name(),
            Self::Number(f) => f.name(),
            Self::Nested(f) => f.name(),
        }
    }

    fn set_name(&mut self, name: String) {
        match self {
            Self::String(f) => f.set_name(name),
            Self::Number(f) => f.set_name(name),
            Self::Nested(f) => f.set_name(name),
        }
    }

    fn field_type(&self) -> FieldType {
        match self {
            Self::String(f) => f.field_type(),
            Self::Number(f) => f.field_type(),
            Self::Nested(f) => f.field_type(),
        }
    }
}
