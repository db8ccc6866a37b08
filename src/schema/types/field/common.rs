use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Common interface for all field variants.
///
/// The `Field` trait exposes accessors for properties shared by every
/// field implementation, so callers can walk a tree without matching on
/// the concrete variant.
pub trait Field {
    /// Returns the opaque unique identifier assigned at creation.
    fn id(&self) -> &str;

    /// Returns the display/key name. May be empty while the field is
    /// still being defined.
    fn name(&self) -> &str;

    /// Sets the display/key name.
    fn set_name(&mut self, name: String);

    /// Returns the tag identifying this field's variant.
    fn field_type(&self) -> FieldType;
}

/// Tag distinguishing the field variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Number,
    Nested,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::String => write!(f, "string"),
            FieldType::Number => write!(f, "number"),
            FieldType::Nested => write!(f, "nested"),
        }
    }
}

/// Data shared by every field variant: identity and key name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldCommon {
    pub id: String,
    pub name: String,
}

impl FieldCommon {
    /// Creates the common part of a field with a fresh unique id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
        }
    }
}
