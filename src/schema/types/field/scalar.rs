use serde::{Deserialize, Serialize};

use crate::schema::types::field::{Field, FieldCommon, FieldType};

/// A text-valued field. The value defaults to the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringField {
    #[serde(flatten)]
    pub inner: FieldCommon,
    #[serde(default)]
    pub value: String,
}

impl StringField {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            inner: FieldCommon::new(name),
            value: String::new(),
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }
}

impl Field for StringField {
    fn id(&self) -> &str {
        &self.inner.id
    }

    fn name(&self) -> &str {
        &self.inner.name
    }

    fn set_name(&mut self, name: String) {
        self.inner.name = name;
    }

    fn field_type(&self) -> FieldType {
        FieldType::String
    }
}

/// A number-valued field. The value holds the raw text as typed; numeric
/// interpretation happens only at generation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberField {
    #[serde(flatten)]
    pub inner: FieldCommon,
    #[serde(default)]
    pub value: String,
}

impl NumberField {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            inner: FieldCommon::new(name),
            value: String::new(),
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }
}

impl Field for NumberField {
    fn id(&self) -> &str {
        &self.inner.id
    }

    fn name(&self) -> &str {
        &self.inner.name
    }

    fn set_name(&mut self, name: String) {
        self.inner.name = name;
    }

    fn field_type(&self) -> FieldType {
        FieldType::Number
    }
}
