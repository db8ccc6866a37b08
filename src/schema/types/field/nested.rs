use serde::{Deserialize, Serialize};

use crate::schema::types::field::{Field, FieldCommon, FieldType, FieldVariant};

/// A field holding an ordered sequence of subfields. Insertion order is
/// display and output order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NestedField {
    #[serde(flatten)]
    pub inner: FieldCommon,
    #[serde(default)]
    pub children: Vec<FieldVariant>,
}

impl NestedField {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            inner: FieldCommon::new(name),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<FieldVariant>) -> Self {
        self.children = children;
        self
    }
}

impl Field for NestedField {
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
        FieldType::Nested
    }
}
