//! Form-state management for the field tree.
//!
//! `SchemaBuilder` owns the ordered root fields while they are being
//! edited and exposes the edit operations a builder form performs:
//! appending fields, appending children to nested fields, renaming,
//! revaluing, retyping and removing, all addressed by field id at any
//! depth. `generate` produces the live mapping for preview or submission.

use log::debug;
use serde_json::{Map, Value};

use crate::schema::field_factory::FieldFactory;
use crate::schema::generator::generate_object;
use crate::schema::types::{
    Field, FieldType, FieldVariant, NestedField, NumberField, SchemaError, StringField,
};

#[derive(Debug, Clone)]
pub struct SchemaBuilder {
    fields: Vec<FieldVariant>,
    default_field_type: FieldType,
}

impl SchemaBuilder {
    /// Creates an empty builder. New fields default to the string type.
    pub fn new() -> Self {
        Self::with_default_field_type(FieldType::String)
    }

    /// Creates an empty builder whose newly added fields get `field_type`.
    pub fn with_default_field_type(field_type: FieldType) -> Self {
        Self {
            fields: Vec::new(),
            default_field_type: field_type,
        }
    }

    /// Appends a default field at the root and returns its id.
    pub fn add_field(&mut self) -> String {
        let field = FieldFactory::create_field(self.default_field_type);
        let id = field.id().to_string();
        debug!("Added root field '{}'", id);
        self.fields.push(field);
        id
    }

    /// Appends an already-built field (with its subtree) at the root.
    pub fn push_field(&mut self, field: FieldVariant) {
        self.fields.push(field);
    }

    /// Appends a default field to the children of the nested field
    /// `parent_id` and returns the new child's id.
    pub fn add_child(&mut self, parent_id: &str) -> Result<String, SchemaError> {
        let default_type = self.default_field_type;
        let parent = find_field_mut(&mut self.fields, parent_id)
            .ok_or_else(|| SchemaError::NotFound(parent_id.to_string()))?;
        let parent_type = parent.field_type();
        let nested = parent.as_nested_mut().ok_or_else(|| {
            SchemaError::InvalidData(format!(
                "Field '{}' has type {} and cannot hold children",
                parent_id, parent_type
            ))
        })?;
        let child = FieldFactory::create_field(default_type);
        let id = child.id().to_string();
        debug!("Added child field '{}' under '{}'", id, parent_id);
        nested.children.push(child);
        Ok(id)
    }

    /// Sets the key name of the field `id`.
    pub fn set_name(&mut self, id: &str, name: &str) -> Result<(), SchemaError> {
        let field = find_field_mut(&mut self.fields, id)
            .ok_or_else(|| SchemaError::NotFound(id.to_string()))?;
        field.set_name(name.to_string());
        Ok(())
    }

    /// Sets the raw scalar value of the field `id`. Nested fields hold no
    /// value.
    pub fn set_value(&mut self, id: &str, value: &str) -> Result<(), SchemaError> {
        let field = find_field_mut(&mut self.fields, id)
            .ok_or_else(|| SchemaError::NotFound(id.to_string()))?;
        match field {
            FieldVariant::String(f) => f.value = value.to_string(),
            FieldVariant::Number(f) => f.value = value.to_string(),
            FieldVariant::Nested(_) => {
                return Err(SchemaError::InvalidData(format!(
                    "Field '{}' is nested and holds no scalar value",
                    id
                )))
            }
        }
        Ok(())
    }

    /// Converts the field `id` to another type, keeping its id and name.
    ///
    /// Leaving the nested type discards the children; becoming a number
    /// resets the value to `"0"`, becoming a string resets it to `""`.
    pub fn set_field_type(&mut self, id: &str, field_type: FieldType) -> Result<(), SchemaError> {
        let field = find_field_mut(&mut self.fields, id)
            .ok_or_else(|| SchemaError::NotFound(id.to_string()))?;
        if field.field_type() == field_type {
            return Ok(());
        }
        let common = field.common().clone();
        debug!("Retyping field '{}' to {}", id, field_type);
        *field = match field_type {
            FieldType::String => FieldVariant::String(StringField {
                inner: common,
                value: String::new(),
            }),
            FieldType::Number => FieldVariant::Number(NumberField {
                inner: common,
                value: "0".to_string(),
            }),
            FieldType::Nested => FieldVariant::Nested(NestedField {
                inner: common,
                children: Vec::new(),
            }),
        };
        Ok(())
    }

    /// Removes the field `id` and its subtree, wherever it sits.
    pub fn remove_field(&mut self, id: &str) -> Result<(), SchemaError> {
        if remove_from(&mut self.fields, id) {
            debug!("Removed field '{}'", id);
            Ok(())
        } else {
            Err(SchemaError::NotFound(id.to_string()))
        }
    }

    /// The ordered root fields.
    pub fn fields(&self) -> &[FieldVariant] {
        &self.fields
    }

    /// Total number of fields in the tree, at every depth.
    pub fn field_count(&self) -> usize {
        count_fields(&self.fields)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Discards all fields, returning the builder to its initial state.
    pub fn reset(&mut self) {
        self.fields.clear();
    }

    /// Generates the JSON object mapping for the current fields.
    pub fn generate(&self) -> Map<String, Value> {
        generate_object(&self.fields)
    }
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn find_field_mut<'a>(fields: &'a mut [FieldVariant], id: &str) -> Option<&'a mut FieldVariant> {
    for field in fields.iter_mut() {
        if field.id() == id {
            return Some(field);
        }
        if let FieldVariant::Nested(nested) = field {
            if let Some(found) = find_field_mut(&mut nested.children, id) {
                return Some(found);
            }
        }
    }
    None
}

fn remove_from(fields: &mut Vec<FieldVariant>, id: &str) -> bool {
    if let Some(position) = fields.iter().position(|f| f.id() == id) {
        fields.remove(position);
        return true;
    }
    for field in fields.iter_mut() {
        if let FieldVariant::Nested(nested) = field {
            if remove_from(&mut nested.children, id) {
                return true;
            }
        }
    }
    false
}

fn count_fields(fields: &[FieldVariant]) -> usize {
    fields
        .iter()
        .map(|field| 1 + field.children().map_or(0, count_fields))
        .sum()
}
