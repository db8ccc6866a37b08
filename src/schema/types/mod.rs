pub mod errors;
pub mod field;

pub use errors::SchemaError;

// Re-export all field types at the types module level
pub use field::{Field, FieldCommon, FieldType, FieldVariant, NestedField, NumberField, StringField};
