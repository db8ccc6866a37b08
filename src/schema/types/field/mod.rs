pub mod common;
pub mod nested;
pub mod scalar;
pub mod variant;

pub use common::{Field, FieldCommon, FieldType};
pub use nested::NestedField;
pub use scalar::{NumberField, StringField};
pub use variant::FieldVariant;
