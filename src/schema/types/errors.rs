/// Errors produced by field tree operations, validation and preview
/// rendering. Generation itself never fails; see the generator module.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// No field with the given id exists in the tree
    #[error("Field not found: {0}")]
    NotFound(String),

    /// The operation does not apply to the target field
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// JSON serialization failed while rendering
    #[error("Serialization error: {0}")]
    Serialization(String),
}
