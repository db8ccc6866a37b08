//! Opt-in strict validation of number fields.
//!
//! Generation never fails; it coerces unparseable numeric text to `0`.
//! Callers that prefer to reject such input up front (see
//! `BuilderConfig::strict_numbers`) run this walk before generating.

use crate::schema::types::{Field, FieldVariant, SchemaError};

/// Walks the tree and reports the first named number field whose
/// non-empty value does not parse as a finite number.
///
/// Unnamed fields are not checked; generation filters them out anyway.
pub fn validate_fields(fields: &[FieldVariant]) -> Result<(), SchemaError> {
    for field in fields {
        if field.name().trim().is_empty() {
            continue;
        }
        match field {
            FieldVariant::Number(f) => {
                let trimmed = f.value.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let is_finite_number = trimmed
                    .parse::<f64>()
                    .map(|parsed| parsed.is_finite())
                    .unwrap_or(false);
                if !is_finite_number {
                    return Err(SchemaError::InvalidData(format!(
                        "Field '{}' has non-numeric value '{}'",
                        field.name(),
                        f.value
                    )));
                }
            }
            FieldVariant::Nested(f) => validate_fields(&f.children)?,
            FieldVariant::String(_) => {}
        }
    }
    Ok(())
}
