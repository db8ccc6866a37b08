//! Pretty-printed JSON rendering of a generated mapping.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Serializer, Value};

use crate::schema::types::SchemaError;

/// Renders a generated mapping as indented JSON with the default
/// two-space indent.
pub fn render_pretty(object: &Map<String, Value>) -> Result<String, SchemaError> {
    render_with_indent(object, 2)
}

/// Renders a generated mapping as indented JSON. The empty mapping always
/// renders as `{}`.
pub fn render_with_indent(
    object: &Map<String, Value>,
    indent: usize,
) -> Result<String, SchemaError> {
    if object.is_empty() {
        return Ok("{}".to_string());
    }
    let indent_bytes = vec![b' '; indent];
    let formatter = PrettyFormatter::with_indent(&indent_bytes);
    let mut out = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut out, formatter);
    object
        .serialize(&mut serializer)
        .map_err(|e| SchemaError::Serialization(e.to_string()))?;
    String::from_utf8(out).map_err(|e| SchemaError::Serialization(e.to_string()))
}
