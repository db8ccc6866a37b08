//! The fields-to-object transform.
//!
//! `generate_object` maps an ordered field sequence into a JSON object
//! mapping. It is pure and infallible: malformed input degrades to an
//! omitted key or a default scalar, never an error. Key order follows
//! field order (`serde_json::Map` preserves insertion order in this
//! crate's build).

use log::warn;
use serde_json::{Map, Value};

use crate::schema::types::{Field, FieldVariant};

/// Generates a JSON object mapping from an ordered field sequence.
///
/// Rules, applied per field in order:
/// - A field whose name is empty or whitespace-only is skipped. The raw
///   (untrimmed) name is used as the emitted key; only the filter trims.
/// - A string field emits its value as-is.
/// - A number field emits its value coerced per [`coerce_number`].
/// - A nested field emits the recursively generated mapping of its
///   children, or nothing at all when that mapping is empty.
///
/// A later duplicate name overwrites an earlier one's value; the key keeps
/// its original position in the mapping.
pub fn generate_object(fields: &[FieldVariant]) -> Map<String, Value> {
    let mut object = Map::new();

    for field in fields {
        // Only include fields that have a name
        if field.name().trim().is_empty() {
            continue;
        }

        match field {
            FieldVariant::String(f) => {
                object.insert(field.name().to_string(), Value::String(f.value.clone()));
            }
            FieldVariant::Number(f) => {
                object.insert(field.name().to_string(), coerce_number(field.name(), &f.value));
            }
            FieldVariant::Nested(f) => {
                let nested = generate_object(&f.children);
                if !nested.is_empty() {
                    object.insert(field.name().to_string(), Value::Object(nested));
                }
            }
        }
    }

    object
}

/// Coerces the raw text of a number field to a JSON number.
///
/// Empty input yields `0`. Integer-looking input yields a JSON integer,
/// decimal input a float. Input that parses to nothing or to a non-finite
/// float also yields `0`, with a warning: JSON has no NaN, so there is no
/// invalid-number sentinel to carry through.
pub fn coerce_number(name: &str, raw: &str) -> Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Value::from(0);
    }
    if let Ok(int) = trimmed.parse::<i64>() {
        return Value::from(int);
    }
    if let Ok(float) = trimmed.parse::<f64>() {
        // from_f64 rejects NaN and infinities
        if let Some(number) = serde_json::Number::from_f64(float) {
            return Value::Number(number);
        }
    }
    warn!("Field '{}' has non-numeric value '{}', coercing to 0", name, raw);
    Value::from(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::types::{NestedField, NumberField, StringField};
    use serde_json::json;

    fn string_field(name: &str, value: &str) -> FieldVariant {
        FieldVariant::String(StringField::new(name).with_value(value))
    }

    fn number_field(name: &str, value: &str) -> FieldVariant {
        FieldVariant::Number(NumberField::new(name).with_value(value))
    }

    fn nested_field(name: &str, children: Vec<FieldVariant>) -> FieldVariant {
        FieldVariant::Nested(NestedField::new(name).with_children(children))
    }

    #[test]
    fn test_empty_input_generates_empty_object() {
        assert!(generate_object(&[]).is_empty());
    }

    #[test]
    fn test_scalar_fields_emit_in_order() {
        let fields = vec![string_field("a", "x"), number_field("n", "5")];
        let object = generate_object(&fields);
        assert_eq!(Value::Object(object), json!({"a": "x", "n": 5}));
    }

    #[test]
    fn test_key_order_matches_field_order() {
        let fields = vec![
            string_field("z", "1"),
            string_field("a", "2"),
            string_field("m", "3"),
        ];
        let object = generate_object(&fields);
        let keys: Vec<&String> = object.keys().collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn test_unnamed_field_is_skipped() {
        let fields = vec![string_field("", "x")];
        assert!(generate_object(&fields).is_empty());
    }

    #[test]
    fn test_whitespace_only_name_is_skipped() {
        let fields = vec![string_field("   ", "x"), number_field("\t", "1")];
        assert!(generate_object(&fields).is_empty());
    }

    #[test]
    fn test_key_keeps_surrounding_whitespace() {
        // The filter trims, the emitted key does not
        let fields = vec![string_field(" a ", "x")];
        let object = generate_object(&fields);
        assert_eq!(object.get(" a "), Some(&json!("x")));
    }

    #[test]
    fn test_unnamed_field_is_skipped_at_depth() {
        let fields = vec![nested_field(
            "obj",
            vec![string_field("", "dropped"), string_field("kept", "v")],
        )];
        let object = generate_object(&fields);
        assert_eq!(Value::Object(object), json!({"obj": {"kept": "v"}}));
    }

    #[test]
    fn test_nested_without_children_is_omitted() {
        let fields = vec![nested_field("obj", vec![])];
        assert!(generate_object(&fields).is_empty());
    }

    #[test]
    fn test_nested_with_only_filtered_children_is_omitted() {
        let fields = vec![nested_field("obj", vec![string_field("", "x")])];
        assert!(generate_object(&fields).is_empty());
    }

    #[test]
    fn test_nested_with_children_emits_mapping() {
        let fields = vec![nested_field("obj", vec![string_field("k", "v")])];
        let object = generate_object(&fields);
        assert_eq!(Value::Object(object), json!({"obj": {"k": "v"}}));
    }

    #[test]
    fn test_deeply_nested_generation() {
        let fields = vec![nested_field(
            "a",
            vec![nested_field("b", vec![number_field("c", "1")])],
        )];
        let object = generate_object(&fields);
        assert_eq!(Value::Object(object), json!({"a": {"b": {"c": 1}}}));
    }

    #[test]
    fn test_duplicate_name_last_write_wins() {
        let fields = vec![string_field("dup", "first"), number_field("dup", "2")];
        let object = generate_object(&fields);
        assert_eq!(object.len(), 1);
        assert_eq!(object.get("dup"), Some(&json!(2)));
    }

    #[test]
    fn test_duplicate_name_keeps_first_position() {
        let fields = vec![
            string_field("dup", "first"),
            string_field("other", "x"),
            string_field("dup", "second"),
        ];
        let object = generate_object(&fields);
        let keys: Vec<&String> = object.keys().collect();
        assert_eq!(keys, ["dup", "other"]);
        assert_eq!(object.get("dup"), Some(&json!("second")));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let fields = vec![
            string_field("a", "x"),
            nested_field("n", vec![number_field("k", "7")]),
        ];
        assert_eq!(generate_object(&fields), generate_object(&fields));
    }

    #[test]
    fn test_empty_string_value_emits_empty_string() {
        let fields = vec![string_field("a", "")];
        let object = generate_object(&fields);
        assert_eq!(object.get("a"), Some(&json!("")));
    }

    #[test]
    fn test_number_coercion_integers_and_floats() {
        assert_eq!(coerce_number("n", "5"), json!(5));
        assert_eq!(coerce_number("n", "-12"), json!(-12));
        assert_eq!(coerce_number("n", "5.5"), json!(5.5));
    }

    #[test]
    fn test_number_coercion_trims_whitespace() {
        assert_eq!(coerce_number("n", " 7 "), json!(7));
    }

    #[test]
    fn test_number_coercion_defaults_to_zero() {
        assert_eq!(coerce_number("n", ""), json!(0));
        assert_eq!(coerce_number("n", "   "), json!(0));
        assert_eq!(coerce_number("n", "abc"), json!(0));
        assert_eq!(coerce_number("n", "NaN"), json!(0));
        assert_eq!(coerce_number("n", "1e999"), json!(0));
    }
}
