//! Consolidated fixtures for builder and store tests
//!
//! Ready-made field trees used across unit and integration tests, so the
//! suites do not repeat tree-construction boilerplate.

use crate::schema::types::FieldVariant;
use crate::schema::FieldFactory;

/// Factory for the field trees the test suites exercise.
pub struct FieldTreeFactory;

impl FieldTreeFactory {
    /// `{"a": "x", "n": 5}` as fields.
    pub fn flat_scalar_fields() -> Vec<FieldVariant> {
        vec![
            FieldFactory::create_string_field("a", "x"),
            FieldFactory::create_number_field("n", "5"),
        ]
    }

    /// A two-level tree: `{"user": {"name": "ada", "age": 36}, "active": "yes"}`.
    pub fn nested_tree() -> Vec<FieldVariant> {
        vec![
            FieldFactory::create_nested_field(
                "user",
                vec![
                    FieldFactory::create_string_field("name", "ada"),
                    FieldFactory::create_number_field("age", "36"),
                ],
            ),
            FieldFactory::create_string_field("active", "yes"),
        ]
    }

    /// A tree whose every branch resolves to nothing: unnamed scalars and
    /// nested fields with no surviving children.
    pub fn all_filtered_tree() -> Vec<FieldVariant> {
        vec![
            FieldFactory::create_string_field("", "dropped"),
            FieldFactory::create_nested_field(
                "empty",
                vec![FieldFactory::create_number_field("  ", "1")],
            ),
        ]
    }
}
