//! Schema building and generation
//!
//! This module holds everything between user edits and the generated JSON:
//! - Field tree types and the accessor trait over them
//! - The recursive fields-to-object transform
//! - The id-addressed edit operations of `SchemaBuilder`
//! - Preview rendering and opt-in strict validation

pub mod builder;
pub mod field_factory;
pub mod generator;
pub mod preview;
pub mod types;
pub mod validation;

pub use builder::SchemaBuilder;
pub use field_factory::FieldFactory;
pub use generator::generate_object;
