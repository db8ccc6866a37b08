//! # jsonfold
//!
//! An interactive JSON object builder: an ordered tree of typed fields is
//! edited through [`SchemaBuilder`], transformed into a JSON mapping by
//! [`generate_object`], and snapshotted into an in-memory [`ObjectStore`]
//! as named, timestamped [`SavedObject`]s. [`BuilderSession`] wires the
//! pieces together for the common edit/preview/submit loop.

pub mod config;
pub mod error;
pub mod schema;
pub mod session;
pub mod store;
pub mod testing_utils;

pub use config::{BuilderConfig, ConfigError};
pub use error::{JsonFoldError, JsonFoldResult};
pub use schema::types::{
    Field, FieldCommon, FieldType, FieldVariant, NestedField, NumberField, SchemaError,
    StringField,
};
pub use schema::{generate_object, FieldFactory, SchemaBuilder};
pub use session::BuilderSession;
pub use store::{ObjectStore, SavedObject, StoreError};
