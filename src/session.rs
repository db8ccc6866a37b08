//! Session facade wiring the builder and the store.
//!
//! `BuilderSession` is the coordination point for the edit/preview/submit
//! loop: it owns the live `SchemaBuilder` and the `ObjectStore`, applies
//! the configured policies, and resets the builder after a successful
//! submission.

use log::info;
use serde_json::{Map, Value};

use crate::config::BuilderConfig;
use crate::error::JsonFoldResult;
use crate::schema::{preview, validation, SchemaBuilder};
use crate::store::ObjectStore;

pub struct BuilderSession {
    config: BuilderConfig,
    builder: SchemaBuilder,
    store: ObjectStore,
}

impl BuilderSession {
    /// Creates a session with the default configuration.
    pub fn new() -> Self {
        Self::with_config(BuilderConfig::default())
    }

    /// Creates a session driven by `config`.
    pub fn with_config(config: BuilderConfig) -> Self {
        let builder = SchemaBuilder::with_default_field_type(config.default_field_type);
        Self {
            config,
            builder,
            store: ObjectStore::new(),
        }
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    pub fn builder(&self) -> &SchemaBuilder {
        &self.builder
    }

    pub fn builder_mut(&mut self) -> &mut SchemaBuilder {
        &mut self.builder
    }

    pub fn store(&self) -> &ObjectStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ObjectStore {
        &mut self.store
    }

    /// The mapping generated from the live fields.
    pub fn generate(&self) -> Map<String, Value> {
        self.builder.generate()
    }

    /// Pretty JSON of the live mapping at the configured indent.
    pub fn preview(&self) -> JsonFoldResult<String> {
        let rendered = preview::render_with_indent(&self.generate(), self.config.preview_indent)?;
        Ok(rendered)
    }

    /// Generates from the live fields, saves the result under `name`, and
    /// resets the builder. Returns the new saved object's id.
    ///
    /// With `strict_numbers` configured, unparseable numeric input is
    /// rejected before anything is saved.
    pub fn submit_object(&mut self, name: &str) -> JsonFoldResult<String> {
        if self.config.strict_numbers {
            validation::validate_fields(self.builder.fields())?;
        }
        let data = self.builder.generate();
        let id = self.store.submit(name, data)?.id.clone();
        info!("Submitted object '{}' as '{}'", name, id);
        self.builder.reset();
        Ok(id)
    }

    /// Discards the live fields without saving.
    pub fn reset(&mut self) {
        self.builder.reset();
    }
}

impl Default for BuilderSession {
    fn default() -> Self {
        Self::new()
    }
}
