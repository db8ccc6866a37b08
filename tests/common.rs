//! Common test utilities and fixtures for the integration suites.

use jsonfold::{BuilderConfig, BuilderSession, Field, FieldType};

/// Initializes the test logger once per process.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A session pre-populated through the public edit API, the way a form
/// would drive it.
pub struct SessionFixture {
    pub session: BuilderSession,
}

impl SessionFixture {
    pub fn new() -> Self {
        init_logger();
        Self {
            session: BuilderSession::new(),
        }
    }

    pub fn with_config(config: BuilderConfig) -> Self {
        init_logger();
        Self {
            session: BuilderSession::with_config(config),
        }
    }

    /// Adds a named scalar field at the root and returns its id.
    pub fn add_scalar(&mut self, name: &str, field_type: FieldType, value: &str) -> String {
        let builder = self.session.builder_mut();
        let id = builder.add_field();
        builder.set_name(&id, name).unwrap();
        if field_type != FieldType::String {
            builder.set_field_type(&id, field_type).unwrap();
        }
        builder.set_value(&id, value).unwrap();
        id
    }

    /// Adds a named nested field at the root and returns its id.
    pub fn add_nested(&mut self, name: &str) -> String {
        let builder = self.session.builder_mut();
        let id = builder.add_field();
        builder.set_name(&id, name).unwrap();
        builder.set_field_type(&id, FieldType::Nested).unwrap();
        id
    }

    /// Adds a named scalar child under `parent_id` and returns its id.
    pub fn add_scalar_child(
        &mut self,
        parent_id: &str,
        name: &str,
        field_type: FieldType,
        value: &str,
    ) -> String {
        let builder = self.session.builder_mut();
        let id = builder.add_child(parent_id).unwrap();
        builder.set_name(&id, name).unwrap();
        if field_type != FieldType::String {
            builder.set_field_type(&id, field_type).unwrap();
        }
        builder.set_value(&id, value).unwrap();
        id
    }

    /// Ids of the root fields, in order.
    pub fn root_ids(&self) -> Vec<String> {
        self.session
            .builder()
            .fields()
            .iter()
            .map(|f| f.id().to_string())
            .collect()
    }
}

impl Default for SessionFixture {
    fn default() -> Self {
        Self::new()
    }
}
