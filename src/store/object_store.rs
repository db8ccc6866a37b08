use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// A named snapshot of a generated mapping.
///
/// Produced only by explicit submission; after that the data payload is
/// frozen and only the name can change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedObject {
    pub id: String,
    pub name: String,
    pub data: Map<String, Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Errors from saved object lifecycle operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Submission or rename with a blank name
    #[error("Object name must not be empty")]
    EmptyName,

    /// Submission of a mapping with no keys
    #[error("Object must contain at least one field")]
    EmptyObject,

    /// No saved object with the given id
    #[error("Object not found: {0}")]
    NotFound(String),
}

/// Holds saved objects for the session, newest first.
#[derive(Debug, Clone, Default)]
pub struct ObjectStore {
    objects: Vec<SavedObject>,
}

impl ObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves a new snapshot under `name` and returns it.
    ///
    /// The name must be non-blank and the mapping non-empty. The stored
    /// name keeps its surrounding whitespace; only the guard trims.
    pub fn submit(
        &mut self,
        name: &str,
        data: Map<String, Value>,
    ) -> Result<&SavedObject, StoreError> {
        if name.trim().is_empty() {
            return Err(StoreError::EmptyName);
        }
        if data.is_empty() {
            return Err(StoreError::EmptyObject);
        }
        let now = Utc::now();
        let object = SavedObject {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            data,
            created_at: now,
            updated_at: now,
        };
        info!(
            "Saved object '{}' with {} top-level keys",
            object.name,
            object.data.len()
        );
        self.objects.insert(0, object);
        Ok(&self.objects[0])
    }

    /// Renames the saved object `id`, refreshing its update timestamp.
    /// The new name is stored trimmed and must be non-blank.
    pub fn rename(&mut self, id: &str, new_name: &str) -> Result<&SavedObject, StoreError> {
        let trimmed = new_name.trim();
        if trimmed.is_empty() {
            return Err(StoreError::EmptyName);
        }
        let object = self
            .objects
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        info!("Renaming saved object '{}' to '{}'", id, trimmed);
        object.name = trimmed.to_string();
        object.updated_at = Utc::now();
        Ok(object)
    }

    /// Removes the saved object `id`. Returns whether anything was
    /// removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.objects.len();
        self.objects.retain(|o| o.id != id);
        let removed = self.objects.len() != before;
        if removed {
            info!("Removed saved object '{}'", id);
        }
        removed
    }

    pub fn get(&self, id: &str) -> Option<&SavedObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    /// Saved objects, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &SavedObject> {
        self.objects.iter()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
