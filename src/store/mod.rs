//! In-memory saved object store
//!
//! Named, timestamped snapshots of generated mappings live here for the
//! duration of the process. Submission and rename are guarded; the data
//! payload of a saved object is not editable.

pub mod object_store;

pub use object_store::{ObjectStore, SavedObject, StoreError};
