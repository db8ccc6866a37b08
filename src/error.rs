//! Unified error type for the crate.
//!
//! Each area keeps its own error enum (`SchemaError`, `StoreError`,
//! `ConfigError`); `JsonFoldError` centralizes them for callers that drive
//! a whole session and want a single error channel.

use crate::config::ConfigError;
use crate::schema::types::SchemaError;
use crate::store::StoreError;
use std::io;

/// Unified error type for the entire crate.
#[derive(Debug, thiserror::Error)]
pub enum JsonFoldError {
    /// Errors from field tree and generation operations
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// Errors from saved object lifecycle operations
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Errors from configuration loading and validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Errors from IO operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result alias used by session-level operations.
pub type JsonFoldResult<T> = Result<T, JsonFoldError>;
