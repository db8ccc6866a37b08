//! Configuration for builder sessions
//!
//! A small TOML-backed configuration controlling the type given to newly
//! added fields, the preview indent, and whether numeric input is
//! validated strictly at submission.

pub mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::schema::types::FieldType;

/// Widest accepted preview indent.
pub const MAX_PREVIEW_INDENT: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Type assigned to newly added fields and children.
    pub default_field_type: FieldType,
    /// Spaces per indent level in preview output.
    pub preview_indent: usize,
    /// Reject unparseable numeric input at submission instead of
    /// coercing it to zero.
    pub strict_numbers: bool,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            default_field_type: FieldType::String,
            preview_indent: 2,
            strict_numbers: false,
        }
    }
}

impl BuilderConfig {
    /// Loads and validates a configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the file when it exists, otherwise returns the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validates and writes the configuration as TOML, creating parent
    /// directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        self.validate()?;
        let raw = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, raw)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.preview_indent == 0 || self.preview_indent > MAX_PREVIEW_INDENT {
            return Err(ConfigError::Validation(format!(
                "preview_indent must be between 1 and {}",
                MAX_PREVIEW_INDENT
            )));
        }
        Ok(())
    }

    /// Platform configuration file location for this crate.
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join("jsonfold").join("config.toml"))
            .ok_or_else(|| {
                ConfigError::PathResolution(
                    "Could not determine platform config directory".to_string(),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BuilderConfig::default();
        assert_eq!(config.default_field_type, FieldType::String);
        assert_eq!(config.preview_indent, 2);
        assert!(!config.strict_numbers);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_indent_bounds_are_validated() {
        let mut config = BuilderConfig {
            preview_indent: 0,
            ..BuilderConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
        config.preview_indent = MAX_PREVIEW_INDENT + 1;
        assert!(config.validate().is_err());
        config.preview_indent = MAX_PREVIEW_INDENT;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: BuilderConfig = toml::from_str("strict_numbers = true").unwrap();
        assert!(config.strict_numbers);
        assert_eq!(config.preview_indent, 2);
        assert_eq!(config.default_field_type, FieldType::String);
    }

    #[test]
    fn test_field_type_parses_lowercase() {
        let config: BuilderConfig =
            toml::from_str("default_field_type = \"nested\"").unwrap();
        assert_eq!(config.default_field_type, FieldType::Nested);
    }
}
