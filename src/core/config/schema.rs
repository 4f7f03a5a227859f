//! core::config::schema
//!
//! Configuration file schema.
//!
//! # Validation
//!
//! Values are validated after parsing: metadata tags must be non-blank.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Contents of a `config.toml` file.
///
/// # Example
///
/// ```toml
/// strict = true
/// validate = true
/// metadata = ["nightly", "org:ossf"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// Use the strict grammar when no flag or env var says otherwise
    pub strict: Option<bool>,

    /// Validate GitHub naming rules after parsing
    pub validate: Option<bool>,

    /// Tags appended to every reference the CLI builds
    pub metadata: Vec<String>,
}

impl ConfigFile {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.metadata.iter().any(|tag| tag.trim().is_empty()) {
            return Err(ConfigError::InvalidValue(
                "metadata tags cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
