//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Values resolve in this order (later overrides earlier):
//! 1. Default values
//! 2. Config file
//! 3. Environment (`REPO_REF_STRICT`)
//! 4. CLI flags (not handled here)
//!
//! # Config Locations
//!
//! An explicit path wins. Otherwise, searched in order:
//! 1. `$REPO_REF_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/repo-ref/config.toml`
//! 3. `~/.repo-ref/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use repo_ref::core::config::Config;
//!
//! let config = Config::load(None).unwrap();
//! println!("Mode: {}", config.parse_mode());
//! ```

pub mod schema;

pub use schema::ConfigFile;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::parse::ParseMode;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "REPO_REF_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Loaded configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub file: ConfigFile,
    /// Path the file was loaded from, if any
    path: Option<PathBuf>,
    /// Whether the strict env toggle was present at load time
    strict_env: bool,
}

impl Config {
    /// Load configuration.
    ///
    /// With `explicit`, that file must exist. Otherwise the standard
    /// locations are searched and a missing file means defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read,
    /// parsed or validated.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Self::search_paths(
                std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from),
                std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
                dirs::home_dir(),
            )
            .into_iter()
            .find(|p| p.exists()),
        };

        let file = match &path {
            Some(path) => Self::read_file(path)?,
            None => ConfigFile::default(),
        };

        Ok(Config {
            file,
            path,
            strict_env: ParseMode::from_env() == ParseMode::Strict,
        })
    }

    /// Wrap an already-parsed file, ignoring the environment.
    pub fn from_file(file: ConfigFile) -> Self {
        Config {
            file,
            ..Default::default()
        }
    }

    /// Candidate locations, most specific first.
    pub fn search_paths(
        env_path: Option<PathBuf>,
        xdg_home: Option<PathBuf>,
        home: Option<PathBuf>,
    ) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(path) = env_path {
            paths.push(path);
        }
        if let Some(xdg) = xdg_home {
            paths.push(xdg.join("repo-ref/config.toml"));
        }
        if let Some(home) = home {
            paths.push(home.join(".repo-ref/config.toml"));
        }
        paths
    }

    /// Read, parse and validate a config file.
    pub fn read_file(path: &Path) -> Result<ConfigFile, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let file: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        file.validate()?;
        Ok(file)
    }

    // =========================================================================
    // Accessor methods with precedence
    // =========================================================================

    /// Parse mode from environment, then file. Defaults to legacy.
    pub fn parse_mode(&self) -> ParseMode {
        if self.strict_env || self.file.strict.unwrap_or(false) {
            ParseMode::Strict
        } else {
            ParseMode::Legacy
        }
    }

    /// Whether to validate after parsing. Defaults to `false`.
    pub fn validate(&self) -> bool {
        self.file.validate.unwrap_or(false)
    }

    /// Tags to attach to every reference.
    pub fn metadata(&self) -> &[String] {
        &self.file.metadata
    }

    /// Get the path to the loaded config file.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
