//! Board storage and catalog configuration.
//!
//! Configuration is read from an optional TOML document layered over compiled
//! defaults; every key may be omitted.
//!
//! ```toml
//! storage_dir = "/var/lib/taskboard"
//! snapshot_file = "boards.json"
//!
//! [[tags]]
//! id = "1"
//! name = "Urgent"
//! color = "#ff4d4f"
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;
use thiserror::Error;

use crate::board::domain::{Tag, TagCatalog};

/// Default directory holding the snapshot file.
pub const DEFAULT_STORAGE_DIR: &str = ".taskboard";

/// Default snapshot file name.
pub const DEFAULT_SNAPSHOT_FILE: &str = "boards.json";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path that was attempted.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("failed to parse config: {0}")]
    ParseToml(#[from] toml::de::Error),
}

/// Resolved board configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    /// Directory holding the snapshot file.
    pub storage_dir: Utf8PathBuf,
    /// Snapshot file name inside `storage_dir`.
    pub snapshot_file: Utf8PathBuf,
    /// Tags offered when editing a task.
    pub tags: Vec<Tag>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_dir: Utf8PathBuf::from(DEFAULT_STORAGE_DIR),
            snapshot_file: Utf8PathBuf::from(DEFAULT_SNAPSHOT_FILE),
            tags: TagCatalog::default().tags().to_vec(),
        }
    }
}

impl BoardConfig {
    /// Parses configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseToml`] when the document is malformed or
    /// contains unknown keys.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Reads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadFile`] when the file cannot be read and
    /// [`ConfigError::ParseToml`] when it cannot be parsed.
    pub fn load(path: impl AsRef<Utf8Path>) -> Result<Self, ConfigError> {
        let file_path = path.as_ref();
        let contents =
            std::fs::read_to_string(file_path).map_err(|source| ConfigError::ReadFile {
                path: file_path.to_owned(),
                source,
            })?;
        Self::from_toml_str(&contents)
    }

    /// Returns the full path of the snapshot file.
    #[must_use]
    pub fn snapshot_path(&self) -> Utf8PathBuf {
        self.storage_dir.join(&self.snapshot_file)
    }

    /// Builds the tag catalog described by this configuration.
    #[must_use]
    pub fn tag_catalog(&self) -> TagCatalog {
        TagCatalog::new(self.tags.iter().cloned())
    }
}
