//! Engine configuration.
//!
//! The engine itself owns very little configuration: where the notes live and
//! where plugin enabled/disabled state is persisted. Everything else (auth,
//! rate limits, themes) belongs to the HTTP layer.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for the indexing engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Root directory containing the markdown notes
    pub notes_dir: PathBuf,
    /// Where plugin enabled/disabled state is persisted, if anywhere
    #[serde(default)]
    pub plugin_state_file: Option<PathBuf>,
}

impl EngineConfig {
    /// Create a config rooted at the given notes directory.
    pub fn new(notes_dir: impl Into<PathBuf>) -> Self {
        Self {
            notes_dir: notes_dir.into(),
            plugin_state_file: None,
        }
    }

    /// Set the plugin state file.
    pub fn with_plugin_state_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.plugin_state_file = Some(path.into());
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.notes_dir.as_os_str().is_empty() {
            return Err(Error::config_error("notes_dir cannot be empty"));
        }

        if !self.notes_dir.exists() {
            return Err(Error::config_error(format!(
                "notes_dir does not exist: {}",
                self.notes_dir.display()
            )));
        }

        if !self.notes_dir.is_dir() {
            return Err(Error::config_error(format!(
                "notes_dir is not a directory: {}",
                self.notes_dir.display()
            )));
        }

        Ok(())
    }

    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config_error(format!("Failed to read {}: {}", path.display(), e))
        })?;

        serde_yaml::from_str(&content)
            .map_err(|e| Error::config_error(format!("Invalid configuration: {}", e)))
    }

    /// Save configuration to a YAML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| Error::config_error(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, yaml).map_err(Error::io)
    }
}
