//! Error types for the indexing engine.
//!
//! All errors in the engine are represented by the [`Error`] enum so that
//! error handling composes across crates. Note that most degraded conditions
//! (malformed frontmatter, unreadable files, unresolvable links) are not
//! errors at all: the engine recovers locally and returns an empty or reduced
//! result instead.

use std::io;
use std::path::PathBuf;
use thiserror::Error as ThisError;

/// The core error type for all engine operations.
#[derive(ThisError, Debug)]
pub enum Error {
    /// File system error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Invalid file path (outside the notes root, traversal attempt, etc.)
    #[error("Invalid file path: {reason}")]
    InvalidPath { reason: String },

    /// Parse error
    #[error("Parse error: {reason}")]
    ParseError { reason: String },

    /// Invalid configuration
    #[error("Configuration error: {reason}")]
    ConfigError { reason: String },

    /// A plugin hook failed. The pipeline logs these and keeps going.
    #[error("Plugin '{plugin}' failed in {hook}: {reason}")]
    PluginError {
        plugin: String,
        hook: String,
        reason: String,
    },

    /// Lookup miss (unknown plugin id, unknown note, etc.)
    #[error("Not found: {key}")]
    NotFound { key: String },

    /// Generic unclassified error
    #[error("Error: {0}")]
    Other(String),
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an IO error
    pub fn io(err: io::Error) -> Self {
        Error::Io(err)
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Error::FileNotFound { path: path.into() }
    }

    /// Create an invalid path error
    pub fn invalid_path(reason: impl Into<String>) -> Self {
        Error::InvalidPath {
            reason: reason.into(),
        }
    }

    /// Create a parse error
    pub fn parse_error(reason: impl Into<String>) -> Self {
        Error::ParseError {
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn config_error(reason: impl Into<String>) -> Self {
        Error::ConfigError {
            reason: reason.into(),
        }
    }

    /// Create a plugin error
    pub fn plugin_error(
        plugin: impl Into<String>,
        hook: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Error::PluginError {
            plugin: plugin.into(),
            hook: hook.into(),
            reason: reason.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(key: impl Into<String>) -> Self {
        Error::NotFound { key: key.into() }
    }

    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }
}
