//! # Theme Error Types
//!
//! Error types for loading themes and style configuration. Only the loading
//! side of the crate returns errors: once a [Theme](crate::theme::Theme) exists,
//! every query on it produces a value.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while producing a theme or a style configuration.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Built-in theme with the specified name was not found.
    #[error("Theme '{name}' not found")]
    ThemeNotFound {
        /// The name of the theme that was not found.
        name: String,
    },

    /// Theme document or configuration file was not found.
    #[error("Theme file not found: {path:?}")]
    ThemeFileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The theme document is not valid JSON.
    #[error("Failed to parse theme document: {0}")]
    Json(#[from] serde_json::Error),

    /// The theme document is valid JSON but not a flat object.
    #[error("Invalid theme document: {details}")]
    InvalidDocument {
        /// Details about what was expected.
        details: String,
    },

    /// The style configuration file is not valid TOML.
    #[error("Failed to parse style configuration {path:?}: {source}")]
    Config {
        /// The path of the file that failed to parse.
        path: PathBuf,
        /// The underlying TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// Error setting up the file watcher for hot reload.
    #[error("Failed to setup file watcher: {0}")]
    Watcher(#[from] notify::Error),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;

impl ThemeError {
    /// Create a theme not found error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::ThemeNotFound { name: name.into() }
    }

    /// Create a theme file not found error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ThemeFileNotFound { path: path.into() }
    }

    /// Create an invalid document error.
    pub fn invalid_document(details: impl Into<String>) -> Self {
        Self::InvalidDocument {
            details: details.into(),
        }
    }
}
