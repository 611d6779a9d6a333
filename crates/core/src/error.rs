//! Error types for the Mohajer site
//!
//! Controllers degrade silently on missing elements or unknown keys, so the
//! error type only covers the surfaces that genuinely fail: preference storage
//! and configuration or translation loading.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for the site view layer
#[derive(Debug, Error)]
pub enum SiteError {
    // ========================================================================
    // Storage Errors
    // ========================================================================
    /// Preference store could not be read
    #[error("Failed to read preference '{key}': {message}")]
    StorageRead { key: String, message: String },

    /// Preference store could not be written
    #[error("Failed to write preference '{key}': {message}")]
    StorageWrite { key: String, message: String },

    // ========================================================================
    // IO Errors
    // ========================================================================
    /// File read error
    #[error("Failed to read file '{path}': {message}")]
    FileRead { path: PathBuf, message: String },

    // ========================================================================
    // Serialization Errors
    // ========================================================================
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl SiteError {
    /// Create a storage read error
    pub fn storage_read(key: impl Into<String>, msg: impl Into<String>) -> Self {
        SiteError::StorageRead {
            key: key.into(),
            message: msg.into(),
        }
    }

    /// Create a storage write error
    pub fn storage_write(key: impl Into<String>, msg: impl Into<String>) -> Self {
        SiteError::StorageWrite {
            key: key.into(),
            message: msg.into(),
        }
    }

    /// Create an error with context
    pub fn with_context(context: impl Into<String>, msg: impl Into<String>) -> Self {
        SiteError::WithContext {
            context: context.into(),
            message: msg.into(),
        }
    }

    /// Check if this error came from the preference store
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            SiteError::StorageRead { .. } | SiteError::StorageWrite { .. }
        )
    }
}

/// Result type alias using SiteError
pub type SiteResult<T> = Result<T, SiteError>;

// ============================================================================
// Tests
// ============================================================================
