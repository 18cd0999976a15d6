//! # Error Types
//!
//! Structured error types for folio_core. Rendering never fails; these errors
//! only come out of loading content files, config files and parsing section
//! names typed by a user.
//!
//! ## Example
//!
//! ```rust
//! use folio_core::errors::{FolioError, FolioResult};
//!
//! fn validate_proficiency(value: u8) -> FolioResult<()> {
//!     if value > 100 {
//!         return Err(FolioError::invalid_content(
//!             "skills.proficiency",
//!             "Proficiency must be between 0 and 100",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for folio_core operations
pub type FolioResult<T> = Result<T, FolioError>;

/// Structured error type for content and configuration operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum FolioError {
    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Content parsed but violates a content rule
    #[error("Invalid content in '{field}': {reason}")]
    InvalidContent { field: String, reason: String },

    /// Text that does not name one of the five sections
    #[error("Unknown section '{value}' (expected one of: about, projects, experience, skills, education)")]
    UnknownSection { value: String },

    /// Content schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },

    /// Config file could not be read or parsed
    #[error("Config error in '{path}': {reason}")]
    ConfigError { path: String, reason: String },
}

impl FolioError {
    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        FolioError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidContent error
    pub fn invalid_content(field: impl Into<String>, reason: impl Into<String>) -> Self {
        FolioError::InvalidContent {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownSection error
    pub fn unknown_section(value: impl Into<String>) -> Self {
        FolioError::UnknownSection { value: value.into() }
    }

    /// Create a ConfigError
    pub fn config_error(path: impl Into<String>, reason: impl Into<String>) -> Self {
        FolioError::ConfigError {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            FolioError::FileError { .. } => "FILE_ERROR",
            FolioError::SerializationError { .. } => "SERIALIZATION_ERROR",
            FolioError::InvalidContent { .. } => "INVALID_CONTENT",
            FolioError::UnknownSection { .. } => "UNKNOWN_SECTION",
            FolioError::VersionMismatch { .. } => "VERSION_MISMATCH",
            FolioError::ConfigError { .. } => "CONFIG_ERROR",
        }
    }
}
