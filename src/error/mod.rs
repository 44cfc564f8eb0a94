//! Error handling for the scheme matcher.

use std::io;
use std::path::PathBuf;

/// Specialized error type for catalog, profile and configuration handling
///
/// The evaluation path itself never fails: a `Profile` that reaches the
/// engine is already fully resolved, so every error here comes from the
/// boundary that builds profiles and catalogs.
#[derive(Debug, thiserror::Error)]
pub enum SchemeError {
    /// Error opening or reading a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error decoding or encoding JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A profile or scheme field failed validation
    #[error("Validation error on '{field}': {message}")]
    Validation {
        /// Name of the offending field
        field: String,
        /// What was wrong with it
        message: String,
    },

    /// Two catalog entries share the same identifier
    #[error("Duplicate scheme id: {0}")]
    DuplicateScheme(String),

    /// A scheme id was not found in the catalog
    #[error("Unknown scheme id: {0}")]
    UnknownScheme(String),

    /// No tracked application has the given id
    #[error("Unknown application id: {0}")]
    UnknownApplication(String),

    /// A deadline could not be parsed as a calendar date
    #[error("Invalid date '{value}': {source}")]
    InvalidDate {
        /// The raw date string
        value: String,
        /// Parser error
        #[source]
        source: chrono::ParseError,
    },

    /// The catalog source produced no schemes
    #[error("Catalog is empty")]
    EmptyCatalog,

    /// Configuration could not be loaded
    #[error("Configuration error in {path}: {message}")]
    Config {
        /// Path of the configuration file
        path: PathBuf,
        /// Description of the problem
        message: String,
    },
}

impl SchemeError {
    /// Create a validation error for a named field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Result type for scheme matcher operations
pub type Result<T> = std::result::Result<T, SchemeError>;
