//! Error types for Solidafy Paginator
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for Solidafy Paginator
#[derive(Error, Debug)]
#[allow(missing_docs)]
pub enum Error {
    // ============================================================================
    // Navigation Errors
    // ============================================================================
    /// The effective page is the first page
    #[error("no previous page")]
    NoPrevPage,

    /// The effective page is the last page
    #[error("no next page")]
    NoNextPage,

    // ============================================================================
    // Source Errors
    // ============================================================================
    /// A custom source failed
    #[error("Source error: {message}")]
    Source { message: String },

    /// DuckDB reported an error
    #[error("Database error: {0}")]
    Database(#[from] duckdb::Error),

    /// A source query could not be prepared or run
    #[error("Query error: {message}")]
    Query { message: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// Invalid configuration
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Required configuration field is absent
    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    /// YAML parse failure
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// JSON parse failure
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    /// I/O failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input file does not exist
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    /// Free-form error, usually with context attached
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create a source error
    pub fn source_failure(message: impl Into<String>) -> Self {
        Self::Source {
            message: message.into(),
        }
    }

    /// Create a query error
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    /// Check if this error marks the edge of the page range.
    ///
    /// Boundary errors are expected outcomes of `prev_page`/`next_page`
    /// rather than failures of the underlying source.
    pub fn is_navigation_boundary(&self) -> bool {
        matches!(self, Error::NoPrevPage | Error::NoNextPage)
    }
}

/// Result type alias for Solidafy Paginator
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
