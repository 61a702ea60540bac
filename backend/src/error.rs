//! Error types for the export pipeline.
//!
//! The flattening engine itself never fails. Errors come from the
//! collaborators around it:
//!
//! - [`SourceError`] - Dataset retrieval errors
//! - [`EncodeError`] - CSV encoding errors
//! - [`ConfigError`] - Invalid options or selectors
//! - [`ExportError`] - Top-level export errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// Retrieval Errors
// =============================================================================

/// Errors while retrieving the dataset to export.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Failed to read the source.
    #[error("Failed to read source: {0}")]
    Io(#[from] std::io::Error),

    /// Source is not valid JSON.
    #[error("Invalid JSON in source: {0}")]
    Json(#[from] serde_json::Error),

    /// Retrieval result has no entry for the requested component.
    #[error("No '{0}' entry in retrieved data")]
    MissingComponent(String),

    /// Retrieved data for the component is not a list of entities.
    #[error("Data for '{0}' is not a list")]
    NotACollection(String),
}

// =============================================================================
// Encoding Errors
// =============================================================================

/// Errors while encoding rows as delimited text.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// CSV writer error.
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    /// Failed to flush the CSV writer.
    #[error("Failed to flush CSV output: {0}")]
    Flush(String),

    /// Encoded output is not UTF-8.
    #[error("Encoded output is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors in export options and selectors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Option has a value that cannot be parsed.
    #[error("Invalid value for '{key}': {value}")]
    InvalidValue { key: String, value: String },

    /// Unknown export component.
    #[error("Unknown export component: {0}")]
    UnknownComponent(String),

    /// Unknown export format.
    #[error("Unknown export format: {0} (expected 'json' or 'csv')")]
    UnknownFormat(String),

    /// Unknown quoting mode.
    #[error("Unknown quote mode: {0} (expected 'always', 'non-numeric' or 'necessary')")]
    UnknownQuoteMode(String),
}

// =============================================================================
// Export Errors (top-level)
// =============================================================================

/// Top-level export errors.
///
/// This is the error type returned by [`crate::export::Exporter::export`].
#[derive(Debug, Error)]
pub enum ExportError {
    /// Retrieval error.
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// Encoding error.
    #[error("Encode error: {0}")]
    Encode(#[from] EncodeError),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for retrieval operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Result type for encoding operations.
pub type EncodeResult<T> = Result<T, EncodeError>;

/// Result type for configuration parsing.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;
