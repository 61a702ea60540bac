//! # Bookkeeping Export - flatten nested records into CSV
//!
//! Exports lists of bookkeeping entities (runs, LHC fills) either as JSON or
//! as CSV. Nested records become dotted columns; nested collections become
//! extra rows.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ DataSource  │────▶│  Headers +  │────▶│  Flatten +  │────▶│ CsvEncoder  │
//! │  (JSON)     │     │  Template   │     │  Reorder    │     │  (csv)      │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bookkeeping_export::tabulate;
//! use serde_json::json;
//!
//! let data = json!([{ "id": 1, "tags": [{ "name": "A" }] }]);
//! let table = tabulate(data.as_array().unwrap(), false);
//! assert_eq!(table.headers, vec!["id", "tags.name"]);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`models`] - StructuredValue and row types
//! - [`flatten`] - Headers, template, flattener and reordering
//! - [`export`] - Retrieval, options, CSV encoding and the exporter
//! - [`logs`] - Progress log broadcasting

// Core modules
pub mod error;
pub mod models;

// Engine
pub mod flatten;

// Collaborators
pub mod export;

// Logging
pub mod logs;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{ConfigError, EncodeError, ExportError, SourceError};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{join_path, Dataset, FlatRow, HeaderPath, MarkedRow, StructuredValue};

// =============================================================================
// Re-exports - Engine
// =============================================================================

pub use flatten::{
    collect_headers,
    collect_headers_from,
    flatten,
    flatten_value,
    reorder,
    reorder_marked,
    reverse_groups,
    tabulate,
    RowTemplate,
    Table,
};

// =============================================================================
// Re-exports - Export
// =============================================================================

pub use export::{
    extract_dataset,
    CsvEncoder,
    DataSource,
    ExportComponent,
    ExportFormat,
    ExportOptions,
    ExportOutput,
    Exporter,
    JsonFileSource,
    QuoteMode,
    StaticSource,
};

// =============================================================================
// Re-exports - Logs
// =============================================================================

pub use logs::{LogEntry, LogLevel, LOG_BROADCASTER};
