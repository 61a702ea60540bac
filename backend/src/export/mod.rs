//! Export module.
//!
//! This module handles everything around the flattening engine:
//! - Source: dataset retrieval
//! - Options: formats, components and configuration
//! - Encoder: CSV text output
//! - Exporter: main export entry point

pub mod encoder;
pub mod exporter;
pub mod options;
pub mod source;

pub use encoder::CsvEncoder;
pub use exporter::{ExportOutput, Exporter};
pub use options::{ExportComponent, ExportFormat, ExportOptions, QuoteMode};
pub use source::{extract_dataset, DataSource, JsonFileSource, StaticSource};
