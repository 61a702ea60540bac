//! Export entry point.
//!
//! # Example
//!
//! ```rust,ignore
//! use bookkeeping_export::{Exporter, ExportComponent, ExportFormat, ExportOptions, JsonFileSource};
//!
//! let exporter = Exporter::new(JsonFileSource::new("runs.json"), ExportOptions::default());
//! let output = exporter.export(ExportComponent::Runs, ExportFormat::Csv)?;
//! ```

use serde::Serialize;
use serde_json::Value;

use super::encoder::CsvEncoder;
use super::options::{ExportComponent, ExportFormat, ExportOptions};
use super::source::{extract_dataset, DataSource};
use crate::error::ExportResult;
use crate::flatten::{tabulate, Table};
use crate::logs::{log_info, log_info_indent, log_success, log_warning};

/// Result of an export
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "format", rename_all = "lowercase")]
pub enum ExportOutput {
    /// The retrieved entities, unchanged
    Json { data: Value },
    /// Encoded CSV text and its file name
    Csv { csv: String, filename: String },
}

/// Retrieves a dataset and renders it in the requested format.
pub struct Exporter<S: DataSource> {
    source: S,
    options: ExportOptions,
}

impl<S: DataSource> Exporter<S> {
    pub fn new(source: S, options: ExportOptions) -> Self {
        Self { source, options }
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Retrieve the entity list for `component`.
    pub fn dataset(&self, component: ExportComponent) -> ExportResult<Vec<Value>> {
        let document = self.source.retrieve(component)?;
        let items = extract_dataset(document, component)?;
        log_success(format!("Retrieved {} {}", items.len(), component));
        Ok(items)
    }

    /// Retrieve and flatten the entity list for `component`.
    pub fn table(&self, component: ExportComponent) -> ExportResult<Table> {
        let items = self.dataset(component)?;
        Ok(self.tabulate(&items))
    }

    /// Export `component` as `format`.
    pub fn export(&self, component: ExportComponent, format: ExportFormat) -> ExportResult<ExportOutput> {
        log_info(format!("Exporting {} as {}", component, format));
        let items = self.dataset(component)?;

        match format {
            ExportFormat::Json => Ok(ExportOutput::Json { data: Value::Array(items) }),
            ExportFormat::Csv => {
                let table = self.tabulate(&items);
                let csv = CsvEncoder::from_options(&self.options).encode(&table)?;
                Ok(ExportOutput::Csv {
                    csv,
                    filename: format!("{}.csv", self.options.filename),
                })
            }
        }
    }

    fn tabulate(&self, items: &[Value]) -> Table {
        if items.is_empty() {
            log_warning("Nothing to export");
        }
        let table = tabulate(items, self.options.reverse_headers);
        log_info(format!("{} columns:", table.headers.len()));
        for header in &table.headers {
            log_info_indent(header.as_str(), 1);
        }
        log_success(format!("Flattened into {} rows", table.rows.len()));
        table
    }
}
