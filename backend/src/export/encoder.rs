//! CSV encoding of a flattened [`Table`].
//!
//! Comma separated, `\n` terminated, header line first. Absent cells are
//! written as empty fields; nulls use the configured literal.

use serde_json::Value;

use super::options::{ExportOptions, QuoteMode};
use crate::error::{EncodeError, EncodeResult};
use crate::flatten::Table;

/// Writes tables as delimited text.
#[derive(Debug, Clone)]
pub struct CsvEncoder {
    quote: QuoteMode,
    null_literal: String,
}

impl Default for CsvEncoder {
    fn default() -> Self {
        Self::from_options(&ExportOptions::default())
    }
}

impl CsvEncoder {
    pub fn new(quote: QuoteMode, null_literal: impl Into<String>) -> Self {
        Self { quote, null_literal: null_literal.into() }
    }

    pub fn from_options(options: &ExportOptions) -> Self {
        Self::new(options.quote, options.null_literal.clone())
    }

    /// Encode headers and rows. A table without columns encodes to `""`.
    pub fn encode(&self, table: &Table) -> EncodeResult<String> {
        if table.headers.is_empty() {
            return Ok(String::new());
        }

        let mut writer = csv::WriterBuilder::new()
            .delimiter(b',')
            .terminator(csv::Terminator::Any(b'\n'))
            .quote_style(self.quote_style())
            .from_writer(Vec::new());

        writer.write_record(&table.headers)?;
        for row in &table.rows {
            writer.write_record(row.cells().iter().map(|cell| self.render(cell.as_ref())))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| EncodeError::Flush(e.to_string()))?;
        Ok(String::from_utf8(bytes)?)
    }

    fn quote_style(&self) -> csv::QuoteStyle {
        match self.quote {
            QuoteMode::Always => csv::QuoteStyle::Always,
            QuoteMode::NonNumeric => csv::QuoteStyle::NonNumeric,
            QuoteMode::Necessary => csv::QuoteStyle::Necessary,
        }
    }

    fn render(&self, cell: Option<&Value>) -> String {
        match cell {
            None => String::new(),
            Some(Value::Null) => self.null_literal.clone(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}
