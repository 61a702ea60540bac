//! Domain models for the export engine.
//!
//! - [`StructuredValue`] - Scalar / Record / Collection view over a decoded value
//! - [`FlatRow`] - One exportable row, aligned to a header schema
//! - [`MarkedRow`] - A row plus its group marker, used between flattening and reordering

use serde_json::{Map, Value};

/// Dotted column name, e.g. `lhcFill.fillNumber`.
pub type HeaderPath = String;

/// The entities submitted for export, in retrieval order.
pub type Dataset = [Value];

// =============================================================================
// Structured Value
// =============================================================================

/// Shape of a single decoded value.
///
/// Borrows from the underlying [`Value`]; classification never copies data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StructuredValue<'a> {
    /// Leaf value: null, boolean, number or string.
    Scalar(&'a Value),
    /// Object with named members, in source order.
    Record(&'a Map<String, Value>),
    /// Array; element positions never appear in header paths.
    Collection(&'a [Value]),
}

impl<'a> StructuredValue<'a> {
    /// Classify a value. Total: every JSON value has exactly one shape.
    pub fn classify(value: &'a Value) -> Self {
        match value {
            Value::Object(fields) => StructuredValue::Record(fields),
            Value::Array(elements) => StructuredValue::Collection(elements),
            other => StructuredValue::Scalar(other),
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, StructuredValue::Scalar(_))
    }
}

/// Extend a header prefix with a field name.
pub fn join_path(prefix: &str, name: &str) -> HeaderPath {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", prefix, name)
    }
}

// =============================================================================
// Rows
// =============================================================================

/// One exportable row.
///
/// Cells are positional and aligned to the header list of the template that
/// produced the row. `None` means the column is absent for this row, which is
/// different from a present `null` scalar.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlatRow {
    cells: Vec<Option<Value>>,
}

impl FlatRow {
    /// Row with `width` absent cells.
    pub fn blank(width: usize) -> Self {
        Self { cells: vec![None; width] }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, column: usize) -> Option<&Value> {
        self.cells.get(column).and_then(|c| c.as_ref())
    }

    pub fn set(&mut self, column: usize, value: Value) {
        if let Some(cell) = self.cells.get_mut(column) {
            *cell = Some(value);
        }
    }

    pub fn cells(&self) -> &[Option<Value>] {
        &self.cells
    }

    /// Render the row as an object keyed by `headers`, skipping absent cells.
    pub fn to_object(&self, headers: &[HeaderPath]) -> Value {
        let mut obj = Map::new();
        for (header, cell) in headers.iter().zip(&self.cells) {
            if let Some(value) = cell {
                obj.insert(header.clone(), value.clone());
            }
        }
        Value::Object(obj)
    }
}

/// A [`FlatRow`] tagged with its group marker.
///
/// `grouped` is set on rows produced for the elements of a collection; it is
/// consumed by the reordering pass and never reaches the exporter.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkedRow {
    pub row: FlatRow,
    pub grouped: bool,
}

impl MarkedRow {
    pub fn new(row: FlatRow, grouped: bool) -> Self {
        Self { row, grouped }
    }
}
