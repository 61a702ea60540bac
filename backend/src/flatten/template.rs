//! Row template built from a header list.

use std::collections::HashMap;

use crate::models::{FlatRow, HeaderPath};

/// Fixed column schema for one export.
///
/// Every row produced against the same template has one cell per header,
/// so heterogeneous items still yield column-uniform output.
#[derive(Debug, Clone, Default)]
pub struct RowTemplate {
    headers: Vec<HeaderPath>,
    index: HashMap<HeaderPath, usize>,
}

impl RowTemplate {
    /// Build a template over `headers`, optionally reversing the column order.
    pub fn new(headers: Vec<HeaderPath>, reverse: bool) -> Self {
        let mut headers = headers;
        if reverse {
            headers.reverse();
        }
        let index = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.clone(), i))
            .collect();
        Self { headers, index }
    }

    /// Public header list, in column order.
    pub fn headers(&self) -> &[HeaderPath] {
        &self.headers
    }

    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// Column position of a header path.
    pub fn column(&self, path: &str) -> Option<usize> {
        self.index.get(path).copied()
    }

    /// A row with every column absent.
    pub fn blank_row(&self) -> FlatRow {
        FlatRow::blank(self.headers.len())
    }
}
