//! Flattening module.
//!
//! Turns a dataset of nested records into a header list and aligned rows:
//! - Headers: column discovery
//! - Template: fixed column schema
//! - Flattener: recursive row construction
//! - Reorder: presentation order

pub mod flattener;
pub mod headers;
pub mod reorder;
pub mod template;

pub use flattener::{flatten, flatten_value};
pub use headers::{collect_headers, collect_headers_from};
pub use reorder::{reorder, reorder_marked, reverse_groups};
pub use template::RowTemplate;

use serde_json::Value;

use crate::models::{Dataset, FlatRow, HeaderPath};

/// Tabular form of a dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    /// Column names, in output order.
    pub headers: Vec<HeaderPath>,
    /// Rows aligned to `headers`, in output order.
    pub rows: Vec<FlatRow>,
}

impl Table {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows as JSON objects keyed by header, absent cells omitted.
    pub fn to_objects(&self) -> Vec<Value> {
        self.rows.iter().map(|r| r.to_object(&self.headers)).collect()
    }
}

/// Run the full engine: headers, template, flatten, reorder.
pub fn tabulate(dataset: &Dataset, reverse_headers: bool) -> Table {
    let template = RowTemplate::new(collect_headers(dataset), reverse_headers);
    let rows = reorder(flatten(dataset, &template));
    Table {
        headers: template.headers().to_vec(),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn table(data: Value) -> Table {
        tabulate(data.as_array().unwrap(), false)
    }

    fn cells(table: &Table) -> Vec<Vec<Option<Value>>> {
        table.rows.iter().map(|r| r.cells().to_vec()).collect()
    }

    #[test]
    fn test_flat_dataset_is_reversed() {
        let t = table(json!([{ "id": 1 }, { "id": 2 }]));

        assert_eq!(t.headers, vec!["id"]);
        assert_eq!(cells(&t), vec![vec![Some(json!(2))], vec![Some(json!(1))]]);
    }

    #[test]
    fn test_single_nested_collection() {
        let t = table(json!([
            { "id": 1, "tags": [{ "name": "A" }, { "name": "B" }] },
            { "id": 2, "tags": [{ "name": "C" }] }
        ]));

        assert_eq!(t.headers, vec!["id", "tags.name"]);
        assert_eq!(
            cells(&t),
            vec![
                vec![Some(json!(2)), None],
                vec![None, Some(json!("C"))],
                vec![Some(json!(1)), None],
                vec![None, Some(json!("A"))],
                vec![None, Some(json!("B"))],
            ]
        );
    }

    #[test]
    fn test_nested_record_only() {
        let t = table(json!([{ "meta": { "owner": "x" } }]));

        assert_eq!(t.headers, vec!["meta.owner"]);
        assert_eq!(cells(&t), vec![vec![Some(json!("x"))]]);
    }

    #[test]
    fn test_empty_dataset() {
        let t = table(json!([]));
        assert!(t.headers.is_empty());
        assert!(t.is_empty());
    }

    #[test]
    fn test_heterogeneous_items() {
        let t = table(json!([{ "id": 1, "name": "a" }, { "id": 2 }]));

        assert_eq!(t.headers, vec!["id", "name"]);
        assert_eq!(
            cells(&t),
            vec![
                vec![Some(json!(2)), None],
                vec![Some(json!(1)), Some(json!("a"))],
            ]
        );
    }

    #[test]
    fn test_every_row_matches_header_width() {
        let t = table(json!([
            { "runNumber": 1, "detectors": [{ "name": "ITS" }], "lhcFill": { "fillNumber": 3 } },
            { "runNumber": 2, "eorReasons": [{ "category": "DETECTORS", "title": null }] }
        ]));

        assert!(t.rows.iter().all(|r| r.len() == t.headers.len()));
    }

    #[test]
    fn test_reversed_headers_keep_rows_aligned() {
        let t = tabulate(json!([{ "id": 1, "name": "a" }]).as_array().unwrap(), true);

        assert_eq!(t.headers, vec!["name", "id"]);
        assert_eq!(cells(&t), vec![vec![Some(json!("a")), Some(json!(1))]]);
    }

    #[test]
    fn test_to_objects() {
        let t = table(json!([{ "id": 1, "tags": [{ "name": "A" }] }]));
        assert_eq!(
            t.to_objects(),
            vec![json!({ "id": 1 }), json!({ "tags.name": "A" })]
        );
    }
}
