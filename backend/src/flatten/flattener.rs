//! Recursive flattening of nested records into rows.
//!
//! Each call works on one value and returns its own rows; callers append them.
//! Rows come out post-order: everything produced by nested records and
//! collections first, then the row holding this level's own scalars.
//!
//! ```text
//! { id: 1, tags: [{name: A}, {name: B}] }
//!
//!   tags.name = A   (grouped)
//!   tags.name = B   (grouped)
//!   id = 1
//! ```

use serde_json::Value;

use super::template::RowTemplate;
use crate::models::{join_path, Dataset, MarkedRow, StructuredValue};

/// Flatten every entry of a dataset, in dataset order.
pub fn flatten(dataset: &Dataset, template: &RowTemplate) -> Vec<MarkedRow> {
    dataset
        .iter()
        .flat_map(|item| flatten_value(item, template, "", false))
        .collect()
}

/// Flatten a single value under `prefix`.
///
/// `mark_group` is inherited from the caller: it is true below a collection
/// and reset to false below a nested record. Scalars written at the top level
/// (empty prefix) are never grouped.
pub fn flatten_value(
    value: &Value,
    template: &RowTemplate,
    prefix: &str,
    mark_group: bool,
) -> Vec<MarkedRow> {
    let mut rows = Vec::new();

    match StructuredValue::classify(value) {
        StructuredValue::Collection(elements) => {
            for element in elements {
                rows.extend(flatten_value(element, template, prefix, true));
            }
        }
        StructuredValue::Record(fields) => {
            let mut current = template.blank_row();
            let mut wrote = false;

            for (name, field) in fields {
                let path = join_path(prefix, name);
                match StructuredValue::classify(field) {
                    StructuredValue::Scalar(scalar) => {
                        if let Some(column) = template.column(&path) {
                            current.set(column, scalar.clone());
                            wrote = true;
                        }
                    }
                    StructuredValue::Record(_) => {
                        rows.extend(flatten_value(field, template, &path, false));
                    }
                    StructuredValue::Collection(_) => {
                        rows.extend(flatten_value(field, template, &path, true));
                    }
                }
            }

            if wrote {
                let grouped = !prefix.is_empty() && mark_group;
                rows.push(MarkedRow::new(current, grouped));
            }
        }
        StructuredValue::Scalar(_) => {}
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flatten::headers::collect_headers;
    use serde_json::json;

    fn template_for(data: &Value) -> RowTemplate {
        RowTemplate::new(collect_headers(data.as_array().unwrap()), false)
    }

    /// (cells as json, grouped) for compact assertions.
    fn summary(rows: &[MarkedRow]) -> Vec<(Vec<Option<Value>>, bool)> {
        rows.iter()
            .map(|r| (r.row.cells().to_vec(), r.grouped))
            .collect()
    }

    #[test]
    fn test_children_before_parent() {
        let data = json!([{ "id": 1, "tags": [{ "name": "A" }, { "name": "B" }] }]);
        let template = template_for(&data);
        let rows = flatten(data.as_array().unwrap(), &template);

        assert_eq!(
            summary(&rows),
            vec![
                (vec![None, Some(json!("A"))], true),
                (vec![None, Some(json!("B"))], true),
                (vec![Some(json!(1)), None], false),
            ]
        );
    }

    #[test]
    fn test_record_without_scalars_emits_no_row() {
        let data = json!([{ "meta": { "owner": "x" } }]);
        let template = template_for(&data);
        let rows = flatten(data.as_array().unwrap(), &template);

        assert_eq!(summary(&rows), vec![(vec![Some(json!("x"))], false)]);
    }

    #[test]
    fn test_nested_record_resets_group_marker() {
        let data = json!([{
            "id": 1,
            "fills": [{ "number": 7, "beam": { "energy": 6800 } }]
        }]);
        let template = template_for(&data);
        let rows = flatten(data.as_array().unwrap(), &template);

        // Headers: id, fills.number, fills.beam.energy
        assert_eq!(
            summary(&rows),
            vec![
                (vec![None, None, Some(json!(6800))], false),
                (vec![None, Some(json!(7)), None], true),
                (vec![Some(json!(1)), None, None], false),
            ]
        );
    }

    #[test]
    fn test_null_scalar_is_written() {
        let data = json!([{ "endedAt": null }]);
        let template = template_for(&data);
        let rows = flatten(data.as_array().unwrap(), &template);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].row.cells(), &[Some(Value::Null)]);
    }

    #[test]
    fn test_empty_collection_contributes_no_rows() {
        let data = json!([{ "id": 1, "tags": [] }]);
        let template = template_for(&data);
        let rows = flatten(data.as_array().unwrap(), &template);

        assert_eq!(summary(&rows), vec![(vec![Some(json!(1))], false)]);
    }

    #[test]
    fn test_scalar_elements_of_collection_are_skipped() {
        let data = json!([{ "id": 1, "labels": ["a", "b"] }]);
        let template = template_for(&data);
        let rows = flatten(data.as_array().unwrap(), &template);

        assert_eq!(template.headers(), &["id"]);
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_unknown_column_is_not_written() {
        let template = RowTemplate::new(vec!["id".into()], false);
        let rows = flatten_value(&json!({ "other": 1 }), &template, "", false);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_rows_are_column_uniform() {
        let data = json!([
            { "id": 1, "name": "a" },
            { "id": 2, "tags": [{ "name": "t" }] },
            { "meta": { "owner": "x" } }
        ]);
        let template = template_for(&data);
        let rows = flatten(data.as_array().unwrap(), &template);

        assert!(rows.iter().all(|r| r.row.len() == template.width()));
    }
}
