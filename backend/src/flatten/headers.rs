//! Column discovery.
//!
//! Walks every entry of a dataset and collects the dotted path of each scalar
//! field, in first-seen depth-first order.

use serde_json::Value;
use std::collections::HashSet;

use crate::models::{join_path, Dataset, HeaderPath, StructuredValue};

/// Ordered set of header paths.
#[derive(Debug, Default)]
struct HeaderSet {
    ordered: Vec<HeaderPath>,
    seen: HashSet<HeaderPath>,
}

impl HeaderSet {
    fn add(&mut self, path: HeaderPath) {
        if self.seen.insert(path.clone()) {
            self.ordered.push(path);
        }
    }
}

/// Collect the distinct header paths of a dataset.
///
/// The dataset itself is walked as a collection: every entry starts with an
/// empty prefix.
pub fn collect_headers(dataset: &Dataset) -> Vec<HeaderPath> {
    let mut set = HeaderSet::default();
    for item in dataset {
        visit(item, "", &mut set);
    }
    set.ordered
}

/// Collect the distinct header paths reachable from a single value.
pub fn collect_headers_from(value: &Value) -> Vec<HeaderPath> {
    let mut set = HeaderSet::default();
    visit(value, "", &mut set);
    set.ordered
}

fn visit(value: &Value, prefix: &str, set: &mut HeaderSet) {
    match StructuredValue::classify(value) {
        StructuredValue::Record(fields) => {
            for (name, field) in fields {
                let path = join_path(prefix, name);
                if StructuredValue::classify(field).is_scalar() {
                    set.add(path);
                } else {
                    visit(field, &path, set);
                }
            }
        }
        StructuredValue::Collection(elements) => {
            for element in elements {
                visit(element, prefix, set);
            }
        }
        // Bare scalars have no field name to contribute.
        StructuredValue::Scalar(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flat_records() {
        let data = json!([{ "id": 1 }, { "id": 2 }]);
        let headers = collect_headers(data.as_array().unwrap());
        assert_eq!(headers, vec!["id"]);
    }

    #[test]
    fn test_nested_record_and_collection() {
        let data = json!([
            {
                "runNumber": 5,
                "lhcFill": { "fillNumber": 9, "beam": { "energy": 6800 } },
                "detectors": [{ "name": "ITS" }, { "name": "TPC", "quality": "good" }]
            }
        ]);
        let headers = collect_headers(data.as_array().unwrap());

        assert_eq!(
            headers,
            vec![
                "runNumber",
                "lhcFill.fillNumber",
                "lhcFill.beam.energy",
                "detectors.name",
                "detectors.quality",
            ]
        );
    }

    #[test]
    fn test_first_discovery_order_across_items() {
        let data = json!([{ "id": 1, "name": "a" }, { "extra": true, "id": 2 }]);
        let headers = collect_headers(data.as_array().unwrap());
        assert_eq!(headers, vec!["id", "name", "extra"]);
    }

    #[test]
    fn test_no_duplicates_and_stable() {
        let data = json!([
            { "tags": [{ "name": "A" }, { "name": "B" }] },
            { "tags": [{ "name": "C" }] }
        ]);
        let items = data.as_array().unwrap();

        let first = collect_headers(items);
        let second = collect_headers(items);

        assert_eq!(first, vec!["tags.name"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_null_is_a_scalar_column() {
        let data = json!([{ "endedAt": null }]);
        assert_eq!(collect_headers(data.as_array().unwrap()), vec!["endedAt"]);
    }

    #[test]
    fn test_empty_collection_adds_nothing() {
        let data = json!([{ "id": 1, "tags": [] }]);
        assert_eq!(collect_headers(data.as_array().unwrap()), vec!["id"]);
    }

    #[test]
    fn test_empty_dataset() {
        assert!(collect_headers(&[]).is_empty());
    }

    #[test]
    fn test_single_root_value() {
        let run = json!({ "id": 1, "meta": { "owner": "x" } });
        assert_eq!(collect_headers_from(&run), vec!["id", "meta.owner"]);
        assert!(collect_headers_from(&json!(42)).is_empty());
    }
}
