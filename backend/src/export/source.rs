//! Dataset retrieval.
//!
//! A [`DataSource`] returns the retrieval result for a component: either an
//! object holding the entity list under the component key
//! (`{ "runs": [...] }`) or the entity list itself.

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use super::options::ExportComponent;
use crate::error::{SourceError, SourceResult};

/// Provides already authorized data for export.
pub trait DataSource {
    fn retrieve(&self, component: ExportComponent) -> SourceResult<Value>;
}

/// Reads a JSON document from disk on every retrieval.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataSource for JsonFileSource {
    fn retrieve(&self, _component: ExportComponent) -> SourceResult<Value> {
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// In-memory document, returned for every component.
#[derive(Debug, Clone)]
pub struct StaticSource(pub Value);

impl DataSource for StaticSource {
    fn retrieve(&self, _component: ExportComponent) -> SourceResult<Value> {
        Ok(self.0.clone())
    }
}

/// Pull the entity list for `component` out of a retrieval result.
pub fn extract_dataset(document: Value, component: ExportComponent) -> SourceResult<Vec<Value>> {
    let key = component.key();
    let data = match document {
        Value::Object(mut fields) => fields
            .remove(key)
            .ok_or_else(|| SourceError::MissingComponent(key.to_string()))?,
        other => other,
    };

    match data {
        Value::Array(items) => Ok(items),
        _ => Err(SourceError::NotACollection(key.to_string())),
    }
}
