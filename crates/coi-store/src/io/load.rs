//! Store loading operations.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use coi_model::RecordCollection;

use crate::error::{Result, StoreError};

/// Load a record collection from a JSON store.
pub fn load_collection(path: &Path) -> Result<RecordCollection> {
    let collection: RecordCollection = load_json(path)?;
    tracing::info!(path = %path.display(), records = collection.len(), "loaded record store");
    Ok(collection)
}

/// Read and parse any JSON document.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = fs::read(path).map_err(|e| StoreError::Io {
        operation: "read",
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_slice(&bytes).map_err(|e| StoreError::Deserialization {
        path: path.to_path_buf(),
        source: e,
    })
}
