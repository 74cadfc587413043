//! Store saving operations.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use coi_model::RecordCollection;

use crate::error::{Result, StoreError};

/// Save a record collection as pretty-printed JSON.
///
/// Uses atomic write (temp file + rename) so an interrupted save never
/// leaves a truncated store behind.
pub fn save_collection(collection: &RecordCollection, path: &Path) -> Result<()> {
    save_json(collection, path)?;
    tracing::info!(path = %path.display(), records = collection.len(), "saved record store");
    Ok(())
}

/// Atomically write any serializable value as pretty-printed JSON.
pub fn save_json<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<()> {
    let mut bytes = serde_json::to_vec_pretty(value).map_err(|e| StoreError::Serialization {
        path: path.to_path_buf(),
        source: e,
    })?;
    bytes.push(b'\n');

    // Write to a temp file first, then rename for atomicity
    let temp_path = path.with_extension("json.tmp");

    // Create parent directory if needed
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| StoreError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let mut file = File::create(&temp_path).map_err(|e| StoreError::Io {
        operation: "create",
        path: temp_path.clone(),
        source: e,
    })?;

    file.write_all(&bytes).map_err(|e| StoreError::Io {
        operation: "write",
        path: temp_path.clone(),
        source: e,
    })?;

    file.sync_all().map_err(|e| StoreError::Io {
        operation: "sync",
        path: temp_path.clone(),
        source: e,
    })?;

    // Atomic rename
    fs::rename(&temp_path, path).map_err(|e| StoreError::AtomicWriteFailed {
        temp_path: temp_path.clone(),
        target_path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
