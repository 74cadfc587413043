//! Discovery of record stores in a directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, StoreError};
use crate::io::load_collection;

/// A JSON file found in a store directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSummary {
    pub path: PathBuf,
    /// Record count; `None` when the file is not a record store.
    pub records: Option<usize>,
}

/// List `*.json` files in `dir`, sorted by file name.
pub fn list_stores(dir: &Path) -> Result<Vec<StoreSummary>> {
    let entries = fs::read_dir(dir).map_err(|e| StoreError::Io {
        operation: "list",
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
        })
        .collect();
    paths.sort();

    Ok(paths
        .into_iter()
        .map(|path| {
            let records = match load_collection(&path) {
                Ok(collection) => Some(collection.len()),
                Err(error) => {
                    tracing::debug!(path = %path.display(), %error, "not a record store");
                    None
                }
            };
            StoreSummary { path, records }
        })
        .collect())
}
