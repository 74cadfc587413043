//! Store file naming.

use std::path::Path;

/// File name of the AM Best carrier index.
pub const AM_BEST_FILE_NAME: &str = "index_amb.json";

/// Store file name for one (source, sheet) batch: `{source}_{sheet}.json`.
///
/// Both parts are lowercased with spaces replaced by underscores. The
/// source contributes its file stem only.
pub fn batch_file_name(source: &Path, sheet: &str) -> String {
    let stem = source
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("source");
    format!("{}_{}.json", slug(stem), slug(sheet))
}

fn slug(value: &str) -> String {
    value.trim().to_lowercase().replace(' ', "_")
}
