//! Removal of `"none"` placeholder properties.

use coi_model::RecordCollection;

/// Property value treated as "no information".
pub const NONE_SENTINEL: &str = "none";

/// Remove every property whose value is exactly the text `"none"`.
///
/// Returns the number of properties removed. Booleans, numbers, and other
/// spellings such as `"None"` are kept.
pub fn clear_none(collection: &mut RecordCollection) -> usize {
    let mut removed = 0;
    for record in collection.records_mut() {
        let before = record.properties.len();
        record.properties.retain(|_, value| !value.is_text(NONE_SENTINEL));
        removed += before - record.properties.len();
    }
    removed
}
