//! CPL cross-reference: restriction flags from a second table.

use indexmap::IndexMap;
use tracing::{debug, info};

use coi_model::{CPL_RESTRICTION, RecordCollection, normalize_code};

use crate::error::Result;
use crate::table::{ColumnSelector, Table};

/// The only value that marks a code as allowed.
pub const ACCEPTABLE: &str = "acceptable";

/// Counts from one CPL merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CplMerge {
    /// Records whose `restrictions.cpl` was written.
    pub updated: usize,
    /// Of those, records flagged as restricted.
    pub restricted: usize,
    /// Distinct source codes with no matching record.
    pub unmatched: usize,
}

/// `acceptable` (any case) allows; every other value restricts.
pub fn is_restricted(value: &str) -> bool {
    !value.trim().eq_ignore_ascii_case(ACCEPTABLE)
}

/// Merge CPL values into existing records.
///
/// Codes are normalized without uid suffixing, so only first-occurrence
/// uids can match. When a code repeats in the source, its last row wins.
/// Rows with a null code or value are ignored.
pub fn merge_cpl(
    collection: &mut RecordCollection,
    table: &Table,
    code_column: &ColumnSelector,
    value_column: &ColumnSelector,
) -> Result<CplMerge> {
    let code_idx = table.resolve(code_column)?;
    let value_idx = table.resolve(value_column)?;

    let mut values: IndexMap<String, String> = IndexMap::new();
    for row in &table.rows {
        let (Some(code), Some(value)) = (Table::cell(row, code_idx), Table::cell(row, value_idx))
        else {
            continue;
        };
        let key = normalize_code(&code.to_text());
        if key.is_empty() {
            continue;
        }
        values.insert(key, value.to_text().to_lowercase());
    }

    let mut merge = CplMerge::default();
    for (uid, value) in &values {
        let Some(record) = collection.get_mut(uid) else {
            debug!(uid = %uid, "cpl code has no matching record");
            merge.unmatched += 1;
            continue;
        };
        let restricted = is_restricted(value);
        record
            .restrictions
            .insert(CPL_RESTRICTION.to_string(), restricted);
        merge.updated += 1;
        if restricted {
            merge.restricted += 1;
        }
    }

    info!(
        table = %table.name,
        updated = merge.updated,
        restricted = merge.restricted,
        unmatched = merge.unmatched,
        "cpl merged"
    );
    Ok(merge)
}
