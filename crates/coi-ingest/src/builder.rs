//! Row to record conversion for one extraction batch.

use coi_model::{
    CPL_RESTRICTION, CellValue, ModelError, Properties, Record, RecordCollection, UidAllocator,
    normalized_key,
};
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::table::Table;

/// Header holding the raw identifier.
pub const CODE_COLUMN: &str = "code";
/// Header holding the description.
pub const LABEL_COLUMN: &str = "label";
/// Default header of the optional restriction column.
pub const DEFAULT_CPL_COLUMN: &str = "cpl";

/// Options for one extraction batch.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Category stamped on every record of the batch.
    pub category: Option<String>,
    /// Header name recognized as the CPL restriction column.
    pub cpl_column: String,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            category: None,
            cpl_column: DEFAULT_CPL_COLUMN.to_string(),
        }
    }
}

impl BuildOptions {
    /// Sets the batch category; blank categories are treated as absent.
    #[must_use]
    pub fn with_category(mut self, category: Option<impl Into<String>>) -> Self {
        self.category = category
            .map(Into::into)
            .filter(|category: &String| !category.trim().is_empty());
        self
    }

    #[must_use]
    pub fn with_cpl_column(mut self, column: impl Into<String>) -> Self {
        self.cpl_column = column.into();
        self
    }
}

/// Records built from one table plus row accounting.
#[derive(Debug, Clone, Default)]
pub struct BuildOutcome {
    pub collection: RecordCollection,
    /// Records inserted.
    pub created: usize,
    /// Rows skipped for a null code or label, or a code with no usable characters.
    pub skipped: usize,
}

/// Build a record collection from a table.
///
/// The header must contain `code` and `label` (any case). Every other named
/// column becomes a property, except the CPL column, which is coerced to a
/// boolean restriction.
pub fn build_collection(table: &Table, options: &BuildOptions) -> Result<BuildOutcome> {
    let code_idx = table.require_column(CODE_COLUMN)?;
    let label_idx = table.require_column(LABEL_COLUMN)?;
    let cpl_idx = table.find_column(&options.cpl_column);
    let columns = table.column_names();

    let mut outcome = BuildOutcome::default();
    let mut uids = UidAllocator::new();

    for (offset, row) in table.rows.iter().enumerate() {
        // Sheet row number: header is row 1.
        let row_number = offset + 2;
        let (Some(code), Some(label)) = (Table::cell(row, code_idx), Table::cell(row, label_idx))
        else {
            debug!(table = %table.name, row = row_number, "row without code or label skipped");
            outcome.skipped += 1;
            continue;
        };
        let label = label.to_text();
        if label.trim().is_empty() {
            outcome.skipped += 1;
            continue;
        }
        let key = match normalized_key(&code.to_text()) {
            Ok(key) => key,
            Err(ModelError::EmptyCode { raw }) => {
                warn!(table = %table.name, row = row_number, code = %raw, "unusable code skipped");
                outcome.skipped += 1;
                continue;
            }
        };
        let uid = uids.assign_unused(&key, |candidate| outcome.collection.contains(candidate));

        let mut properties = Properties::new();
        for (idx, name) in columns.iter().enumerate() {
            let Some(name) = name else {
                continue;
            };
            if idx == code_idx || idx == label_idx || Some(idx) == cpl_idx {
                continue;
            }
            if let Some(value) = Table::cell(row, idx) {
                properties.insert(name.clone(), value.clone());
            }
        }

        let mut record = Record::new(code.clone(), label.into_owned())
            .with_category(options.category.clone());
        record.properties = properties;
        if let Some(cpl_idx) = cpl_idx {
            let restricted = Table::cell(row, cpl_idx).is_some_and(CellValue::is_truthy);
            record.restrictions.insert(CPL_RESTRICTION.to_string(), restricted);
        }

        outcome.collection.insert(uid, record);
        outcome.created += 1;
    }

    info!(
        table = %table.name,
        created = outcome.created,
        skipped = outcome.skipped,
        "records built"
    );
    Ok(outcome)
}
