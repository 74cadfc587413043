//! AM Best carrier index extraction.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use coi_model::CellValue;

use crate::error::{IngestError, Result};
use crate::table::Table;

/// Headers required in an AM Best sheet, compared case-insensitively.
pub const AM_BEST_COLUMNS: [&str; 6] = [
    "am best #",
    "business name",
    "naic / aiin",
    "rating",
    "size category",
    "original business name",
];

/// Floats at or beyond this magnitude do not fit in `i64`.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// One carrier, keyed by AM Best number in the index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmBestEntry {
    pub am: i64,
    pub name: Option<CellValue>,
    pub naic: Option<CellValue>,
    pub rating: Option<CellValue>,
    pub size: Option<CellValue>,
    pub business: Option<CellValue>,
}

/// Carriers keyed by AM Best number, in sheet order.
pub type AmBestIndex = IndexMap<i64, AmBestEntry>;

/// Build the carrier index. All missing headers are reported together.
pub fn build_am_best_index(table: &Table) -> Result<AmBestIndex> {
    let missing: Vec<&str> = AM_BEST_COLUMNS
        .iter()
        .copied()
        .filter(|column| table.find_column(column).is_none())
        .collect();
    if !missing.is_empty() {
        return Err(IngestError::MissingColumn {
            column: missing.join(", "),
            table: table.name.clone(),
        });
    }
    let [am_idx, name_idx, naic_idx, rating_idx, size_idx, business_idx] =
        AM_BEST_COLUMNS.map(|column| table.find_column(column).unwrap_or_default());

    let mut index = AmBestIndex::new();
    for (offset, row) in table.rows.iter().enumerate() {
        let Some(raw) = Table::cell(row, am_idx) else {
            continue;
        };
        let am = parse_am_best_number(raw).ok_or_else(|| IngestError::InvalidValue {
            field: AM_BEST_COLUMNS[0].to_string(),
            value: raw.to_string(),
            table: table.name.clone(),
            row: offset + 2,
        })?;
        let value = |idx: usize| Table::cell(row, idx).cloned();
        index.insert(
            am,
            AmBestEntry {
                am,
                name: value(name_idx),
                naic: value(naic_idx),
                rating: value(rating_idx),
                size: value(size_idx),
                business: value(business_idx),
            },
        );
    }
    tracing::info!(table = %table.name, carriers = index.len(), "am best index built");
    Ok(index)
}

fn parse_am_best_number(value: &CellValue) -> Option<i64> {
    match value {
        CellValue::Integer(number) => Some(*number),
        CellValue::Float(number) if number.fract() == 0.0 && number.abs() < I64_LIMIT => {
            Some(*number as i64)
        }
        CellValue::Text(text) => text.trim().parse().ok(),
        _ => None,
    }
}
