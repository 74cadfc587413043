//! CSV sources with scalar type inference.

use std::fs::File;
use std::path::Path;

use ::csv::ReaderBuilder;

use coi_model::CellValue;

use crate::error::{IngestError, Result};
use crate::table::{Cell, Table};

/// Reads a CSV file; the first non-blank row is the header.
pub fn read_csv_table(path: &Path) -> Result<Table> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut rows: Vec<Vec<Cell>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let row: Vec<Cell> = record.iter().map(infer_cell).collect();
        if row.iter().all(Option::is_none) {
            continue;
        }
        rows.push(row);
    }

    let name = super::file_stem(path);
    if rows.is_empty() {
        return Err(IngestError::EmptyTable { table: name });
    }
    let header = rows.remove(0);
    tracing::debug!(path = %path.display(), rows = rows.len(), "read csv table");
    Ok(Table::new(name, header, rows))
}

/// Types a raw CSV field the way a spreadsheet would.
///
/// Numbers with leading zeros or exponents, and integers too large for
/// `i64`, stay text so codes such as `00123` survive unchanged.
pub fn infer_cell(raw: &str) -> Cell {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.eq_ignore_ascii_case("true") {
        return Some(CellValue::Bool(true));
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return Some(CellValue::Bool(false));
    }
    if is_plain_number(trimmed) {
        // Digit-only fields beyond i64 stay text.
        if !trimmed.contains('.') {
            return Some(match trimmed.parse::<i64>() {
                Ok(value) => CellValue::Integer(value),
                Err(_) => CellValue::Text(trimmed.to_string()),
            });
        }
        if let Ok(value) = trimmed.parse::<f64>() {
            return Some(CellValue::Float(value));
        }
    }
    Some(CellValue::Text(trimmed.to_string()))
}

fn is_plain_number(value: &str) -> bool {
    let digits = value.strip_prefix('-').unwrap_or(value);
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (digits, None),
    };
    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if whole.len() > 1 && whole.starts_with('0') {
        return false;
    }
    fraction.is_none_or(|fraction| !fraction.is_empty() && fraction.bytes().all(|b| b.is_ascii_digit()))
}
