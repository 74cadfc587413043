//! Workbook sources (xlsx, xlsm, xls, ods) read through calamine.

use std::path::Path;

use calamine::{DataType, Range, Reader, open_workbook_auto};
use chrono::Timelike;

use coi_model::CellValue;

use crate::error::{IngestError, Result};
use crate::table::{Cell, Table};

/// Largest float that still converts to an exact integer.
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

pub fn list_workbook_sheets(path: &Path) -> Result<Vec<String>> {
    let workbook = open_workbook_auto(path).map_err(|err| IngestError::Workbook {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    Ok(workbook.sheet_names())
}

/// Reads one sheet; the first sheet when `sheet` is `None`.
pub fn read_workbook_table(path: &Path, sheet: Option<&str>) -> Result<Table> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut workbook = open_workbook_auto(path).map_err(|err| IngestError::Workbook {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;

    let sheet_name = match sheet {
        Some(name) => name.to_string(),
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| IngestError::EmptyTable {
                table: super::file_stem(path),
            })?,
    };
    let range = workbook
        .worksheet_range(&sheet_name)
        .ok_or_else(|| IngestError::SheetNotFound {
            sheet: sheet_name.clone(),
            path: path.to_path_buf(),
        })?
        .map_err(|err| IngestError::Workbook {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;

    let table = range_table(&sheet_name, &range)?;
    tracing::debug!(
        path = %path.display(),
        sheet = %sheet_name,
        rows = table.rows.len(),
        "read workbook sheet"
    );
    Ok(table)
}

/// Builds a table whose column positions match the sheet's columns.
///
/// calamine ranges start at the first used cell, so leading empty columns
/// are restored as null cells.
fn range_table(name: &str, range: &Range<DataType>) -> Result<Table> {
    let leading = range.start().map_or(0, |(_, column)| column as usize);
    let mut rows: Vec<Vec<Cell>> = range
        .rows()
        .map(|row| {
            std::iter::repeat_n(None, leading)
                .chain(row.iter().map(convert_cell))
                .collect::<Vec<Cell>>()
        })
        .filter(|row| row.iter().any(Option::is_some))
        .collect();
    if rows.is_empty() {
        return Err(IngestError::EmptyTable {
            table: name.to_string(),
        });
    }
    let header = rows.remove(0);
    Ok(Table::new(name, header, rows))
}

/// Integral floats become integers and date-times become text, matching how
/// spreadsheets display them.
fn convert_cell(cell: &DataType) -> Cell {
    match cell {
        DataType::Empty | DataType::Error(_) => None,
        DataType::String(s) if s.trim().is_empty() => None,
        DataType::String(s) => Some(CellValue::Text(s.clone())),
        DataType::Int(v) => Some(CellValue::Integer(*v)),
        DataType::Float(v) => Some(float_cell(*v)),
        DataType::Bool(b) => Some(CellValue::Bool(*b)),
        DataType::DateTime(v) => {
            Some(datetime_text(cell).map_or(CellValue::Float(*v), CellValue::Text))
        }
        DataType::Duration(v) => {
            Some(duration_text(cell).map_or(CellValue::Float(*v), CellValue::Text))
        }
        DataType::DateTimeIso(s) | DataType::DurationIso(s) => Some(CellValue::Text(s.clone())),
    }
}

/// `2024-01-15` for whole days, `2024-01-15T08:30:00` otherwise.
fn datetime_text(cell: &DataType) -> Option<String> {
    let datetime = cell.as_datetime()?;
    let text = if datetime.num_seconds_from_midnight() == 0 {
        datetime.format("%Y-%m-%d").to_string()
    } else {
        datetime.format("%Y-%m-%dT%H:%M:%S").to_string()
    };
    Some(text)
}

/// Elapsed time as `H:MM:SS`; hours are not wrapped at 24.
fn duration_text(cell: &DataType) -> Option<String> {
    let seconds = cell.as_duration()?.num_seconds();
    let sign = if seconds < 0 { "-" } else { "" };
    let seconds = seconds.unsigned_abs();
    Some(format!(
        "{sign}{}:{:02}:{:02}",
        seconds / 3600,
        (seconds / 60) % 60,
        seconds % 60
    ))
}

fn float_cell(value: f64) -> CellValue {
    if value.fract() == 0.0 && value.abs() < MAX_EXACT_FLOAT {
        CellValue::Integer(value as i64)
    } else {
        CellValue::Float(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::ColumnSelector;

    #[test]
    fn converts_calamine_cells() {
        assert_eq!(convert_cell(&DataType::Empty), None);
        assert_eq!(convert_cell(&DataType::String("  ".into())), None);
        assert_eq!(convert_cell(&DataType::Float(12.0)), Some(CellValue::Integer(12)));
        assert_eq!(convert_cell(&DataType::Float(1.25)), Some(CellValue::Float(1.25)));
        assert_eq!(convert_cell(&DataType::Bool(true)), Some(CellValue::Bool(true)));
        assert_eq!(
            convert_cell(&DataType::String("CG 20 10".into())),
            Some(CellValue::from("CG 20 10"))
        );
    }

    #[test]
    fn date_cells_become_text() {
        // 45306 is 2024-01-15 in the 1900 date system.
        assert_eq!(
            convert_cell(&DataType::DateTime(45306.0)),
            Some(CellValue::from("2024-01-15"))
        );
        assert_eq!(
            convert_cell(&DataType::DateTime(45306.5)),
            Some(CellValue::from("2024-01-15T12:00:00"))
        );
        assert_eq!(
            convert_cell(&DataType::Duration(1.25)),
            Some(CellValue::from("30:00:00"))
        );
    }

    #[test]
    fn positions_follow_sheet_columns() {
        // Column A is empty; the header starts at B1.
        let mut range = Range::new((0, 1), (2, 2));
        range.set_value((0, 1), DataType::String("Code".into()));
        range.set_value((0, 2), DataType::String("Status".into()));
        range.set_value((1, 1), DataType::String("CG 20 10".into()));
        range.set_value((1, 2), DataType::String("Acceptable".into()));

        let table = range_table("CPL", &range).unwrap();

        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.find_column("code"), Some(1));
        let code_idx = table.resolve(&ColumnSelector::Position(2)).unwrap();
        assert_eq!(code_idx, 1);
        assert_eq!(
            Table::cell(&table.rows[0], code_idx),
            Some(&CellValue::from("CG 20 10"))
        );
        assert_eq!(table.header[0], None);
    }

    #[test]
    fn empty_range_is_an_empty_table() {
        let range: Range<DataType> = Range::empty();
        assert!(matches!(
            range_table("Blank", &range),
            Err(IngestError::EmptyTable { .. })
        ));
    }

    #[test]
    fn missing_workbook_is_reported() {
        let result = read_workbook_table(Path::new("/nonexistent/index.xlsx"), None);
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }
}
