//! Tabular sources: CSV files and spreadsheet workbooks.

mod csv;
mod workbook;

use std::path::Path;

pub use self::csv::{infer_cell, read_csv_table};
pub use self::workbook::{list_workbook_sheets, read_workbook_table};

use crate::error::{IngestError, Result};
use crate::table::Table;

/// Source format, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Csv,
    Workbook,
}

impl SourceKind {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("xlsx" | "xlsm" | "xlsb" | "xls" | "ods") => Ok(Self::Workbook),
            _ => Err(IngestError::UnsupportedSource {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Reads one table from `path`.
///
/// A CSV file is its own single sheet, so `sheet` is ignored for CSV
/// sources; a name other than the file stem is reported.
pub fn read_table(path: &Path, sheet: Option<&str>) -> Result<Table> {
    match SourceKind::from_path(path)? {
        SourceKind::Csv => {
            if let Some(sheet) = sheet.filter(|sheet| *sheet != file_stem(path)) {
                tracing::warn!(path = %path.display(), sheet, "sheet ignored for CSV source");
            }
            read_csv_table(path)
        }
        SourceKind::Workbook => read_workbook_table(path, sheet),
    }
}

/// Sheet names of a source; a CSV file has a single sheet named after its stem.
pub fn list_sheets(path: &Path) -> Result<Vec<String>> {
    match SourceKind::from_path(path)? {
        SourceKind::Csv => Ok(vec![file_stem(path)]),
        SourceKind::Workbook => list_workbook_sheets(path),
    }
}

pub(crate) fn file_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("source")
        .to_string()
}
