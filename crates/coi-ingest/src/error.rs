//! Error types for tabular ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading sources or building records.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Source file not found.
    #[error("source file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File extension is neither CSV nor a workbook format.
    #[error("unsupported source format for {path}")]
    UnsupportedSource { path: PathBuf },

    // === Parsing Errors ===
    /// Failed to parse CSV.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Failed to open or read a workbook.
    #[error("failed to read workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },

    /// Source has no header row.
    #[error("table '{table}' is empty")]
    EmptyTable { table: String },

    // === Schema Errors ===
    /// Required column not found in the header row.
    #[error("required column '{column}' not found in table '{table}'")]
    MissingColumn { column: String, table: String },

    /// Cell value could not be coerced to the expected type.
    #[error("invalid {field} value '{value}' in table '{table}' at row {row}")]
    InvalidValue {
        field: String,
        value: String,
        table: String,
        row: usize,
    },

    // === Selection Errors ===
    /// Sheet name not present in the workbook.
    #[error("sheet '{sheet}' not found in {path}")]
    SheetNotFound { sheet: String, path: PathBuf },

    /// Column index beyond the table width.
    #[error("column {index} is out of range for table '{table}' ({width} columns)")]
    ColumnOutOfRange {
        index: usize,
        width: usize,
        table: String,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::MissingColumn {
            column: "label".to_string(),
            table: "Index".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "required column 'label' not found in table 'Index'"
        );
    }

    #[test]
    fn test_out_of_range_display() {
        let err = IngestError::ColumnOutOfRange {
            index: 9,
            width: 3,
            table: "CPL".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "column 9 is out of range for table 'CPL' (3 columns)"
        );
    }
}
