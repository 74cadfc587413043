//! In-memory tabular data handed over by a source.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use coi_model::CellValue;

use crate::error::{IngestError, Result};

/// A cell as read from a source; `None` is a null cell.
pub type Cell = Option<CellValue>;

/// One sheet: a header row plus data rows in the same column order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    /// Sheet or file name, used in errors and derived store names.
    pub name: String,
    pub header: Vec<Cell>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(name: impl Into<String>, header: Vec<Cell>, rows: Vec<Vec<Cell>>) -> Self {
        Self {
            name: name.into(),
            header,
            rows,
        }
    }

    /// Header names, trimmed and lowercased. Null or blank headers are `None`.
    pub fn column_names(&self) -> Vec<Option<String>> {
        self.header
            .iter()
            .map(|cell| {
                let name = cell.as_ref()?.to_text().trim().to_lowercase();
                (!name.is_empty()).then_some(name)
            })
            .collect()
    }

    /// Non-blank headers as written, with their 1-based positions.
    pub fn numbered_headers(&self) -> Vec<(usize, String)> {
        self.header
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| {
                let name = cell.as_ref()?.to_text().trim().to_string();
                (!name.is_empty()).then_some((index + 1, name))
            })
            .collect()
    }

    /// Position of the first header equal to `name`, ignoring case.
    pub fn find_column(&self, name: &str) -> Option<usize> {
        let wanted = name.trim().to_lowercase();
        self.column_names()
            .iter()
            .position(|column| column.as_deref() == Some(wanted.as_str()))
    }

    /// Position of a required header.
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.find_column(name)
            .ok_or_else(|| IngestError::MissingColumn {
                column: name.to_string(),
                table: self.name.clone(),
            })
    }

    /// Widest of the header and all data rows.
    pub fn width(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.header.len()))
            .max()
            .unwrap_or(0)
    }

    /// Resolve a column selector to a zero-based index.
    pub fn resolve(&self, selector: &ColumnSelector) -> Result<usize> {
        match selector {
            ColumnSelector::Name(name) => self.require_column(name),
            ColumnSelector::Position(position) => {
                let width = self.width();
                match position.checked_sub(1) {
                    Some(index) if index < width => Ok(index),
                    _ => Err(IngestError::ColumnOutOfRange {
                        index: *position,
                        width,
                        table: self.name.clone(),
                    }),
                }
            }
        }
    }

    /// Non-null cell at `index` of `row`.
    pub fn cell(row: &[Cell], index: usize) -> Option<&CellValue> {
        row.get(index).and_then(Option::as_ref)
    }

    /// Data rows holding at least one non-null cell.
    pub fn non_empty_rows(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| row.iter().any(Option::is_some))
            .count()
    }

    /// Columns holding a value in the header or any data row.
    pub fn non_empty_columns(&self) -> usize {
        (0..self.width())
            .filter(|&index| {
                Self::cell(&self.header, index).is_some()
                    || self.rows.iter().any(|row| Self::cell(row, index).is_some())
            })
            .count()
    }
}

/// A column picked by header name or 1-based position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSelector {
    Position(usize),
    Name(String),
}

impl FromStr for ColumnSelector {
    type Err = Infallible;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = value.trim();
        Ok(match trimmed.parse::<usize>() {
            Ok(position) => Self::Position(position),
            Err(_) => Self::Name(trimmed.to_string()),
        })
    }
}

impl fmt::Display for ColumnSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Position(position) => write!(f, "#{position}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> Cell {
        Some(CellValue::from(value))
    }

    fn sample() -> Table {
        Table::new(
            "Index",
            vec![text("Code"), None, text(" LABEL "), text("Ongoing")],
            vec![
                vec![text("A"), None, text("first"), Some(CellValue::Bool(true))],
                vec![None, None, None, None],
                vec![text("B"), None, text("second")],
            ],
        )
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let table = sample();
        assert_eq!(table.find_column("code"), Some(0));
        assert_eq!(table.find_column("label"), Some(2));
        assert_eq!(table.find_column("cpl"), None);
        assert!(matches!(
            table.require_column("cpl"),
            Err(IngestError::MissingColumn { .. })
        ));
    }

    #[test]
    fn blank_headers_have_no_name() {
        let names = sample().column_names();
        assert_eq!(names[1], None);
        assert_eq!(names[3].as_deref(), Some("ongoing"));
    }

    #[test]
    fn numbered_headers_use_one_based_positions() {
        assert_eq!(
            sample().numbered_headers(),
            [
                (1, "Code".to_string()),
                (3, "LABEL".to_string()),
                (4, "Ongoing".to_string()),
            ]
        );
    }

    #[test]
    fn selectors_resolve_by_name_or_position() {
        let table = sample();
        assert_eq!(table.resolve(&"label".parse().unwrap()).unwrap(), 2);
        assert_eq!(table.resolve(&"1".parse().unwrap()).unwrap(), 0);
        assert!(matches!(
            table.resolve(&ColumnSelector::Position(0)),
            Err(IngestError::ColumnOutOfRange { .. })
        ));
        assert!(matches!(
            table.resolve(&ColumnSelector::Position(5)),
            Err(IngestError::ColumnOutOfRange { width: 4, .. })
        ));
    }

    #[test]
    fn statistics_ignore_empty_rows_and_columns() {
        let table = sample();
        assert_eq!(table.non_empty_rows(), 2);
        assert_eq!(table.non_empty_columns(), 3);
    }
}
