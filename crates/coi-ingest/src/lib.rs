//! Tabular ingestion for the endorsement index.
//!
//! This crate turns spreadsheet exports into [`coi_model::RecordCollection`]s
//! and merges secondary sources into existing collections.
//!
//! # Features
//!
//! - **Sources**: CSV files (typed by inference) and workbooks via calamine
//! - **Record Builder**: `code`/`label` rows to records with per-batch uids
//! - **CPL Merge**: restriction flags cross-referenced from a second sheet
//! - **AM Best Index**: carrier ratings keyed by AM Best number
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use coi_ingest::{BuildOptions, build_collection, read_table};
//!
//! let table = read_table(Path::new("Index.xlsx"), Some("Endorsements"))?;
//! let outcome = build_collection(&table, &BuildOptions::default().with_category(Some("GL")))?;
//! println!("{} records created", outcome.created);
//! ```

mod am_best;
mod builder;
mod cpl;
mod error;
mod source;
mod table;

// === Error Types ===
pub use error::{IngestError, Result};

// === Tables and Sources ===
pub use source::{SourceKind, infer_cell, list_sheets, read_csv_table, read_table};
pub use table::{Cell, ColumnSelector, Table};

// === Record Building ===
pub use builder::{
    BuildOptions, BuildOutcome, CODE_COLUMN, DEFAULT_CPL_COLUMN, LABEL_COLUMN, build_collection,
};

// === Merges ===
pub use am_best::{AM_BEST_COLUMNS, AmBestEntry, AmBestIndex, build_am_best_index};
pub use cpl::{ACCEPTABLE, CplMerge, is_restricted, merge_cpl};
