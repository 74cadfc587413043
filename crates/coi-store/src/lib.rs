//! Persistent JSON storage for endorsement index record collections.
//!
//! A store is one JSON object keyed by uid, each value a record with the
//! field order `code, category?, label, properties, restrictions`.
//!
//! # Features
//!
//! - **Atomic writes** (temp file + rename) so an interrupted save never
//!   truncates a store
//! - **Deterministic naming** of stores per (source, sheet) batch
//! - **Discovery** of stores in a directory with record counts

mod error;
mod io;
mod listing;
mod naming;

pub use error::{Result, StoreError};
pub use io::{load_collection, load_json, save_collection, save_json};
pub use listing::{StoreSummary, list_stores};
pub use naming::{AM_BEST_FILE_NAME, batch_file_name};
