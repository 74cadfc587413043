//! File I/O operations for record stores.
//!
//! This module handles:
//! - Saving stores with atomic writes
//! - Loading stores with schema validation

mod load;
mod save;

pub use load::{load_collection, load_json};
pub use save::{save_collection, save_json};
