//! Data model for the endorsement index.
//!
//! A [`RecordCollection`] maps uids to [`Record`]s. Uids come from the raw
//! `code` text through [`normalize_code`] and, within one extraction batch,
//! [`UidAllocator`].

pub mod code;
pub mod error;
pub mod record;
pub mod value;

pub use code::{UidAllocator, normalize_code, normalized_key};
pub use error::{ModelError, Result};
pub use record::{CPL_RESTRICTION, Properties, Record, RecordCollection, Restrictions};
pub use value::CellValue;
