//! Enrichment passes over a [`RecordCollection`](coi_model::RecordCollection).
//!
//! Each pass rewrites records in memory and reports what it changed; loading
//! and saving the store is left to the caller. Every pass except the
//! operations merge on a fresh collection is idempotent.

pub mod aggregate;
pub mod blanket;
pub mod cleanup;
pub mod notice;
pub mod operations;
pub mod pass;

pub use aggregate::{AGGREGATE_KEY, Aggregate, AggregateStats, classify_aggregate};
pub use blanket::{BLANKET_KEY, fix_blanket, mentions_blanket};
pub use cleanup::{NONE_SENTINEL, clear_none};
pub use notice::{NOTICE_KEY, Notice, NoticeStats, extract_notice};
pub use operations::{OPERATIONS_KEY, Operations, OperationsStats, merge_operations};
pub use pass::{Pass, PassReport, run_pass, run_passes};
