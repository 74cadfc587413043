//! Named passes and the runner used by the command line.

use std::fmt;

use tracing::info;

use coi_model::RecordCollection;

use crate::aggregate::classify_aggregate;
use crate::blanket::fix_blanket;
use crate::cleanup::clear_none;
use crate::notice::extract_notice;
use crate::operations::merge_operations;

/// One enrichment pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pass {
    Operations,
    Aggregate,
    Blanket,
    Notice,
    ClearNone,
}

impl Pass {
    /// Every pass, in the order `--all` runs them.
    pub const ALL: [Pass; 5] = [
        Pass::Operations,
        Pass::Aggregate,
        Pass::Blanket,
        Pass::Notice,
        Pass::ClearNone,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Operations => "operations",
            Self::Aggregate => "aggregate",
            Self::Blanket => "blanket",
            Self::Notice => "noc",
            Self::ClearNone => "clear-none",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Operations => "merge ongoing/completed into operations",
            Self::Aggregate => "classify project/location aggregates",
            Self::Blanket => "set blanket flag from label",
            Self::Notice => "extract notice of cancellation days",
            Self::ClearNone => "remove \"none\" properties",
        }
    }
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassReport {
    pub pass: Pass,
    /// Records changed, or properties removed for [`Pass::ClearNone`].
    pub updated: usize,
    /// Per-value counts for classifying passes; empty otherwise.
    pub breakdown: Vec<(&'static str, usize)>,
}

impl PassReport {
    fn counted(pass: Pass, updated: usize) -> Self {
        Self {
            pass,
            updated,
            breakdown: Vec::new(),
        }
    }
}

/// Run a single pass over the whole collection.
pub fn run_pass(collection: &mut RecordCollection, pass: Pass) -> PassReport {
    let _span = tracing::info_span!("pass", pass = pass.name()).entered();
    let report = match pass {
        Pass::Operations => {
            let stats = merge_operations(collection);
            PassReport {
                pass,
                updated: stats.updated(),
                breakdown: vec![
                    ("both", stats.both),
                    ("ongoing", stats.ongoing),
                    ("completed", stats.completed),
                    ("none", stats.none),
                ],
            }
        }
        Pass::Aggregate => {
            let stats = classify_aggregate(collection);
            PassReport {
                pass,
                updated: stats.updated(),
                breakdown: vec![
                    ("both", stats.both),
                    ("project", stats.project),
                    ("location", stats.location),
                    ("none", stats.none),
                ],
            }
        }
        Pass::Blanket => PassReport::counted(pass, fix_blanket(collection)),
        Pass::Notice => {
            let stats = extract_notice(collection);
            PassReport {
                pass,
                updated: stats.updated(),
                breakdown: vec![
                    ("days", stats.days),
                    ("invalid", stats.invalid),
                    ("none", stats.none),
                ],
            }
        }
        Pass::ClearNone => PassReport::counted(pass, clear_none(collection)),
    };
    info!(updated = report.updated, "pass complete");
    report
}

/// Run passes in the given order, each over the result of the previous one.
pub fn run_passes(collection: &mut RecordCollection, passes: &[Pass]) -> Vec<PassReport> {
    passes
        .iter()
        .map(|&pass| run_pass(collection, pass))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use coi_model::{CellValue, Record};

    #[test]
    fn canonical_order_ends_with_cleanup() {
        assert_eq!(Pass::ALL.first(), Some(&Pass::Operations));
        assert_eq!(Pass::ALL.last(), Some(&Pass::ClearNone));
        assert_eq!(Pass::Notice.to_string(), "noc");
    }

    #[test]
    fn aggregate_report_breaks_down_by_value() {
        let mut collection = RecordCollection::new();
        collection.insert("a", Record::new(CellValue::from("A"), "Per Project"));
        collection.insert("b", Record::new(CellValue::from("B"), "Plain"));
        let report = run_pass(&mut collection, Pass::Aggregate);
        assert_eq!(report.updated, 2);
        assert!(report.breakdown.contains(&("project", 1)));
        assert!(report.breakdown.contains(&("none", 1)));
    }
}
