//! Notice of cancellation period extraction.

use std::sync::LazyLock;

use regex::Regex;

use coi_model::{CellValue, RecordCollection};

pub const NOTICE_KEY: &str = "noc";

/// Marker stored when a label mentions days without a number.
pub const INVALID_NOTICE: &str = "invalid";
/// Marker stored when a label has no notice period.
pub const NO_NOTICE: &str = "none";

static NOTICE_DAYS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*days").expect("notice pattern is valid"));

/// Notice period parsed from a label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Digits of the first `N days` match.
    Days(String),
    Invalid,
    None,
}

impl Notice {
    /// Parse a label, ignoring case.
    pub fn parse(label: &str) -> Self {
        let label = label.to_lowercase();
        if let Some(days) = NOTICE_DAYS.captures(&label).and_then(|caps| caps.get(1)) {
            return Self::Days(days.as_str().to_string());
        }
        if label.contains("days") {
            Self::Invalid
        } else {
            Self::None
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Days(days) => days,
            Self::Invalid => INVALID_NOTICE,
            Self::None => NO_NOTICE,
        }
    }
}

/// Records per parse outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoticeStats {
    pub days: usize,
    pub invalid: usize,
    pub none: usize,
}

impl NoticeStats {
    pub fn updated(&self) -> usize {
        self.days + self.invalid + self.none
    }
}

/// Set `properties.noc` on every record, overwriting earlier values.
pub fn extract_notice(collection: &mut RecordCollection) -> NoticeStats {
    let mut stats = NoticeStats::default();
    for (uid, record) in collection.iter_mut() {
        let notice = Notice::parse(&record.label);
        match notice {
            Notice::Days(_) => stats.days += 1,
            Notice::Invalid => {
                tracing::debug!(uid = %uid, label = %record.label, "label mentions days without a number");
                stats.invalid += 1;
            }
            Notice::None => stats.none += 1,
        }
        record
            .properties
            .insert(NOTICE_KEY.to_string(), CellValue::from(notice.as_str()));
    }
    stats
}
