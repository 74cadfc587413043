//! Operations merge: `ongoing` + `completed` flags into one `operations` value.

use coi_model::{CellValue, Properties, RecordCollection};

pub const ONGOING_KEY: &str = "ongoing";
pub const COMPLETED_KEY: &str = "completed";
pub const OPERATIONS_KEY: &str = "operations";

/// Which operations a form covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operations {
    None,
    Ongoing,
    Completed,
    Both,
}

impl Operations {
    pub fn from_flags(ongoing: bool, completed: bool) -> Self {
        match (ongoing, completed) {
            (true, true) => Self::Both,
            (true, false) => Self::Ongoing,
            (false, true) => Self::Completed,
            (false, false) => Self::None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Ongoing => "ongoing",
            Self::Completed => "completed",
            Self::Both => "both",
        }
    }
}

/// Records merged per derived value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OperationsStats {
    pub none: usize,
    pub ongoing: usize,
    pub completed: usize,
    pub both: usize,
}

impl OperationsStats {
    pub fn updated(&self) -> usize {
        self.none + self.ongoing + self.completed + self.both
    }

    fn record(&mut self, operations: Operations) {
        match operations {
            Operations::None => self.none += 1,
            Operations::Ongoing => self.ongoing += 1,
            Operations::Completed => self.completed += 1,
            Operations::Both => self.both += 1,
        }
    }
}

/// Replace `ongoing`/`completed` with `operations` on every record.
///
/// `operations` takes the position of `ongoing` (or of `completed` when
/// `ongoing` is absent). Records with neither flag, or already merged, are
/// left alone, so the pass can be re-run safely.
pub fn merge_operations(collection: &mut RecordCollection) -> OperationsStats {
    let mut stats = OperationsStats::default();
    for (uid, record) in collection.iter_mut() {
        if let Some(operations) = merge_properties(&mut record.properties) {
            tracing::trace!(uid = %uid, operations = operations.as_str(), "operations merged");
            stats.record(operations);
        }
    }
    stats
}

fn merge_properties(properties: &mut Properties) -> Option<Operations> {
    if properties.contains_key(OPERATIONS_KEY) {
        return None;
    }
    let position = properties
        .get_index_of(ONGOING_KEY)
        .or_else(|| properties.get_index_of(COMPLETED_KEY))?;
    let flag = |key: &str| properties.get(key).is_some_and(CellValue::is_truthy);
    let operations = Operations::from_flags(flag(ONGOING_KEY), flag(COMPLETED_KEY));

    properties.shift_insert(
        position,
        OPERATIONS_KEY.to_string(),
        CellValue::from(operations.as_str()),
    );
    properties.shift_remove(ONGOING_KEY);
    properties.shift_remove(COMPLETED_KEY);
    Some(operations)
}
