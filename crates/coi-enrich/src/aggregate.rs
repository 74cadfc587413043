//! Aggregate classification from label keywords.

use coi_model::{CellValue, RecordCollection};

pub const AGGREGATE_KEY: &str = "agg";

/// Aggregate limit scope named by a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregate {
    Both,
    Project,
    Location,
    None,
}

impl Aggregate {
    /// Classify a lowercased label.
    pub fn classify(label: &str) -> Self {
        match (label.contains("project"), label.contains("location")) {
            (true, true) => Self::Both,
            (true, false) => Self::Project,
            (false, true) => Self::Location,
            (false, false) => Self::None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Both => "both",
            Self::Project => "project",
            Self::Location => "location",
            Self::None => "none",
        }
    }
}

/// Records per classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregateStats {
    pub both: usize,
    pub project: usize,
    pub location: usize,
    pub none: usize,
}

impl AggregateStats {
    pub fn updated(&self) -> usize {
        self.both + self.project + self.location + self.none
    }
}

/// Set `properties.agg` on every record, overwriting earlier values.
pub fn classify_aggregate(collection: &mut RecordCollection) -> AggregateStats {
    let mut stats = AggregateStats::default();
    for record in collection.records_mut() {
        let aggregate = Aggregate::classify(&record.label_lower());
        record
            .properties
            .insert(AGGREGATE_KEY.to_string(), CellValue::from(aggregate.as_str()));
        match aggregate {
            Aggregate::Both => stats.both += 1,
            Aggregate::Project => stats.project += 1,
            Aggregate::Location => stats.location += 1,
            Aggregate::None => stats.none += 1,
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use coi_model::Record;

    #[test]
    fn keywords_decide_the_scope() {
        assert_eq!(Aggregate::classify("per project aggregate"), Aggregate::Project);
        assert_eq!(Aggregate::classify("per location"), Aggregate::Location);
        assert_eq!(Aggregate::classify("designated locations"), Aggregate::Location);
        assert_eq!(Aggregate::classify("waiver of subrogation"), Aggregate::None);
    }

    #[test]
    fn label_with_both_keywords_is_both() {
        let mut collection = RecordCollection::new();
        collection.insert(
            "agg",
            Record::new(CellValue::from("CG 25 03"), "Project or Location Aggregate"),
        );
        let stats = classify_aggregate(&mut collection);
        assert_eq!(stats.both, 1);
        assert_eq!(
            collection.get("agg").unwrap().property(AGGREGATE_KEY),
            Some(&CellValue::from("both"))
        );
    }

    #[test]
    fn existing_value_is_overwritten_in_place() {
        let mut collection = RecordCollection::new();
        collection.insert(
            "x",
            Record::new(CellValue::from("X"), "Per Project")
                .with_property("agg", "none")
                .with_property("blanket", true),
        );
        classify_aggregate(&mut collection);
        classify_aggregate(&mut collection);
        let record = collection.get("x").unwrap();
        let keys: Vec<&String> = record.properties.keys().collect();
        assert_eq!(keys, ["agg", "blanket"]);
        assert_eq!(record.property("agg"), Some(&CellValue::from("project")));
    }
}
