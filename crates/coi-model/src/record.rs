//! Canonical record schema and the keyed record collection.

use indexmap::IndexMap;
use indexmap::map::{Iter, IterMut, Keys, ValuesMut};
use serde::{Deserialize, Serialize};

use crate::value::CellValue;

/// Header-name keyed properties in source column order.
pub type Properties = IndexMap<String, CellValue>;

/// Restriction flags, e.g. `cpl`.
pub type Restrictions = IndexMap<String, bool>;

/// Restriction key written by the CPL column and the CPL merge.
pub const CPL_RESTRICTION: &str = "cpl";

/// One normalized row.
///
/// Field order is the persisted order: `code, category?, label, properties, restrictions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Identifier text exactly as read from the source.
    pub code: CellValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub label: String,
    #[serde(default)]
    pub properties: Properties,
    #[serde(default)]
    pub restrictions: Restrictions,
}

impl Record {
    pub fn new(code: CellValue, label: impl Into<String>) -> Self {
        Self {
            code,
            category: None,
            label: label.into(),
            properties: Properties::new(),
            restrictions: Restrictions::new(),
        }
    }

    #[must_use]
    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn property(&self, key: &str) -> Option<&CellValue> {
        self.properties.get(key)
    }

    /// Lowercased label used by every text classification rule.
    pub fn label_lower(&self) -> String {
        self.label.to_lowercase()
    }

    pub fn cpl_restricted(&self) -> Option<bool> {
        self.restrictions.get(CPL_RESTRICTION).copied()
    }
}

/// Records keyed by uid, in input row order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordCollection {
    records: IndexMap<String, Record>,
}

impl RecordCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, uid: &str) -> bool {
        self.records.contains_key(uid)
    }

    pub fn get(&self, uid: &str) -> Option<&Record> {
        self.records.get(uid)
    }

    pub fn get_mut(&mut self, uid: &str) -> Option<&mut Record> {
        self.records.get_mut(uid)
    }

    /// Inserts a record, returning the record previously stored under `uid`.
    pub fn insert(&mut self, uid: impl Into<String>, record: Record) -> Option<Record> {
        self.records.insert(uid.into(), record)
    }

    pub fn uids(&self) -> Keys<'_, String, Record> {
        self.records.keys()
    }

    pub fn iter(&self) -> Iter<'_, String, Record> {
        self.records.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, String, Record> {
        self.records.iter_mut()
    }

    pub fn records_mut(&mut self) -> ValuesMut<'_, String, Record> {
        self.records.values_mut()
    }
}

impl<'a> IntoIterator for &'a RecordCollection {
    type Item = (&'a String, &'a Record);
    type IntoIter = Iter<'a, String, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<(String, Record)> for RecordCollection {
    fn from_iter<I: IntoIterator<Item = (String, Record)>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_in_schema_order() {
        let record = Record::new(CellValue::from("A-1"), "Blanket AI")
            .with_category(Some("GL".to_string()))
            .with_property("blanket", false);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"code":"A-1","category":"GL","label":"Blanket AI","properties":{"blanket":false},"restrictions":{}}"#
        );
    }

    #[test]
    fn absent_category_is_not_serialized() {
        let record = Record::new(CellValue::Integer(10), "Plain");
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("category"));
    }

    #[test]
    fn missing_maps_load_as_empty() {
        let record: Record = serde_json::from_str(r#"{"code":"X","label":"L"}"#).unwrap();
        assert!(record.properties.is_empty());
        assert!(record.restrictions.is_empty());
        assert_eq!(record.cpl_restricted(), None);
    }

    #[test]
    fn missing_label_is_rejected() {
        let result: Result<Record, _> = serde_json::from_str(r#"{"code":"X"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn collection_preserves_insertion_order() {
        let mut collection = RecordCollection::new();
        collection.insert("b", Record::new(CellValue::from("B"), "second"));
        collection.insert("a", Record::new(CellValue::from("A"), "first"));
        let uids: Vec<&String> = collection.uids().collect();
        assert_eq!(uids, ["b", "a"]);

        let json = serde_json::to_string(&collection).unwrap();
        assert!(json.find("\"b\"").unwrap() < json.find("\"a\"").unwrap());
    }
}
