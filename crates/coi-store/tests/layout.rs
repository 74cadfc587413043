//! On-disk layout of a saved record store.

use std::fs;

use coi_model::{CellValue, Record, RecordCollection};
use coi_store::{load_collection, save_collection};

#[test]
fn saved_store_layout_is_stable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("index_gl.json");

    let mut blanket = Record::new(CellValue::from("A-1"), "Blanket AI, 30 days")
        .with_category(Some("GL".to_string()))
        .with_property("operations", "ongoing")
        .with_property("blanket", true)
        .with_property("noc", "30");
    blanket.restrictions.insert("cpl".to_string(), false);

    let mut collection = RecordCollection::new();
    collection.insert("a1", blanket);
    collection.insert("7", Record::new(CellValue::Integer(7), "Numeric"));

    save_collection(&collection, &path).unwrap();
    let text = fs::read_to_string(&path).unwrap();

    insta::assert_snapshot!(text.trim_end(), @r#"
    {
      "a1": {
        "code": "A-1",
        "category": "GL",
        "label": "Blanket AI, 30 days",
        "properties": {
          "operations": "ongoing",
          "blanket": true,
          "noc": "30"
        },
        "restrictions": {
          "cpl": false
        }
      },
      "7": {
        "code": 7,
        "label": "Numeric",
        "properties": {},
        "restrictions": {}
      }
    }
    "#);

    assert_eq!(load_collection(&path).unwrap(), collection);
}
