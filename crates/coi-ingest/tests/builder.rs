//! Record builder behavior over in-memory tables.

use coi_ingest::{BuildOptions, Cell, Table, build_collection};
use coi_model::CellValue;

fn text(value: &str) -> Cell {
    Some(CellValue::from(value))
}

fn flag(value: bool) -> Cell {
    Some(CellValue::Bool(value))
}

#[test]
fn duplicate_codes_get_suffixed_uids() {
    let table = Table::new(
        "Test Sheet",
        vec![text("CODE"), text("LABEL")],
        vec![
            vec![text("A-1"), text("Blanket AI Endorsement, 10 days notice")],
            vec![text("A-1"), text("Another")],
        ],
    );
    let options = BuildOptions::default().with_category(Some("Test"));
    let outcome = build_collection(&table, &options).expect("build");

    assert_eq!(outcome.created, 2);
    assert_eq!(outcome.skipped, 0);
    let uids: Vec<&String> = outcome.collection.uids().collect();
    assert_eq!(uids, ["a1", "a1d2"]);

    let first = outcome.collection.get("a1").expect("first record");
    assert!(first.label.contains("Blanket AI Endorsement, 10 days notice"));
    assert_eq!(first.code, CellValue::from("A-1"));
    assert_eq!(first.category.as_deref(), Some("Test"));
    assert!(first.properties.is_empty());
    assert!(first.restrictions.is_empty());

    let second = outcome.collection.get("a1d2").expect("second record");
    assert_eq!(second.label, "Another");
}

#[test]
fn properties_follow_header_order_and_skip_nulls() {
    let table = Table::new(
        "Index",
        vec![
            text("Ongoing"),
            text("Code"),
            text("Completed"),
            text("Label"),
            None,
            text("Form Type"),
        ],
        vec![vec![
            flag(true),
            text("CG 20 10"),
            None,
            text("Additional Insured - Ongoing Operations"),
            text("orphan"),
            text("ISO"),
        ]],
    );
    let outcome = build_collection(&table, &BuildOptions::default()).expect("build");
    let record = outcome.collection.get("cg2010").expect("record");

    let keys: Vec<&String> = record.properties.keys().collect();
    assert_eq!(keys, ["ongoing", "form type"]);
    assert_eq!(record.category, None);
}

#[test]
fn cpl_column_becomes_a_restriction() {
    let table = Table::new(
        "Index",
        vec![text("code"), text("label"), text("CPL"), text("blanket")],
        vec![
            vec![text("X1"), text("Restricted form"), flag(true), flag(false)],
            vec![text("X2"), text("Allowed form"), None, flag(true)],
            vec![text("X3"), text("Zero means allowed"), Some(CellValue::Integer(0)), None],
        ],
    );
    let outcome = build_collection(&table, &BuildOptions::default()).expect("build");

    let x1 = outcome.collection.get("x1").unwrap();
    assert_eq!(x1.cpl_restricted(), Some(true));
    assert!(!x1.properties.contains_key("cpl"));
    assert_eq!(x1.property("blanket"), Some(&CellValue::Bool(false)));

    assert_eq!(outcome.collection.get("x2").unwrap().cpl_restricted(), Some(false));
    assert_eq!(outcome.collection.get("x3").unwrap().cpl_restricted(), Some(false));
}

#[test]
fn rows_without_code_or_label_are_counted_as_skipped() {
    let table = Table::new(
        "Index",
        vec![text("code"), text("label")],
        vec![
            vec![None, text("No code")],
            vec![text("B"), None],
            vec![text("C")],
            vec![Some(CellValue::Integer(2010)), text("Numeric code")],
        ],
    );
    let outcome = build_collection(&table, &BuildOptions::default()).expect("build");
    assert_eq!(outcome.created, 1);
    assert_eq!(outcome.skipped, 3);
    let record = outcome.collection.get("2010").expect("numeric code record");
    assert_eq!(record.code, CellValue::Integer(2010));
}

#[test]
fn suffix_never_overwrites_a_plain_code() {
    let table = Table::new(
        "Index",
        vec![text("code"), text("label")],
        vec![
            vec![text("A1"), text("one")],
            vec![text("A1D2"), text("looks like a suffix")],
            vec![text("A-1"), text("second a1")],
        ],
    );
    let outcome = build_collection(&table, &BuildOptions::default()).expect("build");
    let uids: Vec<&String> = outcome.collection.uids().collect();
    assert_eq!(uids, ["a1", "a1d2", "a1d3"]);
    assert_eq!(outcome.collection.get("a1d2").unwrap().label, "looks like a suffix");
}

#[test]
fn custom_cpl_header_is_recognized() {
    let table = Table::new(
        "Index",
        vec![text("code"), text("label"), text("restricted")],
        vec![vec![text("Z"), text("z"), flag(true)]],
    );
    let options = BuildOptions::default().with_cpl_column("Restricted");
    let outcome = build_collection(&table, &options).expect("build");
    let record = outcome.collection.get("z").unwrap();
    assert_eq!(record.cpl_restricted(), Some(true));
    assert!(record.properties.is_empty());
}
