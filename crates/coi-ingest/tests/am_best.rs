//! AM Best index extraction.

use coi_ingest::{Cell, IngestError, Table, build_am_best_index};
use coi_model::CellValue;

fn text(value: &str) -> Cell {
    Some(CellValue::from(value))
}

fn header() -> Vec<Cell> {
    vec![
        text("AM Best #"),
        text("Business Name"),
        text("NAIC / AIIN"),
        text("Rating"),
        text("Size Category"),
        text("Original Business Name"),
    ]
}

#[test]
fn rows_are_keyed_by_am_best_number() {
    let table = Table::new(
        "AMB",
        header(),
        vec![
            vec![
                Some(CellValue::Integer(12345)),
                text("Acme Mutual"),
                Some(CellValue::Integer(99999)),
                text("A+"),
                text("XV"),
                text("Acme Mutual Insurance Co"),
            ],
            vec![None, text("No number")],
            vec![text("678"), text("Beta Re"), None, text("A"), None, None],
        ],
    );

    let index = build_am_best_index(&table).expect("index");
    assert_eq!(index.len(), 2);

    let acme = index.get(&12345).expect("acme");
    assert_eq!(acme.name, text("Acme Mutual"));
    assert_eq!(acme.rating, text("A+"));

    let beta = index.get(&678).expect("beta");
    assert_eq!(beta.naic, None);

    let json = serde_json::to_value(&index).expect("serialize");
    assert_eq!(json["678"]["am"], 678);
    assert!(json["678"]["size"].is_null());
}

#[test]
fn missing_columns_are_listed_together() {
    let table = Table::new("AMB", vec![text("AM Best #"), text("Rating")], vec![]);
    let error = build_am_best_index(&table).unwrap_err();
    match error {
        IngestError::MissingColumn { column, .. } => {
            assert_eq!(
                column,
                "business name, naic / aiin, size category, original business name"
            );
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn non_numeric_number_is_a_parse_error() {
    let table = Table::new(
        "AMB",
        header(),
        vec![vec![text("N/A"), text("Bad"), None, None, None, None]],
    );
    let error = build_am_best_index(&table).unwrap_err();
    assert!(matches!(error, IngestError::InvalidValue { row: 2, .. }));
}
