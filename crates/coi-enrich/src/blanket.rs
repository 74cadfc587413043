//! Blanket additional insured correction.

use coi_model::{CellValue, RecordCollection};

pub const BLANKET_KEY: &str = "blanket";

/// Label phrases that mark a blanket additional insured form.
pub const BLANKET_PHRASES: [&str; 2] = ["blanket additional", "blanket ai"];

/// Whether a lowercased label names a blanket additional insured form.
pub fn mentions_blanket(label: &str) -> bool {
    BLANKET_PHRASES.iter().any(|phrase| label.contains(phrase))
}

/// Set `properties.blanket` to true where the label says blanket but the
/// flag is falsy. Only records that already carry the flag are touched.
pub fn fix_blanket(collection: &mut RecordCollection) -> usize {
    let mut updated = 0;
    for (uid, record) in collection.iter_mut() {
        if !mentions_blanket(&record.label_lower()) {
            continue;
        }
        let Some(flag) = record.properties.get_mut(BLANKET_KEY) else {
            continue;
        };
        if flag.is_truthy() {
            continue;
        }
        *flag = CellValue::Bool(true);
        tracing::trace!(uid = %uid, "blanket flag corrected");
        updated += 1;
    }
    updated
}

#[cfg(test)]
mod tests {
    use super::*;
    use coi_model::Record;

    #[test]
    fn recognizes_both_phrasings() {
        assert!(mentions_blanket("blanket additional insured - owners"));
        assert!(mentions_blanket("gl blanket ai endorsement"));
        assert!(!mentions_blanket("additional insured - scheduled"));
        assert!(!mentions_blanket("blanket waiver of subrogation"));
    }

    #[test]
    fn falsy_flag_is_set() {
        let mut collection = RecordCollection::new();
        collection.insert(
            "x",
            Record::new(CellValue::from("X"), "Blanket Additional Insured")
                .with_property("blanket", false),
        );
        collection.insert(
            "y",
            Record::new(CellValue::from("Y"), "Blanket AI").with_property("blanket", 0_i64),
        );
        collection.insert(
            "z",
            Record::new(CellValue::from("Z"), "Blanket AI").with_property("blanket", true),
        );

        assert_eq!(fix_blanket(&mut collection), 2);
        for uid in ["x", "y", "z"] {
            assert_eq!(
                collection.get(uid).unwrap().property(BLANKET_KEY),
                Some(&CellValue::Bool(true))
            );
        }
    }

    #[test]
    fn missing_flag_is_not_created() {
        let mut collection = RecordCollection::new();
        collection.insert("x", Record::new(CellValue::from("X"), "Blanket AI"));
        assert_eq!(fix_blanket(&mut collection), 0);
        assert!(collection.get("x").unwrap().properties.is_empty());
    }
}
