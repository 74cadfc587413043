//! Property tests for uid derivation.

use proptest::prelude::*;

use coi_model::{UidAllocator, normalize_code};

proptest! {
    #[test]
    fn normalized_codes_are_lowercase_alphanumeric(raw in "\\PC{0,40}") {
        let key = normalize_code(&raw);
        prop_assert!(key.chars().all(|ch| ch.is_ascii_digit() || ch.is_ascii_lowercase()));
        prop_assert!(key.len() <= raw.len());
    }

    #[test]
    fn case_and_punctuation_do_not_change_keys(raw in "[A-Za-z0-9]{1,20}") {
        let decorated = format!("-{}.", raw.to_uppercase());
        prop_assert_eq!(normalize_code(&decorated), normalize_code(&raw));
    }

    #[test]
    fn nth_occurrence_gets_nth_suffix(code in "[a-z]{1,8}", repeats in 1usize..6) {
        let mut uids = UidAllocator::new();
        prop_assert_eq!(uids.assign(&code), code.clone());
        for n in 2..=repeats + 1 {
            prop_assert_eq!(uids.assign(&code), format!("{code}d{n}"));
        }
    }
}

#[test]
fn colliding_codes_resolve_in_order_of_appearance() {
    let mut uids = UidAllocator::new();
    let first = uids.assign(&normalize_code("A-1"));
    let second = uids.assign(&normalize_code("a.1"));
    assert_eq!(first, "a1");
    assert_eq!(second, "a1d2");
}
