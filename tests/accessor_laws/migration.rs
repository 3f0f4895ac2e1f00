//! Mapping-to-record migration
//!
//! Converting between forms never changes what `get` returns.

use crate::*;
use proptest::prelude::*;

fn assert_same_reads(a: &PostState, b: &PostState) {
    for field in Field::ALL {
        assert_eq!(
            a.get_field(field, None),
            b.get_field(field, None),
            "field {} differs after migration",
            field
        );
    }
}

#[test]
fn test_empty_mapping_migrates_to_default_record() {
    init_tracing();
    assert_eq!(PostState::mapping().into_record(), PostRecord::default());
}

#[test]
fn test_migrated_record_keeps_explicit_values() {
    init_tracing();
    let mut mapping = PostState::mapping();
    mapping.set("units", "G20").unwrap();
    mapping.set("output_line_numbers", true).unwrap();
    mapping.set("line_number_start", 10).unwrap();

    let record = mapping.clone().into_record();
    assert_eq!(record.units, Units::Imperial);
    assert!(record.output_line_numbers);
    assert_eq!(record.line_number_start, 10);
    assert_same_reads(&mapping, &PostState::from(record));
}

#[test]
fn test_record_to_mapping_and_back() {
    init_tracing();
    let mut record = PostState::record();
    record.set("machine_name", "router-2").unwrap();
    record.set("enable_coolant", true).unwrap();

    let mapping = PostState::from(record.clone().into_mapping());
    assert_same_reads(&record, &mapping);
    for field in Field::ALL {
        assert!(mapping.has_field(field));
    }
    assert_eq!(mapping.into_record(), record.into_record());
}

#[test]
fn test_explicit_fields_lost_on_migration() {
    init_tracing();
    let mut mapping = PostState::mapping();
    mapping.set("modal", true).unwrap();
    assert_eq!(mapping.explicit_fields(), vec![Field::Modal]);

    let record = PostState::from(mapping.into_record());
    assert_eq!(record.explicit_fields().len(), Field::COUNT);
}

proptest! {
    #[test]
    fn prop_migration_preserves_reads(mask in prop::collection::vec(any::<bool>(), Field::COUNT)) {
        let mut mapping = PostState::mapping();
        for (field, set) in Field::ALL.iter().zip(mask.iter()) {
            if *set {
                mapping.set_field(*field, sample_value(*field)).unwrap();
            }
        }
        let record = PostState::from(mapping.clone().into_record());
        for field in Field::ALL {
            prop_assert_eq!(mapping.get_field(field, None), record.get_field(field, None));
        }
    }
}
