//! Default equivalence
//!
//! An unset mapping field and a fresh record field read the same value.

use crate::*;

#[test]
fn test_defaults_agree_across_forms() {
    init_tracing();
    let mapping = PostState::mapping();
    let record = PostState::record();

    for field in Field::ALL {
        let from_mapping = mapping.get(field.name(), None).unwrap();
        let from_record = record.get(field.name(), None).unwrap();
        assert_eq!(from_mapping, field.default_value(), "mapping default for {}", field);
        assert_eq!(from_record, field.default_value(), "record default for {}", field);
    }
}

#[test]
fn test_output_filename_defaults_to_empty() {
    test_across_forms(|label, state| {
        assert_eq!(
            state.get("output_filename", None).unwrap(),
            Value::from(""),
            "{} form",
            label
        );
    });
}

#[test]
fn test_has_asymmetry_on_fresh_state() {
    test_across_forms(|label, state| {
        for field in Field::ALL {
            let has = state.has(field.name()).unwrap();
            match label {
                "mapping" => assert!(!has, "fresh mapping should not have {}", field),
                _ => assert!(has, "record should always have {}", field),
            }
        }
    });
}

#[test]
fn test_unset_mapping_field_ignores_other_keys() {
    init_tracing();
    let mut state = PostState::mapping();
    state.set("units", "G20").unwrap();
    state.set("modal", true).unwrap();

    assert_eq!(state.get("line_increment", None).unwrap(), Value::Int(10));
    assert_eq!(state.get("machine_name", None).unwrap(), Value::from("unknown machine"));
}
