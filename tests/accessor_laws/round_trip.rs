//! Set-then-get laws
//!
//! A value that was just set reads back unchanged, in both forms.

use crate::*;
use proptest::prelude::*;

#[test]
fn test_output_filename_scenario() {
    test_across_forms(|label, mut state| {
        postproc_state::accessor::set(&mut state, "output_filename", "job1.nc").unwrap();
        assert_eq!(
            postproc_state::accessor::get(&state, "output_filename", None).unwrap(),
            Value::from("job1.nc"),
            "{} form",
            label
        );
        assert!(postproc_state::accessor::has(&state, "output_filename").unwrap());
    });
}

#[test]
fn test_every_field_round_trips() {
    test_across_forms(|label, mut state| {
        for field in Field::ALL {
            let value = sample_value(field);
            state.set(field.name(), value.clone()).unwrap();
            assert_eq!(
                state.get(field.name(), None).unwrap(),
                value,
                "{} form, field {}",
                label,
                field
            );
            assert!(state.has(field.name()).unwrap());
        }
    });
}

#[test]
fn test_last_write_wins() {
    test_across_forms(|_, mut state| {
        state.set("axis_precision", 2).unwrap();
        state.set("axis_precision", 5).unwrap();
        assert_eq!(state.get_int("axis_precision").unwrap(), 5);
    });
}

#[test]
fn test_reset_then_get_is_default() {
    test_across_forms(|label, mut state| {
        for field in Field::ALL {
            state.set(field.name(), sample_value(field)).unwrap();
            state.reset(field.name()).unwrap();
            assert_eq!(
                state.get(field.name(), None).unwrap(),
                field.default_value(),
                "{} form, field {}",
                label,
                field
            );
        }
    });
}

fn text_field() -> impl Strategy<Value = Field> {
    prop::sample::select(
        Field::ALL
            .iter()
            .copied()
            .filter(|f| f.kind() == FieldKind::Text)
            .collect::<Vec<_>>(),
    )
}

fn int_field() -> impl Strategy<Value = Field> {
    prop::sample::select(
        Field::ALL
            .iter()
            .copied()
            .filter(|f| f.kind() == FieldKind::Int)
            .collect::<Vec<_>>(),
    )
}

proptest! {
    #[test]
    fn prop_text_round_trip(field in text_field(), text in ".*") {
        for (_, mut state) in fresh_states() {
            state.set(field.name(), text.as_str()).unwrap();
            prop_assert_eq!(state.get_text(field.name()).unwrap(), text.clone());
        }
    }

    #[test]
    fn prop_int_round_trip(field in int_field(), n in any::<i64>()) {
        for (_, mut state) in fresh_states() {
            state.set(field.name(), n).unwrap();
            prop_assert_eq!(state.get_int(field.name()).unwrap(), n);
        }
    }

    #[test]
    fn prop_finite_float_round_trip(x in -1.0e6f64..1.0e6) {
        for (_, mut state) in fresh_states() {
            state.set("chipbreaking_amount", x).unwrap();
            prop_assert_eq!(state.get_float("chipbreaking_amount").unwrap(), x);
        }
    }
}
