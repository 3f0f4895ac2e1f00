//! Loading state from configuration files

use crate::*;
use std::io::Write;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

const CONFIG: &str = r#"{
    "output_filename": "job1.nc",
    "units": "G20",
    "output_line_numbers": true,
    "line_increment": 5,
    "chipbreaking_amount": 0.1
}"#;

#[test]
fn test_load_path_mapping() {
    init_tracing();
    let file = write_config(CONFIG);
    let state = PostState::loader().load_path(file.path()).unwrap();

    assert_eq!(state.shape(), Shape::Mapping);
    assert_eq!(state.get_text("output_filename").unwrap(), "job1.nc");
    assert!(state.has("line_increment").unwrap());
    assert!(!state.has("modal").unwrap());
    assert_eq!(state.explicit_fields().len(), 5);
}

#[test]
fn test_load_path_record() {
    init_tracing();
    let file = write_config(CONFIG);
    let state = StateLoader::new()
        .representation(Representation::Record)
        .load_path(file.path())
        .unwrap();

    match &state {
        PostState::Record(r) => {
            assert_eq!(r.units, Units::Imperial);
            assert_eq!(r.line_increment, 5);
            assert_eq!(r.chipbreaking_amount, 0.1);
            assert!(!r.modal);
        }
        _ => panic!("Expected Record"),
    }
}

#[test]
fn test_both_representations_read_alike() {
    init_tracing();
    let mapping = PostState::loader().mapping().load_str(CONFIG).unwrap();
    let record = PostState::loader().record().load_str(CONFIG).unwrap();
    for field in Field::ALL {
        assert_eq!(
            mapping.get(field.name(), None).unwrap(),
            record.get(field.name(), None).unwrap()
        );
    }
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = PostState::loader()
        .load_path(dir.path().join("absent.json"))
        .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_strict_record_load_rejects_typo() {
    let file = write_config(r#"{"output_filname": "job1.nc"}"#);
    let err = PostState::loader()
        .record()
        .strict()
        .load_path(file.path())
        .unwrap_err();
    assert!(err.is_unknown_field());
}

#[test]
fn test_lenient_record_load_drops_typo() {
    init_tracing();
    let file = write_config(r#"{"output_filname": "job1.nc"}"#);
    let state = PostState::loader().record().load_path(file.path()).unwrap();
    assert_eq!(state.get_text("output_filename").unwrap(), "");
}

#[test]
fn test_load_sequence_document_is_unsupported_shape() {
    let file = write_config(r#"[["units", "G20"]]"#);
    let err = PostState::loader().load_path(file.path()).unwrap_err();
    assert!(err.is_unsupported_shape());
    assert_eq!(err.to_string(), "unsupported state shape: Array");
}

#[test]
fn test_load_value_directly() {
    let value = Value::from(serde_json::json!({"use_tlo": false}));
    let state = StateLoader::new().load_value(value).unwrap();
    assert!(!state.get_bool("use_tlo").unwrap());
}

#[test]
fn test_serde_and_record_loader_agree() {
    init_tracing();
    let inputs = [
        r#"{"chipbreaking_amount": 1}"#,
        r#"{"chipbreaking_amount": 1.0}"#,
        r#"{"spindle_wait": 2}"#,
        r#"{"units": "mm"}"#,
        r#"{"modal": "yes"}"#,
        CONFIG,
        "[1, 2, 3]",
    ];
    for json in inputs {
        let via_serde = serde_json::from_str::<PostRecord>(json);
        let via_loader = PostState::loader().record().load_str(json);
        assert_eq!(
            via_serde.is_ok(),
            via_loader.is_ok(),
            "serde and loader disagree on {}",
            json
        );
        if let (Ok(record), Ok(state)) = (via_serde, via_loader) {
            assert_eq!(PostState::Record(record), state, "{}", json);
        }
    }
}
