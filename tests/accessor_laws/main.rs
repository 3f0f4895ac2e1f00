//! Cross-form accessor laws
//!
//! Every test here runs against both forms of postprocessor state, so a
//! behavior that diverges between mapping and record fails loudly.

mod defaults;
mod loading;
mod migration;
mod round_trip;

pub use postproc_state::prelude::{
    Error, Field, FieldKind, PostRecord, PostState, Representation, Shape, StateError, StateLoader,
    Units, Value,
};

use std::sync::Once;

static TRACING: Once = Once::new();

/// Route `tracing` output through the test harness
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

/// Fresh state in each form
pub fn fresh_states() -> Vec<(&'static str, PostState)> {
    vec![
        ("mapping", PostState::mapping()),
        ("record", PostState::record()),
    ]
}

/// Run a test body once per form
pub fn test_across_forms<F>(mut body: F)
where
    F: FnMut(&'static str, PostState),
{
    init_tracing();
    for (label, state) in fresh_states() {
        body(label, state);
    }
}

/// A valid non-default value for each field kind
pub fn sample_value(field: Field) -> Value {
    match field.kind() {
        FieldKind::Bool => Value::Bool(!field.default_value().as_bool().unwrap_or(false)),
        FieldKind::Int => Value::Int(field.default_value().as_int().unwrap_or(0) + 7),
        FieldKind::Float => Value::Float(1.5),
        FieldKind::Text => Value::from(format!("{}-custom", field.name())),
        FieldKind::Choice(options) => Value::from(*options.last().unwrap_or(&"")),
    }
}
