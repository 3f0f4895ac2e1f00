//! Postprocessor state and its accessors.
//!
//! [`PostState`] is the value handed to postprocessing code for one run. It
//! holds exactly one of the two forms, and every accessor resolves the field
//! name, then dispatches on the form with a `match`.
//!
//! # Example
//!
//! ```
//! use postproc_state::{PostState, Value};
//!
//! let mut state = PostState::mapping();
//! assert_eq!(state.get("output_filename", None)?, Value::from(""));
//!
//! state.set("output_filename", "job1.nc")?;
//! assert_eq!(state.get_text("output_filename")?, "job1.nc");
//! assert!(state.has("output_filename")?);
//! # Ok::<(), postproc_state::StateError>(())
//! ```
//!
//! # `has` across forms
//!
//! A mapping reports `has == true` only for keys that were explicitly stored.
//! A record always reports `true`, because every field is always present.
//! Callers that need "was this explicitly configured" must use the mapping
//! form; records keep no such marker.

use crate::forms::{FieldAccess, PostMapping, PostRecord, Shape};
use postproc_core::{Field, StateError, StateResult, Value};
use tracing::{debug, warn};

/// Postprocessor state in one of its two forms.
///
/// The form is fixed when the value is built; accessors never convert between
/// them. Use [`PostState::into_record`] to migrate explicitly.
#[derive(Debug, Clone, PartialEq)]
pub enum PostState {
    /// Loosely typed key/value form
    Mapping(PostMapping),
    /// Structured record form
    Record(PostRecord),
}

impl PostState {
    /// Empty mapping-form state (every field unset)
    pub fn mapping() -> Self {
        PostState::Mapping(PostMapping::new())
    }

    /// Record-form state holding every default
    pub fn record() -> Self {
        PostState::Record(PostRecord::default())
    }

    /// Detect the form of a loosely typed value.
    ///
    /// An `Object` becomes mapping form, with every known key checked against
    /// its kind and unknown keys carried. Anything else fails with
    /// `UnsupportedStateShape`.
    pub fn from_value(value: Value) -> StateResult<Self> {
        mapping_from_value(value, false).map(PostState::Mapping)
    }

    /// Which form this state is stored in
    pub fn shape(&self) -> Shape {
        self.storage().shape()
    }

    fn storage(&self) -> &dyn FieldAccess {
        match self {
            PostState::Mapping(m) => m,
            PostState::Record(r) => r,
        }
    }

    fn storage_mut(&mut self) -> &mut dyn FieldAccess {
        match self {
            PostState::Mapping(m) => m,
            PostState::Record(r) => r,
        }
    }

    // =========================================================================
    // Name-based API
    // =========================================================================

    /// Read a field by name.
    ///
    /// Mapping form returns the stored value, else `default`, else the field's
    /// documented default. Record form returns the current value and ignores
    /// `default`. Unknown names fail with `UnknownField` in both forms.
    pub fn get(&self, field_name: &str, default: Option<Value>) -> StateResult<Value> {
        let field = Field::from_name(field_name)?;
        Ok(self.get_field(field, default))
    }

    /// Write a field by name, mutating the state in place.
    ///
    /// Fails with `TypeMismatch` when the value does not fit the field's kind,
    /// identically for both forms; the state is left unchanged on failure.
    pub fn set(&mut self, field_name: &str, value: impl Into<Value>) -> StateResult<()> {
        let field = Field::from_name(field_name)?;
        self.set_field(field, value.into())
    }

    /// Whether a field carries a value.
    ///
    /// Mapping: key present. Record: always `true`.
    pub fn has(&self, field_name: &str) -> StateResult<bool> {
        let field = Field::from_name(field_name)?;
        Ok(self.has_field(field))
    }

    /// Return a field to its unset state.
    ///
    /// Mapping drops the key; record restores the default. Either way a
    /// following `get` yields the documented default.
    pub fn reset(&mut self, field_name: &str) -> StateResult<()> {
        let field = Field::from_name(field_name)?;
        self.reset_field(field);
        Ok(())
    }

    // =========================================================================
    // Typed API
    // =========================================================================

    /// Read a `Bool` field
    pub fn get_bool(&self, field_name: &str) -> StateResult<bool> {
        let field = Field::from_name(field_name)?;
        let value = self.get_field(field, None);
        value.as_bool().ok_or_else(|| read_mismatch(field, "Bool", &value))
    }

    /// Read an `Int` field
    pub fn get_int(&self, field_name: &str) -> StateResult<i64> {
        let field = Field::from_name(field_name)?;
        let value = self.get_field(field, None);
        value.as_int().ok_or_else(|| read_mismatch(field, "Int", &value))
    }

    /// Read a `Float` field
    pub fn get_float(&self, field_name: &str) -> StateResult<f64> {
        let field = Field::from_name(field_name)?;
        let value = self.get_field(field, None);
        value.as_float().ok_or_else(|| read_mismatch(field, "Float", &value))
    }

    /// Read a text or choice field
    pub fn get_text(&self, field_name: &str) -> StateResult<String> {
        let field = Field::from_name(field_name)?;
        match self.get_field(field, None) {
            Value::String(s) => Ok(s),
            other => Err(read_mismatch(field, "String", &other)),
        }
    }

    // =========================================================================
    // Field-based API
    // =========================================================================

    /// [`PostState::get`] for an already-resolved field
    pub fn get_field(&self, field: Field, default: Option<Value>) -> Value {
        match self {
            PostState::Mapping(m) => m
                .read(field)
                .or(default)
                .unwrap_or_else(|| field.default_value()),
            PostState::Record(r) => r.value(field),
        }
    }

    /// [`PostState::set`] for an already-resolved field
    pub fn set_field(&mut self, field: Field, value: Value) -> StateResult<()> {
        let shape = self.shape();
        self.storage_mut().write(field, value)?;
        debug!(field = %field, shape = %shape, "postprocessor field set");
        Ok(())
    }

    /// [`PostState::has`] for an already-resolved field
    pub fn has_field(&self, field: Field) -> bool {
        self.storage().is_set(field)
    }

    /// [`PostState::reset`] for an already-resolved field
    pub fn reset_field(&mut self, field: Field) {
        let shape = self.shape();
        self.storage_mut().clear(field);
        debug!(field = %field, shape = %shape, "postprocessor field reset");
    }

    /// Fields that carry a value of their own, in schema order.
    ///
    /// Record form lists every field.
    pub fn explicit_fields(&self) -> Vec<Field> {
        let storage = self.storage();
        Field::ALL
            .iter()
            .copied()
            .filter(|f| storage.is_set(*f))
            .collect()
    }

    // =========================================================================
    // Migration
    // =========================================================================

    /// Convert to record form.
    ///
    /// Unset mapping fields take their defaults, so `get` returns the same
    /// value for every field before and after. Unknown mapping keys are
    /// dropped with a warning.
    pub fn into_record(self) -> PostRecord {
        match self {
            PostState::Record(r) => r,
            PostState::Mapping(m) => {
                let dropped: Vec<&str> = m.unknown_keys().collect();
                if !dropped.is_empty() {
                    warn!(keys = ?dropped, "dropping unknown keys during record migration");
                }
                let mut record = PostRecord::default();
                for field in Field::ALL {
                    if let Some(value) = m.read(field) {
                        // Mapping values were checked on the way in.
                        if let Err(e) = record.write(field, value) {
                            warn!(field = %field, error = %e, "keeping default for field");
                        }
                    }
                }
                record
            }
        }
    }

    /// Convert to mapping form.
    ///
    /// A record becomes a fully populated mapping; a mapping is returned as-is.
    pub fn into_mapping(self) -> PostMapping {
        match self {
            PostState::Mapping(m) => m,
            PostState::Record(r) => r.to_mapping(),
        }
    }

    /// Loosely typed view, suitable for handing to mapping-era code.
    pub fn to_value(&self) -> Value {
        match self {
            PostState::Mapping(m) => Value::Object(m.entries().clone()),
            PostState::Record(r) => Value::Object(r.to_mapping().into_entries()),
        }
    }

    /// JSON view of [`PostState::to_value`].
    ///
    /// Feeding the result back through the loader yields the same reads.
    pub fn to_json(&self) -> serde_json::Value {
        self.to_value().to_json()
    }
}

pub(crate) fn mapping_from_value(value: Value, strict: bool) -> StateResult<PostMapping> {
    match value {
        Value::Object(entries) => PostMapping::from_entries(entries, strict),
        other => Err(StateError::UnsupportedStateShape {
            shape: other.type_name(),
        }),
    }
}

fn read_mismatch(field: Field, expected: &str, value: &Value) -> StateError {
    StateError::TypeMismatch {
        field: field.name(),
        expected: expected.to_string(),
        actual: value.type_name().to_string(),
    }
}

impl From<PostMapping> for PostState {
    fn from(m: PostMapping) -> Self {
        PostState::Mapping(m)
    }
}

impl From<PostRecord> for PostState {
    fn from(r: PostRecord) -> Self {
        PostState::Record(r)
    }
}

impl TryFrom<Value> for PostState {
    type Error = StateError;

    fn try_from(value: Value) -> StateResult<Self> {
        PostState::from_value(value)
    }
}
