//! Mapping form of postprocessor state.

use super::{FieldAccess, Shape};
use postproc_core::{Field, StateError, StateResult, Value};
use std::collections::HashMap;
use tracing::warn;

/// Key/value form of postprocessor state.
///
/// Known keys always hold a value of their field's declared kind. Keys outside
/// the known set may be carried through from a lenient load; they are kept for
/// round-tripping but are unreachable through the accessor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostMapping {
    entries: HashMap<String, Value>,
}

impl PostMapping {
    /// Create an empty mapping (every field unset)
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mapping from raw entries.
    ///
    /// Every known key is checked against its field's kind. Unknown keys fail
    /// with `UnknownField` when `strict` is set and are otherwise kept.
    pub fn from_entries(entries: HashMap<String, Value>, strict: bool) -> StateResult<Self> {
        for (key, value) in &entries {
            match Field::from_name(key) {
                Ok(field) => field.check(value)?,
                Err(e) if strict => return Err(e),
                Err(_) => warn!(key = %key, "carrying unknown postprocessor key"),
            }
        }
        Ok(Self { entries })
    }

    /// Wrap entries whose known keys already satisfy their kinds.
    pub(crate) fn from_checked(entries: HashMap<String, Value>) -> Self {
        Self { entries }
    }

    /// Number of stored keys, known or not
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no keys are stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys that do not name a known field
    pub fn unknown_keys(&self) -> impl Iterator<Item = &str> {
        self.entries
            .keys()
            .map(String::as_str)
            .filter(|k| Field::from_name(k).is_err())
    }

    /// Borrow the raw entries
    pub fn entries(&self) -> &HashMap<String, Value> {
        &self.entries
    }

    /// Consume into the raw entries
    pub fn into_entries(self) -> HashMap<String, Value> {
        self.entries
    }
}

impl FieldAccess for PostMapping {
    fn shape(&self) -> Shape {
        Shape::Mapping
    }

    fn read(&self, field: Field) -> Option<Value> {
        self.entries.get(field.name()).cloned()
    }

    fn write(&mut self, field: Field, value: Value) -> StateResult<()> {
        field.check(&value)?;
        self.entries.insert(field.name().to_string(), value);
        Ok(())
    }

    fn is_set(&self, field: Field) -> bool {
        self.entries.contains_key(field.name())
    }

    fn clear(&mut self, field: Field) {
        self.entries.remove(field.name());
    }
}

impl TryFrom<HashMap<String, Value>> for PostMapping {
    type Error = StateError;

    /// Lenient conversion: unknown keys are carried.
    fn try_from(entries: HashMap<String, Value>) -> StateResult<Self> {
        Self::from_entries(entries, false)
    }
}
