//! Storage forms of postprocessor state.
//!
//! Two forms exist while configuration moves from loose key/value maps to a
//! typed record:
//!
//! 1. **Mapping** - [`PostMapping`], absent keys mean "unset"
//! 2. **Record** - [`PostRecord`], every field always present
//!
//! Both implement [`FieldAccess`], which is what [`crate::PostState`]
//! dispatches to. Once every producer emits records, the mapping form and its
//! `PostState` variant can be removed without touching accessor call sites.

mod mapping;
mod record;

pub use mapping::PostMapping;
pub use record::{PostRecord, Units};

use postproc_core::{Field, StateResult, Value};
use std::fmt;

/// Which form a state value is stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Loosely typed key/value mapping
    Mapping,
    /// Statically structured record
    Record,
}

impl Shape {
    /// Lowercase name used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Mapping => "mapping",
            Shape::Record => "record",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field-level storage operations shared by both forms.
///
/// Implementations work on already-resolved [`Field`]s. Name resolution
/// happens in [`crate::PostState`]; kind checks go through [`Field::check`]
/// in both forms.
pub trait FieldAccess {
    /// The form this storage represents
    fn shape(&self) -> Shape;

    /// Stored value, or `None` when the field is unset.
    ///
    /// Records never return `None`.
    fn read(&self, field: Field) -> Option<Value>;

    /// Store `value`, failing with `TypeMismatch` if it does not fit the
    /// field's kind.
    fn write(&mut self, field: Field, value: Value) -> StateResult<()>;

    /// Whether the field carries a value of its own
    fn is_set(&self, field: Field) -> bool;

    /// Return the field to its unset state.
    ///
    /// Mappings drop the key; records restore the schema default.
    fn clear(&mut self, field: Field);
}
