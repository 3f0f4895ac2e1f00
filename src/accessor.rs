//! Free-function accessors over [`PostState`].
//!
//! Postprocessors written against the mapping-era helpers call these rather
//! than the methods; both resolve to the same dispatch.

use crate::state::PostState;
use postproc_core::{StateResult, Value};

/// Read a field; see [`PostState::get`].
pub fn get(state: &PostState, field_name: &str, default: Option<Value>) -> StateResult<Value> {
    state.get(field_name, default)
}

/// Write a field in place; see [`PostState::set`].
pub fn set(state: &mut PostState, field_name: &str, value: impl Into<Value>) -> StateResult<()> {
    state.set(field_name, value)
}

/// Whether a field carries a value; see [`PostState::has`].
pub fn has(state: &PostState, field_name: &str) -> StateResult<bool> {
    state.has(field_name)
}

/// Return a field to its unset state; see [`PostState::reset`].
pub fn reset(state: &mut PostState, field_name: &str) -> StateResult<()> {
    state.reset(field_name)
}
