//! Core types for postprocessor state
//!
//! This crate defines the pieces shared by every state representation:
//!
//! - [`Value`] - the dynamic value model used by the mapping form and by reads
//! - [`Field`] - the closed set of known postprocessor options, with kinds
//!   and defaults
//! - [`StateError`] - the error taxonomy for state access

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod schema;
pub mod value;

pub use error::{StateError, StateResult};
pub use schema::{DefaultValue, Field, FieldKind, FieldSpec, UNITS_IMPERIAL, UNITS_METRIC};
pub use value::Value;
