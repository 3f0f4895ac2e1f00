//! # postproc-state
//!
//! Uniform access to postprocessor state while configuration migrates from
//! loosely typed mappings to structured records.
//!
//! Postprocessing code reads options such as `output_filename` or `units`
//! without knowing which form it was handed. Both forms recognize the same
//! closed set of fields, report the same defaults, and reject the same bad
//! writes.
//!
//! ## Quick Start
//!
//! ```
//! use postproc_state::PostState;
//!
//! let mut state = PostState::loader().load_str(r#"{"units": "G20"}"#)?;
//! state.set("output_filename", "job1.nc")?;
//!
//! assert_eq!(state.get_text("units")?, "G20");
//! assert!(state.get_bool("output_comments")?); // default
//!
//! // Migrate when the caller is ready
//! let record = state.into_record();
//! assert_eq!(record.output_filename, "job1.nc");
//! # Ok::<(), postproc_state::Error>(())
//! ```
//!
//! ## Forms
//!
//! - [`PostMapping`] - key/value form, absent key means unset
//! - [`PostRecord`] - typed record, every field always present
//! - [`PostState`] - one of the two, with `get`/`set`/`has`/`reset`

#![warn(missing_docs)]

pub mod accessor;
mod error;
mod forms;
mod loader;
mod state;

pub mod prelude;

pub use error::{Error, Result};
pub use forms::{FieldAccess, PostMapping, PostRecord, Shape, Units};
pub use loader::{Representation, StateLoader};
pub use state::PostState;

// Re-export core types
pub use postproc_core::{
    DefaultValue, Field, FieldKind, FieldSpec, StateError, StateResult, Value, UNITS_IMPERIAL,
    UNITS_METRIC,
};
