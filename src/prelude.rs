//! Convenient imports for postproc-state.
//!
//! ```ignore
//! use postproc_state::prelude::*;
//!
//! let state = PostState::record();
//! assert_eq!(state.get("units", None)?, Value::from("G21"));
//! # Ok::<(), StateError>(())
//! ```

// State and its forms
pub use crate::forms::{PostMapping, PostRecord, Shape, Units};
pub use crate::state::PostState;

// Loading
pub use crate::loader::{Representation, StateLoader};

// Error handling
pub use crate::error::{Error, Result};
pub use postproc_core::StateError;

// Core types
pub use postproc_core::{Field, FieldKind, Value};
