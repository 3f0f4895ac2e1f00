//! Unified error types for postproc-state.
//!
//! Accessors on [`crate::PostState`] return the narrower
//! [`StateError`]; loading adds I/O and parse failures on top.

use postproc_core::StateError;
use thiserror::Error;

/// All postproc-state errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Field resolution, kind check or shape detection failed
    #[error(transparent)]
    State(#[from] StateError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type for postproc-state operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Get the canonical error code
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::State(e) => e.error_code(),
            Error::Io(_) => "Io",
            Error::Serialization(_) => "Serialization",
        }
    }

    /// Check if this is an unknown-field error.
    pub fn is_unknown_field(&self) -> bool {
        matches!(self, Error::State(StateError::UnknownField { .. }))
    }

    /// Check if this is a type-mismatch error.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Error::State(StateError::TypeMismatch { .. }))
    }

    /// Check if this is an unsupported-shape error.
    pub fn is_unsupported_shape(&self) -> bool {
        matches!(self, Error::State(StateError::UnsupportedStateShape { .. }))
    }
}

// Convert from serde_json errors
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
