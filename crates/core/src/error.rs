//! Error types for postprocessor state access
//!
//! ## Error Codes (Canonical)
//!
//! | Code | Description |
//! |------|-------------|
//! | UnknownField | Field name is not in the known field set |
//! | TypeMismatch | Value type incompatible with the field's declared kind |
//! | UnsupportedStateShape | Value is neither mapping nor record form |
//!
//! All three are programmer or configuration errors. None are retryable.

use thiserror::Error;

/// Errors raised by state accessors and shape detection.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StateError {
    /// Field name is not in the known field set
    #[error("unknown field: {name}")]
    UnknownField {
        /// The name that failed to resolve
        name: String,
    },

    /// Value type incompatible with the field's declared kind
    #[error("type mismatch on {field}: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The field being read or written
        field: &'static str,
        /// Declared kind of the field
        expected: String,
        /// Type (or value) actually supplied
        actual: String,
    },

    /// The supplied value is neither mapping nor record form
    #[error("unsupported state shape: {shape}")]
    UnsupportedStateShape {
        /// Type name of the rejected value
        shape: &'static str,
    },
}

/// Result type for state access.
pub type StateResult<T> = std::result::Result<T, StateError>;

impl StateError {
    /// Get the canonical error code
    pub fn error_code(&self) -> &'static str {
        match self {
            StateError::UnknownField { .. } => "UnknownField",
            StateError::TypeMismatch { .. } => "TypeMismatch",
            StateError::UnsupportedStateShape { .. } => "UnsupportedStateShape",
        }
    }

    pub(crate) fn unknown_field(name: impl Into<String>) -> Self {
        StateError::UnknownField { name: name.into() }
    }
}
