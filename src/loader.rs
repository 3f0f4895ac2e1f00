//! Building postprocessor state from configuration input.
//!
//! # Example
//!
//! ```
//! use postproc_state::{PostState, Shape};
//!
//! let state = PostState::loader()
//!     .record()
//!     .strict()
//!     .load_str(r#"{"units": "G20", "modal": true}"#)?;
//!
//! assert_eq!(state.shape(), Shape::Record);
//! assert_eq!(state.get_text("units")?, "G20");
//! # Ok::<(), postproc_state::Error>(())
//! ```

use crate::error::Result;
use crate::state::{mapping_from_value, PostState};
use postproc_core::Value;
use std::path::Path;
use tracing::info;

/// Which form loaded state should take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Representation {
    /// Keep input as a mapping (default)
    #[default]
    Mapping,
    /// Migrate input into a record
    Record,
}

/// Builder for loading postprocessor state.
///
/// # Example
///
/// ```ignore
/// // Migration-era callers: keep the mapping, tolerate extra keys
/// let state = PostState::loader().load_path("post.json")?;
///
/// // Migrated callers: typed record, reject typos
/// let state = PostState::loader().record().strict().load_path("post.json")?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct StateLoader {
    representation: Representation,
    strict: bool,
}

impl StateLoader {
    /// Create a loader with default settings (mapping form, lenient keys).
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose the form of loaded state.
    pub fn representation(mut self, representation: Representation) -> Self {
        self.representation = representation;
        self
    }

    /// Produce mapping-form state (default).
    pub fn mapping(self) -> Self {
        self.representation(Representation::Mapping)
    }

    /// Produce record-form state.
    pub fn record(self) -> Self {
        self.representation(Representation::Record)
    }

    /// Reject keys outside the known field set with `UnknownField`.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Carry unknown keys, logging each one (default).
    pub fn lenient(mut self) -> Self {
        self.strict = false;
        self
    }

    /// Load from an already-parsed value.
    ///
    /// The value must be an object; anything else fails with
    /// `UnsupportedStateShape`.
    pub fn load_value(&self, value: Value) -> Result<PostState> {
        let mapping = mapping_from_value(value, self.strict)?;
        let keys = mapping.len();
        let state = match self.representation {
            Representation::Mapping => PostState::Mapping(mapping),
            Representation::Record => PostState::Record(PostState::Mapping(mapping).into_record()),
        };
        info!(
            keys,
            shape = %state.shape(),
            strict = self.strict,
            "loaded postprocessor state"
        );
        Ok(state)
    }

    /// Load from JSON text.
    pub fn load_str(&self, json: &str) -> Result<PostState> {
        let parsed: serde_json::Value = serde_json::from_str(json)?;
        self.load_value(Value::from(parsed))
    }

    /// Load from a JSON file.
    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<PostState> {
        let text = std::fs::read_to_string(path.as_ref())?;
        self.load_str(&text)
    }
}

impl PostState {
    /// Create a loader for configuration input.
    pub fn loader() -> StateLoader {
        StateLoader::new()
    }
}
