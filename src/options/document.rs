use serde_json::Value;

use crate::error::{BuilderError, BuilderResult};

/// A caller-authored options tree plus JSON load/save helpers.
///
/// Hosts can persist chart setup as plain JSON without inventing their own
/// ad-hoc format; the wrapped root is handed to the builder untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionsDocument {
    root: Value,
}

impl OptionsDocument {
    #[must_use]
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    #[must_use]
    pub fn root(&self) -> &Value {
        &self.root
    }

    #[must_use]
    pub fn into_root(self) -> Value {
        self.root
    }

    /// Parses an options document from JSON text.
    pub fn from_json_str(input: &str) -> BuilderResult<Self> {
        let root = serde_json::from_str(input)
            .map_err(|e| BuilderError::InvalidDocument(format!("failed to parse options: {e}")))?;
        Ok(Self { root })
    }

    /// Serializes the options tree to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> BuilderResult<String> {
        serde_json::to_string_pretty(&self.root).map_err(|e| {
            BuilderError::InvalidDocument(format!("failed to serialize options: {e}"))
        })
    }
}
