//! Rules and helpers for caller-authored options trees.
//!
//! An options tree is a plain `serde_json::Value`; the builder walks it
//! without ever mutating the caller's copy.

pub mod document;
pub mod value_rules;

pub use document::OptionsDocument;
pub use value_rules::{has_explicit_type, is_defined, is_falsy};
