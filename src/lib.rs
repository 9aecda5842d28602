//! chart-builder-rs: schema-driven chart component builder.
//!
//! Turns a plain, caller-authored options tree into a tree of live chart
//! components by walking it in lock-step with a static schema registry:
//! missing `type` discriminators are inferred, descriptor defaults merged,
//! and every recognized node instantiated or reconfigured in place.
//! Unrecognized nodes are dropped rather than raised.

pub mod builder;
pub mod component;
pub mod error;
pub mod options;
pub mod schema;
pub mod telemetry;

pub use builder::{
    BuildReport, create, create_from_json, create_with_report, update, update_with_report,
};
pub use component::{Configurable, Instance};
pub use error::{BuilderError, BuilderResult};
pub use options::OptionsDocument;
pub use schema::{ComponentKind, SchemaRegistry};
