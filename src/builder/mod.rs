//! The builder engine: recursive `create`/`update` over an options tree.
//!
//! The walk runs in lock-step with the schema registry: infer a missing
//! `type`, extend the path, look up the descriptor, merge its defaults,
//! construct or reuse the instance, then recurse per property. Nodes the
//! registry does not recognize are dropped, never an error; the optional
//! `*_with_report` variants record what was skipped.

mod engine;
mod inference;
mod report;

pub use engine::{create, create_from_json, create_with_report, update, update_with_report};
pub use report::{BuildReport, DropReason, DroppedNode};
