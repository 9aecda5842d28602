//! The schema registry: static, kind-keyed descriptions of every component
//! the builder can construct and where in an options tree it may appear.

pub mod descriptor;
pub mod kind;
pub mod path;
pub mod registry;

pub use descriptor::{ChildSchema, Descriptor, DescriptorGroup, Factory};
pub use kind::ComponentKind;
pub use path::{PathSegment, SchemaPath};
pub use registry::{SchemaRegistry, registry};
