use serde_json::Value;

use crate::schema::ComponentKind;

use super::Instance;

/// Contract every buildable component exposes to the builder.
///
/// Components are plain data holders: recognized option names land in typed
/// fields, everything else goes verbatim into an ordered extras bag. Child
/// hooks default to no-ops so leaf components only implement what they have.
pub trait Configurable {
    /// The kind this component was constructed as.
    fn kind(&self) -> ComponentKind;

    /// Copies one configuration value onto the named property.
    ///
    /// A recognized name whose value cannot be coerced to the field type is
    /// ignored (value-level validation is out of scope for the builder).
    fn apply_value(&mut self, name: &str, value: &Value);

    /// Installs a freshly built child instance in the named slot.
    /// Instances whose kind does not fit the slot are discarded.
    fn attach_child(&mut self, name: &str, child: Instance) {
        let _ = (name, child);
    }

    /// Replaces the named polymorphic child collection.
    fn attach_children(&mut self, name: &str, children: Vec<Instance>) {
        let _ = (name, children);
    }

    /// An already-present nested instance the builder reconfigures in place
    /// instead of replacing (a chart's auto-created legend and padding).
    fn existing_child_mut(&mut self, name: &str) -> Option<&mut dyn Configurable> {
        let _ = name;
        None
    }
}

/// Trace hook for recognized options carrying unusable values.
pub(crate) fn note_unusable_value(component: &'static str, name: &str, value: &Value) {
    tracing::trace!(component, option = name, %value, "ignoring option with unusable value");
}
