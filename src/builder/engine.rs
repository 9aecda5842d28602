use serde_json::{Map, Value};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::component::{Configurable, Instance};
use crate::error::BuilderResult;
use crate::options::{OptionsDocument, has_explicit_type, is_defined, is_falsy};
use crate::schema::{ComponentKind, Descriptor, SchemaPath, SchemaRegistry, registry};

use super::inference::infer_root_chart_kind;
use super::report::{BuildReport, DropReason, DroppedNode};

/// Builds a component tree from an options tree.
///
/// Returns `None` when the root itself cannot be resolved to a chart kind;
/// unresolvable nested nodes are dropped individually while the rest of the
/// tree still builds. The caller's options are never mutated.
#[must_use]
pub fn create(options: &Value) -> Option<Instance> {
    create_with_report(options).0
}

/// Same walk as [`create`], additionally returning the record of every
/// configuration subtree the engine skipped.
#[must_use]
pub fn create_with_report(options: &Value) -> (Option<Instance>, BuildReport) {
    let mut builder = Builder::new(registry());
    let instance = builder.build(options, &SchemaPath::default());
    (instance, builder.report)
}

/// Parses JSON options text and builds the component tree it describes.
///
/// Only malformed JSON is an error; an options tree that resolves to nothing
/// still yields `Ok(None)`.
pub fn create_from_json(text: &str) -> BuilderResult<Option<Instance>> {
    let document = OptionsDocument::from_json_str(text)?;
    Ok(create(document.root()))
}

/// Reconciles an existing instance with a new options tree.
///
/// Resolution and defaults merging run exactly as in [`create`], but only
/// the legend is reconfigured: its published options are overwritten as a
/// whole, present values winning over documented defaults. Axes, series and
/// captions are left untouched; rebuilding them requires [`create`]. When
/// the options resolve to a different chart kind than `instance`, the whole
/// call is a no-op.
pub fn update(instance: &mut Instance, options: &Value) {
    let _ = update_with_report(instance, options);
}

/// Same reconciliation as [`update`], returning the skip record.
pub fn update_with_report(instance: &mut Instance, options: &Value) -> BuildReport {
    let mut builder = Builder::new(registry());
    builder.reconcile(instance, options);
    builder.report
}

/// One `create`/`update` walk: registry handle plus the skip record
/// accumulated along the way.
struct Builder<'r> {
    registry: &'r SchemaRegistry,
    report: BuildReport,
}

/// A configuration node the registry recognized: its extended path, the
/// descriptor found there, and the working copy of its options with the
/// descriptor defaults merged in.
struct ResolvedNode<'r> {
    path: SchemaPath,
    descriptor: &'r Descriptor,
    options: Map<String, Value>,
}

impl<'r> Builder<'r> {
    fn new(registry: &'r SchemaRegistry) -> Self {
        Self {
            registry,
            report: BuildReport::new(),
        }
    }

    fn build(&mut self, options: &Value, path: &SchemaPath) -> Option<Instance> {
        let node = self.resolve_node(options, path)?;
        let args = constructor_args(node.descriptor, &node.options);
        let mut instance = node.descriptor.instantiate(&args);
        trace!(path = %node.path, kind = %instance.kind(), "built component");
        self.apply_properties(&mut instance, &node);
        Some(instance)
    }

    /// Reconfigures `target` in place instead of constructing a new
    /// instance; the rest of the walk is identical to [`Builder::build`].
    fn build_into(&mut self, target: &mut dyn Configurable, options: &Value, path: &SchemaPath) {
        let Some(node) = self.resolve_node(options, path) else {
            return;
        };
        trace!(path = %node.path, "reconfiguring existing component");
        self.apply_properties(target, &node);
    }

    fn reconcile(&mut self, instance: &mut Instance, options: &Value) {
        let Some(node) = self.resolve_node(options, &SchemaPath::default()) else {
            return;
        };
        if instance.kind() != node.descriptor.kind() {
            self.report.record(DroppedNode {
                path: node.path.to_string(),
                type_name: options
                    .get("type")
                    .and_then(Value::as_str)
                    .map(str::to_owned),
                reason: DropReason::KindMismatch,
            });
            return;
        }
        let Some(overrides) = node.options.get("legend").and_then(Value::as_object) else {
            return;
        };
        if let Instance::Chart(chart) = instance {
            debug!(kind = %chart.kind(), "overwriting legend options");
            chart.legend.overwrite_options(overrides);
        }
    }

    /// Runs type inference, path extension, descriptor lookup and the
    /// defaults merge for one configuration node. `None` means the node
    /// contributes nothing; resolution failures are recorded on the report.
    fn resolve_node(&mut self, options: &Value, path: &SchemaPath) -> Option<ResolvedNode<'r>> {
        let Some(object) = options.as_object() else {
            trace!(path = %path, "ignoring non-object configuration value");
            return None;
        };

        // A falsy `type` counts as unset and re-enters inference.
        let explicit = object.get("type").filter(|value| !is_falsy(value));
        let kind = match explicit {
            Some(value) => {
                let Some(kind) = value.as_str().and_then(ComponentKind::parse) else {
                    self.report.record(DroppedNode {
                        path: path.to_string(),
                        type_name: Some(type_name_of(value)),
                        reason: DropReason::UnresolvedPath,
                    });
                    return None;
                };
                Some(kind)
            }
            None if path.is_empty() => {
                let inferred = infer_root_chart_kind(self.registry, object);
                trace!(kind = %inferred, "inferred root chart kind");
                Some(inferred)
            }
            None => self
                .registry
                .resolve_group(path)
                .and_then(|group| group.default_kind()),
        };

        let mut resolved = path.clone();
        if let Some(kind) = kind {
            resolved.push_kind(kind);
        }

        let Some(descriptor) = self.registry.resolve(&resolved) else {
            self.report.record(DroppedNode {
                path: resolved.to_string(),
                type_name: explicit.map(type_name_of),
                reason: DropReason::UnresolvedPath,
            });
            return None;
        };

        let mut merged = object.clone();
        for (name, default) in descriptor.defaults() {
            if merged.get(*name).is_none_or(is_falsy) {
                merged.insert((*name).to_owned(), default.clone());
            }
        }

        Some(ResolvedNode {
            path: resolved,
            descriptor,
            options: merged,
        })
    }

    /// Walks the merged options in declaration order, routing each key to a
    /// nested build, an in-place reconfiguration, or a plain value set.
    fn apply_properties(&mut self, target: &mut dyn Configurable, node: &ResolvedNode<'r>) {
        for (key, value) in &node.options {
            if key.as_str() == "type" || node.descriptor.is_constructor_param(key) {
                continue;
            }
            let Some((child_key, _)) = node
                .descriptor
                .child_entry(key)
                .filter(|_| !node.descriptor.is_excluded_from_schema(key))
            else {
                target.apply_value(key, value);
                continue;
            };

            match value {
                Value::Array(elements) => {
                    let element_path = node.path.child(child_key);
                    let built = elements
                        .iter()
                        .filter_map(|element| self.build(element, &element_path))
                        .collect();
                    target.attach_children(child_key, built);
                }
                _ => match target.existing_child_mut(key) {
                    Some(existing) => {
                        self.build_into(existing, value, &node.path.child(child_key));
                    }
                    None if value.is_object() => {
                        // A node carrying its own type keeps the parent path,
                        // so its lookup matches sibling same-path lookups.
                        let child_path = if has_explicit_type(value) {
                            node.path.clone()
                        } else {
                            node.path.child(child_key)
                        };
                        if let Some(child) = self.build(value, &child_path) {
                            target.attach_child(child_key, child);
                        }
                    }
                    None => {
                        trace!(path = %node.path, key = %key, "ignoring non-object value for schema child");
                    }
                },
            }
        }
    }
}

/// Extracts constructor values in declared parameter order; undefined
/// parameters are omitted, never padded.
fn constructor_args(descriptor: &Descriptor, options: &Map<String, Value>) -> SmallVec<[Value; 1]> {
    descriptor
        .constructor_params()
        .iter()
        .filter_map(|name| options.get(*name))
        .filter(|value| is_defined(value))
        .cloned()
        .collect()
}

fn type_name_of(value: &Value) -> String {
    value
        .as_str()
        .map(str::to_owned)
        .unwrap_or_else(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{Builder, constructor_args};
    use crate::builder::report::DropReason;
    use crate::schema::{ComponentKind, SchemaPath, registry};

    fn builder() -> Builder<'static> {
        Builder::new(registry())
    }

    #[test]
    fn resolve_extends_an_empty_path_with_the_root_kind() {
        let mut builder = builder();
        let node = builder
            .resolve_node(&json!({ "type": "polar" }), &SchemaPath::default())
            .expect("polar root");
        assert_eq!(node.path.to_string(), "polar");
        assert_eq!(node.descriptor.kind(), ComponentKind::Polar);
    }

    #[test]
    fn resolve_merges_defaults_over_absent_and_falsy_options() {
        let mut builder = builder();
        let node = builder
            .resolve_node(
                &json!({ "type": "line", "visible": false, "y_key": "price" }),
                &SchemaPath::root(ComponentKind::Cartesian).child("series"),
            )
            .expect("line series");
        assert_eq!(node.options.get("visible"), Some(&json!(true)));
        assert_eq!(node.options.get("y_key"), Some(&json!("price")));
        assert_eq!(node.options.get("x_key"), Some(&json!("")));
    }

    #[test]
    fn resolve_records_unknown_types_on_the_report() {
        let mut builder = builder();
        let path = SchemaPath::root(ComponentKind::Cartesian).child("series");
        assert!(builder.resolve_node(&json!({ "type": "sparkline" }), &path).is_none());
        assert!(builder.resolve_node(&json!({ "type": 7 }), &path).is_none());

        let dropped = builder.report.dropped();
        assert_eq!(dropped.len(), 2);
        assert_eq!(dropped[0].type_name.as_deref(), Some("sparkline"));
        assert_eq!(dropped[0].reason, DropReason::UnresolvedPath);
        assert_eq!(dropped[1].type_name.as_deref(), Some("7"));
    }

    #[test]
    fn resolve_ignores_non_object_nodes_without_reporting() {
        let mut builder = builder();
        assert!(builder.resolve_node(&json!("line"), &SchemaPath::default()).is_none());
        assert!(builder.resolve_node(&json!(null), &SchemaPath::default()).is_none());
        assert!(builder.report.is_clean());
    }

    #[test]
    fn constructor_args_skip_undefined_values_without_padding() {
        let registry = registry();
        let cartesian = registry
            .resolve(&SchemaPath::root(ComponentKind::Cartesian))
            .expect("cartesian descriptor");

        let with_document = json!({ "document": "host", "data": [] });
        let args = constructor_args(cartesian, with_document.as_object().unwrap());
        assert_eq!(args.as_slice(), [json!("host")]);

        let with_null_document = json!({ "document": null });
        let args = constructor_args(cartesian, with_null_document.as_object().unwrap());
        assert!(args.is_empty());
    }
}
