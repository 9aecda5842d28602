use std::sync::LazyLock;

use indexmap::IndexMap;
use serde_json::{Value, json};

use crate::component::{
    AxisComponent, CaptionComponent, ChartComponent, Instance, LegendComponent, PaddingComponent,
    SeriesComponent,
};

use super::{ChildSchema, ComponentKind, Descriptor, DescriptorGroup, PathSegment, SchemaPath};

/// Read-only, kind-keyed lookup tree mapping schema paths to descriptors.
///
/// The registry is pure data: the builder consults it on every step of its
/// walk and it can be shared freely across concurrent builds.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    roots: IndexMap<ComponentKind, Descriptor>,
}

enum Resolution<'r> {
    Descriptor(&'r Descriptor),
    Group(&'r DescriptorGroup),
}

impl SchemaRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_root(mut self, descriptor: Descriptor) -> Self {
        self.roots.insert(descriptor.kind(), descriptor);
        self
    }

    /// Top-level chart descriptors in registration order (cartesian first).
    pub fn roots(&self) -> impl Iterator<Item = (ComponentKind, &Descriptor)> {
        self.roots.iter().map(|(kind, descriptor)| (*kind, descriptor))
    }

    /// Resolves a path to a buildable descriptor.
    ///
    /// Returns `None` when any segment is unregistered, when the path stops
    /// on a discriminated group (the group itself is not buildable), or when
    /// a kind segment follows a singular descriptor.
    #[must_use]
    pub fn resolve(&self, path: &SchemaPath) -> Option<&Descriptor> {
        match self.resolve_entry(path)? {
            Resolution::Descriptor(descriptor) => Some(descriptor),
            Resolution::Group(_) => None,
        }
    }

    /// Resolves a path that ends on a discriminated group, used by type
    /// inference to find a group's default kind.
    #[must_use]
    pub fn resolve_group(&self, path: &SchemaPath) -> Option<&DescriptorGroup> {
        match self.resolve_entry(path)? {
            Resolution::Group(group) => Some(group),
            Resolution::Descriptor(_) => None,
        }
    }

    fn resolve_entry(&self, path: &SchemaPath) -> Option<Resolution<'_>> {
        let mut segments = path.segments().iter();
        let PathSegment::Kind(root_kind) = segments.next()? else {
            return None;
        };
        let mut current = Resolution::Descriptor(self.roots.get(root_kind)?);
        for segment in segments {
            current = match (current, segment) {
                (Resolution::Descriptor(descriptor), PathSegment::Property(name)) => {
                    match descriptor.child(name)? {
                        ChildSchema::Single(child) => Resolution::Descriptor(child),
                        ChildSchema::Discriminated(group) => Resolution::Group(group),
                    }
                }
                (Resolution::Group(group), PathSegment::Kind(kind)) => {
                    Resolution::Descriptor(group.variant(*kind)?)
                }
                _ => return None,
            };
        }
        Some(current)
    }
}

/// The chart schema shared by every build: two top-level chart kinds with
/// their axis/series groups and singular legend/caption/padding children.
#[must_use]
pub fn registry() -> &'static SchemaRegistry {
    static REGISTRY: LazyLock<SchemaRegistry> = LazyLock::new(chart_registry);
    &REGISTRY
}

fn chart_registry() -> SchemaRegistry {
    SchemaRegistry::new()
        .with_root(cartesian_descriptor())
        .with_root(polar_descriptor())
}

fn cartesian_descriptor() -> Descriptor {
    chart_descriptor(ComponentKind::Cartesian)
        .with_defaults(vec![
            ("data", json!([])),
            ("series", json!([])),
            (
                "axes",
                json!([
                    { "type": "category", "position": "bottom" },
                    { "type": "number", "position": "left" },
                ]),
            ),
        ])
        .with_child(
            "axes",
            ChildSchema::Discriminated(
                DescriptorGroup::new()
                    .with_variant(axis_descriptor(ComponentKind::Category, "bottom"))
                    .with_variant(axis_descriptor(ComponentKind::Number, "left")),
            ),
        )
        .with_child(
            "series",
            ChildSchema::Discriminated(
                DescriptorGroup::new()
                    .with_default_kind(ComponentKind::Line)
                    .with_variant(series_descriptor(ComponentKind::Line))
                    .with_variant(series_descriptor(ComponentKind::Column))
                    .with_variant(series_descriptor(ComponentKind::Bar))
                    .with_variant(series_descriptor(ComponentKind::Area))
                    .with_variant(series_descriptor(ComponentKind::Scatter)),
            ),
        )
}

fn polar_descriptor() -> Descriptor {
    chart_descriptor(ComponentKind::Polar)
        .with_defaults(vec![("data", json!([])), ("series", json!([]))])
        .with_child(
            "series",
            ChildSchema::Discriminated(
                DescriptorGroup::new()
                    .with_default_kind(ComponentKind::Pie)
                    .with_variant(series_descriptor(ComponentKind::Pie)),
            ),
        )
}

/// Shared shell of the two chart kinds; axis/series children and defaults
/// are layered on by the kind-specific functions above.
fn chart_descriptor(kind: ComponentKind) -> Descriptor {
    Descriptor::new(kind, chart_factory)
        .with_constructor_params(&["document"])
        .with_exclude_from_schema(&["parent", "data"])
        .with_child("legend", ChildSchema::Single(legend_descriptor()))
        .with_child(
            "title",
            ChildSchema::Single(caption_descriptor(vec![
                ("enabled", json!(true)),
                ("text", json!("Title")),
                ("font_size", json!(18.0)),
                ("font_weight", json!("bold")),
            ])),
        )
        .with_child(
            "subtitle",
            ChildSchema::Single(caption_descriptor(vec![
                ("enabled", json!(true)),
                ("text", json!("Subtitle")),
                ("font_size", json!(14.0)),
            ])),
        )
        .with_child("padding", ChildSchema::Single(padding_descriptor()))
}

fn axis_descriptor(kind: ComponentKind, default_position: &'static str) -> Descriptor {
    Descriptor::new(kind, axis_factory).with_defaults(vec![("position", json!(default_position))])
}

fn series_descriptor(kind: ComponentKind) -> Descriptor {
    let mut defaults = vec![("visible", json!(true)), ("show_in_legend", json!(true))];
    match kind {
        ComponentKind::Pie => {
            defaults.extend([("angle_key", json!("")), ("label_key", json!(""))]);
        }
        ComponentKind::Column | ComponentKind::Bar => {
            defaults.extend([
                ("x_key", json!("")),
                ("y_key", json!("")),
                ("grouped", json!(false)),
            ]);
        }
        _ => defaults.extend([("x_key", json!("")), ("y_key", json!(""))]),
    }
    Descriptor::new(kind, series_factory).with_defaults(defaults)
}

fn legend_descriptor() -> Descriptor {
    Descriptor::new(ComponentKind::Legend, legend_factory)
        .with_defaults(LegendComponent::default_options())
}

fn caption_descriptor(defaults: Vec<(&'static str, Value)>) -> Descriptor {
    Descriptor::new(ComponentKind::Caption, caption_factory).with_defaults(defaults)
}

fn padding_descriptor() -> Descriptor {
    Descriptor::new(ComponentKind::Padding, padding_factory).with_defaults(vec![
        ("top", json!(20.0)),
        ("right", json!(20.0)),
        ("bottom", json!(20.0)),
        ("left", json!(20.0)),
    ])
}

fn chart_factory(kind: ComponentKind, args: &[Value]) -> Instance {
    Instance::Chart(ChartComponent::new(kind, args.first().cloned()))
}

fn axis_factory(kind: ComponentKind, _args: &[Value]) -> Instance {
    Instance::Axis(AxisComponent::new(kind))
}

fn series_factory(kind: ComponentKind, _args: &[Value]) -> Instance {
    Instance::Series(SeriesComponent::new(kind))
}

fn legend_factory(_kind: ComponentKind, _args: &[Value]) -> Instance {
    Instance::Legend(LegendComponent::new())
}

fn caption_factory(_kind: ComponentKind, _args: &[Value]) -> Instance {
    Instance::Caption(CaptionComponent::new())
}

fn padding_factory(_kind: ComponentKind, _args: &[Value]) -> Instance {
    Instance::Padding(PaddingComponent::default())
}
