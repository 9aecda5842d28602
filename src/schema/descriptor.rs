use indexmap::IndexMap;
use serde_json::Value;

use crate::component::Instance;

use super::ComponentKind;

/// Constructor for the component a descriptor describes.
///
/// Receives the descriptor's kind and the positional constructor values
/// extracted from configuration; missing values are omitted, never padded.
pub type Factory = fn(ComponentKind, &[Value]) -> Instance;

/// How to build one component kind at one schema path.
#[derive(Debug, Clone)]
pub struct Descriptor {
    kind: ComponentKind,
    factory: Factory,
    constructor_params: &'static [&'static str],
    exclude_from_schema: &'static [&'static str],
    defaults: Vec<(&'static str, Value)>,
    children: IndexMap<&'static str, ChildSchema>,
}

/// A child property of a descriptor: either exactly one nested component
/// kind, or a group of kinds discriminated by the node's `type` field.
#[derive(Debug, Clone)]
pub enum ChildSchema {
    Single(Descriptor),
    Discriminated(DescriptorGroup),
}

/// Kind-keyed variants of a discriminated configuration point, optionally
/// carrying the kind assumed when a node omits its `type` (series only).
#[derive(Debug, Clone, Default)]
pub struct DescriptorGroup {
    default_kind: Option<ComponentKind>,
    variants: IndexMap<ComponentKind, Descriptor>,
}

impl Descriptor {
    #[must_use]
    pub fn new(kind: ComponentKind, factory: Factory) -> Self {
        Self {
            kind,
            factory,
            constructor_params: &[],
            exclude_from_schema: &[],
            defaults: Vec::new(),
            children: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_constructor_params(mut self, params: &'static [&'static str]) -> Self {
        self.constructor_params = params;
        self
    }

    #[must_use]
    pub fn with_exclude_from_schema(mut self, excluded: &'static [&'static str]) -> Self {
        self.exclude_from_schema = excluded;
        self
    }

    #[must_use]
    pub fn with_defaults(mut self, defaults: Vec<(&'static str, Value)>) -> Self {
        self.defaults = defaults;
        self
    }

    #[must_use]
    pub fn with_child(mut self, name: &'static str, child: ChildSchema) -> Self {
        self.children.insert(name, child);
        self
    }

    #[must_use]
    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    /// Builds a fresh instance from positional constructor values.
    #[must_use]
    pub fn instantiate(&self, args: &[Value]) -> Instance {
        (self.factory)(self.kind, args)
    }

    #[must_use]
    pub fn constructor_params(&self) -> &[&'static str] {
        self.constructor_params
    }

    #[must_use]
    pub fn is_constructor_param(&self, name: &str) -> bool {
        self.constructor_params.contains(&name)
    }

    #[must_use]
    pub fn is_excluded_from_schema(&self, name: &str) -> bool {
        self.exclude_from_schema.contains(&name)
    }

    #[must_use]
    pub fn defaults(&self) -> &[(&'static str, Value)] {
        &self.defaults
    }

    #[must_use]
    pub fn child(&self, name: &str) -> Option<&ChildSchema> {
        self.children.get(name)
    }

    /// Child lookup returning the registry's own static key, so path
    /// extension never allocates.
    #[must_use]
    pub fn child_entry(&self, name: &str) -> Option<(&'static str, &ChildSchema)> {
        self.children.get_key_value(name).map(|(key, child)| (*key, child))
    }

    #[must_use]
    pub fn discriminated_child(&self, name: &str) -> Option<&DescriptorGroup> {
        match self.children.get(name)? {
            ChildSchema::Discriminated(group) => Some(group),
            ChildSchema::Single(_) => None,
        }
    }
}

impl DescriptorGroup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_default_kind(mut self, kind: ComponentKind) -> Self {
        self.default_kind = Some(kind);
        self
    }

    /// Registers a variant under the kind its descriptor produces.
    #[must_use]
    pub fn with_variant(mut self, descriptor: Descriptor) -> Self {
        self.variants.insert(descriptor.kind(), descriptor);
        self
    }

    #[must_use]
    pub fn default_kind(&self) -> Option<ComponentKind> {
        self.default_kind
    }

    #[must_use]
    pub fn variant(&self, kind: ComponentKind) -> Option<&Descriptor> {
        self.variants.get(&kind)
    }

    #[must_use]
    pub fn contains(&self, kind: ComponentKind) -> bool {
        self.variants.contains_key(&kind)
    }
}
