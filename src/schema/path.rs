use std::fmt;

use smallvec::SmallVec;

use super::ComponentKind;

/// One step of a schema path: a component kind (`cartesian`, `line`) or a
/// child property name (`series`, `legend`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSegment {
    Kind(ComponentKind),
    Property(&'static str),
}

impl PathSegment {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kind(kind) => kind.as_str(),
            Self::Property(name) => name,
        }
    }
}

/// Dotted lookup path into the schema registry, built incrementally while
/// descending an options tree (`cartesian` → `cartesian.series` →
/// `cartesian.series.line`).
///
/// Property segments always come from registry keys, so the whole path is
/// `Copy`-cheap and lives inline for the depths charts reach in practice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaPath {
    segments: SmallVec<[PathSegment; 4]>,
}

impl SchemaPath {
    #[must_use]
    pub fn root(kind: ComponentKind) -> Self {
        let mut path = Self::default();
        path.push_kind(kind);
        path
    }

    pub fn push_kind(&mut self, kind: ComponentKind) {
        self.segments.push(PathSegment::Kind(kind));
    }

    /// The path of a nested child property, leaving `self` untouched.
    #[must_use]
    pub fn child(&self, property: &'static str) -> Self {
        let mut path = self.clone();
        path.segments.push(PathSegment::Property(property));
        path
    }

    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for SchemaPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, segment) in self.segments.iter().enumerate() {
            if index > 0 {
                f.write_str(".")?;
            }
            f.write_str(segment.as_str())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ComponentKind, SchemaPath};

    #[test]
    fn display_renders_dotted_form() {
        let mut path = SchemaPath::root(ComponentKind::Cartesian).child("series");
        path.push_kind(ComponentKind::Line);
        assert_eq!(path.to_string(), "cartesian.series.line");
    }

    #[test]
    fn child_does_not_mutate_the_parent_path() {
        let parent = SchemaPath::root(ComponentKind::Polar);
        let child = parent.child("legend");
        assert_eq!(parent.to_string(), "polar");
        assert_eq!(child.to_string(), "polar.legend");
    }

    #[test]
    fn empty_path_displays_as_empty_string() {
        let path = SchemaPath::default();
        assert!(path.is_empty());
        assert_eq!(path.to_string(), "");
    }
}
