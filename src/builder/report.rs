use serde::Serialize;
use tracing::debug;

/// Why a configuration node contributed nothing to the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    /// No descriptor is registered at the node's resolved path, either
    /// because the `type` discriminator is unknown or because the path
    /// itself names nothing buildable.
    UnresolvedPath,
    /// An update resolved to a descriptor whose kind does not match the
    /// existing instance; the whole call became a no-op.
    KindMismatch,
}

/// One configuration subtree the engine dropped instead of building.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DroppedNode {
    /// Dotted schema path at which resolution gave up.
    pub path: String,
    /// Raw `type` discriminator the node carried, when it carried one.
    pub type_name: Option<String>,
    pub reason: DropReason,
}

/// Aggregated record of every subtree a build or update silently skipped.
///
/// Dropping is the engine's only failure mode, so a clean report means the
/// whole configuration was understood. The report never changes the build
/// outcome; it exists for callers that want to surface malformed input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    dropped: Vec<DroppedNode>,
}

impl BuildReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.dropped.is_empty()
    }

    #[must_use]
    pub fn dropped(&self) -> &[DroppedNode] {
        &self.dropped
    }

    pub(crate) fn record(&mut self, node: DroppedNode) {
        debug!(
            path = %node.path,
            type_name = node.type_name.as_deref().unwrap_or(""),
            reason = ?node.reason,
            "dropped configuration node"
        );
        self.dropped.push(node);
    }
}
