use serde_json::{Map, Value};

use crate::schema::{ComponentKind, SchemaRegistry};

/// Infers the top-level chart kind of a typeless root configuration.
///
/// The first declared element under `series` nominates the chart: whichever
/// registered chart kind carries that series kind in its series group wins,
/// scanning charts in registration order (cartesian first). Anything else,
/// including a missing or unrecognized series kind, falls back to cartesian.
pub(crate) fn infer_root_chart_kind(
    registry: &SchemaRegistry,
    options: &Map<String, Value>,
) -> ComponentKind {
    declared_series_kind(options)
        .and_then(|series_kind| chart_kind_owning_series(registry, series_kind))
        .unwrap_or(ComponentKind::Cartesian)
}

fn declared_series_kind(options: &Map<String, Value>) -> Option<ComponentKind> {
    let first = options.get("series")?.as_array()?.first()?;
    let name = first.get("type")?.as_str()?;
    ComponentKind::parse(name)
}

fn chart_kind_owning_series(
    registry: &SchemaRegistry,
    series_kind: ComponentKind,
) -> Option<ComponentKind> {
    registry.roots().find_map(|(chart_kind, descriptor)| {
        let group = descriptor.discriminated_child("series")?;
        group.contains(series_kind).then_some(chart_kind)
    })
}
