use serde::Serialize;
use serde_json::Value;

use crate::schema::ComponentKind;

use super::{
    AxisComponent, CaptionComponent, ChartComponent, Configurable, LegendComponent,
    PaddingComponent, SeriesComponent,
};

/// Any component the builder can instantiate.
///
/// Each variant owns one concrete component; the builder moves instances
/// into their parent's slots as subtrees finish, so a finished build yields
/// a single root `Instance` owning the whole tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Instance {
    Chart(ChartComponent),
    Axis(AxisComponent),
    Series(SeriesComponent),
    Legend(LegendComponent),
    Caption(CaptionComponent),
    Padding(PaddingComponent),
}

impl Instance {
    #[must_use]
    pub fn kind(&self) -> ComponentKind {
        self.inner().kind()
    }

    #[must_use]
    pub fn as_chart(&self) -> Option<&ChartComponent> {
        match self {
            Self::Chart(chart) => Some(chart),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_axis(&self) -> Option<&AxisComponent> {
        match self {
            Self::Axis(axis) => Some(axis),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_series(&self) -> Option<&SeriesComponent> {
        match self {
            Self::Series(series) => Some(series),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_legend(&self) -> Option<&LegendComponent> {
        match self {
            Self::Legend(legend) => Some(legend),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_caption(&self) -> Option<&CaptionComponent> {
        match self {
            Self::Caption(caption) => Some(caption),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_padding(&self) -> Option<&PaddingComponent> {
        match self {
            Self::Padding(padding) => Some(padding),
            _ => None,
        }
    }

    fn inner(&self) -> &dyn Configurable {
        match self {
            Self::Chart(chart) => chart,
            Self::Axis(axis) => axis,
            Self::Series(series) => series,
            Self::Legend(legend) => legend,
            Self::Caption(caption) => caption,
            Self::Padding(padding) => padding,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Configurable {
        match self {
            Self::Chart(chart) => chart,
            Self::Axis(axis) => axis,
            Self::Series(series) => series,
            Self::Caption(caption) => caption,
            Self::Legend(legend) => legend,
            Self::Padding(padding) => padding,
        }
    }
}

impl Configurable for Instance {
    fn kind(&self) -> ComponentKind {
        self.inner().kind()
    }

    fn apply_value(&mut self, name: &str, value: &Value) {
        self.inner_mut().apply_value(name, value);
    }

    fn attach_child(&mut self, name: &str, child: Instance) {
        self.inner_mut().attach_child(name, child);
    }

    fn attach_children(&mut self, name: &str, children: Vec<Instance>) {
        self.inner_mut().attach_children(name, children);
    }

    fn existing_child_mut(&mut self, name: &str) -> Option<&mut dyn Configurable> {
        self.inner_mut().existing_child_mut(name)
    }
}

#[cfg(test)]
mod tests {
    use super::Instance;
    use crate::component::{ChartComponent, SeriesComponent};
    use crate::schema::ComponentKind;

    #[test]
    fn kind_reflects_the_wrapped_component() {
        let chart = Instance::Chart(ChartComponent::new(ComponentKind::Polar, None));
        assert_eq!(chart.kind(), ComponentKind::Polar);

        let series = Instance::Series(SeriesComponent::new(ComponentKind::Pie));
        assert_eq!(series.kind(), ComponentKind::Pie);
    }

    #[test]
    fn accessors_match_variants() {
        let chart = Instance::Chart(ChartComponent::new(ComponentKind::Cartesian, None));
        assert!(chart.as_chart().is_some());
        assert!(chart.as_series().is_none());
    }
}
