use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::schema::ComponentKind;

use super::configurable::note_unusable_value;
use super::{
    AxisComponent, CaptionComponent, Configurable, Instance, LegendComponent, PaddingComponent,
    SeriesComponent,
};

/// Top-level cartesian or polar chart.
///
/// Construction already provides a legend and uniform padding, which is why
/// `legend`/`padding` sub-configurations reconfigure those instances in
/// place instead of replacing them. `document` is the single positional
/// constructor value chart kinds consume; `parent` and `data` are
/// passthrough values the builder never interprets against the schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartComponent {
    kind: ComponentKind,
    pub document: Option<Value>,
    pub parent: Option<Value>,
    pub data: Option<Value>,
    pub padding: PaddingComponent,
    pub legend: LegendComponent,
    pub title: Option<CaptionComponent>,
    pub subtitle: Option<CaptionComponent>,
    pub axes: Vec<AxisComponent>,
    pub series: Vec<SeriesComponent>,
    pub extras: IndexMap<String, Value>,
}

impl ChartComponent {
    #[must_use]
    pub fn new(kind: ComponentKind, document: Option<Value>) -> Self {
        debug_assert!(kind.is_chart(), "chart component built with kind {kind}");
        Self {
            kind,
            document,
            parent: None,
            data: None,
            padding: PaddingComponent::default(),
            legend: LegendComponent::new(),
            title: None,
            subtitle: None,
            axes: Vec::new(),
            series: Vec::new(),
            extras: IndexMap::new(),
        }
    }
}

impl Configurable for ChartComponent {
    fn kind(&self) -> ComponentKind {
        self.kind
    }

    fn apply_value(&mut self, name: &str, value: &Value) {
        match name {
            "document" => self.document = Some(value.clone()),
            "parent" => self.parent = Some(value.clone()),
            "data" => self.data = Some(value.clone()),
            _ => {
                self.extras.insert(name.to_owned(), value.clone());
            }
        }
    }

    fn attach_child(&mut self, name: &str, child: Instance) {
        match (name, child) {
            ("title", Instance::Caption(caption)) => self.title = Some(caption),
            ("subtitle", Instance::Caption(caption)) => self.subtitle = Some(caption),
            ("legend", Instance::Legend(legend)) => self.legend = legend,
            ("padding", Instance::Padding(padding)) => self.padding = padding,
            (_, child) => note_unusable_value("chart", name, &Value::String(child.kind().to_string())),
        }
    }

    fn attach_children(&mut self, name: &str, children: Vec<Instance>) {
        match name {
            "axes" => {
                self.axes = children
                    .into_iter()
                    .filter_map(|child| match child {
                        Instance::Axis(axis) => Some(axis),
                        _ => None,
                    })
                    .collect();
            }
            "series" => {
                self.series = children
                    .into_iter()
                    .filter_map(|child| match child {
                        Instance::Series(series) => Some(series),
                        _ => None,
                    })
                    .collect();
            }
            _ => {}
        }
    }

    fn existing_child_mut(&mut self, name: &str) -> Option<&mut dyn Configurable> {
        match name {
            "legend" => Some(&mut self.legend),
            "padding" => Some(&mut self.padding),
            "title" => match self.title.as_mut() {
                Some(caption) => Some(caption),
                None => None,
            },
            "subtitle" => match self.subtitle.as_mut() {
                Some(caption) => Some(caption),
                None => None,
            },
            _ => None,
        }
    }
}
