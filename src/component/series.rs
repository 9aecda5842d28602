use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::schema::ComponentKind;

use super::Configurable;
use super::configurable::note_unusable_value;

/// One data series of any kind (line, column, bar, area, scatter, pie).
///
/// Key bindings are shape-only: which data columns feed the series. Their
/// values are never validated here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesComponent {
    kind: ComponentKind,
    pub visible: bool,
    pub show_in_legend: bool,
    pub title: Option<String>,
    pub data: Option<Value>,
    pub x_key: String,
    pub y_key: String,
    pub angle_key: String,
    pub label_key: String,
    pub extras: IndexMap<String, Value>,
}

impl SeriesComponent {
    #[must_use]
    pub fn new(kind: ComponentKind) -> Self {
        debug_assert!(kind.is_series(), "series component built with kind {kind}");
        Self {
            kind,
            visible: true,
            show_in_legend: true,
            title: None,
            data: None,
            x_key: String::new(),
            y_key: String::new(),
            angle_key: String::new(),
            label_key: String::new(),
            extras: IndexMap::new(),
        }
    }
}

impl Configurable for SeriesComponent {
    fn kind(&self) -> ComponentKind {
        self.kind
    }

    fn apply_value(&mut self, name: &str, value: &Value) {
        match name {
            "visible" => match value.as_bool() {
                Some(visible) => self.visible = visible,
                None => note_unusable_value("series", name, value),
            },
            "show_in_legend" => match value.as_bool() {
                Some(show) => self.show_in_legend = show,
                None => note_unusable_value("series", name, value),
            },
            "title" => match value.as_str() {
                Some(title) => self.title = Some(title.to_owned()),
                None => note_unusable_value("series", name, value),
            },
            "data" => self.data = Some(value.clone()),
            "x_key" | "y_key" | "angle_key" | "label_key" => match value.as_str() {
                Some(key) => {
                    let slot = match name {
                        "x_key" => &mut self.x_key,
                        "y_key" => &mut self.y_key,
                        "angle_key" => &mut self.angle_key,
                        _ => &mut self.label_key,
                    };
                    *slot = key.to_owned();
                }
                None => note_unusable_value("series", name, value),
            },
            _ => {
                self.extras.insert(name.to_owned(), value.clone());
            }
        }
    }
}
