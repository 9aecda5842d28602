use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::options::is_defined;
use crate::schema::ComponentKind;

use super::Configurable;
use super::configurable::note_unusable_value;

/// Edge of the chart the legend docks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LegendPosition {
    Top,
    Right,
    #[default]
    Bottom,
    Left,
}

impl LegendPosition {
    fn parse(value: &Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }
}

/// Chart legend. Auto-created by every chart and reconfigured in place.
///
/// The published option table ([`LegendComponent::default_options`]) is the
/// closed set `update` overwrites: options present in the update win, every
/// other published option resets to its documented default. Extras survive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendComponent {
    pub enabled: bool,
    pub position: LegendPosition,
    pub item_padding_x: f64,
    pub item_padding_y: f64,
    pub marker_size: f64,
    pub marker_padding: f64,
    pub extras: IndexMap<String, Value>,
}

impl LegendComponent {
    #[must_use]
    pub fn new() -> Self {
        let mut legend = Self {
            enabled: true,
            position: LegendPosition::default(),
            item_padding_x: 0.0,
            item_padding_y: 0.0,
            marker_size: 0.0,
            marker_padding: 0.0,
            extras: IndexMap::new(),
        };
        for (name, default) in Self::default_options() {
            legend.apply_value(name, &default);
        }
        legend
    }

    /// The published option table: every recognized option name with its
    /// documented default value.
    #[must_use]
    pub fn default_options() -> Vec<(&'static str, Value)> {
        vec![
            ("enabled", json!(true)),
            ("position", json!("bottom")),
            ("item_padding_x", json!(16.0)),
            ("item_padding_y", json!(8.0)),
            ("marker_size", json!(14.0)),
            ("marker_padding", json!(8.0)),
        ]
    }

    /// Full overwrite of the published options: values present in
    /// `overrides` are applied, everything else resets to its default.
    /// Never a partial merge; unpublished extras are left untouched.
    pub fn overwrite_options(&mut self, overrides: &Map<String, Value>) {
        for (name, default) in Self::default_options() {
            match overrides.get(name) {
                Some(value) if is_defined(value) => self.apply_value(name, value),
                _ => self.apply_value(name, &default),
            }
        }
    }
}

impl Default for LegendComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Configurable for LegendComponent {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Legend
    }

    fn apply_value(&mut self, name: &str, value: &Value) {
        match name {
            "enabled" => match value.as_bool() {
                Some(enabled) => self.enabled = enabled,
                None => note_unusable_value("legend", name, value),
            },
            "position" => match LegendPosition::parse(value) {
                Some(position) => self.position = position,
                None => note_unusable_value("legend", name, value),
            },
            "item_padding_x" => match value.as_f64() {
                Some(padding) => self.item_padding_x = padding,
                None => note_unusable_value("legend", name, value),
            },
            "item_padding_y" => match value.as_f64() {
                Some(padding) => self.item_padding_y = padding,
                None => note_unusable_value("legend", name, value),
            },
            "marker_size" => match value.as_f64() {
                Some(size) => self.marker_size = size,
                None => note_unusable_value("legend", name, value),
            },
            "marker_padding" => match value.as_f64() {
                Some(padding) => self.marker_padding = padding,
                None => note_unusable_value("legend", name, value),
            },
            _ => {
                self.extras.insert(name.to_owned(), value.clone());
            }
        }
    }
}
