use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::schema::ComponentKind;

use super::Configurable;
use super::configurable::note_unusable_value;

/// Edge of the plot area an axis is rendered along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AxisPosition {
    Top,
    Right,
    #[default]
    Bottom,
    Left,
}

impl AxisPosition {
    fn parse(value: &Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }
}

/// Category or number axis of a cartesian chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisComponent {
    kind: ComponentKind,
    pub position: AxisPosition,
    pub rotation: Option<f64>,
    pub extras: IndexMap<String, Value>,
}

impl AxisComponent {
    #[must_use]
    pub fn new(kind: ComponentKind) -> Self {
        debug_assert!(kind.is_axis(), "axis component built with kind {kind}");
        Self {
            kind,
            position: AxisPosition::default(),
            rotation: None,
            extras: IndexMap::new(),
        }
    }
}

impl Configurable for AxisComponent {
    fn kind(&self) -> ComponentKind {
        self.kind
    }

    fn apply_value(&mut self, name: &str, value: &Value) {
        match name {
            "position" => match AxisPosition::parse(value) {
                Some(position) => self.position = position,
                None => note_unusable_value("axis", name, value),
            },
            "rotation" => match value.as_f64() {
                Some(degrees) => self.rotation = Some(degrees),
                None => note_unusable_value("axis", name, value),
            },
            _ => {
                self.extras.insert(name.to_owned(), value.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{AxisComponent, AxisPosition, Configurable};
    use crate::schema::ComponentKind;

    #[test]
    fn position_parses_from_config_strings() {
        let mut axis = AxisComponent::new(ComponentKind::Number);
        axis.apply_value("position", &json!("right"));
        assert_eq!(axis.position, AxisPosition::Right);

        axis.apply_value("position", &json!("upside_down"));
        assert_eq!(axis.position, AxisPosition::Right, "bad value leaves the field alone");
    }

    #[test]
    fn unrecognized_axis_options_are_kept_verbatim() {
        let mut axis = AxisComponent::new(ComponentKind::Category);
        axis.apply_value("label", &json!({ "rotation": 30 }));
        assert_eq!(axis.extras.get("label"), Some(&json!({ "rotation": 30 })));
    }
}
