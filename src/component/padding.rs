use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::schema::ComponentKind;

use super::Configurable;
use super::configurable::note_unusable_value;

/// Outer chart padding in pixels. Charts auto-create one with uniform 20px;
/// a `padding` sub-configuration reconfigures it in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaddingComponent {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
    pub extras: IndexMap<String, Value>,
}

impl PaddingComponent {
    #[must_use]
    pub fn uniform(padding: f64) -> Self {
        Self {
            top: padding,
            right: padding,
            bottom: padding,
            left: padding,
            extras: IndexMap::new(),
        }
    }
}

impl Default for PaddingComponent {
    fn default() -> Self {
        Self::uniform(20.0)
    }
}

impl Configurable for PaddingComponent {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Padding
    }

    fn apply_value(&mut self, name: &str, value: &Value) {
        let slot = match name {
            "top" => &mut self.top,
            "right" => &mut self.right,
            "bottom" => &mut self.bottom,
            "left" => &mut self.left,
            _ => {
                self.extras.insert(name.to_owned(), value.clone());
                return;
            }
        };
        match value.as_f64() {
            Some(pixels) => *slot = pixels,
            None => note_unusable_value("padding", name, value),
        }
    }
}
