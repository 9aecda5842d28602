use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::schema::ComponentKind;

use super::Configurable;
use super::configurable::note_unusable_value;

/// Chart title/subtitle text block. Both chart caption slots build this
/// kind; only their descriptor defaults differ.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaptionComponent {
    pub text: String,
    pub enabled: bool,
    pub font_size: f64,
    pub font_weight: Option<String>,
    pub extras: IndexMap<String, Value>,
}

impl CaptionComponent {
    #[must_use]
    pub fn new() -> Self {
        Self {
            text: String::new(),
            enabled: true,
            font_size: 14.0,
            font_weight: None,
            extras: IndexMap::new(),
        }
    }
}

impl Default for CaptionComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Configurable for CaptionComponent {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Caption
    }

    fn apply_value(&mut self, name: &str, value: &Value) {
        match name {
            "text" => match value.as_str() {
                Some(text) => self.text = text.to_owned(),
                None => note_unusable_value("caption", name, value),
            },
            "enabled" => match value.as_bool() {
                Some(enabled) => self.enabled = enabled,
                None => note_unusable_value("caption", name, value),
            },
            "font_size" => match value.as_f64() {
                Some(size) => self.font_size = size,
                None => note_unusable_value("caption", name, value),
            },
            "font_weight" => match value.as_str() {
                Some(weight) => self.font_weight = Some(weight.to_owned()),
                None => note_unusable_value("caption", name, value),
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

    use super::{CaptionComponent, Configurable};

    #[test]
    fn recognized_options_land_in_typed_fields() {
        let mut caption = CaptionComponent::new();
        caption.apply_value("text", &json!("Monthly revenue"));
        caption.apply_value("font_size", &json!(18));
        caption.apply_value("font_weight", &json!("bold"));
        caption.apply_value("color", &json!("#444"));

        assert_eq!(caption.text, "Monthly revenue");
        assert_eq!(caption.font_size, 18.0);
        assert_eq!(caption.font_weight.as_deref(), Some("bold"));
        assert_eq!(caption.extras.get("color"), Some(&json!("#444")));
    }
}
