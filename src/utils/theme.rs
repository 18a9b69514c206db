use serde::{Deserialize, Serialize};

/// Colors the host platform exposes for the current client theme.
///
/// Any of them may be missing (older clients, or running outside the host).
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct ThemeParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_text_color: Option<String>,
}

impl ThemeParams {
    /// Palette used when the host reports nothing
    pub fn light() -> Self {
        Self {
            bg_color: Some("#ffffff".to_string()),
            text_color: Some("#000000".to_string()),
            button_color: Some("#2481cc".to_string()),
            button_text_color: Some("#ffffff".to_string()),
        }
    }

    /// Fill every missing color from `fallback`.
    pub fn or(self, fallback: &ThemeParams) -> Self {
        Self {
            bg_color: self.bg_color.or_else(|| fallback.bg_color.clone()),
            text_color: self.text_color.or_else(|| fallback.text_color.clone()),
            button_color: self.button_color.or_else(|| fallback.button_color.clone()),
            button_text_color: self
                .button_text_color
                .or_else(|| fallback.button_text_color.clone()),
        }
    }

    pub fn css_variables(&self) -> Vec<(&'static str, &str)> {
        [
            ("--tg-theme-bg-color", &self.bg_color),
            ("--tg-theme-text-color", &self.text_color),
            ("--tg-theme-button-color", &self.button_color),
            ("--tg-theme-button-text-color", &self.button_text_color),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.as_deref().map(|v| (name, v)))
        .collect()
    }

    /// Inline style declaring the theme variables on the root element
    pub fn style(&self) -> String {
        self.css_variables()
            .into_iter()
            .map(|(name, value)| format!("{}: {};", name, value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
