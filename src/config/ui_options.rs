//! Color palette applied to the dialog and its collaborators.
//!
//! Each slot is an opaque CSS color value. The dialog never interprets them;
//! `css_variables` exposes every slot as a custom property on the dialog root
//! and the stylesheet picks what it needs.

#[cfg(test)]
#[path = "ui_options_test.rs"]
mod ui_options_test;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const KIND: &str = "ui options";

/// Named color slots for dialog chrome, QR code, app link and forms.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UiOptions {
    pub app_link_background_color: String,
    pub app_link_icon_foreground_color: String,
    pub app_link_label_foreground_color: String,
    pub qr_code_foreground_color: String,
    pub qr_code_error_foreground_color: String,
    pub verification_code_foreground_color: String,
    pub verification_code_value_foreground_color: String,
    pub form_method_title_foreground_color: String,
    pub form_method_description_foreground_color: String,
    pub prompt_foreground_color: String,
    pub prompt_description_foreground_color: String,
    pub prompt_error_foreground_color: String,
    pub form_button_background_color: String,
    pub form_button_foreground_color: String,
    pub form_button_hover_background_color: String,
    pub form_button_hover_foreground_color: String,
    pub form_button_disabled_background_color: String,
    pub form_button_disabled_foreground_color: String,
    pub form_field_label_foreground_color: String,
    pub form_field_error_foreground_color: String,
    pub form_input_background_color: String,
    pub form_input_foreground_color: String,
    pub option_card_background_color: String,
    pub option_card_hover_background_color: String,
    pub option_card_icon_foreground_color: String,
    pub option_card_label_foreground_color: String,
    pub option_card_description_foreground_color: String,
    pub qr_code_loader_color: String,
    pub qr_code_loader_active_color1: String,
    pub qr_code_loader_active_color2: String,
    pub tab_foreground_color: String,
    pub tab_hover_foreground_color: String,
    pub tab_active_foreground_color: String,
}

impl Default for UiOptions {
    fn default() -> Self {
        const INK: &str = "hsl(0deg 0% 15%)";
        const MUTED: &str = "hsl(0deg 0% 30%)";
        const PAPER: &str = "hsl(0deg 0% 95%)";
        const WHITE: &str = "hsl(0deg 0% 100%)";
        const ACCENT: &str = "hsl(290deg 100% 40%)";
        const DANGER: &str = "hsl(0deg 100% 40%)";

        Self {
            app_link_background_color: PAPER.to_owned(),
            app_link_icon_foreground_color: INK.to_owned(),
            app_link_label_foreground_color: INK.to_owned(),
            qr_code_foreground_color: INK.to_owned(),
            qr_code_error_foreground_color: "hsl(0deg 0% 75%)".to_owned(),
            verification_code_foreground_color: MUTED.to_owned(),
            verification_code_value_foreground_color: ACCENT.to_owned(),
            form_method_title_foreground_color: INK.to_owned(),
            form_method_description_foreground_color: MUTED.to_owned(),
            prompt_foreground_color: INK.to_owned(),
            prompt_description_foreground_color: MUTED.to_owned(),
            prompt_error_foreground_color: DANGER.to_owned(),
            form_button_background_color: INK.to_owned(),
            form_button_foreground_color: WHITE.to_owned(),
            form_button_hover_background_color: MUTED.to_owned(),
            form_button_hover_foreground_color: WHITE.to_owned(),
            form_button_disabled_background_color: "hsl(0deg 0% 45%)".to_owned(),
            form_button_disabled_foreground_color: "hsl(0deg 0% 90%)".to_owned(),
            form_field_label_foreground_color: INK.to_owned(),
            form_field_error_foreground_color: DANGER.to_owned(),
            form_input_background_color: PAPER.to_owned(),
            form_input_foreground_color: INK.to_owned(),
            option_card_background_color: PAPER.to_owned(),
            option_card_hover_background_color: "hsl(290deg 50% 95%)".to_owned(),
            option_card_icon_foreground_color: INK.to_owned(),
            option_card_label_foreground_color: INK.to_owned(),
            option_card_description_foreground_color: MUTED.to_owned(),
            qr_code_loader_color: "hsl(0deg 0% 40%)".to_owned(),
            qr_code_loader_active_color1: "hsl(0deg 0% 40%)".to_owned(),
            qr_code_loader_active_color2: INK.to_owned(),
            tab_foreground_color: "hsl(0deg 0% 45%)".to_owned(),
            tab_hover_foreground_color: INK.to_owned(),
            tab_active_foreground_color: ACCENT.to_owned(),
        }
    }
}

impl UiOptions {
    /// Parse a complete palette. Every slot must be present.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(|source| ConfigError::InvalidJson { kind: KIND, source })
    }

    /// Parse a partial palette on top of the defaults.
    pub fn with_overrides_json(raw: &str) -> Result<Self, ConfigError> {
        let overrides: serde_json::Value =
            serde_json::from_str(raw).map_err(|source| ConfigError::InvalidJson { kind: KIND, source })?;
        let serde_json::Value::Object(overrides) = overrides else {
            return Err(ConfigError::NotAnObject { kind: KIND });
        };

        let mut merged = serde_json::to_value(Self::default())
            .map_err(|source| ConfigError::InvalidJson { kind: KIND, source })?;
        if let serde_json::Value::Object(base) = &mut merged {
            base.extend(overrides);
        }
        serde_json::from_value(merged).map_err(|source| ConfigError::InvalidJson { kind: KIND, source })
    }

    /// Inline `style` value declaring every slot as `--ui-<kebab-name>`.
    pub fn css_variables(&self) -> String {
        let Ok(serde_json::Value::Object(slots)) = serde_json::to_value(self) else {
            return String::new();
        };
        slots
            .iter()
            .filter_map(|(name, value)| value.as_str().map(|color| (name, color)))
            .map(|(name, color)| format!("--ui-{}:{color};", camel_to_kebab(name)))
            .collect()
    }
}

fn camel_to_kebab(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 8);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else if ch.is_ascii_digit() && !out.ends_with(|c: char| c.is_ascii_digit()) {
            out.push('-');
            out.push(ch);
        } else {
            out.push(ch);
        }
    }
    out
}
