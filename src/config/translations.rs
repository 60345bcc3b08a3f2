//! Localized strings for the dialog.
//!
//! The JSON shape nests by component (`dialog`, `statusDialog.common`) so a
//! host application can ship one table per locale and deserialize it as is.

#[cfg(test)]
#[path = "translations_test.rs"]
mod translations_test;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::state::status_dialog::ToggleLabel;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TranslationTable {
    pub dialog: DialogTranslations,
    pub status_dialog: StatusDialogTranslations,
}

/// Strings for the generic modal chrome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DialogTranslations {
    pub close_button_title: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StatusDialogTranslations {
    pub common: StatusDialogCommon,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StatusDialogCommon {
    pub logo_alt_text: String,
    pub qr_code_prompt: String,
    pub app_link: String,
    pub show_qr_code_button: String,
    pub hide_qr_code_button: String,
}

impl TranslationTable {
    /// Built-in English strings.
    pub fn english() -> Self {
        Self {
            dialog: DialogTranslations {
                close_button_title: "Close".to_owned(),
            },
            status_dialog: StatusDialogTranslations {
                common: StatusDialogCommon {
                    logo_alt_text: "Logo".to_owned(),
                    qr_code_prompt: "Scan the QR code with your phone to sign in.".to_owned(),
                    app_link: "Open in app".to_owned(),
                    show_qr_code_button: "Show QR code".to_owned(),
                    hide_qr_code_button: "Hide QR code".to_owned(),
                },
            },
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(|source| ConfigError::InvalidJson {
            kind: "translation table",
            source,
        })
    }

    pub fn toggle_label(&self, label: ToggleLabel) -> &str {
        let common = &self.status_dialog.common;
        match label {
            ToggleLabel::Show => &common.show_qr_code_button,
            ToggleLabel::Hide => &common.hide_qr_code_button,
        }
    }
}

impl Default for TranslationTable {
    fn default() -> Self {
        Self::english()
    }
}
