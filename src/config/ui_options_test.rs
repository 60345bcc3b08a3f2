use super::*;

#[test]
fn default_palette_uses_dark_ink_for_qr_code() {
    let options = UiOptions::default();
    assert_eq!(options.qr_code_foreground_color, "hsl(0deg 0% 15%)");
    assert_eq!(options.qr_code_error_foreground_color, "hsl(0deg 0% 75%)");
    assert_eq!(options.tab_active_foreground_color, "hsl(290deg 100% 40%)");
}

#[test]
fn complete_palette_parses_from_camel_case_json() {
    let mut value = serde_json::to_value(UiOptions::default()).unwrap();
    value["qrCodeForegroundColor"] = serde_json::json!("#000000");
    let options = UiOptions::from_json(&value.to_string()).unwrap();
    assert_eq!(options.qr_code_foreground_color, "#000000");
    assert_eq!(options.app_link_background_color, "hsl(0deg 0% 95%)");
}

#[test]
fn palette_missing_a_slot_is_rejected() {
    let err = UiOptions::from_json(r##"{"qrCodeForegroundColor":"#000"}"##).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidJson { kind: "ui options", .. }));
    assert!(err.to_string().contains("missing field"));
}

#[test]
fn overrides_merge_onto_defaults() {
    let options =
        UiOptions::with_overrides_json(r##"{"qrCodeForegroundColor":"#112233","tabForegroundColor":"red"}"##)
            .unwrap();
    assert_eq!(options.qr_code_foreground_color, "#112233");
    assert_eq!(options.tab_foreground_color, "red");
    assert_eq!(options.form_button_foreground_color, UiOptions::default().form_button_foreground_color);
}

#[test]
fn overrides_reject_unknown_slots() {
    let err = UiOptions::with_overrides_json(r#"{"qrCodeForegroundColour":"red"}"#).unwrap_err();
    assert!(err.to_string().contains("unknown field"));
}

#[test]
fn overrides_must_be_an_object() {
    let err = UiOptions::with_overrides_json("[1, 2]").unwrap_err();
    assert!(matches!(err, ConfigError::NotAnObject { .. }));
}

#[test]
fn css_variables_declare_every_slot_in_kebab_case() {
    let css = UiOptions::default().css_variables();
    assert_eq!(css.matches("--ui-").count(), 33);
    assert!(css.contains("--ui-qr-code-foreground-color:hsl(0deg 0% 15%);"));
    assert!(css.contains("--ui-qr-code-loader-active-color-1:hsl(0deg 0% 40%);"));
    assert!(css.contains("--ui-qr-code-loader-active-color-2:hsl(0deg 0% 15%);"));
}

#[test]
fn camel_to_kebab_splits_words_and_numbers() {
    assert_eq!(camel_to_kebab("appLinkBackgroundColor"), "app-link-background-color");
    assert_eq!(camel_to_kebab("activeColor12"), "active-color-12");
}
