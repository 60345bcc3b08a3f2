use super::*;

const URL: &str = "https://auth.example/abc";

// =============================================================
// DisplayStatus
// =============================================================

#[test]
fn display_status_default_is_waiting() {
    assert_eq!(DisplayStatus::default(), DisplayStatus::Waiting);
}

#[test]
fn display_status_parses_lowercase_names() {
    assert_eq!("waiting".parse::<DisplayStatus>(), Ok(DisplayStatus::Waiting));
    assert_eq!("success".parse::<DisplayStatus>(), Ok(DisplayStatus::Success));
    assert_eq!("error".parse::<DisplayStatus>(), Ok(DisplayStatus::Error));
}

#[test]
fn display_status_rejects_unknown_names() {
    assert_eq!(
        "Waiting".parse::<DisplayStatus>(),
        Err(ParseStatusError("Waiting".to_owned()))
    );
    assert_eq!("".parse::<DisplayStatus>(), Err(ParseStatusError(String::new())));
}

#[test]
fn display_status_serializes_as_lowercase_string() {
    assert_eq!(serde_json::to_string(&DisplayStatus::Success).unwrap(), "\"success\"");
    let parsed: DisplayStatus = serde_json::from_str("\"error\"").unwrap();
    assert_eq!(parsed, DisplayStatus::Error);
    assert_eq!(DisplayStatus::Waiting.to_string(), "waiting");
}

#[test]
fn pending_indicator_only_while_waiting() {
    assert!(DisplayStatus::Waiting.shows_pending_indicator());
    assert!(!DisplayStatus::Success.shows_pending_indicator());
    assert!(!DisplayStatus::Error.shows_pending_indicator());
}

#[test]
fn message_class_carries_status_modifier() {
    assert!(DisplayStatus::Waiting.message_class().ends_with("--waiting"));
    assert!(DisplayStatus::Success.message_class().ends_with("--success"));
    assert!(DisplayStatus::Error.message_class().ends_with("--error"));
}

// =============================================================
// QrCodeToggle truth table
// =============================================================

#[test]
fn qr_visibility_truth_table() {
    // (url_present, always_show, user_show) -> (visible, toggle_allowed)
    let cases = [
        (false, false, false, false, false),
        (false, false, true, false, false),
        (false, true, false, false, false),
        (false, true, true, false, false),
        (true, false, false, false, true),
        (true, false, true, true, true),
        (true, true, false, true, false),
        (true, true, true, true, false),
    ];
    for (url_present, always_show, user_show, visible, toggle_allowed) in cases {
        let qr = QrCodeToggle { always_show, user_show };
        assert_eq!(
            qr.is_visible(url_present),
            visible,
            "visible for url={url_present} always={always_show} user={user_show}"
        );
        assert_eq!(
            qr.is_toggle_allowed(url_present),
            toggle_allowed,
            "toggle for url={url_present} always={always_show} user={user_show}"
        );
    }
}

#[test]
fn toggle_label_follows_user_preference() {
    let hidden = QrCodeToggle { always_show: false, user_show: false };
    let shown = QrCodeToggle { always_show: false, user_show: true };
    assert_eq!(hidden.toggle_label(true), Some(ToggleLabel::Show));
    assert_eq!(shown.toggle_label(true), Some(ToggleLabel::Hide));
}

#[test]
fn toggle_label_absent_without_url_or_when_forced() {
    let forced = QrCodeToggle { always_show: true, user_show: true };
    assert_eq!(forced.toggle_label(true), None);
    assert_eq!(QrCodeToggle::default().toggle_label(false), None);
}

// =============================================================
// DialogLayout
// =============================================================

#[test]
fn waiting_desktop_default_shows_title_pending_and_show_toggle() {
    let layout = DialogLayout::resolve(
        Some(URL),
        DisplayStatus::Waiting,
        QrCodeToggle::default(),
        DeviceKind::Desktop,
    );
    assert_eq!(layout.body, DialogBody::TitleAndLogo);
    assert!(layout.pending_indicator);
    assert_eq!(layout.toggle, Some(ToggleLabel::Show));
}

#[test]
fn forced_qr_on_desktop_shows_qr_code_without_toggle() {
    let layout = DialogLayout::resolve(
        Some(URL),
        DisplayStatus::Waiting,
        QrCodeToggle { always_show: true, user_show: false },
        DeviceKind::Desktop,
    );
    assert_eq!(layout.body, DialogBody::QrCode { data: URL.to_owned() });
    assert_eq!(layout.toggle, None);
}

#[test]
fn visible_qr_on_mobile_becomes_app_link() {
    let layout = DialogLayout::resolve(
        Some(URL),
        DisplayStatus::Waiting,
        QrCodeToggle { always_show: false, user_show: true },
        DeviceKind::Mobile,
    );
    assert_eq!(layout.body, DialogBody::AppLink { link: URL.to_owned() });
    assert_eq!(layout.toggle, Some(ToggleLabel::Hide));
}

#[test]
fn absent_url_always_shows_title_even_when_forced() {
    let layout = DialogLayout::resolve(
        None,
        DisplayStatus::Error,
        QrCodeToggle { always_show: true, user_show: true },
        DeviceKind::Mobile,
    );
    assert_eq!(layout.body, DialogBody::TitleAndLogo);
    assert!(!layout.pending_indicator);
    assert_eq!(layout.toggle, None);
}

#[test]
fn success_status_drops_pending_indicator_but_keeps_body() {
    let layout = DialogLayout::resolve(
        Some(URL),
        DisplayStatus::Success,
        QrCodeToggle { always_show: false, user_show: true },
        DeviceKind::Desktop,
    );
    assert_eq!(layout.status, DisplayStatus::Success);
    assert!(!layout.pending_indicator);
    assert_eq!(layout.body, DialogBody::QrCode { data: URL.to_owned() });
}
