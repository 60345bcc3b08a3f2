//! Mobile/desktop detection from the browser's user agent.
//!
//! TRADE-OFFS
//! ==========
//! User-agent sniffing is best-effort. Detection runs once per dialog and SSR
//! paths always report desktop so server rendering stays deterministic.

#[cfg(test)]
#[path = "device_test.rs"]
mod device_test;

use crate::state::status_dialog::DeviceKind;

const MOBILE_MARKERS: &[&str] = &[
    "Android",
    "iPhone",
    "iPad",
    "iPod",
    "BlackBerry",
    "IEMobile",
    "Opera Mini",
    "webOS",
    "Mobi",
];

/// Classify a user agent. iPadOS reports a desktop Safari agent, so a
/// touch-capable "Macintosh" is treated as mobile too.
pub fn classify_user_agent(user_agent: &str, max_touch_points: i32) -> DeviceKind {
    if MOBILE_MARKERS.iter().any(|marker| user_agent.contains(marker)) {
        return DeviceKind::Mobile;
    }
    if user_agent.contains("Macintosh") && max_touch_points > 1 {
        return DeviceKind::Mobile;
    }
    DeviceKind::Desktop
}

/// Resolve the device kind of the current browser.
pub fn detect_device() -> DeviceKind {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return DeviceKind::Desktop;
        };
        let navigator = window.navigator();
        navigator
            .user_agent()
            .map_or(DeviceKind::Desktop, |ua| classify_user_agent(&ua, navigator.max_touch_points()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        DeviceKind::Desktop
    }
}
