#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::state::popup::{LinkNavigation, PopupSlot};

#[test]
fn open_is_blocked_in_non_hydrate_tests() {
    assert!(BrowserPopups.open("https://auth.example/abc").is_none());
}

#[test]
fn app_link_click_falls_back_to_navigation() {
    let mut slot = PopupSlot::<BrowserWindow>::new();
    let nav = slot.open_app_link(&BrowserPopups, Some("https://auth.example/abc"));
    assert_eq!(nav, LinkNavigation::Proceed);
    assert!(!slot.is_open());
}
