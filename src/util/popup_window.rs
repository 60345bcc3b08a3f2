//! Browser-backed popup windows.
//!
//! Requires a browser environment; without `hydrate` every open reports a
//! blocked popup so callers take their navigation fallback.

#[cfg(test)]
#[path = "popup_window_test.rs"]
mod popup_window_test;

use crate::state::popup::{PopupOpener, PopupWindow};

#[cfg(feature = "hydrate")]
const POPUP_TARGET: &str = "_blank";

/// Opens popups through `window.open`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserPopups;

/// Handle to a window returned by `window.open`.
pub struct BrowserWindow {
    #[cfg(feature = "hydrate")]
    window: web_sys::Window,
}

impl PopupWindow for BrowserWindow {
    fn close(&self) {
        #[cfg(feature = "hydrate")]
        {
            let _ = self.window.close();
        }
    }
}

impl PopupOpener for BrowserPopups {
    type Window = BrowserWindow;

    fn open(&self, url: &str) -> Option<BrowserWindow> {
        #[cfg(feature = "hydrate")]
        {
            let window = web_sys::window()?
                .open_with_url_and_target(url, POPUP_TARGET)
                .ok()
                .flatten()?;
            Some(BrowserWindow { window })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
            None
        }
    }
}
