//! Ownership of the popup window opened from the mobile app link.
//!
//! SYSTEM CONTEXT
//! ==============
//! Tapping the app link opens the authentication URL in a new window. That
//! window belongs to this dialog instance and must be closed when the URL it
//! points at is replaced, when the flow stops waiting, or when the dialog
//! goes away. The user closing it directly is not observed.
//!
//! INVARIANTS
//! ==========
//! - At most one window is held at a time.
//! - A window is taken out of the slot before `close` is called on it, so a
//!   closed handle is never reachable again.
//! - Release is idempotent; coinciding triggers close the window once.

#[cfg(test)]
#[path = "popup_test.rs"]
mod popup_test;

use std::fmt;

use crate::state::status_dialog::DisplayStatus;

/// A window that can be asked to close.
pub trait PopupWindow {
    fn close(&self);
}

/// Opens popup windows. `None` means the host refused (popup blocker).
pub trait PopupOpener {
    type Window: PopupWindow;

    fn open(&self, url: &str) -> Option<Self::Window>;
}

/// What the app-link click should do with its default navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkNavigation {
    Proceed,
    Suppress,
}

/// Reason a popup was closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseTrigger {
    UrlChanged,
    StatusLeftWaiting,
    Replaced,
    Teardown,
}

impl fmt::Display for ReleaseTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::UrlChanged => "authentication url changed",
            Self::StatusLeftWaiting => "status left waiting",
            Self::Replaced => "replaced by a new popup",
            Self::Teardown => "dialog torn down",
        })
    }
}

/// Holds the popup window for one dialog instance.
pub struct PopupSlot<W: PopupWindow> {
    window: Option<W>,
}

impl<W: PopupWindow> PopupSlot<W> {
    pub fn new() -> Self {
        Self { window: None }
    }

    pub fn is_open(&self) -> bool {
        self.window.is_some()
    }

    /// Close and forget the held window. Returns whether a close was issued.
    pub fn release(&mut self, trigger: ReleaseTrigger) -> bool {
        let Some(window) = self.window.take() else {
            return false;
        };
        window.close();
        leptos::logging::log!("popup closed: {trigger}");
        true
    }

    /// Any change of the authentication URL invalidates the popup, even when
    /// the new URL is present.
    pub fn authentication_url_changed(&mut self, previous: Option<&str>, next: Option<&str>) -> bool {
        if previous == next {
            return false;
        }
        self.release(ReleaseTrigger::UrlChanged)
    }

    pub fn status_changed(&mut self, previous: DisplayStatus, next: DisplayStatus) -> bool {
        if previous == next || next == DisplayStatus::Waiting {
            return false;
        }
        self.release(ReleaseTrigger::StatusLeftWaiting)
    }

    pub fn teardown(&mut self) -> bool {
        self.release(ReleaseTrigger::Teardown)
    }

    /// Handle an app-link click by opening `url` in a popup.
    ///
    /// Navigation is suppressed only when the popup actually opened; a blocked
    /// popup or a missing URL falls back to the link's own navigation.
    pub fn open_app_link<O>(&mut self, opener: &O, url: Option<&str>) -> LinkNavigation
    where
        O: PopupOpener<Window = W>,
    {
        let Some(url) = url else {
            return LinkNavigation::Proceed;
        };

        self.release(ReleaseTrigger::Replaced);
        match opener.open(url) {
            Some(window) => {
                self.window = Some(window);
                LinkNavigation::Suppress
            }
            None => {
                leptos::logging::warn!("popup blocked, falling back to link navigation: {url}");
                LinkNavigation::Proceed
            }
        }
    }
}

impl<W: PopupWindow> Default for PopupSlot<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: PopupWindow> Drop for PopupSlot<W> {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// A popup slot plus the last URL and status it has seen.
///
/// The dialog's effects feed every observed value through here; only real
/// changes reach the slot, and the initial values never release anything.
pub struct PopupLifecycle<W: PopupWindow> {
    slot: PopupSlot<W>,
    last_url: Option<String>,
    last_status: DisplayStatus,
}

impl<W: PopupWindow> PopupLifecycle<W> {
    pub fn new(url: Option<String>, status: DisplayStatus) -> Self {
        Self { slot: PopupSlot::new(), last_url: url, last_status: status }
    }

    pub fn is_open(&self) -> bool {
        self.slot.is_open()
    }

    pub fn observe_url(&mut self, next: Option<&str>) -> bool {
        if self.last_url.as_deref() == next {
            return false;
        }
        let released = self.slot.authentication_url_changed(self.last_url.as_deref(), next);
        self.last_url = next.map(str::to_owned);
        released
    }

    pub fn observe_status(&mut self, next: DisplayStatus) -> bool {
        if self.last_status == next {
            return false;
        }
        let released = self.slot.status_changed(self.last_status, next);
        self.last_status = next;
        released
    }

    pub fn open_app_link<O>(&mut self, opener: &O, url: Option<&str>) -> LinkNavigation
    where
        O: PopupOpener<Window = W>,
    {
        self.slot.open_app_link(opener, url)
    }

    pub fn teardown(&mut self) -> bool {
        self.slot.teardown()
    }
}
