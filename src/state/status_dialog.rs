//! Presentation state for the authentication status dialog.
//!
//! DESIGN
//! ======
//! Everything the dialog renders is derived on read from four inputs: the
//! authentication URL, the status, the forced-QR flag and the user's toggle.
//! Derived values are never stored, so a prop change cannot leave them stale.

#[cfg(test)]
#[path = "status_dialog_test.rs"]
mod status_dialog_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseStatusError;

/// Status reported by the upstream authentication flow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayStatus {
    #[default]
    Waiting,
    Success,
    Error,
}

impl DisplayStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Waiting => "waiting",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// The pending indicator is only shown while the flow is still running.
    pub fn shows_pending_indicator(self) -> bool {
        self == Self::Waiting
    }

    /// CSS classes for the status message line.
    pub fn message_class(self) -> &'static str {
        match self {
            Self::Waiting => "status-dialog__message status-dialog__message--waiting",
            Self::Success => "status-dialog__message status-dialog__message--success",
            Self::Error => "status-dialog__message status-dialog__message--error",
        }
    }
}

impl fmt::Display for DisplayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "waiting" => Ok(Self::Waiting),
            "success" => Ok(Self::Success),
            "error" => Ok(Self::Error),
            other => Err(ParseStatusError(other.to_owned())),
        }
    }
}

/// Render variant for the consuming device.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeviceKind {
    #[default]
    Desktop,
    /// QR codes are useless on the device that would scan them, so the
    /// dialog offers an app link instead.
    Mobile,
}

/// Label state of the QR toggle button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleLabel {
    Show,
    Hide,
}

/// QR visibility inputs: the forced flag and the user's preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QrCodeToggle {
    pub always_show: bool,
    pub user_show: bool,
}

impl QrCodeToggle {
    /// Whether the QR (or app-link) block replaces the title block.
    pub fn is_visible(self, url_present: bool) -> bool {
        url_present && (self.always_show || self.user_show)
    }

    /// Whether the user may toggle visibility at all.
    pub fn is_toggle_allowed(self, url_present: bool) -> bool {
        url_present && !self.always_show
    }

    /// Label for the toggle button, or `None` when the button is hidden.
    pub fn toggle_label(self, url_present: bool) -> Option<ToggleLabel> {
        if !self.is_toggle_allowed(url_present) {
            return None;
        }
        Some(if self.user_show { ToggleLabel::Hide } else { ToggleLabel::Show })
    }
}

/// The mutually exclusive main block of the dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DialogBody {
    TitleAndLogo,
    QrCode { data: String },
    AppLink { link: String },
}

/// Everything the dialog needs to decide what to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DialogLayout {
    pub body: DialogBody,
    pub status: DisplayStatus,
    pub pending_indicator: bool,
    pub toggle: Option<ToggleLabel>,
}

impl DialogLayout {
    pub fn resolve(
        authentication_url: Option<&str>,
        status: DisplayStatus,
        qr: QrCodeToggle,
        device: DeviceKind,
    ) -> Self {
        let url_present = authentication_url.is_some();
        let body = match authentication_url {
            Some(url) if qr.is_visible(true) => match device {
                DeviceKind::Mobile => DialogBody::AppLink { link: url.to_owned() },
                DeviceKind::Desktop => DialogBody::QrCode { data: url.to_owned() },
            },
            _ => DialogBody::TitleAndLogo,
        };

        Self {
            body,
            status,
            pending_indicator: status.shows_pending_indicator(),
            toggle: qr.toggle_label(url_present),
        }
    }
}
