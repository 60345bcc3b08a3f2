//! Utility helpers shared across dialog components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (user agent, popup
//! windows) and encoding from component logic to keep them testable.

pub mod device;
pub mod popup_window;
pub mod qr_svg;
