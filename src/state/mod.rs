//! Dialog state that is independent of the rendering layer.
//!
//! ARCHITECTURE
//! ============
//! Components read these plain types through signals; keeping them free of
//! signals and `web-sys` lets the transition rules run in native tests.

pub mod popup;
pub mod status_dialog;
