//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `status_dialog` composes the leaf components; the leaves know nothing about
//! authentication and only render what they are handed.

pub mod app_link_button;
pub mod dialog;
pub mod pending_pulser;
pub mod qr_code;
pub mod status_dialog;
