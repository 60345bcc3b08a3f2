//! Host-supplied palette and strings.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both are pass-through data: loaded and validated here, rendered by the
//! components, never consulted by the dialog's state transitions.

pub mod translations;
pub mod ui_options;
