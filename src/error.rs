//! Error types shared by configuration loading and dialog rendering.
//!
//! ERROR HANDLING
//! ==============
//! None of these reach the end user as text. Configuration errors surface at
//! load time to the embedding application; render-time failures degrade to a
//! placeholder and a console warning.

/// Failure to load a palette or translation table from JSON.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {kind} json: {source}")]
    InvalidJson {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("{kind} overrides must be a json object")]
    NotAnObject { kind: &'static str },
}

/// A status string other than `waiting`, `success` or `error`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status type: {0:?}")]
pub struct ParseStatusError(pub String);

/// Data the QR encoder cannot fit into any symbol version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum QrError {
    #[error("qr encode failed: {0}")]
    Encode(#[from] qrcode::types::QrError),
}
