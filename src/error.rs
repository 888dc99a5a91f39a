//! Error types for overlay operations

use thiserror::Error;

/// Errors raised by the overlay core and its host-side tasks
#[derive(Debug, Error)]
pub enum OverlayError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("failed to lock {0}: lock poisoned")]
    StatePoisoned(&'static str),

    #[error("i/o error")]
    Io(#[from] std::io::Error),

    #[error("failed to encode frame")]
    Serialize(#[from] serde_json::Error),
}
