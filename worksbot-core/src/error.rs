//! Error types for the sender core.
//!
//! [`WorksError`] is the top-level error; nothing here is fatal to a dispatch
//! run — the dispatcher catches per-recipient errors and keeps going.

use thiserror::Error;

/// Top-level error for worksbot (config, JWT signing, auth, HTTP, input, IO).
#[derive(Error, Debug)]
pub enum WorksError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("JWT signing error: {0}")]
    Jwt(String),

    #[error("Token endpoint returned status {0}")]
    Auth(u16),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Input error: {0}")]
    Input(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for core operations; uses [`WorksError`].
pub type Result<T> = std::result::Result<T, WorksError>;
