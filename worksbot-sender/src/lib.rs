//! # worksbot-sender
//!
//! LINE WORKS push sender: settings loading, JWT-bearer token issuance, and
//! the per-recipient dispatch loop. Wire a [`MessageBot`] into
//! [`MessageDispatcher`] to send; [`TextMessageBot`] covers plain text.

pub mod config;
pub mod dispatch;
pub mod input;
pub mod jwt;
pub mod text_bot;
pub mod token;

pub use config::{normalize_pem, Settings, DEFAULT_SETTINGS_FILE};
pub use dispatch::MessageDispatcher;
pub use input::read_input;
pub use jwt::{build_assertion, AssertionClaims};
pub use text_bot::TextMessageBot;
pub use token::{mask_token, TokenIssuer, JWT_BEARER_GRANT_TYPE};

// Re-export core so bots only need this crate.
pub use worksbot_core::{
    BearerToken, DispatchOutcome, DispatchRecord, MessageBot, PushInput, Recipient, Result,
    WorksError,
};

use std::time::Duration;

/// Default per-request timeout for both endpoints.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client shared by issuer and dispatcher.
pub fn build_http_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .build()
        .map_err(|e| WorksError::Http(e.to_string()))
}
