//! Token issuance: exchanges a signed JWT assertion for a bearer token.

use chrono::Utc;
use tracing::{info, warn};
use worksbot_core::{BearerToken, MessageBot, Result, WorksError};

use crate::config::Settings;
use crate::jwt;

/// Fixed grant type of the JWT-bearer exchange.
pub const JWT_BEARER_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Masks a token for safe logging: first 7 chars + "***" + last 4 chars.
/// If 11 chars or fewer, returns "***" to avoid leaking any part of the
/// token. Counts chars, not bytes, so non-ASCII token values never split
/// a code point.
pub fn mask_token(token: &str) -> String {
    let len = token.chars().count();
    if len <= 11 {
        "***".to_string()
    } else {
        let head: String = token.chars().take(7).collect();
        let tail: String = token.chars().skip(len - 4).collect();
        format!("{}***{}", head, tail)
    }
}

/// Exchanges a freshly signed assertion for a short-lived bearer token.
///
/// Sequential, one blocking exchange per call; the dispatcher decides how
/// often to call it.
pub struct TokenIssuer {
    settings: Settings,
    client: reqwest::Client,
}

impl TokenIssuer {
    pub fn new(settings: Settings, client: reqwest::Client) -> Self {
        Self { settings, client }
    }

    /// Signs an assertion, POSTs it to the token endpoint, and returns the
    /// bearer token from the response.
    ///
    /// Non-200 responses are an authentication error. A 200 response without
    /// an `access_token` field yields an empty token (callers skip dispatch
    /// for those) and does not fire the hook. On success the bot's
    /// `on_token_issued` hook runs exactly once.
    pub async fn issue_token(&self, bot: &dyn MessageBot) -> Result<BearerToken> {
        let issued_at = Utc::now().timestamp();
        let expires_at = issued_at + self.settings.time_limit;

        let assertion = jwt::build_assertion(&self.settings, issued_at, expires_at)?;

        let url = self.settings.token_endpoint();
        info!(url = %url, "requesting access token");

        let response = self
            .client
            .post(&url)
            .form(&[
                ("grant_type", JWT_BEARER_GRANT_TYPE),
                ("assertion", assertion.as_str()),
            ])
            .send()
            .await
            .map_err(|e| WorksError::Http(e.to_string()))?;

        let status = response.status();
        if status.as_u16() != 200 {
            return Err(WorksError::Auth(status.as_u16()));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| WorksError::Http(format!("token response body: {}", e)))?;

        let token = match body.get("access_token").and_then(|t| t.as_str()) {
            Some(t) => t.to_string(),
            None => {
                warn!("token response has no access_token field, skipping dispatch");
                return Ok(BearerToken::empty(issued_at, expires_at));
            }
        };

        info!(token = %mask_token(&token), "access token obtained");
        bot.on_token_issued(&token).await;

        Ok(BearerToken {
            value: token,
            issued_at,
            expires_at,
        })
    }
}
