//! Extension hooks for concrete bots.
//!
//! The dispatcher drives a [`MessageBot`]: it asks it for the platform JSON
//! body and notifies it around token issuance and message delivery. Concrete
//! bots use the hooks to track conversation state, cache tokens, etc.

use crate::types::DispatchOutcome;
use async_trait::async_trait;

/// Extension points of the dispatch flow. `build_message` is the only
/// required method; the two hooks default to no-ops.
#[async_trait]
pub trait MessageBot: Send + Sync {
    /// Returns the literal JSON body the platform's push API expects for the
    /// given recipient and text. Pure data formatting.
    fn build_message(&self, target_id: &str, text: &str) -> String;

    /// Called exactly once after a non-empty bearer token is obtained.
    /// A point for recording session start or caching the token.
    async fn on_token_issued(&self, _token: &str) {}

    /// Called once per completed push request with the outcome
    /// (`SUCCESS` or `FAILURE:<code>`). Not called when no request
    /// completed for the recipient.
    async fn on_after_send(&self, _target_id: &str, _token: &str, _outcome: &DispatchOutcome) {}
}
