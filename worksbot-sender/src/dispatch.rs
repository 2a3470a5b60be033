//! Message dispatch: one authenticated POST per recipient, failures isolated.

use tracing::{error, info, warn};
use worksbot_core::{DispatchOutcome, DispatchRecord, MessageBot, PushInput, Result, WorksError};

use crate::config::Settings;
use crate::token::{mask_token, TokenIssuer};

/// Drives the per-recipient push loop.
///
/// Each iteration issues a fresh token (faithful to the platform flow; see
/// DESIGN.md on reuse), builds the body through the bot, POSTs it, and
/// reports the outcome through the after-send hook. One recipient's failure
/// never aborts the loop.
pub struct MessageDispatcher<B: MessageBot> {
    settings: Settings,
    issuer: TokenIssuer,
    client: reqwest::Client,
    bot: B,
}

impl<B: MessageBot> MessageDispatcher<B> {
    pub fn new(settings: Settings, client: reqwest::Client, bot: B) -> Self {
        let issuer = TokenIssuer::new(settings.clone(), client.clone());
        Self {
            settings,
            issuer,
            client,
            bot,
        }
    }

    pub fn bot(&self) -> &B {
        &self.bot
    }

    /// Pushes the shared message text to every recipient, in list order.
    ///
    /// Never fails as a whole: per-recipient errors are logged, recorded as
    /// `Skipped`, and the loop continues. The returned records let callers
    /// detect partial failure without parsing logs.
    pub async fn run(&self, input: &PushInput) -> Vec<DispatchRecord> {
        let mut records = Vec::with_capacity(input.send_to.len());

        for recipient in &input.send_to {
            info!(target = %recipient.id, "dispatching message");
            let outcome = match self.send_one(&recipient.id, &input.message).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    error!(target = %recipient.id, error = %e, "dispatch failed, continuing");
                    DispatchOutcome::Skipped
                }
            };
            records.push(DispatchRecord {
                recipient: recipient.id.clone(),
                outcome,
            });
        }

        records
    }

    /// One recipient: token, body, POST, hook. Errors bubble to `run`,
    /// which records them as `Skipped`.
    async fn send_one(&self, target_id: &str, text: &str) -> Result<DispatchOutcome> {
        let token = self.issuer.issue_token(&self.bot).await?;
        if token.is_empty() {
            warn!(target = %target_id, "no access token, skipping recipient");
            return Ok(DispatchOutcome::Skipped);
        }

        let body = self.bot.build_message(target_id, text);
        let url = self.settings.push_endpoint();

        let response = self
            .client
            .post(&url)
            .header("consumerKey", &self.settings.consumer_key)
            .header("authorization", format!("Bearer {}", token.value))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| WorksError::Http(e.to_string()))?;

        let status = response.status().as_u16();
        let outcome = if status == 200 {
            DispatchOutcome::Success
        } else {
            DispatchOutcome::Failure(status)
        };

        info!(
            target = %target_id,
            token = %mask_token(&token.value),
            outcome = %outcome,
            "push request completed"
        );
        self.bot.on_after_send(target_id, &token.value, &outcome).await;

        Ok(outcome)
    }
}
