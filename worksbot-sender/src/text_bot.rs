//! Plain text bot: the simplest concrete [`MessageBot`].

use async_trait::async_trait;
use tracing::info;
use worksbot_core::{DispatchOutcome, MessageBot};

use crate::token::mask_token;

/// Sends a plain text message; hooks just log. The default bot for the CLI.
pub struct TextMessageBot {
    bot_no: String,
}

impl TextMessageBot {
    pub fn new(bot_no: impl Into<String>) -> Self {
        Self {
            bot_no: bot_no.into(),
        }
    }
}

#[async_trait]
impl MessageBot for TextMessageBot {
    /// LINE WORKS v1 text push body. Must be sent as a literal JSON body;
    /// the push endpoint rejects form-encoded key-value pairs.
    fn build_message(&self, target_id: &str, text: &str) -> String {
        serde_json::json!({
            "botNo": self.bot_no,
            "accountId": target_id,
            "content": {
                "type": "text",
                "text": text,
            },
        })
        .to_string()
    }

    async fn on_token_issued(&self, token: &str) {
        info!(token = %mask_token(token), "session token issued");
    }

    async fn on_after_send(&self, target_id: &str, token: &str, outcome: &DispatchOutcome) {
        info!(
            target = %target_id,
            token = %mask_token(token),
            outcome = %outcome,
            "message send finished"
        );
    }
}
