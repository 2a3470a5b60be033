//! Shared test helpers: settings pointing at a mock server and a recording bot.

use async_trait::async_trait;
use std::sync::Mutex;
use worksbot_sender::{DispatchOutcome, MessageBot, Settings};

pub const TEST_PRIVATE_KEY: &str = include_str!("../fixtures/test_rsa_key.pem");

/// Settings wired to a mockito server for both endpoints.
pub fn mock_settings(server_url: &str) -> Settings {
    Settings {
        api_id: "api-test".to_string(),
        server_id: "srv.test".to_string(),
        bot_no: "7".to_string(),
        private_key: TEST_PRIVATE_KEY.to_string(),
        consumer_key: "consumer-test".to_string(),
        time_limit: 3000,
        token_url: format!("{}/token", server_url),
        push_url: format!("{}/push", server_url),
    }
}

/// Records every hook invocation so tests can assert order and counts.
#[derive(Default)]
pub struct RecordingBot {
    pub tokens: Mutex<Vec<String>>,
    pub sends: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl MessageBot for RecordingBot {
    fn build_message(&self, target_id: &str, text: &str) -> String {
        serde_json::json!({ "accountId": target_id, "text": text }).to_string()
    }

    async fn on_token_issued(&self, token: &str) {
        self.tokens.lock().unwrap().push(token.to_string());
    }

    async fn on_after_send(&self, target_id: &str, _token: &str, outcome: &DispatchOutcome) {
        self.sends
            .lock()
            .unwrap()
            .push((target_id.to_string(), outcome.to_string()));
    }
}
