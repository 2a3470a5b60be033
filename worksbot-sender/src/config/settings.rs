//! Settings file: service-account credentials and endpoint URLs. Loaded from TOML.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Default settings file name, next to the working directory.
pub const DEFAULT_SETTINGS_FILE: &str = "worksbot.toml";

/// Token endpoint template; `{apiId}` is substituted at request time.
pub const DEFAULT_TOKEN_URL: &str = "https://auth.worksmobile.com/b/{apiId}/server/token";

/// Push endpoint template; `{apiId}` and `{botNo}` are substituted at request time.
pub const DEFAULT_PUSH_URL: &str =
    "https://apis.worksmobile.com/r/{apiId}/message/v1/bot/{botNo}/message/push";

/// Token lifetime in seconds when the file does not specify one.
pub const DEFAULT_TIME_LIMIT_SECS: i64 = 3000;

/// Service-account credentials plus endpoint templates. Loaded once at
/// startup and immutable thereafter; shared read-only with the issuer and
/// dispatcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// API ID, substituted into both endpoint URLs.
    pub api_id: String,
    /// Server ID; becomes the `iss` claim of the JWT assertion.
    pub server_id: String,
    /// Bot number, substituted into the push URL.
    pub bot_no: String,
    /// PEM private key. May be stored with literal `\n` escapes and
    /// arbitrary line wrapping; normalized on load.
    pub private_key: String,
    /// Consumer key header value for the push endpoint.
    pub consumer_key: String,
    /// Token lifetime in seconds (`exp - iat`).
    pub time_limit: i64,
    /// Token endpoint URL template. Tests point this at a mock server.
    pub token_url: String,
    /// Push endpoint URL template. Tests point this at a mock server.
    pub push_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_id: String::new(),
            server_id: String::new(),
            bot_no: String::new(),
            private_key: String::new(),
            consumer_key: String::new(),
            time_limit: DEFAULT_TIME_LIMIT_SECS,
            token_url: DEFAULT_TOKEN_URL.to_string(),
            push_url: DEFAULT_PUSH_URL.to_string(),
        }
    }
}

impl Settings {
    /// Reads and parses the settings file, normalizing the private key.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let mut settings: Settings = toml::from_str(&raw)?;
        settings.api_id = settings.api_id.trim().to_string();
        settings.server_id = settings.server_id.trim().to_string();
        settings.bot_no = settings.bot_no.trim().to_string();
        settings.consumer_key = settings.consumer_key.trim().to_string();
        settings.private_key = normalize_pem(&settings.private_key);
        Ok(settings)
    }

    /// Loads the settings file, falling back to defaults on any failure.
    ///
    /// Missing or malformed files are logged and swallowed; the returned
    /// settings then carry empty credential fields, so callers must be
    /// prepared for those.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load settings, using defaults");
                Self::default()
            }
        }
    }

    /// Token endpoint URL with `{apiId}` substituted.
    pub fn token_endpoint(&self) -> String {
        self.token_url.replace("{apiId}", &self.api_id)
    }

    /// Push endpoint URL with `{apiId}` and `{botNo}` substituted.
    pub fn push_endpoint(&self) -> String {
        self.push_url
            .replace("{apiId}", &self.api_id)
            .replace("{botNo}", &self.bot_no)
    }
}

/// Reconstructs a PEM string from whatever line wrapping and escaping the
/// settings file used: trims each line, turns literal `\n` escape sequences
/// into real newlines, and drops the wrapping itself. The result contains
/// only real newline characters.
pub fn normalize_pem(raw: &str) -> String {
    let mut out = raw
        .replace("\\n", "\n")
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}
