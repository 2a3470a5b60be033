//! Settings loading: credentials, token lifetime, endpoint URL templates.

mod settings;

#[cfg(test)]
mod tests;

pub use settings::{
    normalize_pem, Settings, DEFAULT_PUSH_URL, DEFAULT_SETTINGS_FILE, DEFAULT_TIME_LIMIT_SECS,
    DEFAULT_TOKEN_URL,
};
