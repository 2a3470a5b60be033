//! Core types: bearer token, push input, per-recipient dispatch outcome.

use serde::{Deserialize, Serialize};

/// Short-lived bearer token obtained from the token endpoint.
///
/// Held only for the duration of one dispatch call, never persisted.
/// `expires_at == issued_at + time_limit_secs` of the settings used to
/// issue it. An empty `value` means the endpoint answered 200 without an
/// `access_token` field; callers treat that as "no token, skip dispatch".
#[derive(Debug, Clone)]
pub struct BearerToken {
    pub value: String,
    /// Unix epoch seconds.
    pub issued_at: i64,
    /// Unix epoch seconds.
    pub expires_at: i64,
}

impl BearerToken {
    /// Token carrying no value; dispatch skips recipients for such tokens.
    pub fn empty(issued_at: i64, expires_at: i64) -> Self {
        Self {
            value: String::new(),
            issued_at,
            expires_at,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// A single recipient entry from the message-input file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipient {
    pub id: String,
}

/// Message-input file contents: one shared text, ordered recipient list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushInput {
    pub message: String,
    pub send_to: Vec<Recipient>,
}

/// Result of one push attempt, reported to the after-send hook and collected
/// into the run report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Push endpoint answered HTTP 200.
    Success,
    /// Push endpoint answered a non-200 status.
    Failure(u16),
    /// No push request completed (empty token, signing or transport error).
    /// Present in the run report only; the after-send hook never sees it.
    Skipped,
}

impl std::fmt::Display for DispatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DispatchOutcome::Success => write!(f, "SUCCESS"),
            DispatchOutcome::Failure(code) => write!(f, "FAILURE:{}", code),
            DispatchOutcome::Skipped => write!(f, "SKIPPED"),
        }
    }
}

/// One row of the aggregated dispatch report returned by `run()`, so callers
/// can detect partial failure without parsing logs.
#[derive(Debug, Clone)]
pub struct DispatchRecord {
    pub recipient: String,
    pub outcome: DispatchOutcome,
}
