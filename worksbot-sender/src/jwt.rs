//! JWT assertion for the service-account (JWT-bearer) grant.
//!
//! Header `{alg: RS256, typ: JWT}`, claims `{iss, iat, exp}`. The platform
//! expects `iat`/`exp` as Unix-epoch-seconds decimal strings, so the claims
//! carry them as strings rather than numbers.

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use worksbot_core::{Result, WorksError};

use crate::config::Settings;

/// Claims of the signed assertion. `iat`/`exp` are decimal strings.
#[derive(Debug, Serialize, Deserialize)]
pub struct AssertionClaims {
    pub iss: String,
    pub iat: String,
    pub exp: String,
}

impl AssertionClaims {
    pub fn new(server_id: &str, issued_at: i64, expires_at: i64) -> Self {
        Self {
            iss: server_id.to_string(),
            iat: issued_at.to_string(),
            exp: expires_at.to_string(),
        }
    }
}

/// Signs an RS256 assertion for the given settings and time window.
///
/// `expires_at` is fixed per call; a dispatch run over many recipients that
/// reuses one token keeps the window from the single issuing call.
pub fn build_assertion(settings: &Settings, issued_at: i64, expires_at: i64) -> Result<String> {
    let key = EncodingKey::from_rsa_pem(settings.private_key.as_bytes())
        .map_err(|e| WorksError::Jwt(format!("invalid private key: {}", e)))?;
    let header = Header::new(Algorithm::RS256);
    let claims = AssertionClaims::new(&settings.server_id, issued_at, expires_at);
    encode(&header, &claims, &key).map_err(|e| WorksError::Jwt(e.to_string()))
}
