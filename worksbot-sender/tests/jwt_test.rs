//! Assertion signing tests: claims window and signature validity against the
//! fixture RSA keypair.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use worksbot_sender::{build_assertion, AssertionClaims, Settings};

const TEST_PRIVATE_KEY: &str = include_str!("fixtures/test_rsa_key.pem");
const TEST_PUBLIC_KEY: &str = include_str!("fixtures/test_rsa_pub.pem");

fn test_settings() -> Settings {
    Settings {
        server_id: "srv.serviceaccount".to_string(),
        private_key: TEST_PRIVATE_KEY.to_string(),
        time_limit: 3000,
        ..Settings::default()
    }
}

/// `iat`/`exp` are strings, so spec-claim validation is disabled; the
/// signature check still runs on decode.
fn assertion_validation() -> Validation {
    let mut validation = Validation::new(Algorithm::RS256);
    validation.validate_exp = false;
    validation.required_spec_claims.clear();
    validation
}

#[test]
fn test_assertion_window_matches_time_limit() {
    let settings = test_settings();
    let issued_at = 1_700_000_000;
    let expires_at = issued_at + settings.time_limit;

    let token = build_assertion(&settings, issued_at, expires_at).unwrap();

    let key = DecodingKey::from_rsa_pem(TEST_PUBLIC_KEY.as_bytes()).unwrap();
    let data = decode::<AssertionClaims>(&token, &key, &assertion_validation()).unwrap();

    assert_eq!(data.header.alg, Algorithm::RS256);
    assert_eq!(data.header.typ.as_deref(), Some("JWT"));
    assert_eq!(data.claims.iss, "srv.serviceaccount");

    let iat: i64 = data.claims.iat.parse().unwrap();
    let exp: i64 = data.claims.exp.parse().unwrap();
    assert_eq!(exp - iat, settings.time_limit);
    assert_eq!(iat, issued_at);
}

#[test]
fn test_tampered_assertion_fails_verification() {
    let settings = test_settings();
    let token = build_assertion(&settings, 1_700_000_000, 1_700_003_000).unwrap();

    // Flip a character in the signature segment.
    let mut parts: Vec<String> = token.split('.').map(String::from).collect();
    assert_eq!(parts.len(), 3);
    let sig = parts[2].clone();
    let flipped = if sig.starts_with('A') { "B" } else { "A" };
    parts[2] = format!("{}{}", flipped, &sig[1..]);
    let tampered = parts.join(".");

    let key = DecodingKey::from_rsa_pem(TEST_PUBLIC_KEY.as_bytes()).unwrap();
    assert!(decode::<AssertionClaims>(&tampered, &key, &assertion_validation()).is_err());
}

#[test]
fn test_normalized_escaped_key_still_signs() {
    // Key stored the settings-file way: one line with literal \n escapes.
    let escaped = TEST_PRIVATE_KEY.replace('\n', "\\n");
    let settings = Settings {
        private_key: worksbot_sender::normalize_pem(&escaped),
        ..test_settings()
    };
    assert!(!settings.private_key.contains("\\n"));
    assert!(build_assertion(&settings, 0, 3000).is_ok());
}
