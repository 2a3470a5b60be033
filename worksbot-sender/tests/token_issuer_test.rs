//! Token issuance against a mockito token endpoint.

mod common;

use common::{mock_settings, RecordingBot};
use mockito::Matcher;
use worksbot_sender::{build_http_client, TokenIssuer, WorksError, JWT_BEARER_GRANT_TYPE};

/// Matches the form body of the JWT-bearer exchange (grant_type fixed,
/// assertion present).
fn form_matcher() -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("grant_type".into(), JWT_BEARER_GRANT_TYPE.into()),
        Matcher::Regex("assertion=".into()),
    ])
}

#[tokio::test]
async fn test_issue_token_success_fires_hook_once() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/token")
        .match_body(form_matcher())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"access_token":"T"}"#)
        .expect(1)
        .create_async()
        .await;

    let settings = mock_settings(&server.url());
    let issuer = TokenIssuer::new(settings.clone(), build_http_client().unwrap());
    let bot = RecordingBot::default();

    let token = issuer.issue_token(&bot).await.unwrap();

    assert_eq!(token.value, "T");
    assert_eq!(token.expires_at - token.issued_at, settings.time_limit);
    assert_eq!(*bot.tokens.lock().unwrap(), vec!["T".to_string()]);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_issue_token_non_200_is_auth_error_without_hook() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/token")
        .with_status(401)
        .with_body(r#"{"error":"invalid_grant"}"#)
        .create_async()
        .await;

    let issuer = TokenIssuer::new(mock_settings(&server.url()), build_http_client().unwrap());
    let bot = RecordingBot::default();

    let err = issuer.issue_token(&bot).await.unwrap_err();
    assert!(matches!(err, WorksError::Auth(401)));
    assert!(bot.tokens.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_issue_token_missing_field_yields_empty_token() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"token_type":"Bearer"}"#)
        .create_async()
        .await;

    let issuer = TokenIssuer::new(mock_settings(&server.url()), build_http_client().unwrap());
    let bot = RecordingBot::default();

    let token = issuer.issue_token(&bot).await.unwrap();
    assert!(token.is_empty());
    assert!(bot.tokens.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_issue_token_bad_private_key_is_jwt_error() {
    let server = mockito::Server::new_async().await;
    let mut settings = mock_settings(&server.url());
    settings.private_key = "garbage".to_string();

    let issuer = TokenIssuer::new(settings, build_http_client().unwrap());
    let bot = RecordingBot::default();

    let err = issuer.issue_token(&bot).await.unwrap_err();
    assert!(matches!(err, WorksError::Jwt(_)));
    assert!(bot.tokens.lock().unwrap().is_empty());
}
