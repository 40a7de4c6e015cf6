//! Token endpoint tests
//!
//! Tests for `GET /api/token` through the assembled router.

use axum::http::StatusCode;
use chrono::Utc;
use pretty_assertions::assert_eq;
use threadline::backend::calls::handlers::TokenResponse;
use threadline::backend::calls::TokenIssuer;
use threadline::shared::config::CallsConfig;

use crate::common::{
    assert_error, calls_config, config_from, parse_token, test_issuer, test_server, TEST_APP_ID,
};

const MISSING: &str = "Missing userID or roomID";

#[tokio::test]
async fn test_issue_token_success() {
    let server = test_server(calls_config());

    let response = server
        .get("/api/token")
        .add_query_param("userID", "alice")
        .add_query_param("roomID", "room1")
        .await;

    response.assert_status_ok();
    let body: TokenResponse = response.json();
    let token = parse_token(&body.token);

    assert_eq!(token.app_id, TEST_APP_ID);
    assert_eq!(token.user_id, "alice");
    assert_eq!(token.room_id, "room1");
    assert!((Utc::now().timestamp() - token.issued_at).abs() <= 5);
    assert_eq!(token.nonce.len(), 16);
    assert_eq!(token.signature.len(), 64);
    assert!(test_issuer().verify(&token));
}

#[tokio::test]
async fn test_response_is_single_token_field() {
    let server = test_server(calls_config());

    let response = server
        .get("/api/token?userID=bob&roomID=standup")
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let object = body.as_object().expect("response should be a JSON object");
    assert_eq!(object.len(), 1);
    assert!(object["token"].as_str().unwrap().starts_with("12345:bob:standup:"));
}

#[tokio::test]
async fn test_missing_room_id() {
    let server = test_server(calls_config());

    let response = server.get("/api/token").add_query_param("userID", "alice").await;

    assert_error(&response, StatusCode::BAD_REQUEST, MISSING);
}

#[tokio::test]
async fn test_missing_user_id() {
    let server = test_server(calls_config());

    let response = server.get("/api/token").add_query_param("roomID", "room1").await;

    assert_error(&response, StatusCode::BAD_REQUEST, MISSING);
}

#[tokio::test]
async fn test_missing_both_identifiers() {
    let server = test_server(calls_config());

    let response = server.get("/api/token").await;

    assert_error(&response, StatusCode::BAD_REQUEST, MISSING);
}

#[tokio::test]
async fn test_empty_identifier_is_missing() {
    let server = test_server(calls_config());

    let response = server.get("/api/token?userID=&roomID=room1").await;

    assert_error(&response, StatusCode::BAD_REQUEST, MISSING);
}

#[tokio::test]
async fn test_repeated_keys_use_first_value() {
    let server = test_server(calls_config());

    let response = server
        .get("/api/token?userID=alice&roomID=room1&userID=bob")
        .await;

    response.assert_status_ok();
    let body: TokenResponse = response.json();
    let token = parse_token(&body.token);
    assert_eq!(token.user_id, "alice");
    assert_eq!(token.room_id, "room1");
    assert!(test_issuer().verify(&token));
}

#[tokio::test]
async fn test_repeated_empty_key_is_missing() {
    let server = test_server(calls_config());

    let response = server.get("/api/token?userID=&userID=alice&roomID=room1").await;

    assert_error(&response, StatusCode::BAD_REQUEST, MISSING);
}

#[tokio::test]
async fn test_secret_whitespace_is_part_of_the_key() {
    let server = test_server(config_from(&[
        ("ZEGO_APP_ID", TEST_APP_ID),
        ("ZEGO_SERVER_SECRET", " s3cret "),
    ]));

    let body: TokenResponse = server
        .get("/api/token?userID=alice&roomID=room1")
        .await
        .json();
    let token = parse_token(&body.token);

    let padded = TokenIssuer::new(CallsConfig::new(TEST_APP_ID, " s3cret "));
    assert!(padded.verify(&token));
    assert!(!test_issuer().verify(&token));
}

#[tokio::test]
async fn test_unconfigured_service() {
    let server = test_server(config_from(&[]));

    let response = server
        .get("/api/token")
        .add_query_param("userID", "alice")
        .add_query_param("roomID", "room1")
        .await;

    assert_error(
        &response,
        StatusCode::SERVICE_UNAVAILABLE,
        "Token service not configured",
    );
}

#[tokio::test]
async fn test_validation_precedes_configuration_check() {
    let server = test_server(config_from(&[]));

    let response = server.get("/api/token").add_query_param("userID", "alice").await;

    assert_error(&response, StatusCode::BAD_REQUEST, MISSING);
}

#[tokio::test]
async fn test_colon_in_room_id_is_not_escaped() {
    let server = test_server(calls_config());

    let response = server
        .get("/api/token")
        .add_query_param("userID", "alice")
        .add_query_param("roomID", "lobby:east")
        .await;

    response.assert_status_ok();
    let body: TokenResponse = response.json();
    assert!(body.token.starts_with("12345:alice:lobby:east:"));
    assert_eq!(body.token.split(':').count(), 7);
}

#[tokio::test]
async fn test_repeated_requests_differ() {
    let server = test_server(calls_config());

    let first: TokenResponse = server
        .get("/api/token?userID=alice&roomID=room1")
        .await
        .json();
    let second: TokenResponse = server
        .get("/api/token?userID=alice&roomID=room1")
        .await
        .json();

    assert_ne!(first.token, second.token);
    assert_ne!(parse_token(&first.token).nonce, parse_token(&second.token).nonce);
}

#[tokio::test]
async fn test_post_not_allowed() {
    let server = test_server(calls_config());

    let response = server.post("/api/token?userID=alice&roomID=room1").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}
