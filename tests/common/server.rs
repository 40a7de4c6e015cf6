//! Test server fixtures
//!
//! Builds the full router in-process with no database and no background
//! jobs. Configuration is always passed explicitly, never read from the
//! process environment.

use std::collections::HashMap;

use axum_test::TestServer;
use threadline::backend::calls::{Token, TokenIssuer};
use threadline::backend::{create_app, AppState};
use threadline::shared::config::CallsConfig;
use threadline::shared::AppConfig;

/// Application id used by test configurations
pub const TEST_APP_ID: &str = "12345";

/// Signing secret used by test configurations
pub const TEST_SECRET: &str = "s3cret";

/// Build a configuration from variable pairs
pub fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    AppConfig::from_vars(&vars).expect("test configuration should load")
}

/// Development configuration with call credentials
pub fn calls_config() -> AppConfig {
    config_from(&[("ZEGO_APP_ID", TEST_APP_ID), ("ZEGO_SERVER_SECRET", TEST_SECRET)])
}

/// Issuer sharing the test credentials, for verifying returned tokens
pub fn test_issuer() -> TokenIssuer {
    TokenIssuer::new(CallsConfig::new(TEST_APP_ID, TEST_SECRET))
}

/// Start an in-process server for `config`
pub fn test_server(config: AppConfig) -> TestServer {
    let app = create_app(AppState::new(config, None));
    TestServer::new(app).expect("test server should start")
}

/// Split a colon-free wire token back into its fields
pub fn parse_token(wire: &str) -> Token {
    let parts: Vec<&str> = wire.split(':').collect();
    assert_eq!(parts.len(), 6, "token should have six fields: {}", wire);
    Token {
        app_id: parts[0].to_string(),
        user_id: parts[1].to_string(),
        room_id: parts[2].to_string(),
        issued_at: parts[3].parse().expect("issued_at should be an integer"),
        nonce: parts[4].to_string(),
        signature: parts[5].to_string(),
    }
}
