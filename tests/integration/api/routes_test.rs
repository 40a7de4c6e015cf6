//! Route table tests
//!
//! Health check, resource groups, development fallback and middleware.

use axum::http::{header, HeaderValue, StatusCode};
use threadline::backend::routes::ResourceGroup;

use crate::common::{assert_error, calls_config, config_from, test_server};

#[tokio::test]
async fn test_health_check() {
    let server = test_server(config_from(&[]));

    let response = server.get("/api/health").await;

    response.assert_status_ok();
    response.assert_text("OK");
}

#[tokio::test]
async fn test_resource_groups_not_implemented() {
    let server = test_server(calls_config());

    for group in ResourceGroup::ALL {
        let message = format!("{} routes are not available", group.name());

        let response = server.get(group.prefix()).await;
        assert_error(&response, StatusCode::NOT_IMPLEMENTED, &message);

        let response = server.get(&format!("{}/42", group.prefix())).await;
        assert_error(&response, StatusCode::NOT_IMPLEMENTED, &message);

        let response = server.post(&format!("{}/42/comments", group.prefix())).await;
        assert_error(&response, StatusCode::NOT_IMPLEMENTED, &message);
    }
}

#[tokio::test]
async fn test_unknown_path_in_development() {
    let server = test_server(config_from(&[("APP_ENV", "development")]));

    let response = server.get("/some/client/route").await;

    assert_error(&response, StatusCode::NOT_FOUND, "Not found");
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let server = test_server(calls_config());

    let response = server
        .get("/api/health")
        .add_header(header::ORIGIN, HeaderValue::from_static("https://app.example.com"))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        HeaderValue::from_static("*")
    );
}
