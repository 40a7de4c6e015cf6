//! Production frontend fallback tests
//!
//! Serves a throwaway bundle from a temporary directory.

use std::fs;

use axum::http::StatusCode;
use tempfile::TempDir;
use threadline::backend::routes::ResourceGroup;

use crate::assert_contains;
use crate::common::{assert_error, config_from, test_server, TEST_APP_ID, TEST_SECRET};

const INDEX_HTML: &str = "<!doctype html><html><body><div id=\"root\"></div></body></html>";
const APP_JS: &str = "console.log('threadline');";

fn bundle() -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("index.html"), INDEX_HTML).expect("write index");
    fs::create_dir(dir.path().join("assets")).expect("create assets");
    fs::write(dir.path().join("assets").join("app.js"), APP_JS).expect("write asset");
    dir
}

fn production_server(dist: &TempDir) -> axum_test::TestServer {
    let dist = dist.path().to_string_lossy().to_string();
    test_server(config_from(&[
        ("APP_ENV", "production"),
        ("FRONTEND_DIST", dist.as_str()),
        ("ZEGO_APP_ID", TEST_APP_ID),
        ("ZEGO_SERVER_SECRET", TEST_SECRET),
    ]))
}

#[tokio::test]
async fn test_serves_static_asset() {
    let dist = bundle();
    let server = production_server(&dist);

    let response = server.get("/assets/app.js").await;

    response.assert_status_ok();
    response.assert_text(APP_JS);
}

#[tokio::test]
async fn test_serves_index_at_root() {
    let dist = bundle();
    let server = production_server(&dist);

    let response = server.get("/").await;

    response.assert_status_ok();
    assert_contains!(response.text(), "<div id=\"root\"></div>");
}

#[tokio::test]
async fn test_client_route_falls_back_to_index() {
    let dist = bundle();
    let server = production_server(&dist);

    let response = server.get("/rooms/standup/settings").await;

    response.assert_status_ok();
    response.assert_text(INDEX_HTML);
}

#[tokio::test]
async fn test_api_routes_take_precedence() {
    let dist = bundle();
    let server = production_server(&dist);

    server.get("/api/health").await.assert_text("OK");

    let response = server.get("/api/token?userID=alice&roomID=room1").await;
    response.assert_status_ok();
    assert_contains!(response.text(), "12345:alice:room1:");

    let response = server.get("/api/token?userID=alice").await;
    assert_error(&response, StatusCode::BAD_REQUEST, "Missing userID or roomID");

    for group in ResourceGroup::ALL {
        let response = server.get(&format!("{}/1", group.prefix())).await;
        assert_eq!(response.status_code(), StatusCode::NOT_IMPLEMENTED);
    }
}
