/**
 * API Route Handlers
 *
 * # Routes
 *
 * - `GET /api/token` - Issue a call token (query: `userID`, `roomID`)
 * - `GET /api/health` - Liveness probe, target of the keep-alive job
 */

use axum::{routing::get, Router};

use crate::backend::calls::get_token;
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// All routes here are public; the token endpoint only requires its two
/// query parameters.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/token", get(get_token))
        .route("/api/health", get(health_check))
}

async fn health_check() -> &'static str {
    "OK"
}
