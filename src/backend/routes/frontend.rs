/**
 * Frontend Fallback
 *
 * In production, requests that match no API route are served from the
 * prebuilt frontend bundle, and paths with no matching file get
 * `index.html` so client-side routing works. In development the bundle is
 * served by its own dev server and unmatched paths are a JSON 404.
 */

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::config::ServerConfig;

/// Install the fallback for unmatched requests
pub fn configure_frontend(router: Router<AppState>, server: &ServerConfig) -> Router<AppState> {
    if server.environment.is_production() {
        let index = server.frontend_dist.join("index.html");
        tracing::info!(
            "[Frontend] Serving {} with SPA fallback",
            server.frontend_dist.display()
        );
        router.fallback_service(ServeDir::new(&server.frontend_dist).fallback(ServeFile::new(index)))
    } else {
        router.fallback(not_found)
    }
}

async fn not_found() -> BackendError {
    BackendError::not_found("Not found")
}
