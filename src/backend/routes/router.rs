/**
 * Router Configuration
 *
 * Combines all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. API routes (token, health)
 * 2. Resource route groups (users, posts, messages)
 * 3. Frontend fallback (static bundle in production, 404 otherwise)
 *
 * # Middleware
 *
 * Applied to every route, outermost first:
 * - `TraceLayer` for request logging
 * - permissive CORS
 * - request body limit (`BODY_LIMIT_BYTES`, 50 MiB by default)
 */

use axum::{extract::DefaultBodyLimit, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::frontend::configure_frontend;
use crate::backend::routes::resources::configure_resource_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let server = app_state.config.server.clone();

    let router = configure_api_routes(Router::new());
    let router = configure_resource_routes(router);
    let router = configure_frontend(router, &server);

    router
        .layer(DefaultBodyLimit::max(server.body_limit_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
