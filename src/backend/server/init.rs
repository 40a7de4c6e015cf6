/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server.
 *
 * # Initialization Process
 *
 * 1. Open optional services (database pool, media host)
 * 2. Build `AppState` (including the call token issuer)
 * 3. Create and configure the router
 *
 * Background jobs are started separately with
 * [`crate::backend::jobs::start_jobs`] so that tests can build the app
 * without spawning them.
 */

use axum::Router;

use crate::backend::routes::create_router;
use crate::backend::server::config::{load_database, log_media};
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// Open the configured services and build the application state
///
/// # Error Handling
///
/// Missing or unreachable services are logged and left as `None`; this
/// function never fails.
pub async fn initialize(config: AppConfig) -> AppState {
    tracing::info!("[Startup] Initializing threadline backend");

    let db_pool = load_database(config.database.as_ref()).await;
    log_media(config.media.as_ref());

    let state = AppState::new(config, db_pool);

    match &state.token_issuer {
        Some(issuer) => tracing::info!("[Startup] Call tokens enabled for app {}", issuer.app_id()),
        None => tracing::warn!(
            "[Startup] ZEGO_APP_ID/ZEGO_SERVER_SECRET not set. /api/token will answer 503."
        ),
    }

    state
}

/// Create the Axum application from an initialized state
pub fn create_app(state: AppState) -> Router<()> {
    let app = create_router(state);
    tracing::info!("[Startup] Router configured");
    app
}
