/**
 * Application State Management
 *
 * This module defines the application state structure and the `FromRef`
 * sub-state the token handler extracts.
 *
 * # Architecture
 *
 * `AppState` holds:
 * - the loaded configuration
 * - the call token issuer (if credentials are configured)
 * - the database pool (if `DATABASE_URL` is set and reachable)
 *
 * Nothing in it is mutable after startup. Cloning is cheap: every field is
 * an `Arc` or a pool handle.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::backend::calls::TokenIssuer;
use crate::shared::AppConfig;

/// Application state shared by all handlers
///
/// # Usage
///
/// ```rust
/// use threadline::backend::server::state::AppState;
/// use threadline::shared::AppConfig;
///
/// let state = AppState::new(AppConfig::default(), None);
/// assert!(state.token_issuer.is_none());
/// ```
#[derive(Clone)]
pub struct AppState {
    /// Configuration loaded at startup
    pub config: Arc<AppConfig>,

    /// Call token issuer
    ///
    /// `None` when `ZEGO_APP_ID`/`ZEGO_SERVER_SECRET` are not set; the token
    /// endpoint then answers 503.
    pub token_issuer: Option<Arc<TokenIssuer>>,

    /// Database connection pool
    ///
    /// `None` if the database is not configured or the connection failed.
    pub db_pool: Option<PgPool>,
}

impl AppState {
    /// Build the state from configuration and an already-opened pool
    pub fn new(config: AppConfig, db_pool: Option<PgPool>) -> Self {
        let token_issuer = config
            .calls
            .clone()
            .map(|calls| Arc::new(TokenIssuer::new(calls)));

        Self {
            config: Arc::new(config),
            token_issuer,
            db_pool,
        }
    }
}

/// Lets handlers take `State(Option<Arc<TokenIssuer>>)`
impl FromRef<AppState> for Option<Arc<TokenIssuer>> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.token_issuer.clone()
    }
}
