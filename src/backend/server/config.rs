/**
 * Server Service Loading
 *
 * Opens the optional services described by `AppConfig`: the PostgreSQL
 * pool and the media host credentials.
 *
 * # Error Handling
 *
 * Failures are logged but do not prevent server startup. A service that
 * fails to initialize is `None` and the server continues without it.
 */

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::shared::config::{DatabaseConfig, MediaConfig};

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Open the database connection pool
///
/// # Returns
///
/// - `Some(PgPool)` if the database is configured and reachable
/// - `None` if `DATABASE_URL` is not set or the connection fails
pub async fn load_database(config: Option<&DatabaseConfig>) -> Option<PgPool> {
    let Some(config) = config else {
        tracing::warn!("[Database] DATABASE_URL not set. Database features will be disabled.");
        return None;
    };

    tracing::info!(
        "[Database] Connecting (max {} connections)...",
        config.max_connections
    );

    match PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(config.url.expose_secret())
        .await
    {
        Ok(pool) => {
            tracing::info!("[Database] Connection pool created successfully");
            Some(pool)
        }
        Err(e) => {
            tracing::error!("[Database] Failed to create connection pool: {}", e);
            tracing::warn!("[Database] Database features will be disabled.");
            None
        }
    }
}

/// Report the media host configuration
///
/// The credentials are consumed by the upload routes; only the cloud name is
/// ever logged.
pub fn log_media(config: Option<&MediaConfig>) {
    match config {
        Some(media) => {
            tracing::info!("[Media] Media host configured for cloud '{}'", media.cloud_name)
        }
        None => tracing::warn!("[Media] CLOUDINARY_* not set. Media uploads will be unavailable."),
    }
}
