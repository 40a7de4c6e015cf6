/**
 * Keep-Alive Job
 *
 * Periodically fetches a URL (normally this server's own `/api/health`)
 * so that hosting platforms which suspend idle services keep it running.
 * A failed ping is logged and never stops the job.
 */

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::task::JoinHandle;

use crate::backend::jobs::spawn_periodic;
use crate::shared::config::KeepAliveConfig;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Pings one URL
#[derive(Debug, Clone)]
pub struct KeepAlive {
    client: Client,
    url: String,
}

impl KeepAlive {
    pub fn new(url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send one `GET` and return the response status
    pub async fn ping(&self) -> Result<StatusCode, reqwest::Error> {
        let response = self.client.get(&self.url).send().await?;
        Ok(response.status())
    }

    /// Ping once and log the outcome
    ///
    /// Returns `true` only for a `200 OK`.
    pub async fn run_once(&self) -> bool {
        match self.ping().await {
            Ok(status) if status == StatusCode::OK => {
                tracing::info!("[KeepAlive] GET {} succeeded", self.url);
                true
            }
            Ok(status) => {
                tracing::warn!("[KeepAlive] GET {} failed with status {}", self.url, status);
                false
            }
            Err(e) => {
                tracing::error!("[KeepAlive] GET {} failed: {}", self.url, e);
                false
            }
        }
    }
}

/// Spawn the keep-alive job described by `config`
pub fn start(config: &KeepAliveConfig) -> Result<JoinHandle<()>, reqwest::Error> {
    let job = Arc::new(KeepAlive::new(config.url.clone())?);
    tracing::info!(
        "[KeepAlive] Pinging {} every {}s",
        job.url(),
        config.interval.as_secs()
    );

    Ok(spawn_periodic("keepalive", config.interval, move || {
        let job = job.clone();
        async move {
            job.run_once().await;
        }
    }))
}
