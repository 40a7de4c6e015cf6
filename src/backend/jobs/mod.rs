//! Background Jobs
//!
//! Periodic tasks started once at process start. Each job runs on its own
//! tokio task driven by an interval; the returned `JoinHandle`s are aborted
//! on shutdown.
//!
//! # Jobs
//!
//! - **`keepalive`** - `GET`s a configured URL so hosting platforms that idle
//!   inactive services keep this one awake

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::shared::AppConfig;

/// Keep-alive ping job
pub mod keepalive;

pub use keepalive::KeepAlive;

/// Run `task` every `period` until the handle is aborted
///
/// The first run happens one full period after spawning. A run that
/// overlaps the next tick delays it instead of bursting.
pub fn spawn_periodic<F, Fut>(name: &'static str, period: Duration, task: F) -> JoinHandle<()>
where
    F: Fn() -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        interval.tick().await;

        tracing::info!("[Jobs] '{}' scheduled every {:?}", name, period);
        loop {
            interval.tick().await;
            tracing::debug!("[Jobs] Running '{}'", name);
            task().await;
        }
    })
}

/// Start every job enabled by the configuration
pub fn start_jobs(config: &AppConfig) -> Vec<JoinHandle<()>> {
    let mut handles = Vec::new();

    match &config.keepalive {
        Some(keepalive) => match keepalive::start(keepalive) {
            Ok(handle) => handles.push(handle),
            Err(e) => tracing::error!("[Jobs] Failed to start keep-alive job: {}", e),
        },
        None => tracing::info!("[Jobs] KEEPALIVE_URL not set, keep-alive job disabled"),
    }

    handles
}
