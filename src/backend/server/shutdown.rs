//! Shutdown signal handling

use tokio::signal;

/// Resolve on Ctrl+C or, on Unix, SIGTERM
///
/// If a signal handler cannot be installed the error is logged and that
/// signal is ignored.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => tracing::info!("[Shutdown] Received Ctrl+C, shutting down"),
            Err(e) => {
                tracing::error!("[Shutdown] Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!("[Shutdown] Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("[Shutdown] Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
