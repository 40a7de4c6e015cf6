/**
 * Threadline Server Entry Point
 *
 * Loads configuration, opens services, starts background jobs and serves
 * the Axum app until Ctrl+C or SIGTERM.
 */

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use threadline::backend::jobs::start_jobs;
    use threadline::backend::server::{create_app, initialize, shutdown_signal};
    use threadline::shared::AppConfig;

    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = AppConfig::from_env().inspect_err(|e| {
        tracing::error!("[Startup] Invalid configuration: {}", e);
    })?;
    let port = config.server.port;

    let state = initialize(config).await;
    let jobs = start_jobs(&state.config);
    let app = create_app(state.clone());

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("[Startup] Server started at http://localhost:{}", port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    for job in jobs {
        job.abort();
    }
    if let Some(pool) = &state.db_pool {
        pool.close().await;
    }
    tracing::info!("[Shutdown] Server stopped");

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    eprintln!("Server requires the 'ssr' feature to be enabled.");
    eprintln!("Run with: cargo run --bin threadline-server --features ssr");
    std::process::exit(1);
}
