//! Server Module
//!
//! Initialization and configuration of the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Optional service loading (database, media)
//! ├── init.rs         - State initialization and app creation
//! └── shutdown.rs     - Graceful shutdown signal
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `AppConfig::from_env` in `main`
//! 2. **Services**: database pool, media host, token issuer
//! 3. **Background Tasks**: keep-alive job
//! 4. **Router Creation**: routes, fallback and middleware
//! 5. **Serve** until Ctrl+C / SIGTERM

/// Application state management
pub mod state;

/// Optional service loading
pub mod config;

/// Server initialization
pub mod init;

/// Graceful shutdown
pub mod shutdown;

pub use init::{create_app, initialize};
pub use shutdown::shutdown_signal;
pub use state::AppState;
