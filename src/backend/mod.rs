//! Backend Module
//!
//! All server-side code: the Axum HTTP server, the call token endpoint,
//! resource route groups, the frontend fallback and background jobs.
//!
//! This module is only compiled when the `ssr` feature is enabled (it is
//! on by default).
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, service loading
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`calls`** - Call token issuance for the audio/video calling service
//! - **`jobs`** - Periodic background tasks
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Binary entry point
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── calls/          - Token issuer and handler
//! ├── jobs/           - Scheduled tasks
//! └── error/          - Error types
//! ```
//!
//! # Thread Safety
//!
//! `AppState` is immutable after startup. The token issuer holds no mutable
//! state, so concurrent requests never contend on a lock.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Call token issuance
pub mod calls;

/// Background jobs
pub mod jobs;

/// Backend error types
pub mod error;

pub use error::BackendError;
pub use server::{create_app, initialize, AppState};
