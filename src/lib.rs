//! Threadline - Social Backend Library
//!
//! HTTP backend for the threadline social app: resource route groups for
//! users, posts and messages, a signed token endpoint for the third-party
//! audio/video calling service, a keep-alive job, and static serving of
//! the prebuilt frontend in production.
//!
//! # Module Structure
//!
//! - **`shared`** - Configuration types with no HTTP dependency
//! - **`backend`** - Axum server (only compiled with the `ssr` feature)
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the backend modules and the
//!   `threadline-server` binary
//!
//! # Usage
//!
//! ```rust,no_run
//! use threadline::backend::{create_app, initialize};
//! use threadline::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let state = initialize(config).await;
//! let app = create_app(state);
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Shared types and configuration
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
