//! Shared Module
//!
//! Types that do not depend on the HTTP server: configuration loading and
//! the errors it produces. Everything here compiles without the `ssr`
//! feature.

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use config::{AppConfig, ConfigError, Environment};
