//! Common test utilities and helpers
//!
//! - Configuration fixtures built from explicit variable maps
//! - In-process test servers
//! - JSON error assertions

pub mod server;

pub use assertions::*;
pub use server::*;
