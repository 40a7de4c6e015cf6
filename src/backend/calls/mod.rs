//! Calls Module
//!
//! Credentials for the third-party audio/video calling service. The server
//! never talks to that service itself; it only signs tokens that clients
//! hand to the calling SDK.
//!
//! # Module Structure
//!
//! ```text
//! calls/
//! ├── mod.rs       - Module exports
//! ├── token.rs     - Token type and TokenIssuer
//! └── handlers.rs  - GET /api/token
//! ```

/// Token type and issuer
pub mod token;

/// HTTP handlers
pub mod handlers;

pub use handlers::get_token;
pub use token::{Token, TokenIssuer};
