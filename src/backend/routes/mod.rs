//! Route Configuration Module
//!
//! Configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation and middleware
//! ├── api_routes.rs   - /api/token, /api/health
//! ├── resources.rs    - /api/users, /api/posts, /api/messages
//! └── frontend.rs     - static bundle / 404 fallback
//! ```

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

/// Resource route groups
pub mod resources;

/// Frontend fallback
pub mod frontend;

pub use resources::ResourceGroup;
pub use router::create_router;
