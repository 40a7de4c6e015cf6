/**
 * Resource Route Groups
 *
 * Mount points for the user, post and message APIs. Their handlers are
 * provided separately; until they are mounted every method and sub-path
 * under a group answers `501 Not Implemented`. Registering the prefixes
 * keeps API paths from falling through to the frontend fallback.
 *
 * # Groups
 *
 * - `/api/users`
 * - `/api/posts`
 * - `/api/messages`
 */

use axum::{routing::any, Router};

use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// One resource route group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceGroup {
    Users,
    Posts,
    Messages,
}

impl ResourceGroup {
    pub const ALL: [ResourceGroup; 3] = [
        ResourceGroup::Users,
        ResourceGroup::Posts,
        ResourceGroup::Messages,
    ];

    /// Path prefix the group is nested under
    pub fn prefix(&self) -> &'static str {
        match self {
            ResourceGroup::Users => "/api/users",
            ResourceGroup::Posts => "/api/posts",
            ResourceGroup::Messages => "/api/messages",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ResourceGroup::Users => "users",
            ResourceGroup::Posts => "posts",
            ResourceGroup::Messages => "messages",
        }
    }

    fn routes(self) -> Router<AppState> {
        let unavailable = move || async move {
            BackendError::not_implemented(format!("{} routes are not available", self.name()))
        };

        Router::new()
            .route("/", any(unavailable))
            .route("/{*rest}", any(unavailable))
    }
}

/// Nest every resource group under its prefix
pub fn configure_resource_routes(router: Router<AppState>) -> Router<AppState> {
    ResourceGroup::ALL
        .into_iter()
        .fold(router, |router, group| router.nest(group.prefix(), group.routes()))
}
