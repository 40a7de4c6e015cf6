/**
 * Backend Error Types
 *
 * This module defines the error types returned by HTTP handlers.
 *
 * # Error Categories
 *
 * ## Request Errors
 *
 * - `MissingParameter` - a required query parameter is absent or empty (400)
 * - `NotFound` - no route or file matches the request (404)
 *
 * ## Service Errors
 *
 * - `ServiceUnavailable` - an optional service is not configured (503)
 * - `NotImplemented` - a route group with no handlers mounted (501)
 * - `Internal` - a primitive failed while serving the request (500)
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Backend-specific error types
///
/// Each variant carries the message that is sent to the client in the
/// `error` field of the JSON body.
///
/// # Usage
///
/// ```rust
/// use threadline::backend::error::BackendError;
///
/// let err = BackendError::missing_parameter("Missing userID or roomID");
/// assert_eq!(err.status_code().as_u16(), 400);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// A required request parameter was not supplied
    #[error("Missing parameter: {message}")]
    MissingParameter {
        /// Human-readable error message
        message: String,
    },

    /// The service behind this route is not configured
    #[error("Service unavailable: {message}")]
    ServiceUnavailable {
        /// Human-readable error message
        message: String,
    },

    /// The route exists but nothing serves it
    #[error("Not implemented: {message}")]
    NotImplemented {
        /// Human-readable error message
        message: String,
    },

    /// Nothing matched the request
    #[error("Not found: {message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// Unrecoverable failure while handling the request
    ///
    /// The message is logged but never sent to the client.
    #[error("Internal error: {message}")]
    Internal {
        /// Detail for the logs
        message: String,
    },
}

impl BackendError {
    /// Create a new missing-parameter error
    pub fn missing_parameter(message: impl Into<String>) -> Self {
        Self::MissingParameter {
            message: message.into(),
        }
    }

    /// Create a new service-unavailable error
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable {
            message: message.into(),
        }
    }

    /// Create a new not-implemented error
    pub fn not_implemented(message: impl Into<String>) -> Self {
        Self::NotImplemented {
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `MissingParameter` - 400 Bad Request
    /// - `ServiceUnavailable` - 503 Service Unavailable
    /// - `NotImplemented` - 501 Not Implemented
    /// - `NotFound` - 404 Not Found
    /// - `Internal` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingParameter { .. } => StatusCode::BAD_REQUEST,
            Self::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            Self::NotImplemented { .. } => StatusCode::NOT_IMPLEMENTED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing error message
    ///
    /// Internal details stay in the logs.
    pub fn message(&self) -> String {
        match self {
            Self::MissingParameter { message }
            | Self::ServiceUnavailable { message }
            | Self::NotImplemented { message }
            | Self::NotFound { message } => message.clone(),
            Self::Internal { .. } => "Internal server error".to_string(),
        }
    }
}
