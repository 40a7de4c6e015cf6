/**
 * Error Conversion
 *
 * All backend errors implement `IntoResponse`, so handlers return
 * `Result<_, BackendError>` and the error turns into a JSON response.
 *
 * # Response Format
 *
 * ```json
 * { "error": "Missing userID or roomID" }
 * ```
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("[Error] {} -> {}", status.as_u16(), self);
        } else {
            tracing::debug!("[Error] {} -> {}", status.as_u16(), self);
        }

        let body = serde_json::json!({ "error": self.message() });
        (status, Json(body)).into_response()
    }
}
