/**
 * Call Token Handler
 *
 * Implements `GET /api/token?userID=<id>&roomID=<id>`.
 *
 * # Responses
 *
 * - `200 OK` - `{"token": "<appId:userId:roomId:issuedAt:nonce:signature>"}`
 * - `400 Bad Request` - `{"error": "Missing userID or roomID"}`
 * - `503 Service Unavailable` - the calling service credentials are not configured
 *
 * A key repeated in the query string resolves to its first value.
 */

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Json,
};
use serde::{Deserialize, Serialize};

use crate::backend::calls::token::{require_identifiers, TokenIssuer, MISSING_IDENTIFIERS};
use crate::backend::error::BackendError;

/// Query parameters of the token endpoint
#[derive(Deserialize, Serialize, Debug, Default, PartialEq, Eq)]
pub struct TokenQuery {
    #[serde(rename = "userID")]
    pub user_id: Option<String>,
    #[serde(rename = "roomID")]
    pub room_id: Option<String>,
}

impl TokenQuery {
    /// Pick the identifiers out of decoded query pairs, first value wins
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "userID" if query.user_id.is_none() => query.user_id = Some(value),
                "roomID" if query.room_id.is_none() => query.room_id = Some(value),
                _ => {}
            }
        }
        query
    }
}

/// Token response
#[derive(Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    pub token: String,
}

/// Issue a call token
///
/// Identifiers are validated before the issuer is looked up, so a request
/// missing them gets 400 whether or not the service is configured.
///
/// # Errors
///
/// * `400 Bad Request` - `userID` or `roomID` absent or empty, or the query
///   string could not be decoded
/// * `503 Service Unavailable` - `ZEGO_APP_ID`/`ZEGO_SERVER_SECRET` not set
/// * `500 Internal Server Error` - signing failed
pub async fn get_token(
    State(issuer): State<Option<Arc<TokenIssuer>>>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<TokenResponse>, BackendError> {
    let Query(pairs) = pairs.map_err(|rejection| {
        tracing::warn!("[Token] Rejected query string: {}", rejection.body_text());
        BackendError::missing_parameter(MISSING_IDENTIFIERS)
    })?;
    let query = TokenQuery::from_pairs(pairs);

    let (user_id, room_id) = require_identifiers(query.user_id.as_deref(), query.room_id.as_deref())
        .inspect_err(|_| tracing::warn!("[Token] Request without userID or roomID"))?;

    let issuer = issuer.ok_or_else(|| {
        tracing::error!("[Token] Calling service credentials not configured");
        BackendError::service_unavailable("Token service not configured")
    })?;

    let token = issuer.issue(user_id, room_id)?;

    tracing::info!("[Token] Issued token for user {} in room {}", user_id, room_id);
    tracing::debug!("[Token] issued_at={} nonce={}", token.issued_at, token.nonce);

    Ok(Json(TokenResponse {
        token: token.to_string(),
    }))
}
