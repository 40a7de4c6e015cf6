/**
 * Call Token Issuance
 *
 * This module issues the signed credential a client presents to the
 * third-party audio/video calling service when joining a room.
 *
 * # Token Format
 *
 * A token is six fields joined by `:`:
 *
 * ```text
 * appId:userId:roomId:issuedAt:nonce:signature
 * ```
 *
 * - `issuedAt` is whole seconds since the Unix epoch
 * - `nonce` is 16 lowercase base-36 characters from the OS CSPRNG
 * - `signature` is lowercase hex HMAC-SHA256, keyed with the server secret,
 *   over `appId + userId + roomId + issuedAt + nonce` with no separators
 *
 * Fields are not escaped. A `roomId` containing `:` yields a token with more
 * than six `:`-separated parts, and the consuming service has to know the
 * field boundaries. Use [`TokenIssuer::verify`] on a [`Token`] value rather
 * than re-splitting the string.
 *
 * # Expiry
 *
 * No expiry is encoded beyond `issuedAt`. Staleness policy belongs to the
 * consuming service.
 */

use std::fmt;

use chrono::Utc;
use hmac::{Hmac, Mac};
use rand::{rngs::OsRng, Rng};
use secrecy::ExposeSecret;
use sha2::Sha256;

use crate::backend::error::BackendError;
use crate::shared::config::CallsConfig;

type HmacSha256 = Hmac<Sha256>;

/// Length of the per-token nonce
pub const NONCE_LEN: usize = 16;

const NONCE_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Message returned when either identifier is missing
pub const MISSING_IDENTIFIERS: &str = "Missing userID or roomID";

/// A signed call credential
///
/// Tokens are computed per request and never stored. `Display` renders the
/// wire form handed to clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub app_id: String,
    pub user_id: String,
    pub room_id: String,
    pub issued_at: i64,
    pub nonce: String,
    pub signature: String,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}:{}:{}",
            self.app_id, self.user_id, self.room_id, self.issued_at, self.nonce, self.signature
        )
    }
}

/// Check that both identifiers are present and non-empty
///
/// # Errors
///
/// * `MissingParameter` - if either value is `None` or empty
pub fn require_identifiers<'a>(
    user_id: Option<&'a str>,
    room_id: Option<&'a str>,
) -> Result<(&'a str, &'a str), BackendError> {
    match (user_id, room_id) {
        (Some(user_id), Some(room_id)) if !user_id.is_empty() && !room_id.is_empty() => {
            Ok((user_id, room_id))
        }
        _ => Err(BackendError::missing_parameter(MISSING_IDENTIFIERS)),
    }
}

/// The exact bytes covered by the signature
pub fn signing_payload(
    app_id: &str,
    user_id: &str,
    room_id: &str,
    issued_at: i64,
    nonce: &str,
) -> String {
    format!("{}{}{}{}{}", app_id, user_id, room_id, issued_at, nonce)
}

/// Draw a fresh nonce from the OS random source
///
/// Uniqueness is not tracked; 16 base-36 characters make collisions
/// statistically negligible.
pub fn generate_nonce() -> String {
    let mut rng = OsRng;
    (0..NONCE_LEN)
        .map(|_| char::from(NONCE_ALPHABET[rng.gen_range(0..NONCE_ALPHABET.len())]))
        .collect()
}

/// Issues call tokens for one application
///
/// The issuer is stateless apart from its configuration and can be shared
/// freely between concurrent requests.
///
/// # Example
///
/// ```rust
/// use threadline::backend::calls::TokenIssuer;
/// use threadline::shared::config::CallsConfig;
///
/// let issuer = TokenIssuer::new(CallsConfig::new("12345", "s3cret"));
/// let token = issuer.issue("alice", "room1").unwrap();
/// assert!(issuer.verify(&token));
/// assert!(token.to_string().starts_with("12345:alice:room1:"));
/// ```
#[derive(Debug)]
pub struct TokenIssuer {
    config: CallsConfig,
}

impl TokenIssuer {
    pub fn new(config: CallsConfig) -> Self {
        Self { config }
    }

    /// Application id embedded in every token
    pub fn app_id(&self) -> &str {
        &self.config.app_id
    }

    /// Issue a token for `user_id` in `room_id`, stamped with the current
    /// time and a fresh nonce
    ///
    /// # Errors
    ///
    /// * `MissingParameter` - if either identifier is empty; checked before
    ///   the clock or the random source is touched
    /// * `Internal` - if the HMAC primitive rejects the key
    pub fn issue(&self, user_id: &str, room_id: &str) -> Result<Token, BackendError> {
        let (user_id, room_id) = require_identifiers(Some(user_id), Some(room_id))?;
        let issued_at = Utc::now().timestamp();
        let nonce = generate_nonce();
        self.assemble(user_id, room_id, issued_at, nonce)
    }

    /// Issue a token with a caller-supplied timestamp and nonce
    ///
    /// Deterministic: the same inputs always produce the same token.
    pub fn issue_with(
        &self,
        user_id: &str,
        room_id: &str,
        issued_at: i64,
        nonce: impl Into<String>,
    ) -> Result<Token, BackendError> {
        let (user_id, room_id) = require_identifiers(Some(user_id), Some(room_id))?;
        self.assemble(user_id, room_id, issued_at, nonce.into())
    }

    /// Compute the hex signature for the given fields
    pub fn sign(
        &self,
        user_id: &str,
        room_id: &str,
        issued_at: i64,
        nonce: &str,
    ) -> Result<String, BackendError> {
        let mac = self.keyed_mac(user_id, room_id, issued_at, nonce)?;
        Ok(hex::encode(mac.finalize().into_bytes()))
    }

    /// Recompute the signature of `token` and compare in constant time
    ///
    /// Tokens issued for another application id never verify.
    pub fn verify(&self, token: &Token) -> bool {
        if token.app_id != self.config.app_id {
            return false;
        }

        let Ok(provided) = hex::decode(&token.signature) else {
            return false;
        };

        match self.keyed_mac(&token.user_id, &token.room_id, token.issued_at, &token.nonce) {
            Ok(mac) => mac.verify_slice(&provided).is_ok(),
            Err(_) => false,
        }
    }

    fn assemble(
        &self,
        user_id: &str,
        room_id: &str,
        issued_at: i64,
        nonce: String,
    ) -> Result<Token, BackendError> {
        let signature = self.sign(user_id, room_id, issued_at, &nonce)?;
        Ok(Token {
            app_id: self.config.app_id.clone(),
            user_id: user_id.to_string(),
            room_id: room_id.to_string(),
            issued_at,
            nonce,
            signature,
        })
    }

    fn keyed_mac(
        &self,
        user_id: &str,
        room_id: &str,
        issued_at: i64,
        nonce: &str,
    ) -> Result<HmacSha256, BackendError> {
        let mut mac =
            HmacSha256::new_from_slice(self.config.server_secret.expose_secret().as_bytes())
                .map_err(|e| BackendError::internal(format!("HMAC key rejected: {}", e)))?;
        let payload = signing_payload(&self.config.app_id, user_id, room_id, issued_at, nonce);
        mac.update(payload.as_bytes());
        Ok(mac)
    }
}
