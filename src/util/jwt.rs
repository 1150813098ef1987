//! Unverified JWT claims decoding.
//!
//! The backend signs and verifies tokens; the client only needs to read the
//! identity claims embedded in the payload segment, so no signature check
//! happens here. A token that fails to decode is treated by callers as the
//! guest state rather than an error surfaced to the user.

#[cfg(test)]
#[path = "jwt_test.rs"]
mod jwt_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

use crate::net::types::Role;

/// Identity claims carried in the token payload.
///
/// `role` stays a raw string here; [`role`] maps it onto the [`Role`] enum so
/// an unrecognized value degrades to guest without losing the other claims.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Claims {
    #[serde(rename = "firstName")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
    /// Subject, the account email.
    pub sub: Option<String>,
    pub role: Option<String>,
    /// Expiry in epoch seconds.
    pub exp: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum JwtError {
    #[error("token has no payload segment")]
    MissingPayload,
    #[error("token payload is not valid base64: {0}")]
    Base64(String),
    #[error("token payload is not valid claims JSON: {0}")]
    Json(String),
}

/// Decode the claims from the payload segment of `token`.
///
/// # Errors
///
/// Returns a [`JwtError`] when the token has no payload segment or the
/// segment is not base64url-encoded claims JSON.
pub fn decode(token: &str) -> Result<Claims, JwtError> {
    let payload = token.split('.').nth(1).ok_or(JwtError::MissingPayload)?;
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| JwtError::Base64(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| JwtError::Json(e.to_string()))
}

/// Role claim of `token`, if present and recognized.
pub fn role(token: Option<&str>) -> Option<Role> {
    let claims = decode(token?).ok()?;
    Role::from_claim(claims.role.as_deref()?)
}

/// Whether `token` is expired. An absent or undecodable token counts as
/// expired; a token without an `exp` claim does not.
pub fn is_expired(token: Option<&str>) -> bool {
    let Some(token) = token else {
        return true;
    };
    match decode(token) {
        Ok(claims) => is_expired_at(&claims, now_epoch_seconds()),
        Err(_) => true,
    }
}

/// Expiry check against an explicit clock, for callers and tests.
pub fn is_expired_at(claims: &Claims, now_epoch_seconds: i64) -> bool {
    claims.exp.is_some_and(|exp| exp < now_epoch_seconds)
}

fn now_epoch_seconds() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        (js_sys::Date::now() / 1000.0) as i64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};

        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0)
    }
}
