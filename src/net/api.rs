//! HTTP request plumbing shared by the service wrappers.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, all against
//! same-origin relative paths. Server-side (SSR): stubs returning
//! [`ApiError::Unavailable`] since remote calls are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures collapse into [`ApiError`]; views translate its status code
//! into their own user-facing message. Nothing is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// A failed remote call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("request failed with status {0}")]
    Status(u16),
    /// The response body could not be decoded.
    #[error("malformed response body")]
    Body,
    /// Remote calls are not available during server rendering.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// HTTP status behind this error; transport-level failures map to 0.
    pub fn status(&self) -> u16 {
        match self {
            Self::Status(code) => *code,
            _ => 0,
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// GET `path`, expecting a JSON body.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-success status, or an
/// undecodable body.
pub async fn get_json<T: DeserializeOwned>(path: &str, token: Option<&str>) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let mut request = gloo_net::http::Request::get(path);
        if let Some(token) = token {
            request = request.header("Authorization", &bearer(token));
        }
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }
        response.json::<T>().await.map_err(|_| ApiError::Body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token);
        Err(ApiError::Unavailable)
    }
}

/// POST a JSON `body` to `path`, expecting a JSON response.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-success status, or an
/// undecodable body.
pub async fn post_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
    token: Option<&str>,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let mut request = gloo_net::http::Request::post(path);
        if let Some(token) = token {
            request = request.header("Authorization", &bearer(token));
        }
        let response = request
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }
        response.json::<T>().await.map_err(|_| ApiError::Body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body, token);
        Err(ApiError::Unavailable)
    }
}

/// PUT a JSON `body` to `path`, expecting a JSON response.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-success status, or an
/// undecodable body.
pub async fn put_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
    token: Option<&str>,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let mut request = gloo_net::http::Request::put(path);
        if let Some(token) = token {
            request = request.header("Authorization", &bearer(token));
        }
        let response = request
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }
        response.json::<T>().await.map_err(|_| ApiError::Body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body, token);
        Err(ApiError::Unavailable)
    }
}

/// DELETE `path`, ignoring any response body.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or non-success status.
pub async fn delete(path: &str, token: Option<&str>) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let mut request = gloo_net::http::Request::delete(path);
        if let Some(token) = token {
            request = request.header("Authorization", &bearer(token));
        }
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token);
        Err(ApiError::Unavailable)
    }
}
