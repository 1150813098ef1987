//! Auth gateway: login and registration round trips.
//!
//! Both endpoints answer with a token envelope; storing the token and
//! routing by its role claim is the caller's job.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::api::{self, ApiError};
use super::types::{AuthResponse, RegisterRequest};

pub(crate) const LOGIN_ENDPOINT: &str = "/auth/login";
pub(crate) const REGISTER_ENDPOINT: &str = "/auth/register";

/// Exchange credentials for a token via `POST /auth/login`.
///
/// # Errors
///
/// Returns an [`ApiError`]; a 401 means the credentials were rejected.
pub async fn login(email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    let payload = serde_json::json!({ "email": email, "password": password });
    api::post_json(LOGIN_ENDPOINT, &payload, None).await
}

/// Create an account via `POST /auth/register`; answers with a token so the
/// new user is signed in immediately.
///
/// # Errors
///
/// Returns an [`ApiError`]; 400/409 indicate a validation conflict.
pub async fn register(request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
    api::post_json(REGISTER_ENDPOINT, request, None).await
}
