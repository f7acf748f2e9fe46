//! Auth API operations: login, register, current-user.
//!
//! Token persistence is deliberately not done here. The session controller
//! owns the store, so these stay plain wire calls.

use super::error::ApiError;
use super::http;
use super::types::{RegisterData, TokenResponse, User};

/// Exchange credentials for a bearer token via `POST /auth/login`.
///
/// The endpoint takes a form-encoded body, OAuth2 password-flow style.
///
/// # Errors
///
/// `ApiError::Unauthorized` with the server's detail (typically
/// "Incorrect username or password") on bad credentials; transport and decode
/// failures otherwise.
pub async fn login(username: &str, password: &str) -> Result<TokenResponse, ApiError> {
    http::post_form("/auth/login", &[("username", username), ("password", password)]).await
}

/// Create an account via `POST /auth/register`. Does not authenticate.
///
/// # Errors
///
/// `ApiError::Server` with the server's detail (e.g. a duplicate username or
/// email) on rejection.
pub async fn register(data: &RegisterData) -> Result<User, ApiError> {
    http::post_json("/auth/register", data).await
}

/// Fetch the authenticated user via `GET /users/me`.
///
/// # Errors
///
/// `ApiError::Unauthorized` when no stored credential exists or the server
/// rejects it.
pub async fn current_user() -> Result<User, ApiError> {
    http::get_json("/users/me").await
}
