//! HTTP client adapter for the `/api/v1` backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every request passes through here so the bearer credential is injected in
//! exactly one place. Requests without a stored credential go out
//! unauthenticated; rejecting them is the server's job. No retry, backoff, or
//! timeout policy beyond `fetch` defaults; failures surface verbatim as
//! [`ApiError`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
#[cfg(feature = "hydrate")]
use crate::session::store::{CookieTokenStore, TokenStore as _};

/// Base path every endpoint is joined onto.
pub const API_BASE: &str = "/api/v1";

/// Join an endpoint path onto the API base.
pub fn api_url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

/// Header value for a stored credential, or `None` when unauthenticated.
pub fn authorization_header(token: Option<&str>) -> Option<String> {
    token.map(|token| format!("Bearer {token}"))
}

#[cfg(feature = "hydrate")]
fn authorized(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match authorization_header(CookieTokenStore.get().as_deref()) {
        Some(value) => builder.header("Authorization", &value),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn response_error(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    ApiError::from_status_body(status, &body)
}

#[cfg(feature = "hydrate")]
async fn into_json<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(response_error(resp).await);
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// `GET` a JSON resource.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, a non-success status, or an
/// unexpected body shape.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::get(&api_url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        into_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::unavailable())
    }
}

/// `POST` a JSON body and decode a JSON response.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, a non-success status, or an
/// unexpected body shape.
pub async fn post_json<T: DeserializeOwned>(path: &str, body: &impl Serialize) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::post(&api_url(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        into_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::unavailable())
    }
}

/// `PUT` a JSON body and decode a JSON response.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, a non-success status, or an
/// unexpected body shape.
pub async fn put_json<T: DeserializeOwned>(path: &str, body: &impl Serialize) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::put(&api_url(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        into_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::unavailable())
    }
}

/// `POST` a form-encoded body (the login endpoint's content type) and decode
/// a JSON response.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, a non-success status, or an
/// unexpected body shape.
pub async fn post_form<T: DeserializeOwned>(path: &str, fields: &[(&str, &str)]) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        // URLSearchParams as a fetch body sets the form content type itself.
        let params = web_sys::UrlSearchParams::new()
            .map_err(|_| ApiError::Network("failed to build form body".to_owned()))?;
        for (key, value) in fields {
            params.append(key, value);
        }
        let resp = authorized(gloo_net::http::Request::post(&api_url(path)))
            .body(params)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        into_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, fields);
        Err(ApiError::unavailable())
    }
}

/// `DELETE` a resource, expecting no response body.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or a non-success status.
pub async fn delete(path: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::delete(&api_url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if resp.ok() {
            Ok(())
        } else {
            Err(response_error(resp).await)
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::unavailable())
    }
}
