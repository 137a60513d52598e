//! JSON request helper for authenticated API calls.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): returns `ApiError::Unavailable`.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses surface the body's `message` field so pages can show
//! it directly; bodies without one fall back to a generic message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::types::User;
#[cfg(feature = "hydrate")]
use crate::config::USER_STORAGE_KEY;
#[cfg(feature = "hydrate")]
use crate::util::storage::get_from_storage;
use crate::util::storage::KeyValueStore;

#[cfg(any(test, feature = "hydrate"))]
const GENERIC_FAILURE: &str = "Something went wrong";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// `Authorization` header value for the stored user, if it carries a token.
pub fn bearer_header(user: Option<&User>) -> Option<String> {
    user.filter(|u| !u.token.is_empty())
        .map(|u| format!("Bearer {}", u.token))
}

#[cfg(any(test, feature = "hydrate"))]
fn error_message(body: &serde_json::Value) -> String {
    body.get("message")
        .and_then(serde_json::Value::as_str)
        .filter(|m| !m.is_empty())
        .unwrap_or(GENERIC_FAILURE)
        .to_owned()
}

#[cfg(any(test, feature = "hydrate"))]
fn decode<T: DeserializeOwned>(body: serde_json::Value) -> Result<T, ApiError> {
    serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Send a JSON request to `url`, attaching the stored user's bearer token.
///
/// # Errors
///
/// Returns an error if the request cannot be sent, the body is not JSON of
/// the expected shape, or the server responds with a non-OK status.
pub async fn api_request<S, T>(
    store: &S,
    method: Method,
    url: &str,
    body: Option<&serde_json::Value>,
) -> Result<T, ApiError>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let user: Option<User> = get_from_storage(store, USER_STORAGE_KEY);
        let mut builder = match method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Patch => Request::patch(url),
            Method::Delete => Request::delete(url),
        }
        .header("Content-Type", "application/json");
        if let Some(auth) = bearer_header(user.as_ref()) {
            builder = builder.header("Authorization", &auth);
        }

        let request = match body {
            Some(payload) => builder.json(payload),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Transport(e.to_string()))?;

        let resp = request.send().await.map_err(|e| {
            log::error!("api request error: {e}");
            ApiError::Transport(e.to_string())
        })?;
        let data: serde_json::Value = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        if !resp.ok() {
            let err = ApiError::Status { status: resp.status(), message: error_message(&data) };
            log::error!("api request error: {err}");
            return Err(err);
        }
        decode(data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (store, method, url, body);
        Err(ApiError::Unavailable)
    }
}
