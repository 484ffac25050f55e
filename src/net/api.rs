//! REST client for the investor-portal backend.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`, with the persisted
//! bearer token attached to every request. Native builds get stubs returning
//! a network error so store logic and tests run off-browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure maps to one [`ApiError`] variant whose `Display` is the
//! message shown by form code. A 401 on an authenticated endpoint clears the
//! persisted token and navigates to the login route exactly once; callers
//! still receive `ApiError::SessionExpired`. No call is retried here.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "csr"))]
use serde::Deserialize;

use super::types::{
    AuthResponse, Credentials, PasswordChange, RegisterPayload, RegisterResponse, User, UserPatch,
};
#[cfg(any(test, feature = "csr"))]
use crate::routes;
#[cfg(feature = "csr")]
use crate::util::storage;

/// Fallback backend origin for local development.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Backend origin, fixed at build time via `PORTAL_API_URL`.
pub fn base_url() -> &'static str {
    option_env!("PORTAL_API_URL").unwrap_or(DEFAULT_BASE_URL)
}

#[cfg(any(test, feature = "csr"))]
fn endpoint(path: &str) -> String {
    format!("{}{path}", base_url())
}

/// Failure surfaced by an API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx response carrying the server's `message` body.
    #[error("{message}")]
    Http { status: u16, message: String },
    /// 401 on an authenticated endpoint. The session has already been
    /// cleared and the login redirect issued by the time this is returned.
    #[error("Your session has expired. Please sign in again.")]
    SessionExpired,
    /// Transport-level failure; retryable from the user's point of view.
    #[error("Network error: {0}")]
    Network(String),
    /// The server answered 2xx with a body this client cannot decode.
    #[error("Unexpected response from server: {0}")]
    Decode(String),
}

/// How a 401 response is treated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unauthorized {
    /// Authenticated endpoint: 401 means the session is gone. Clear the
    /// persisted token and navigate to the login route.
    ExpireSession,
    /// Credential-carrying endpoint: 401 is the failure being reported
    /// (bad password) and surfaces to the caller unchanged.
    Surface,
}

#[cfg(any(test, feature = "csr"))]
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Best-effort extraction of the server's `{"message": ...}` error body.
#[cfg(any(test, feature = "csr"))]
fn error_message(status: u16, body: Option<&str>) -> String {
    body.and_then(|raw| serde_json::from_str::<ErrorBody>(raw).ok())
        .and_then(|body| body.message)
        .unwrap_or_else(|| format!("Request failed with status {status}"))
}

/// The 401 redirect is suppressed when the login page is already showing,
/// so an expired session cannot redirect-loop.
#[cfg(any(test, feature = "csr"))]
fn should_redirect_to_login(current_path: &str) -> bool {
    current_path != routes::LOGIN
}

#[cfg(feature = "csr")]
fn authorized(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match storage::load_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

#[cfg(feature = "csr")]
fn expire_session() {
    storage::clear_token();
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let current = location.pathname().unwrap_or_default();
    if should_redirect_to_login(&current) {
        log::warn!("session expired on {current}; redirecting to login");
        let _ = location.set_href(routes::LOGIN);
    }
}

#[cfg(feature = "csr")]
async fn read_response<T: serde::de::DeserializeOwned>(
    response: gloo_net::http::Response,
    mode: Unauthorized,
) -> Result<T, ApiError> {
    let status = response.status();
    if status == 401 && mode == Unauthorized::ExpireSession {
        expire_session();
        return Err(ApiError::SessionExpired);
    }
    if !response.ok() {
        let body = response.text().await.ok();
        return Err(ApiError::Http {
            status,
            message: error_message(status, body.as_deref()),
        });
    }
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

#[cfg(feature = "csr")]
async fn request_json<T, B>(
    builder: gloo_net::http::RequestBuilder,
    body: Option<&B>,
    mode: Unauthorized,
) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
    B: serde::Serialize,
{
    let builder = authorized(builder);
    let request = match body {
        Some(body) => builder.json(body),
        None => builder.build(),
    }
    .map_err(|err| ApiError::Network(err.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    read_response(response, mode).await
}

#[cfg(not(feature = "csr"))]
fn offline<T>() -> Result<T, ApiError> {
    Err(ApiError::Network("requests require a browser context".to_owned()))
}

#[cfg(feature = "csr")]
#[derive(Deserialize)]
struct Ack {
    #[serde(default)]
    #[allow(dead_code)]
    message: Option<String>,
}

/// Profile updates may return the refreshed user record or just a message.
#[cfg(feature = "csr")]
#[derive(Deserialize)]
struct ProfileResponse {
    #[serde(default)]
    user: Option<User>,
}

/// `POST /auth/login`. A 401 here is a credentials failure, not an expired
/// session, and surfaces with the server's message.
pub async fn login(credentials: &Credentials) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        request_json(
            gloo_net::http::Request::post(&endpoint("/auth/login")),
            Some(credentials),
            Unauthorized::Surface,
        )
        .await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = credentials;
        offline()
    }
}

/// `POST /auth/register`.
pub async fn register(payload: &RegisterPayload) -> Result<RegisterResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        request_json(
            gloo_net::http::Request::post(&endpoint("/auth/register")),
            Some(payload),
            Unauthorized::Surface,
        )
        .await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = payload;
        offline()
    }
}

/// `GET /auth/me`. Requires the bearer token; 401 expires the session.
pub async fn current_user() -> Result<User, ApiError> {
    #[cfg(feature = "csr")]
    {
        request_json(
            gloo_net::http::Request::get(&endpoint("/auth/me")),
            None::<&()>,
            Unauthorized::ExpireSession,
        )
        .await
    }
    #[cfg(not(feature = "csr"))]
    {
        offline()
    }
}

/// `POST /auth/forgot-password`. Always answers 200 to avoid enumeration;
/// failures here are transport or validation only.
pub async fn forgot_password(email: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let body = serde_json::json!({ "email": email });
        request_json::<Ack, _>(
            gloo_net::http::Request::post(&endpoint("/auth/forgot-password")),
            Some(&body),
            Unauthorized::Surface,
        )
        .await
        .map(|_| ())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = email;
        offline()
    }
}

/// `POST /auth/reset-password` with the emailed reset token.
pub async fn reset_password(token: &str, password: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let body = serde_json::json!({ "token": token, "password": password });
        request_json::<Ack, _>(
            gloo_net::http::Request::post(&endpoint("/auth/reset-password")),
            Some(&body),
            Unauthorized::Surface,
        )
        .await
        .map(|_| ())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, password);
        offline()
    }
}

/// `POST /auth/verify-email` with the emailed verification token.
pub async fn verify_email(token: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let body = serde_json::json!({ "token": token });
        request_json::<Ack, _>(
            gloo_net::http::Request::post(&endpoint("/auth/verify-email")),
            Some(&body),
            Unauthorized::Surface,
        )
        .await
        .map(|_| ())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
        offline()
    }
}

/// `PUT /auth/profile`. Returns the refreshed user when the server echoes
/// one back.
pub async fn update_profile(patch: &UserPatch) -> Result<Option<User>, ApiError> {
    #[cfg(feature = "csr")]
    {
        request_json::<ProfileResponse, _>(
            gloo_net::http::Request::put(&endpoint("/auth/profile")),
            Some(patch),
            Unauthorized::ExpireSession,
        )
        .await
        .map(|response| response.user)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = patch;
        offline()
    }
}

/// `PUT /auth/change-password`.
pub async fn change_password(change: &PasswordChange) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        request_json::<Ack, _>(
            gloo_net::http::Request::put(&endpoint("/auth/change-password")),
            Some(change),
            Unauthorized::ExpireSession,
        )
        .await
        .map(|_| ())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = change;
        offline()
    }
}
