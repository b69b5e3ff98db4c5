//! REST API client for the HR backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since the backend is only
//! reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is normalized into [`ApiError`] before it reaches callers.
//! A 401 on anything but the login endpoint triggers at most one
//! refresh-and-retry cycle per original request; a failed refresh clears
//! the session and sends the browser back to the login entry point.
//!
//! Concurrent requests that each receive a 401 each run their own refresh
//! cycle. Refresh is not single-flight; the last refresh response wins in
//! storage.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::{ApiError, GENERIC_ERROR_MESSAGE};
use super::types::Envelope;
#[cfg(any(test, feature = "hydrate"))]
use super::types::FieldError;
#[cfg(feature = "hydrate")]
use crate::state::session;

/// Login entry-point route of the SPA.
pub const LOGIN_ROUTE: &str = "/login";

/// Client-side cap on how long any single request may take.
#[cfg(feature = "hydrate")]
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

#[cfg(feature = "hydrate")]
const NETWORK_ERROR_MESSAGE: &str = "Unable to reach the server. Check your connection and try again.";

#[cfg(feature = "hydrate")]
const TIMEOUT_MESSAGE: &str = "The request timed out. Please try again.";

/// Base URL of the versioned REST API, overridable at compile time.
pub fn api_base() -> &'static str {
    option_env!("HRM_API_BASE_URL").unwrap_or("http://localhost:8000/api/v1")
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(path: &str) -> String {
    format!("{}{path}", api_base())
}

/// The login endpoint authenticates from scratch; a 401 there is a
/// credential failure, never a stale token.
#[cfg(any(test, feature = "hydrate"))]
fn is_login_endpoint(path: &str) -> bool {
    path == "/auth/login"
}

/// What to do with a failed response.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RetryDirective {
    /// Exchange the refresh token, then re-issue the original request once.
    RefreshAndRetry,
    /// No usable refresh token: expire the session without a network call.
    SessionExpired,
    /// Surface the failure as-is.
    Fail,
}

#[cfg(any(test, feature = "hydrate"))]
fn retry_directive(status: u16, path: &str, retried: bool, has_refresh_token: bool) -> RetryDirective {
    if status != 401 || is_login_endpoint(path) || retried {
        return RetryDirective::Fail;
    }
    if has_refresh_token {
        RetryDirective::RefreshAndRetry
    } else {
        RetryDirective::SessionExpired
    }
}

/// Normalize a non-success HTTP response body into an [`ApiError`].
///
/// Message priority: server message, then joined field-error messages,
/// then the generic fallback.
#[cfg(any(test, feature = "hydrate"))]
fn normalize_error(status: u16, payload: Option<serde_json::Value>) -> ApiError {
    let envelope = payload
        .and_then(|value| serde_json::from_value::<Envelope>(value).ok())
        .unwrap_or_default();
    let field_errors: Vec<FieldError> = envelope.errors.unwrap_or_default();
    let message = envelope
        .message
        .filter(|message| !message.is_empty())
        .or_else(|| join_field_errors(&field_errors))
        .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_owned());
    if field_errors.is_empty() {
        ApiError::Api { message, status }
    } else {
        ApiError::Validation { message, status, field_errors }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn join_field_errors(errors: &[FieldError]) -> Option<String> {
    if errors.is_empty() {
        return None;
    }
    Some(errors.iter().map(|error| error.message.as_str()).collect::<Vec<_>>().join(", "))
}

/// Parse a 2xx body into the standard envelope. An empty body (204-style
/// responses) counts as a bare success.
#[cfg(any(test, feature = "hydrate"))]
fn envelope_from_body(body: &str) -> Result<Envelope, ApiError> {
    if body.trim().is_empty() {
        return Ok(Envelope { success: true, ..Envelope::default() });
    }
    serde_json::from_str(body).map_err(|_| ApiError::Contract("malformed response envelope".to_owned()))
}

/// Deserialize the `data` payload of a success envelope.
///
/// # Errors
///
/// `Api` when the envelope reports failure, `Contract` when `data` is
/// missing or does not match `T`.
pub fn data_from<T: serde::de::DeserializeOwned>(envelope: &Envelope) -> Result<T, ApiError> {
    if !envelope.success {
        let message = envelope
            .message
            .clone()
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_owned());
        return Err(ApiError::Api { message, status: 200 });
    }
    let data = envelope
        .data
        .clone()
        .ok_or_else(|| ApiError::Contract("response missing data".to_owned()))?;
    serde_json::from_value(data).map_err(|_| ApiError::Contract("unexpected response shape".to_owned()))
}

/// GET `path` and return the parsed envelope.
///
/// # Errors
///
/// Any [`ApiError`] variant per the normalization contract.
pub async fn get(path: &str) -> Result<Envelope, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        execute(Method::Get, path, None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(offline_error())
    }
}

/// POST `body` to `path` and return the parsed envelope.
///
/// # Errors
///
/// Any [`ApiError`] variant per the normalization contract.
pub async fn post(path: &str, body: &serde_json::Value) -> Result<Envelope, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        execute(Method::Post, path, Some(body)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(offline_error())
    }
}

/// PUT `body` to `path` and return the parsed envelope.
///
/// # Errors
///
/// Any [`ApiError`] variant per the normalization contract.
pub async fn put(path: &str, body: &serde_json::Value) -> Result<Envelope, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        execute(Method::Put, path, Some(body)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(offline_error())
    }
}

/// DELETE `path` and return the parsed envelope.
///
/// # Errors
///
/// Any [`ApiError`] variant per the normalization contract.
pub async fn delete(path: &str) -> Result<Envelope, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        execute(Method::Delete, path, None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(offline_error())
    }
}

#[cfg(not(feature = "hydrate"))]
fn offline_error() -> ApiError {
    ApiError::Network { message: "not available on server".to_owned() }
}

#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

#[cfg(feature = "hydrate")]
async fn execute(method: Method, path: &str, body: Option<&serde_json::Value>) -> Result<Envelope, ApiError> {
    let mut retried = false;
    loop {
        let request = build_request(method, path, body)?;
        let response = send_with_timeout(request).await?;
        let status = response.status();
        if response.ok() {
            let body = response
                .text()
                .await
                .map_err(|_| ApiError::Network { message: NETWORK_ERROR_MESSAGE.to_owned() })?;
            return envelope_from_body(&body);
        }
        let payload = read_json(response).await;
        match retry_directive(status, path, retried, session::load_refresh_token().is_some()) {
            RetryDirective::Fail => return Err(normalize_error(status, payload)),
            RetryDirective::SessionExpired => return Err(expire_session()),
            RetryDirective::RefreshAndRetry => {
                if let Err(refresh_error) = refresh_access_token().await {
                    leptos::logging::warn!("token refresh failed: {refresh_error}");
                    return Err(expire_session());
                }
                retried = true;
            }
        }
    }
}

/// POST a multipart form (document upload and similar endpoints).
///
/// # Errors
///
/// Any [`ApiError`] variant per the normalization contract.
#[cfg(feature = "hydrate")]
pub async fn upload(path: &str, form: &web_sys::FormData) -> Result<Envelope, ApiError> {
    let mut retried = false;
    loop {
        // FormData bodies carry their own multipart boundary header.
        let url = endpoint(path);
        let mut builder = gloo_net::http::Request::post(&url);
        if let Some(token) = session::load_access_token() {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }
        let request = builder
            .body(form.clone())
            .map_err(|_| ApiError::Network { message: NETWORK_ERROR_MESSAGE.to_owned() })?;
        let response = send_with_timeout(request).await?;
        let status = response.status();
        if response.ok() {
            let body = response
                .text()
                .await
                .map_err(|_| ApiError::Network { message: NETWORK_ERROR_MESSAGE.to_owned() })?;
            return envelope_from_body(&body);
        }
        let payload = read_json(response).await;
        match retry_directive(status, path, retried, session::load_refresh_token().is_some()) {
            RetryDirective::Fail => return Err(normalize_error(status, payload)),
            RetryDirective::SessionExpired => return Err(expire_session()),
            RetryDirective::RefreshAndRetry => {
                if let Err(refresh_error) = refresh_access_token().await {
                    leptos::logging::warn!("token refresh failed: {refresh_error}");
                    return Err(expire_session());
                }
                retried = true;
            }
        }
    }
}

/// GET a binary endpoint and hand the bytes to the browser as a download.
///
/// # Errors
///
/// Any [`ApiError`] variant per the normalization contract, plus a network
/// error when the blob cannot be handed to the browser.
#[cfg(feature = "hydrate")]
pub async fn download(path: &str, filename: &str) -> Result<(), ApiError> {
    let request = build_request(Method::Get, path, None)?;
    let response = send_with_timeout(request).await?;
    if !response.ok() {
        let status = response.status();
        let payload = read_json(response).await;
        return Err(normalize_error(status, payload));
    }
    let bytes = response
        .binary()
        .await
        .map_err(|_| ApiError::Network { message: NETWORK_ERROR_MESSAGE.to_owned() })?;
    save_blob(&bytes, filename)
}

#[cfg(feature = "hydrate")]
fn build_request(
    method: Method,
    path: &str,
    body: Option<&serde_json::Value>,
) -> Result<gloo_net::http::Request, ApiError> {
    let url = endpoint(path);
    let mut builder = match method {
        Method::Get => gloo_net::http::Request::get(&url),
        Method::Post => gloo_net::http::Request::post(&url),
        Method::Put => gloo_net::http::Request::put(&url),
        Method::Delete => gloo_net::http::Request::delete(&url),
    };
    if let Some(token) = session::load_access_token() {
        builder = builder.header("Authorization", &format!("Bearer {token}"));
    }
    match body {
        Some(body) => builder
            .json(body)
            .map_err(|_| ApiError::Network { message: NETWORK_ERROR_MESSAGE.to_owned() }),
        None => builder
            .build()
            .map_err(|_| ApiError::Network { message: NETWORK_ERROR_MESSAGE.to_owned() }),
    }
}

#[cfg(feature = "hydrate")]
async fn send_with_timeout(request: gloo_net::http::Request) -> Result<gloo_net::http::Response, ApiError> {
    use futures::future::{Either, select};

    let send = std::pin::pin!(request.send());
    let timeout = std::pin::pin!(gloo_timers::future::sleep(REQUEST_TIMEOUT));
    match select(send, timeout).await {
        Either::Left((result, _)) => {
            result.map_err(|_| ApiError::Network { message: NETWORK_ERROR_MESSAGE.to_owned() })
        }
        Either::Right(((), _)) => Err(ApiError::Network { message: TIMEOUT_MESSAGE.to_owned() }),
    }
}

#[cfg(feature = "hydrate")]
async fn read_json(response: gloo_net::http::Response) -> Option<serde_json::Value> {
    let text = response.text().await.ok()?;
    serde_json::from_str(&text).ok()
}

/// Exchange the refresh token for a new access token and persist it.
#[cfg(feature = "hydrate")]
async fn refresh_access_token() -> Result<(), ApiError> {
    let Some(refresh_token) = session::load_refresh_token() else {
        return Err(ApiError::SessionExpired);
    };
    let body = serde_json::json!({ "refreshToken": refresh_token });
    let request = build_request(Method::Post, "/auth/refresh-token", Some(&body))?;
    let response = send_with_timeout(request).await?;
    if !response.ok() {
        let status = response.status();
        let payload = read_json(response).await;
        return Err(normalize_error(status, payload));
    }
    let text = response
        .text()
        .await
        .map_err(|_| ApiError::Network { message: NETWORK_ERROR_MESSAGE.to_owned() })?;
    let envelope = envelope_from_body(&text)?;
    let token = envelope
        .data
        .as_ref()
        .and_then(|data| data.get("accessToken"))
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| ApiError::Contract("refresh response missing access token".to_owned()))?;
    session::save_access_token(token);
    Ok(())
}

/// Clear the session and bounce to login, then report expiry to the caller.
#[cfg(feature = "hydrate")]
fn expire_session() -> ApiError {
    session::clear();
    redirect_to_login();
    ApiError::SessionExpired
}

#[cfg(feature = "hydrate")]
fn redirect_to_login() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let at_login = window.location().pathname().map_or(false, |path| path.starts_with(LOGIN_ROUTE));
    if !at_login {
        let _ = window.location().set_href(LOGIN_ROUTE);
    }
}

#[cfg(feature = "hydrate")]
fn save_blob(bytes: &[u8], filename: &str) -> Result<(), ApiError> {
    use wasm_bindgen::JsCast;

    let failed = || ApiError::Network { message: "The download could not be saved.".to_owned() };
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());
    let blob = web_sys::Blob::new_with_u8_array_sequence(&parts).map_err(|_| failed())?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|_| failed())?;
    let document = web_sys::window().and_then(|w| w.document()).ok_or_else(failed)?;
    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| failed())?
        .dyn_into()
        .map_err(|_| failed())?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();
    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}
