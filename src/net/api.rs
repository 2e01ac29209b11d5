//! REST API client for the journal backend.
//!
//! Browser (`csr`): real HTTP via `gloo-net`, with the bearer token
//! read from the token store on every request and 401 responses
//! intercepted globally. Native (tests, tooling): stubs returning an
//! error so callers compile and the pure helpers stay testable.
//!
//! UNAUTHORIZED HANDLING
//! =====================
//! A 401 from any endpoint clears the token store and fires the
//! handler installed via [`on_unauthorized`] at most once until
//! [`rearm_unauthorized`] runs after the next successful login, so
//! simultaneous 401s collapse into a single redirect. Callers get
//! [`ApiError::Unauthorized`] back and are expected to stay quiet;
//! the installed handler owns the session teardown and navigation.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::net::types::{Credentials, EmailDraft, EntryDraft, JournalEntry, UserAccount};

/// Backend origin used when `JOURNAL_API_BASE` is not set at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:8080/journal";

#[cfg(feature = "csr")]
fn base() -> &'static str {
    option_env!("JOURNAL_API_BASE").unwrap_or(DEFAULT_API_BASE)
}

#[cfg(feature = "csr")]
fn url(path: &str) -> String {
    format!("{}{path}", base())
}

/// Path of the single-entry endpoints.
#[cfg(any(feature = "csr", test))]
fn entry_path(id: &str) -> String {
    format!("/journal/id/{id}")
}

/// Failure of an API call. Only 401 is interpreted specially; every
/// other non-success status passes through as [`ApiError::Status`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a readable response.
    #[error("network error: {0}")]
    Network(String),
    /// Non-success status other than 401, with the extracted message.
    #[error("{message}")]
    Status { code: u16, message: String },
    /// The backend rejected the bearer token; the session teardown is
    /// already under way.
    #[error("session expired")]
    Unauthorized,
}

/// Extract a human-readable message from an error response body.
///
/// Prefers a JSON `error` field, then `message`, then the raw text
/// body (the backend answers some failures in plain text), then a
/// generic fallback naming the status code.
#[cfg(any(feature = "csr", test))]
fn status_message(code: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["error", "message"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                if !text.trim().is_empty() {
                    return text.to_owned();
                }
            }
        }
        return format!("request failed with status {code}");
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("request failed with status {code}")
    } else {
        trimmed.to_owned()
    }
}

// =============================================================
// Unauthorized hook
// =============================================================

struct UnauthorizedHook {
    handler: Option<Rc<dyn Fn()>>,
    fired: bool,
}

thread_local! {
    static UNAUTHORIZED: RefCell<UnauthorizedHook> =
        RefCell::new(UnauthorizedHook { handler: None, fired: false });
}

/// Install the handler invoked when any request sees a 401. The
/// session owner subscribes exactly once at startup; installing
/// replaces any previous handler and re-arms the hook.
pub fn on_unauthorized(handler: impl Fn() + 'static) {
    UNAUTHORIZED.with(|hook| {
        let mut hook = hook.borrow_mut();
        hook.handler = Some(Rc::new(handler));
        hook.fired = false;
    });
}

/// Allow the next 401 to fire the handler again. Called after a fresh
/// login succeeds.
pub fn rearm_unauthorized() {
    UNAUTHORIZED.with(|hook| hook.borrow_mut().fired = false);
}

#[cfg(any(feature = "csr", test))]
fn notify_unauthorized() {
    let handler = UNAUTHORIZED.with(|hook| {
        let mut hook = hook.borrow_mut();
        if hook.fired {
            None
        } else {
            hook.fired = true;
            hook.handler.clone()
        }
    });
    if let Some(handler) = handler {
        handler();
    }
}

// =============================================================
// Request plumbing
// =============================================================

/// Attach the stored bearer token, if any. An absent token sends the
/// request unauthenticated and lets the backend reject it.
#[cfg(feature = "csr")]
fn authorize(request: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match crate::net::token_store::get() {
        Some(token) => request.header("Authorization", &format!("Bearer {token}")),
        None => request,
    }
}

#[cfg(feature = "csr")]
async fn check(
    response: gloo_net::http::Response,
) -> Result<gloo_net::http::Response, ApiError> {
    if response.status() == 401 {
        crate::net::token_store::clear();
        notify_unauthorized();
        return Err(ApiError::Unauthorized);
    }
    if !response.ok() {
        let code = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status { code, message: status_message(code, &body) });
    }
    Ok(response)
}

#[cfg(feature = "csr")]
async fn send(
    request: gloo_net::http::RequestBuilder,
) -> Result<gloo_net::http::Response, ApiError> {
    let response = authorize(request)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(response).await
}

#[cfg(feature = "csr")]
async fn send_json<B: serde::Serialize>(
    request: gloo_net::http::RequestBuilder,
    body: &B,
) -> Result<gloo_net::http::Response, ApiError> {
    let response = authorize(request)
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(response).await
}

#[cfg(feature = "csr")]
async fn into_json<T: serde::de::DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

#[cfg(not(feature = "csr"))]
fn offline() -> ApiError {
    ApiError::Network("not available outside the browser".to_owned())
}

// =============================================================
// Auth endpoints
// =============================================================

/// POST `/public` — log in. The success body is the raw bearer token.
pub async fn login(credentials: &Credentials) -> Result<String, ApiError> {
    #[cfg(feature = "csr")]
    {
        let response =
            send_json(gloo_net::http::Request::post(&url("/public")), credentials).await?;
        response.text().await.map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = credentials;
        Err(offline())
    }
}

/// POST `/public/signup` — create an account.
pub async fn signup(credentials: &Credentials) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        send_json(gloo_net::http::Request::post(&url("/public/signup")), credentials)
            .await
            .map(|_| ())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = credentials;
        Err(offline())
    }
}

/// GET `/public/health-check` — backend liveness probe.
pub async fn health_check() -> Result<String, ApiError> {
    #[cfg(feature = "csr")]
    {
        let response = send(gloo_net::http::Request::get(&url("/public/health-check"))).await?;
        response.text().await.map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(offline())
    }
}

// =============================================================
// Journal endpoints
// =============================================================

/// GET `/journal` — list the current user's entries.
pub async fn list_entries() -> Result<Vec<JournalEntry>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let response = send(gloo_net::http::Request::get(&url("/journal"))).await?;
        into_json(response).await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(offline())
    }
}

/// GET `/journal/id/{id}` — fetch one entry.
pub async fn get_entry(id: &str) -> Result<JournalEntry, ApiError> {
    #[cfg(feature = "csr")]
    {
        let response = send(gloo_net::http::Request::get(&url(&entry_path(id)))).await?;
        into_json(response).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        Err(offline())
    }
}

/// POST `/journal` — create an entry. The response body is ignored;
/// views re-fetch instead of reconciling copies.
pub async fn create_entry(draft: &EntryDraft) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        send_json(gloo_net::http::Request::post(&url("/journal")), draft)
            .await
            .map(|_| ())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = draft;
        Err(offline())
    }
}

/// PUT `/journal/id/{id}` — update an entry.
pub async fn update_entry(id: &str, draft: &EntryDraft) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        send_json(gloo_net::http::Request::put(&url(&entry_path(id))), draft)
            .await
            .map(|_| ())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (id, draft);
        Err(offline())
    }
}

/// DELETE `/journal/id/{id}` — delete an entry.
pub async fn delete_entry(id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        send(gloo_net::http::Request::delete(&url(&entry_path(id))))
            .await
            .map(|_| ())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        Err(offline())
    }
}

// =============================================================
// User endpoints
// =============================================================

/// GET `/user` — fetch the current user's profile.
pub async fn get_profile() -> Result<UserAccount, ApiError> {
    #[cfg(feature = "csr")]
    {
        let response = send(gloo_net::http::Request::get(&url("/user"))).await?;
        into_json(response).await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(offline())
    }
}

/// PUT `/user` — update the current user's credentials.
pub async fn update_profile(credentials: &Credentials) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        send_json(gloo_net::http::Request::put(&url("/user")), credentials)
            .await
            .map(|_| ())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = credentials;
        Err(offline())
    }
}

/// DELETE `/user` — delete the current user's account.
pub async fn delete_account() -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        send(gloo_net::http::Request::delete(&url("/user")))
            .await
            .map(|_| ())
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(offline())
    }
}

// =============================================================
// Admin endpoints
// =============================================================

/// GET `/admin/all-users` — list every account (admin only).
pub async fn list_users() -> Result<Vec<UserAccount>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let response = send(gloo_net::http::Request::get(&url("/admin/all-users"))).await?;
        into_json(response).await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(offline())
    }
}

/// POST `/admin/create-admin-user` — create an admin account.
pub async fn create_admin_user(credentials: &Credentials) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        send_json(
            gloo_net::http::Request::post(&url("/admin/create-admin-user")),
            credentials,
        )
        .await
        .map(|_| ())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = credentials;
        Err(offline())
    }
}

// =============================================================
// Email endpoint
// =============================================================

/// POST `/email/send` — send an email through the backend.
pub async fn send_email(draft: &EmailDraft) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        send_json(gloo_net::http::Request::post(&url("/email/send")), draft)
            .await
            .map(|_| ())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = draft;
        Err(offline())
    }
}
