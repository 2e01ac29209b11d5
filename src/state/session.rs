//! Session lifecycle: token storage, login/signup/logout, and the
//! derived authenticated flag.
//!
//! The session store is an `RwSignal<SessionState>` provided once via
//! context at startup; there is no ambient singleton. The invariant
//! is that whenever the state is authenticated, the persistent token
//! store holds exactly the in-memory token — both sides are written
//! together in [`login`], [`logout`], and the 401 teardown.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::token_store;
use crate::net::types::Credentials;

/// The client's belief about whether it holds a valid bearer token.
///
/// `loading` is true from construction until [`initialize`] has read
/// the persistent store, so the route guard can hold its decision
/// during the first paint. Token presence is the sole truth signal;
/// no expiry is tracked client-side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { token: None, loading: true }
    }
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Adopt whatever the persistent store held at startup and end
    /// the loading phase. A stale or server-invalidated token is
    /// treated as valid until the first request fails.
    pub fn restore(&mut self, stored: Option<String>) {
        self.token = stored;
        self.loading = false;
    }

    /// Enter the authenticated state with a fresh token.
    pub fn authenticate(&mut self, token: String) {
        self.token = Some(token);
        self.loading = false;
    }

    /// Drop the session unconditionally.
    pub fn clear(&mut self) {
        self.token = None;
        self.loading = false;
    }
}

/// Settle the initial session state from the persistent store.
/// Runs once at startup and never touches the network.
pub fn initialize(session: RwSignal<SessionState>) {
    let stored = token_store::get();
    session.update(|s| s.restore(stored));
}

/// Log in against the backend. On success the token is persisted
/// before the in-memory state flips, and the unauthorized hook is
/// re-armed for the new session. On failure the session is left
/// untouched and the user-facing message is returned.
pub async fn login(
    session: RwSignal<SessionState>,
    credentials: &Credentials,
) -> Result<(), String> {
    match api::login(credentials).await {
        Ok(token) => {
            token_store::set(&token);
            api::rearm_unauthorized();
            session.update(|s| s.authenticate(token));
            Ok(())
        }
        Err(err) => {
            leptos::logging::warn!("login failed: {err}");
            Err(failure_message(&err, "Login failed"))
        }
    }
}

/// Create an account. Session state is never altered either way; the
/// user still has to log in afterwards.
pub async fn signup(credentials: &Credentials) -> Result<(), String> {
    api::signup(credentials).await.map_err(|err| {
        leptos::logging::warn!("signup failed: {err}");
        failure_message(&err, "Signup failed")
    })
}

/// Clear the persistent store and forget the in-memory token. No
/// server interaction; cannot fail.
pub fn logout(session: RwSignal<SessionState>) {
    token_store::clear();
    session.update(SessionState::clear);
}

/// Map an API failure to the message shown to the user: the backend
/// payload message when there is one, the fallback otherwise.
fn failure_message(err: &api::ApiError, fallback: &str) -> String {
    match err {
        api::ApiError::Status { message, .. } if !message.trim().is_empty() => message.clone(),
        _ => fallback.to_owned(),
    }
}
