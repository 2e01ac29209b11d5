use super::*;
use crate::net::api::ApiError;

// =============================================================
// State machine transitions
// =============================================================

#[test]
fn session_starts_unauthenticated_and_loading() {
    let state = SessionState::default();
    assert!(!state.is_authenticated());
    assert!(state.loading);
}

#[test]
fn restore_with_stored_token_authenticates_without_network() {
    let mut state = SessionState::default();
    state.restore(Some("tok-1".to_owned()));
    assert!(state.is_authenticated());
    assert!(!state.loading);
    assert_eq!(state.token.as_deref(), Some("tok-1"));
}

#[test]
fn restore_with_empty_store_settles_unauthenticated() {
    let mut state = SessionState::default();
    state.restore(None);
    assert!(!state.is_authenticated());
    assert!(!state.loading);
}

#[test]
fn authenticate_then_clear_round_trips_to_unauthenticated() {
    let mut state = SessionState::default();
    state.authenticate("tok-2".to_owned());
    assert!(state.is_authenticated());

    state.clear();
    assert!(!state.is_authenticated());
    assert!(state.token.is_none());
}

#[test]
fn clear_is_idempotent() {
    let mut state = SessionState::default();
    state.clear();
    state.clear();
    assert!(!state.is_authenticated());
}

// =============================================================
// Failure messages
// =============================================================

#[test]
fn failure_message_prefers_backend_payload() {
    let err = ApiError::Status { code: 400, message: "Incorrect username and password".to_owned() };
    assert_eq!(
        failure_message(&err, "Login failed"),
        "Incorrect username and password"
    );
}

#[test]
fn failure_message_falls_back_for_network_errors() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(failure_message(&err, "Login failed"), "Login failed");
}

#[test]
fn failure_message_falls_back_for_blank_payloads() {
    let err = ApiError::Status { code: 400, message: "   ".to_owned() };
    assert_eq!(failure_message(&err, "Signup failed"), "Signup failed");
}

#[test]
fn failure_message_falls_back_when_unauthorized() {
    assert_eq!(failure_message(&ApiError::Unauthorized, "Login failed"), "Login failed");
}
