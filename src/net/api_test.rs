use std::cell::Cell;
use std::rc::Rc;

use super::*;

// =============================================================
// Error-message extraction
// =============================================================

#[test]
fn status_message_prefers_json_error_field() {
    let body = r#"{"error":"Invalid credentials","message":"ignored"}"#;
    assert_eq!(status_message(400, body), "Invalid credentials");
}

#[test]
fn status_message_falls_back_to_json_message_field() {
    let body = r#"{"message":"User already exists"}"#;
    assert_eq!(status_message(400, body), "User already exists");
}

#[test]
fn status_message_uses_plain_text_bodies() {
    assert_eq!(
        status_message(400, "Incorrect username and password"),
        "Incorrect username and password"
    );
}

#[test]
fn status_message_generic_for_empty_or_opaque_bodies() {
    assert_eq!(status_message(500, ""), "request failed with status 500");
    assert_eq!(status_message(500, "   "), "request failed with status 500");
    assert_eq!(status_message(403, "{}"), "request failed with status 403");
    assert_eq!(
        status_message(400, r#"{"error":"  "}"#),
        "request failed with status 400"
    );
}

// =============================================================
// Unauthorized hook
// =============================================================

#[test]
fn unauthorized_handler_fires_once_for_concurrent_401s() {
    let calls = Rc::new(Cell::new(0));
    let seen = calls.clone();
    on_unauthorized(move || seen.set(seen.get() + 1));

    // Two in-flight requests both hit 401.
    notify_unauthorized();
    notify_unauthorized();
    assert_eq!(calls.get(), 1);
}

#[test]
fn rearm_allows_the_next_expiry_to_fire_again() {
    let calls = Rc::new(Cell::new(0));
    let seen = calls.clone();
    on_unauthorized(move || seen.set(seen.get() + 1));

    notify_unauthorized();
    rearm_unauthorized();
    notify_unauthorized();
    assert_eq!(calls.get(), 2);
}

#[test]
fn installing_a_handler_rearms_the_hook() {
    let first = Rc::new(Cell::new(0));
    let seen = first.clone();
    on_unauthorized(move || seen.set(seen.get() + 1));
    notify_unauthorized();

    let second = Rc::new(Cell::new(0));
    let seen = second.clone();
    on_unauthorized(move || seen.set(seen.get() + 1));
    notify_unauthorized();

    assert_eq!(first.get(), 1);
    assert_eq!(second.get(), 1);
}

#[test]
fn notify_without_handler_is_a_no_op() {
    UNAUTHORIZED.with(|hook| {
        let mut hook = hook.borrow_mut();
        hook.handler = None;
        hook.fired = false;
    });
    notify_unauthorized();
    notify_unauthorized();
}

// =============================================================
// Paths and display
// =============================================================

#[test]
fn entry_path_embeds_the_id() {
    assert_eq!(entry_path("abc123"), "/journal/id/abc123");
}

#[test]
fn api_error_displays_the_extracted_message() {
    let err = ApiError::Status { code: 400, message: "Subject is missing".to_owned() };
    assert_eq!(err.to_string(), "Subject is missing");
}
