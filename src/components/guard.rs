//! Route guard for protected views.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

/// What the guard does with a protected view for a given session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Authenticated: render the protected view.
    Render,
    /// Settled and unauthenticated: go to the login page.
    RedirectToLogin,
    /// Initial store read still pending: hold rendering.
    Pending,
}

/// Pure gate over the session state; the reactive wrapper re-runs it
/// on every navigation and on every session change.
pub fn evaluate(session: &SessionState) -> GuardDecision {
    if session.is_authenticated() {
        GuardDecision::Render
    } else if session.loading {
        GuardDecision::Pending
    } else {
        GuardDecision::RedirectToLogin
    }
}

/// Wrapper for protected views: renders children only while the
/// session is authenticated and redirects to `/login` otherwise.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if evaluate(&session.get()) == GuardDecision::RedirectToLogin {
            navigate("/login", NavigateOptions::default());
        }
    });

    move || {
        if evaluate(&session.get()) == GuardDecision::Render {
            Some(children())
        } else {
            None
        }
    }
}
