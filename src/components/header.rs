//! Top navigation bar, session-dependent.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{self, SessionState};

/// Header with the brand link and either the authenticated nav
/// (Dashboard, Send Email, Logout) or the public one (Login, Sign Up).
#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        session::logout(session);
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <header class="header">
            <a class="header__brand" href="/">
                "Journal App"
            </a>
            {move || {
                if session.get().is_authenticated() {
                    view! {
                        <nav class="header__nav">
                            <a class="header__link" href="/dashboard">
                                "Dashboard"
                            </a>
                            <a class="header__link" href="/email">
                                "Send Email"
                            </a>
                            <button class="header__link header__link--logout" on:click=on_logout.clone()>
                                "Logout"
                            </button>
                        </nav>
                    }
                        .into_any()
                } else {
                    view! {
                        <nav class="header__nav">
                            <a class="header__link" href="/login">
                                "Login"
                            </a>
                            <a class="header__link header__link--primary" href="/signup">
                                "Sign Up"
                            </a>
                        </nav>
                    }
                        .into_any()
                }
            }}
        </header>
    }
}
