//! Login page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::messages::ErrorMessage;
use crate::components::spinner::LoadingSpinner;
use crate::net::types::Credentials;
use crate::state::session::{self, SessionState};
use crate::util::validate::validate_credentials;

/// Username/password form. A successful login lands on the dashboard;
/// a failed one surfaces the backend's message inline and leaves the
/// session untouched.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session_signal = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let user_name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        if let Err(message) =
            validate_credentials(&user_name.get_untracked(), &password.get_untracked())
        {
            error.set(Some(message.to_owned()));
            return;
        }

        submitting.set(true);
        error.set(None);
        let credentials = Credentials {
            user_name: user_name.get_untracked(),
            password: password.get_untracked(),
        };
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match session::login(session_signal, &credentials).await {
                Ok(()) => navigate("/dashboard", NavigateOptions::default()),
                Err(message) => error.set(Some(message)),
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <h1 class="auth-page__title">"Sign In"</h1>
            <div class="card">
                <ErrorMessage message=error/>
                <form class="form" on:submit=submit>
                    <label class="form__label">
                        "Username"
                        <input
                            class="form__input"
                            type="text"
                            prop:value=move || user_name.get()
                            on:input=move |ev| {
                                user_name.set(event_target_value(&ev));
                                error.set(None);
                            }
                        />
                    </label>
                    <label class="form__label">
                        "Password"
                        <input
                            class="form__input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| {
                                password.set(event_target_value(&ev));
                                error.set(None);
                            }
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                        {move || {
                            if submitting.get() {
                                view! { <LoadingSpinner/> }.into_any()
                            } else {
                                view! { "Sign In" }.into_any()
                            }
                        }}
                    </button>
                </form>
                <p class="auth-page__switch">
                    "Don't have an account? " <a href="/signup">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
