//! Signup page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::messages::{ErrorMessage, SuccessMessage};
use crate::components::spinner::LoadingSpinner;
use crate::net::types::Credentials;
use crate::state::session;
use crate::util::validate::validate_credentials;

/// Account creation form. Success never logs the user in: it shows a
/// confirmation and then moves to the login page so they sign in with
/// the new credentials.
#[component]
pub fn SignupPage() -> impl IntoView {
    let navigate = use_navigate();

    let user_name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);

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
        success.set(None);
        let credentials = Credentials {
            user_name: user_name.get_untracked(),
            password: password.get_untracked(),
        };
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match session::signup(&credentials).await {
                Ok(()) => {
                    success.set(Some("Account created! You can now sign in.".to_owned()));
                    #[cfg(feature = "csr")]
                    {
                        gloo_timers::future::sleep(std::time::Duration::from_millis(1500)).await;
                        navigate("/login", NavigateOptions::default());
                    }
                    #[cfg(not(feature = "csr"))]
                    {
                        navigate("/login", NavigateOptions::default());
                    }
                }
                Err(message) => error.set(Some(message)),
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <h1 class="auth-page__title">"Create Account"</h1>
            <div class="card">
                <ErrorMessage message=error/>
                <SuccessMessage message=success/>
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
                                success.set(None);
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
                                success.set(None);
                            }
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                        {move || {
                            if submitting.get() {
                                view! { <LoadingSpinner/> }.into_any()
                            } else {
                                view! { "Sign Up" }.into_any()
                            }
                        }}
                    </button>
                </form>
                <p class="auth-page__switch">
                    "Already have an account? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
