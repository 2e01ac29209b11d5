//! Public landing page.

use leptos::prelude::*;

use crate::state::session::SessionState;

/// Hero, feature highlights, and a call to action that switches with
/// the session state.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1 class="home-page__title">"Your Digital Journal"</h1>
                <p class="home-page__tagline">
                    "Capture your thoughts, track your growth, and preserve your "
                    "memories in a secure digital journal."
                </p>
                <div class="home-page__cta">
                    {move || {
                        if session.get().is_authenticated() {
                            view! {
                                <a class="btn btn--primary" href="/dashboard">
                                    "Go to Dashboard"
                                </a>
                            }
                                .into_any()
                        } else {
                            view! {
                                <span class="home-page__cta-group">
                                    <a class="btn btn--primary" href="/signup">
                                        "Start Writing"
                                    </a>
                                    <a class="btn" href="/login">
                                        "Sign In"
                                    </a>
                                </span>
                            }
                                .into_any()
                        }
                    }}
                </div>
            </section>

            <section class="home-page__features">
                <Feature
                    title="Write & Reflect"
                    description="Capture your thoughts, experiences, and memories in an organized way."
                />
                <Feature
                    title="Secure & Private"
                    description="Your entries are protected with token authentication and secure storage."
                />
                <Feature
                    title="Share & Connect"
                    description="Send journal entries or thoughts via email to friends and family."
                />
            </section>
        </div>
    }
}

#[component]
fn Feature(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="feature-card">
            <h3 class="feature-card__title">{title}</h3>
            <p class="feature-card__text">{description}</p>
        </div>
    }
}
