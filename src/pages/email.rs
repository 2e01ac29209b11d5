//! Outbound-email composer.

use leptos::prelude::*;

use crate::components::messages::{ErrorMessage, SuccessMessage};
use crate::components::spinner::LoadingSpinner;
use crate::net::api::{self, ApiError};
use crate::net::types::EmailDraft;
use crate::util::validate::validate_email_form;

/// To/subject/body form. Validation runs locally before any network
/// call; a successful send confirms inline and clears the form.
#[component]
pub fn EmailPage() -> impl IntoView {
    let to = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let body = RwSignal::new(String::new());
    let sending = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }
        if let Err(message) = validate_email_form(
            &to.get_untracked(),
            &subject.get_untracked(),
            &body.get_untracked(),
        ) {
            error.set(Some(message.to_owned()));
            return;
        }

        sending.set(true);
        error.set(None);
        success.set(None);
        let draft = EmailDraft {
            to: to.get_untracked(),
            subject: subject.get_untracked(),
            body: body.get_untracked(),
        };
        leptos::task::spawn_local(async move {
            match api::send_email(&draft).await {
                Ok(()) => {
                    success.set(Some("Email sent successfully!".to_owned()));
                    to.set(String::new());
                    subject.set(String::new());
                    body.set(String::new());
                }
                Err(ApiError::Unauthorized) => {}
                Err(err) => {
                    leptos::logging::warn!("email send failed: {err}");
                    error.set(Some("Failed to send email. Please try again.".to_owned()));
                }
            }
            sending.set(false);
        });
    };

    view! {
        <div class="email-page">
            <a class="back-link" href="/dashboard">
                "\u{2190} Back to Dashboard"
            </a>
            <h1 class="email-page__title">"Send Email"</h1>
            <p class="email-page__subtitle">
                "Send a test email using the journal app's email service"
            </p>

            <div class="card">
                <ErrorMessage message=error/>
                <SuccessMessage message=success/>
                <form class="form" on:submit=submit>
                    <label class="form__label">
                        "To *"
                        <input
                            class="form__input"
                            type="email"
                            placeholder="recipient@example.com"
                            prop:value=move || to.get()
                            on:input=move |ev| {
                                to.set(event_target_value(&ev));
                                error.set(None);
                                success.set(None);
                            }
                        />
                    </label>
                    <label class="form__label">
                        "Subject *"
                        <input
                            class="form__input"
                            type="text"
                            placeholder="Enter email subject"
                            prop:value=move || subject.get()
                            on:input=move |ev| {
                                subject.set(event_target_value(&ev));
                                error.set(None);
                                success.set(None);
                            }
                        />
                    </label>
                    <label class="form__label">
                        "Message *"
                        <textarea
                            class="form__input form__input--area"
                            rows="8"
                            placeholder="Type your message here..."
                            prop:value=move || body.get()
                            on:input=move |ev| {
                                body.set(event_target_value(&ev));
                                error.set(None);
                                success.set(None);
                            }
                        ></textarea>
                    </label>
                    <p class="form__hint">
                        {move || format!("{} characters", body.get().chars().count())}
                    </p>
                    <div class="form__actions">
                        <a class="btn" href="/dashboard">
                            "Cancel"
                        </a>
                        <button class="btn btn--primary" type="submit" disabled=move || sending.get()>
                            {move || {
                                if sending.get() {
                                    view! { <LoadingSpinner/> }.into_any()
                                } else {
                                    view! { "Send Email" }.into_any()
                                }
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
