//! Create/edit form for a journal entry.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::messages::{ErrorMessage, SuccessMessage};
use crate::components::spinner::LoadingSpinner;
use crate::net::api::{self, ApiError};
use crate::net::types::EntryDraft;
use crate::util::validate::validate_journal;

/// One form for both `/journal/new` and `/journal/edit/:id`; the
/// presence of the `id` route param selects create vs. update. A
/// valid submit issues exactly one call, shows a confirmation, and
/// returns to the dashboard after a short delay.
#[component]
pub fn JournalFormPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();

    let entry_id = Memo::new(move |_| params.read().get("id"));
    let editing = move || entry_id.get().is_some();

    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let initial_loading = RwSignal::new(false);
    let saving = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);

    // Load the existing entry when editing.
    Effect::new(move || {
        let Some(id) = entry_id.get() else {
            return;
        };
        initial_loading.set(true);
        leptos::task::spawn_local(async move {
            match api::get_entry(&id).await {
                Ok(entry) => {
                    title.set(entry.title);
                    content.set(entry.content);
                }
                Err(ApiError::Unauthorized) => {}
                Err(err) => {
                    leptos::logging::warn!("entry load failed: {err}");
                    error.set(Some("Failed to load journal entry".to_owned()));
                }
            }
            initial_loading.set(false);
        });
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        if let Err(message) = validate_journal(&title.get_untracked(), &content.get_untracked()) {
            error.set(Some(message.to_owned()));
            return;
        }

        saving.set(true);
        error.set(None);
        success.set(None);
        let id = entry_id.get_untracked();
        let draft = EntryDraft {
            title: title.get_untracked(),
            content: content.get_untracked(),
        };
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let is_update = id.is_some();
            let result = match &id {
                Some(id) => api::update_entry(id, &draft).await,
                None => api::create_entry(&draft).await,
            };
            match result {
                Ok(()) => {
                    success.set(Some(
                        if is_update {
                            "Journal entry updated successfully!"
                        } else {
                            "Journal entry created successfully!"
                        }
                        .to_owned(),
                    ));
                    saving.set(false);
                    #[cfg(feature = "csr")]
                    gloo_timers::future::sleep(std::time::Duration::from_millis(1500)).await;
                    navigate("/dashboard", NavigateOptions::default());
                }
                Err(ApiError::Unauthorized) => saving.set(false),
                Err(err) => {
                    leptos::logging::warn!("entry save failed: {err}");
                    error.set(Some(
                        if is_update { "Failed to update entry" } else { "Failed to create entry" }
                            .to_owned(),
                    ));
                    saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="journal-form-page">
            <a class="back-link" href="/dashboard">
                "\u{2190} Back to Dashboard"
            </a>
            <h1 class="journal-form-page__title">
                {move || if editing() { "Edit Journal Entry" } else { "Create New Journal Entry" }}
            </h1>

            {move || {
                if initial_loading.get() {
                    view! {
                        <div class="journal-form-page__loading">
                            <LoadingSpinner text="Loading journal entry..."/>
                        </div>
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="card">
                            <ErrorMessage message=error/>
                            <SuccessMessage message=success/>
                            <form class="form" on:submit=submit.clone()>
                                <label class="form__label">
                                    "Title *"
                                    <input
                                        class="form__input"
                                        type="text"
                                        placeholder="Enter a title for your journal entry"
                                        prop:value=move || title.get()
                                        on:input=move |ev| {
                                            title.set(event_target_value(&ev));
                                            error.set(None);
                                            success.set(None);
                                        }
                                    />
                                </label>
                                <label class="form__label">
                                    "Content *"
                                    <textarea
                                        class="form__input form__input--area"
                                        rows="12"
                                        placeholder="Write your thoughts here..."
                                        prop:value=move || content.get()
                                        on:input=move |ev| {
                                            content.set(event_target_value(&ev));
                                            error.set(None);
                                            success.set(None);
                                        }
                                    ></textarea>
                                </label>
                                <p class="form__hint">
                                    {move || format!("{} characters", content.get().chars().count())}
                                </p>
                                <div class="form__actions">
                                    <a class="btn" href="/dashboard">
                                        "Cancel"
                                    </a>
                                    <button
                                        class="btn btn--primary"
                                        type="submit"
                                        disabled=move || saving.get()
                                    >
                                        {move || {
                                            if saving.get() {
                                                view! { <LoadingSpinner/> }.into_any()
                                            } else if editing() {
                                                view! { "Update Entry" }.into_any()
                                            } else {
                                                view! { "Save Entry" }.into_any()
                                            }
                                        }}
                                    </button>
                                </div>
                            </form>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
