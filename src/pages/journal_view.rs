//! Single-entry reading view.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::spinner::LoadingSpinner;
use crate::net::api::{self, ApiError};
use crate::net::types::JournalEntry;
use crate::util::format::format_date_long;

const DELETE_PROMPT: &str =
    "Are you sure you want to delete this journal entry? This action cannot be undone.";

/// Full entry with its long-format date, plus edit and confirmed
/// delete actions. Deleting navigates back to the dashboard.
#[component]
pub fn JournalViewPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();

    let entry_id = Memo::new(move |_| params.read().get("id"));
    let entry = RwSignal::new(None::<JournalEntry>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let delete_pending = RwSignal::new(false);

    Effect::new(move || {
        let Some(id) = entry_id.get() else {
            return;
        };
        loading.set(true);
        leptos::task::spawn_local(async move {
            match api::get_entry(&id).await {
                Ok(loaded) => entry.set(Some(loaded)),
                Err(ApiError::Unauthorized) => {}
                Err(err) => {
                    leptos::logging::warn!("entry load failed: {err}");
                    error.set(Some("Failed to load journal entry".to_owned()));
                }
            }
            loading.set(false);
        });
    });

    let on_delete = move |_| {
        if delete_pending.get_untracked() || !crate::util::dialog::confirm(DELETE_PROMPT) {
            return;
        }
        let Some(id) = entry_id.get_untracked() else {
            return;
        };
        delete_pending.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::delete_entry(&id).await {
                Ok(()) => navigate("/dashboard", NavigateOptions::default()),
                Err(ApiError::Unauthorized) => {}
                Err(err) => {
                    leptos::logging::warn!("entry delete failed: {err}");
                    error.set(Some("Failed to delete journal entry".to_owned()));
                }
            }
            delete_pending.set(false);
        });
    };

    view! {
        <div class="journal-view-page">
            <a class="back-link" href="/dashboard">
                "\u{2190} Back to Dashboard"
            </a>

            {move || {
                if loading.get() {
                    return view! {
                        <div class="journal-view-page__loading">
                            <LoadingSpinner text="Loading journal entry..."/>
                        </div>
                    }
                        .into_any();
                }
                if let Some(message) = error.get() {
                    return view! { <div class="banner banner--error">{message}</div> }.into_any();
                }
                entry
                    .get()
                    .map(|loaded| {
                        let title = if loaded.title.is_empty() {
                            "Untitled Entry".to_owned()
                        } else {
                            loaded.title.clone()
                        };
                        let date = loaded.date.map(|d| format_date_long(&d)).unwrap_or_default();
                        let edit_href = format!("/journal/edit/{}", loaded.id);
                        view! {
                            <article class="card journal-view-page__entry">
                                <div class="journal-view-page__head">
                                    <h1 class="journal-view-page__title">{title}</h1>
                                    <div class="journal-view-page__actions">
                                        <a class="btn" href=edit_href>
                                            "Edit"
                                        </a>
                                        <button
                                            class="btn btn--danger"
                                            disabled=move || delete_pending.get()
                                            on:click=on_delete.clone()
                                        >
                                            {move || {
                                                if delete_pending.get() { "Deleting..." } else { "Delete" }
                                            }}
                                        </button>
                                    </div>
                                </div>
                                <span class="journal-view-page__date">{date}</span>
                                <div class="journal-view-page__content">{loaded.content}</div>
                            </article>
                        }
                    })
                    .into_any()
            }}
        </div>
    }
}
