//! Dashboard page: the entry list with search and delete actions.

use leptos::prelude::*;

use crate::components::journal_card::JournalCard;
use crate::components::spinner::LoadingSpinner;
use crate::net::api::{self, ApiError};
use crate::state::entries::EntriesState;
use crate::util::dialog::confirm;

const DELETE_PROMPT: &str =
    "Are you sure you want to delete this journal entry? This action cannot be undone.";

/// Entry list fetched on mount, filtered client-side by the search
/// box. Deleting asks for confirmation and drops the entry from the
/// displayed list without a reload.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let entries = RwSignal::new(EntriesState::default());
    let search = RwSignal::new(String::new());
    let delete_pending = RwSignal::new(None::<String>);

    load_entries(entries);

    let on_delete = Callback::new(move |id: String| {
        if !confirm(DELETE_PROMPT) {
            return;
        }
        delete_pending.set(Some(id.clone()));
        leptos::task::spawn_local(async move {
            match api::delete_entry(&id).await {
                Ok(()) => entries.update(|state| state.remove(&id)),
                Err(ApiError::Unauthorized) => {}
                Err(err) => {
                    leptos::logging::warn!("entry delete failed: {err}");
                    entries.update(|state| {
                        state.error = Some("Failed to delete journal entry".to_owned());
                    });
                }
            }
            delete_pending.set(None);
        });
    });

    let subtitle = move || {
        let count = entries.get().items.len();
        match count {
            0 => "Start writing your first journal entry".to_owned(),
            1 => "You have 1 journal entry".to_owned(),
            n => format!("You have {n} journal entries"),
        }
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <div>
                    <h1 class="dashboard-page__title">"My Journal"</h1>
                    <p class="dashboard-page__subtitle">{subtitle}</p>
                </div>
                <a class="btn btn--primary" href="/journal/new">
                    "+ New Entry"
                </a>
            </header>

            {move || {
                (!entries.get().items.is_empty())
                    .then(|| {
                        view! {
                            <input
                                class="dashboard-page__search"
                                type="text"
                                placeholder="Search your entries..."
                                prop:value=move || search.get()
                                on:input=move |ev| search.set(event_target_value(&ev))
                            />
                        }
                    })
            }}

            {move || {
                entries
                    .get()
                    .error
                    .map(|message| {
                        view! {
                            <div class="banner banner--error">
                                <p class="banner__text">{message}</p>
                                <button
                                    class="banner__close"
                                    on:click=move |_| entries.update(|state| state.error = None)
                                >
                                    "\u{00d7}"
                                </button>
                            </div>
                        }
                    })
            }}

            {move || {
                let state = entries.get();
                if state.loading {
                    return view! {
                        <div class="dashboard-page__loading">
                            <LoadingSpinner text="Loading your journal entries..."/>
                        </div>
                    }
                        .into_any();
                }
                if state.items.is_empty() {
                    return view! {
                        <div class="dashboard-page__empty">
                            <h3>"No journal entries yet"</h3>
                            <p>
                                "Start documenting your thoughts and experiences by "
                                "creating your first journal entry."
                            </p>
                            <a class="btn btn--primary" href="/journal/new">
                                "Create Your First Entry"
                            </a>
                        </div>
                    }
                        .into_any();
                }

                let visible = state.filtered(&search.get());
                if visible.is_empty() {
                    return view! {
                        <div class="dashboard-page__empty">
                            <h3>"No entries found"</h3>
                            <p>"Try adjusting your search terms or create a new entry."</p>
                        </div>
                    }
                        .into_any();
                }

                view! {
                    <div class="dashboard-page__grid">
                        {visible
                            .into_iter()
                            .map(|entry| {
                                let deleting = delete_pending.get() == Some(entry.id.clone());
                                view! {
                                    <div class="dashboard-page__cell">
                                        <JournalCard entry=entry on_delete=on_delete/>
                                        {deleting
                                            .then(|| {
                                                view! {
                                                    <div class="dashboard-page__deleting">
                                                        <LoadingSpinner text="Deleting..."/>
                                                    </div>
                                                }
                                            })}
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}

/// Kick off a list fetch; stale completions are discarded by the
/// generation check in `EntriesState`.
fn load_entries(entries: RwSignal<EntriesState>) {
    let generation = entries.try_update(EntriesState::begin_load).unwrap_or_default();
    leptos::task::spawn_local(async move {
        let result = match api::list_entries().await {
            Ok(items) => Ok(items),
            Err(ApiError::Unauthorized) => return,
            Err(err) => {
                leptos::logging::warn!("entry list load failed: {err}");
                Err("Failed to load journal entries".to_owned())
            }
        };
        entries.update(|state| {
            state.finish_load(generation, result);
        });
    });
}
