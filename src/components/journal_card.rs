//! Entry preview card for the dashboard grid.

use leptos::prelude::*;

use crate::net::types::JournalEntry;
use crate::util::format::{format_date_short, truncate};

const PREVIEW_CHARS: usize = 150;

/// Card showing an entry's title, date, and a truncated preview, with
/// view/edit/delete actions. Deletion is confirmed by the caller.
#[component]
pub fn JournalCard(entry: JournalEntry, on_delete: Callback<String>) -> impl IntoView {
    let id = entry.id.clone();
    let view_href = format!("/journal/{}", entry.id);
    let read_href = view_href.clone();
    let edit_href = format!("/journal/edit/{}", entry.id);
    let title = if entry.title.is_empty() {
        "Untitled Entry".to_owned()
    } else {
        entry.title.clone()
    };
    let date = entry.date.map(|d| format_date_short(&d)).unwrap_or_default();
    let preview = truncate(&entry.content, PREVIEW_CHARS);

    view! {
        <div class="journal-card">
            <div class="journal-card__head">
                <h3 class="journal-card__title">{title}</h3>
                <div class="journal-card__actions">
                    <a class="journal-card__action" href=view_href title="View entry">
                        "View"
                    </a>
                    <a class="journal-card__action" href=edit_href title="Edit entry">
                        "Edit"
                    </a>
                    <button
                        class="journal-card__action journal-card__action--danger"
                        title="Delete entry"
                        on:click=move |_| on_delete.run(id.clone())
                    >
                        "Delete"
                    </button>
                </div>
            </div>
            <span class="journal-card__date">{date}</span>
            <p class="journal-card__preview">{preview}</p>
            <a class="journal-card__more" href=read_href>
                "Read more \u{2192}"
            </a>
        </div>
    }
}
