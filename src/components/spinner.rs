//! In-progress indicator shown while a call is outstanding.

use leptos::prelude::*;

/// Spinner with an optional caption.
#[component]
pub fn LoadingSpinner(#[prop(optional)] text: Option<&'static str>) -> impl IntoView {
    view! {
        <span class="spinner">
            <span class="spinner__ring" aria-hidden="true"></span>
            {text.map(|caption| view! { <span class="spinner__text">{caption}</span> })}
        </span>
    }
}
