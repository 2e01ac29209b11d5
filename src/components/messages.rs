//! Dismissible inline banners for errors and confirmations.
//!
//! Banners render only while their signal holds a message and clear
//! themselves on dismiss; they are per-view state and do not survive
//! navigation.

use leptos::prelude::*;

/// Inline error banner.
#[component]
pub fn ErrorMessage(message: RwSignal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|text| {
            view! {
                <div class="banner banner--error">
                    <p class="banner__text">{text}</p>
                    <button class="banner__close" on:click=move |_| message.set(None)>
                        "\u{00d7}"
                    </button>
                </div>
            }
        })
    }
}

/// Inline success banner.
#[component]
pub fn SuccessMessage(message: RwSignal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|text| {
            view! {
                <div class="banner banner--success">
                    <p class="banner__text">{text}</p>
                    <button class="banner__close" on:click=move |_| message.set(None)>
                        "\u{00d7}"
                    </button>
                </div>
            }
        })
    }
}
