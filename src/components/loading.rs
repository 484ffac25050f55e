//! Loading placeholder shown while the session is being resolved.

use leptos::prelude::*;

/// Centered spinner with an optional caption.
#[component]
pub fn LoadingIndicator(#[prop(optional, into)] text: String) -> impl IntoView {
    view! {
        <div class="loading">
            <span class="loading__spinner" aria-hidden="true"></span>
            {(!text.is_empty()).then(|| view! { <span class="loading__text">{text}</span> })}
        </div>
    }
}
