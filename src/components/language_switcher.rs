//! Language switcher shown in public and portal chrome.

use leptos::prelude::*;

use crate::state::language::{Language, LanguageStore};

#[component]
pub fn LanguageSwitcher() -> impl IntoView {
    let language = expect_context::<LanguageStore>();
    view! {
        <div class="language-switcher" role="group" aria-label="Display language">
            {[Language::En, Language::Ar]
                .into_iter()
                .map(|option| {
                    view! {
                        <button
                            class="language-switcher__option"
                            class:language-switcher__option--active=move || {
                                language.current() == option
                            }
                            on:click=move |_| language.change(option.code())
                        >
                            {option.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
