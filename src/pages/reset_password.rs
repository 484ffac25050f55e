//! Password-reset completion page, reached from the emailed link
//! (`/auth/reset-password?token=...`).

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

#[cfg(feature = "csr")]
use crate::net::api;
use crate::routes;
use crate::util::password;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let navigate = use_navigate();
    let query = use_query_map();

    let new_password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(token) = query.get_untracked().get("token") else {
            message.set("This reset link is invalid. Request a new one.".to_owned());
            return;
        };
        let password_value = new_password.get();
        if !password::meets_policy(&password_value) {
            message.set(password::POLICY_MESSAGE.to_owned());
            return;
        }
        if password_value != confirm.get() {
            message.set("Passwords do not match.".to_owned());
            return;
        }
        busy.set(true);
        message.set(String::new());

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api::reset_password(&token, &password_value).await {
                    Ok(()) => navigate(routes::LOGIN, NavigateOptions::default()),
                    Err(err) => {
                        message.set(err.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, password_value, &navigate);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <a class="auth-card__brand" href=routes::HOME>
                    "PropTech"
                </a>
                <h1>"Choose a new password"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="New password"
                        prop:value=move || new_password.get()
                        on:input=move |ev| new_password.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Confirm new password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Set Password"
                    </button>
                </form>
                <Show when=move || !message.get().is_empty()>
                    <p class="auth-message auth-message--error">{move || message.get()}</p>
                </Show>
                <p class="auth-links">
                    <a href=routes::FORGOT_PASSWORD>"Request a new link"</a>
                </p>
            </div>
        </div>
    }
}
