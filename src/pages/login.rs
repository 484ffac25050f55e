//! Login page for the investor portal.
//!
//! The guard layer sends unauthenticated visitors here with the originally
//! requested path in the `from` query parameter; a successful sign-in
//! returns there.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::types::Credentials;
use crate::routes;
use crate::state::auth::AuthStore;

/// Trim and require both fields before hitting the network.
fn validate_login_input(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok(Credentials {
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

/// Post-login target from the `from` query parameter. Only in-app paths are
/// honored so the parameter cannot send the browser off-site.
fn post_login_target(from: Option<&str>) -> String {
    match from {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path.to_owned(),
        _ => routes::PORTAL_DASHBOARD.to_owned(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<AuthStore>();
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_login_input(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(error) => {
                message.set(error.to_owned());
                return;
            }
        };
        let target = post_login_target(query.get_untracked().get("from").as_deref());
        busy.set(true);
        message.set(String::new());

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match auth.login(credentials).await {
                    Ok(()) => navigate(&target, NavigateOptions::default()),
                    Err(error) => {
                        message.set(error);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (credentials, target, &navigate, auth);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <a class="auth-card__brand" href=routes::HOME>
                    "PropTech"
                </a>
                <h1>"Sign in to your portal"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !message.get().is_empty()>
                    <p class="auth-message auth-message--error">{move || message.get()}</p>
                </Show>
                <p class="auth-links">
                    <a href=routes::FORGOT_PASSWORD>"Forgot password?"</a>
                    <a href=routes::REGISTER>"Create an account"</a>
                </p>
            </div>
        </div>
    }
}
