//! Registration page for new investor accounts.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::RegisterPayload;
use crate::routes;
use crate::state::auth::AuthStore;
use crate::state::language::LanguageStore;
use crate::util::password;

/// Client-side mirror of the backend's registration validation, so the form
/// can reject bad input inline.
fn validate_register_input(
    full_name: &str,
    email: &str,
    phone: &str,
    password: &str,
    confirm: &str,
    language_preference: &str,
) -> Result<RegisterPayload, String> {
    let full_name = full_name.trim();
    if full_name.is_empty() {
        return Err("Full name is required.".to_owned());
    }
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.".to_owned());
    }
    if !password::meets_policy(password) {
        return Err(password::POLICY_MESSAGE.to_owned());
    }
    if password != confirm {
        return Err("Passwords do not match.".to_owned());
    }
    let phone = phone.trim();
    Ok(RegisterPayload {
        email: email.to_owned(),
        password: password.to_owned(),
        full_name: full_name.to_owned(),
        phone: (!phone.is_empty()).then(|| phone.to_owned()),
        language_preference: language_preference.to_owned(),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<AuthStore>();
    let language = expect_context::<LanguageStore>();
    let navigate = use_navigate();

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload = match validate_register_input(
            &full_name.get(),
            &email.get(),
            &phone.get(),
            &password.get(),
            &confirm.get(),
            language.current().code(),
        ) {
            Ok(payload) => payload,
            Err(message) => {
                error.set(message);
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match auth.register(payload).await {
                    Ok(outcome) if outcome.requires_verification => {
                        info.set(
                            "Registration successful. Check your email to verify your account."
                                .to_owned(),
                        );
                        busy.set(false);
                    }
                    Ok(_) => navigate(routes::PORTAL_DASHBOARD, NavigateOptions::default()),
                    Err(message) => {
                        error.set(message);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (payload, &navigate, auth, info);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <a class="auth-card__brand" href=routes::HOME>
                    "PropTech"
                </a>
                <h1>"Create your investor account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="tel"
                        placeholder="Phone (optional)"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Confirm password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Create Account"
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-message auth-message--error">{move || error.get()}</p>
                </Show>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message auth-message--info">{move || info.get()}</p>
                </Show>
                <p class="auth-links">
                    <a href=routes::LOGIN>"Already have an account? Sign in"</a>
                </p>
            </div>
        </div>
    }
}
