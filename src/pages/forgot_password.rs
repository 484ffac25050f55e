//! Password-reset request page.
//!
//! The backend answers 200 whether or not the address exists, so the page
//! always settles on the same neutral confirmation.

#[cfg(test)]
#[path = "forgot_password_test.rs"]
mod forgot_password_test;

use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::net::api;
use crate::routes;

fn validate_email_input(email: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok(email.to_owned())
}

const SENT_MESSAGE: &str = "If the email exists, a reset link has been sent.";

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let sent = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() || sent.get() {
            return;
        }
        let address = match validate_email_input(&email.get()) {
            Ok(address) => address,
            Err(error) => {
                message.set(error.to_owned());
                return;
            }
        };
        busy.set(true);
        message.set(String::new());

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match api::forgot_password(&address).await {
                Ok(()) => {
                    sent.set(true);
                    message.set(SENT_MESSAGE.to_owned());
                }
                Err(err) => message.set(err.to_string()),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = address;
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <a class="auth-card__brand" href=routes::HOME>
                    "PropTech"
                </a>
                <h1>"Reset your password"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button
                        class="auth-button"
                        type="submit"
                        disabled=move || busy.get() || sent.get()
                    >
                        "Send Reset Link"
                    </button>
                </form>
                <Show when=move || !message.get().is_empty()>
                    <p class="auth-message">{move || message.get()}</p>
                </Show>
                <p class="auth-links">
                    <a href=routes::LOGIN>"Back to sign in"</a>
                </p>
            </div>
        </div>
    }
}
