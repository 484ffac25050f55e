//! Email verification page.
//!
//! Reached two ways: from the emailed link with a `token` query parameter
//! (the token is submitted immediately), or right after registration with no
//! token (the page just tells the user to check their inbox).

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::routes;

#[derive(Clone, Debug, PartialEq, Eq)]
enum VerifyStatus {
    AwaitingEmail,
    Verifying,
    Verified,
    Failed(String),
}

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let query = use_query_map();
    let token = query.get_untracked().get("token");
    let status = RwSignal::new(if token.is_some() {
        VerifyStatus::Verifying
    } else {
        VerifyStatus::AwaitingEmail
    });

    #[cfg(feature = "csr")]
    if let Some(token) = token {
        leptos::task::spawn_local(async move {
            match crate::net::api::verify_email(&token).await {
                Ok(()) => status.set(VerifyStatus::Verified),
                Err(err) => status.set(VerifyStatus::Failed(err.to_string())),
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    let _ = token;

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <a class="auth-card__brand" href=routes::HOME>
                    "PropTech"
                </a>
                {move || match status.get() {
                    VerifyStatus::AwaitingEmail => view! {
                        <h1>"Check your inbox"</h1>
                        <p class="auth-message">
                            "We sent you a verification link. Open it to activate your account."
                        </p>
                    }
                    .into_any(),
                    VerifyStatus::Verifying => view! {
                        <h1>"Verifying your email..."</h1>
                        <p class="auth-message">"Please wait while we confirm your address."</p>
                    }
                    .into_any(),
                    VerifyStatus::Verified => view! {
                        <h1>"Email verified"</h1>
                        <p class="auth-message">"Your account is active. You can sign in now."</p>
                        <p class="auth-links">
                            <a href=routes::LOGIN>"Go to sign in"</a>
                        </p>
                    }
                    .into_any(),
                    VerifyStatus::Failed(reason) => view! {
                        <h1>"Verification failed"</h1>
                        <p class="auth-message auth-message--error">{reason}</p>
                        <p class="auth-links">
                            <a href=routes::LOGIN>"Back to sign in"</a>
                        </p>
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}
