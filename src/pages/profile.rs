//! Portal profile page: contact details and password change.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::net::api;
use crate::net::types::{PasswordChange, UserPatch};
use crate::state::auth::AuthStore;
use crate::util::password;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<AuthStore>();
    let current = auth.get();

    let full_name = RwSignal::new(
        current
            .user
            .as_ref()
            .and_then(|user| user.full_name.clone())
            .unwrap_or_default(),
    );
    let phone = RwSignal::new(
        current
            .user
            .as_ref()
            .and_then(|user| user.phone.clone())
            .unwrap_or_default(),
    );
    let profile_message = RwSignal::new(String::new());
    let profile_busy = RwSignal::new(false);

    let on_save_profile = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if profile_busy.get() {
            return;
        }
        let name_value = full_name.get().trim().to_owned();
        if name_value.is_empty() {
            profile_message.set("Full name is required.".to_owned());
            return;
        }
        let phone_value = phone.get().trim().to_owned();
        let patch = UserPatch {
            full_name: Some(name_value),
            phone: Some(phone_value),
            ..UserPatch::default()
        };
        profile_busy.set(true);
        profile_message.set(String::new());

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match api::update_profile(&patch).await {
                Ok(_) => {
                    // Merge locally whether or not the server echoed a user.
                    auth.update_user(&patch);
                    profile_message.set("Profile updated.".to_owned());
                }
                Err(err) => profile_message.set(err.to_string()),
            }
            profile_busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (patch, auth);
        }
    };

    let current_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let password_message = RwSignal::new(String::new());
    let password_busy = RwSignal::new(false);

    let on_change_password = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if password_busy.get() {
            return;
        }
        let new_value = new_password.get();
        if !password::meets_policy(&new_value) {
            password_message.set(password::POLICY_MESSAGE.to_owned());
            return;
        }
        let change = PasswordChange {
            current_password: current_password.get(),
            new_password: new_value,
        };
        password_busy.set(true);
        password_message.set(String::new());

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match api::change_password(&change).await {
                Ok(()) => {
                    current_password.set(String::new());
                    new_password.set(String::new());
                    password_message.set("Password changed.".to_owned());
                }
                Err(err) => password_message.set(err.to_string()),
            }
            password_busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = change;
        }
    };

    view! {
        <div class="portal-page">
            <h1>"Your profile"</h1>
            <form class="profile-form" on:submit=on_save_profile>
                <input
                    class="auth-input"
                    type="text"
                    placeholder="Full name"
                    prop:value=move || full_name.get()
                    on:input=move |ev| full_name.set(event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="tel"
                    placeholder="Phone"
                    prop:value=move || phone.get()
                    on:input=move |ev| phone.set(event_target_value(&ev))
                />
                <button class="auth-button" type="submit" disabled=move || profile_busy.get()>
                    "Save"
                </button>
                <Show when=move || !profile_message.get().is_empty()>
                    <p class="auth-message">{move || profile_message.get()}</p>
                </Show>
            </form>
            <h2>"Change password"</h2>
            <form class="profile-form" on:submit=on_change_password>
                <input
                    class="auth-input"
                    type="password"
                    placeholder="Current password"
                    prop:value=move || current_password.get()
                    on:input=move |ev| current_password.set(event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="password"
                    placeholder="New password"
                    prop:value=move || new_password.get()
                    on:input=move |ev| new_password.set(event_target_value(&ev))
                />
                <button class="auth-button" type="submit" disabled=move || password_busy.get()>
                    "Change Password"
                </button>
                <Show when=move || !password_message.get().is_empty()>
                    <p class="auth-message">{move || password_message.get()}</p>
                </Show>
            </form>
        </div>
    }
}
