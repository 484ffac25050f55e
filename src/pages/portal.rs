//! Portal pages behind the authenticated route tree.
//!
//! These screens are deliberately thin: listings and metrics arrive rendered
//! from the backend, so the interesting work here is who may see each page,
//! which the route guards decide before these components mount.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::SubscriptionPlan;
use crate::routes;
use crate::state::auth::AuthStore;

fn display_name(auth: AuthStore) -> String {
    auth.get()
        .user
        .and_then(|user| user.full_name.or(user.email))
        .unwrap_or_else(|| "Investor".to_owned())
}

#[component]
pub fn PortalDashboardPage() -> impl IntoView {
    let auth = expect_context::<AuthStore>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        auth.logout();
        navigate(routes::HOME, NavigateOptions::default());
    };

    view! {
        <div class="portal-page">
            <header class="portal-header">
                <h1>{move || format!("Welcome back, {}", display_name(auth))}</h1>
                <button class="portal-header__logout" on:click=on_logout>
                    "Sign Out"
                </button>
            </header>
            <nav class="portal-nav">
                <a href=routes::PORTAL_DOCUMENTS>"Documents"</a>
                <a href=routes::PORTAL_PROFILE>"Profile"</a>
                <a href=routes::PORTAL_UPGRADE>"Upgrade"</a>
            </nav>
        </div>
    }
}

#[component]
pub fn DocumentsPage() -> impl IntoView {
    view! {
        <div class="portal-page">
            <h1>"Investment documents"</h1>
            <p>"Deal memos, valuation reports, and compliance certificates appear here."</p>
        </div>
    }
}

#[component]
pub fn UpgradePage() -> impl IntoView {
    let auth = expect_context::<AuthStore>();
    let current_plan = move || {
        auth.get()
            .user
            .and_then(|user| user.subscription_plan)
            .map_or("none", |plan| match plan {
                SubscriptionPlan::Basic => "basic",
                SubscriptionPlan::Premium => "premium",
                SubscriptionPlan::Professional => "professional",
                SubscriptionPlan::Enterprise => "enterprise",
            })
    };

    view! {
        <div class="portal-page">
            <h1>"Upgrade your plan"</h1>
            <p>{move || format!("Current plan: {}", current_plan())}</p>
            <ul class="upgrade-tiers">
                <li>"Basic: property listings"</li>
                <li>"Premium: listings plus document vault"</li>
                <li>"Professional: analytics and exports"</li>
                <li>"Enterprise: dedicated account manager"</li>
            </ul>
        </div>
    }
}

/// Landing for authenticated-but-unverified users redirected by a
/// verification-requiring guard.
#[component]
pub fn VerifyEmailPromptPage() -> impl IntoView {
    let auth = expect_context::<AuthStore>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        auth.logout();
        navigate(routes::HOME, NavigateOptions::default());
    };

    view! {
        <div class="portal-page">
            <h1>"Verify your email to continue"</h1>
            <p>
                "Parts of the portal are locked until you open the verification link "
                "we emailed you. Already verified? Sign out and back in."
            </p>
            <button class="portal-header__logout" on:click=on_logout>
                "Sign Out"
            </button>
        </div>
    }
}
