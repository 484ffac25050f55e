//! Browser client for the PropTech property-investment platform.
//!
//! SYSTEM CONTEXT
//! ==============
//! A Leptos SPA over an external REST backend. The crate owns four concerns:
//! the REST client (`net`), the auth session and route-access stores
//! (`state`), the language preference (`state::language`), and the route
//! tree wiring guards to pages. Everything browser-specific sits behind the
//! `csr` feature so the whole crate, stores included, compiles and tests
//! natively.

pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::components::guard::Guarded;
use crate::net::types::SubscriptionPlan;
use crate::pages::admin::AdminDashboardPage;
use crate::pages::forgot_password::ForgotPasswordPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::portal::{
    DocumentsPage, PortalDashboardPage, UpgradePage, VerifyEmailPromptPage,
};
use crate::pages::profile::ProfilePage;
use crate::pages::register::RegisterPage;
use crate::pages::reset_password::ResetPasswordPage;
use crate::pages::verify_email::VerifyEmailPage;
use crate::state::access::RouteRequirement;
use crate::state::auth::AuthStore;
use crate::state::language::LanguageStore;

/// Application root: provides the stores, restores persisted state once,
/// and declares the route tree.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = AuthStore::new();
    let language = LanguageStore::new();
    provide_context(auth);
    provide_context(language);

    // Both stores restore persisted state exactly once per process.
    language.init();
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move { auth.initialize().await });

    view! {
        <Title text="PropTech Investor Portal"/>
        <Router>
            <Routes fallback=|| view! { <Redirect path=routes::HOME/> }>
                // Public marketing routes.
                <Route path=path!("/") view=HomePage/>

                // Standalone auth routes.
                <Route path=path!("/auth/login") view=LoginPage/>
                <Route path=path!("/auth/register") view=RegisterPage/>
                <Route path=path!("/auth/forgot-password") view=ForgotPasswordPage/>
                <Route path=path!("/auth/reset-password") view=ResetPasswordPage/>
                <Route path=path!("/auth/verify-email") view=VerifyEmailPage/>

                // Guarded portal tree.
                <Route
                    path=path!("/portal/dashboard")
                    view=|| view! {
                        <Guarded requirement=RouteRequirement::authenticated()>
                            <PortalDashboardPage/>
                        </Guarded>
                    }
                />
                <Route
                    path=path!("/portal/documents")
                    view=|| {
                        let premium =
                            RouteRequirement::verified().with_plan(SubscriptionPlan::Premium);
                        view! {
                            <Guarded requirement=premium>
                                <DocumentsPage/>
                            </Guarded>
                        }
                    }
                />
                <Route
                    path=path!("/portal/profile")
                    view=|| view! {
                        <Guarded requirement=RouteRequirement::authenticated()>
                            <ProfilePage/>
                        </Guarded>
                    }
                />
                <Route
                    path=path!("/portal/upgrade")
                    view=|| view! {
                        <Guarded requirement=RouteRequirement::authenticated()>
                            <UpgradePage/>
                        </Guarded>
                    }
                />
                <Route
                    path=path!("/portal/verify-email")
                    view=|| view! {
                        <Guarded requirement=RouteRequirement::authenticated()>
                            <VerifyEmailPromptPage/>
                        </Guarded>
                    }
                />

                // Guarded back-office tree.
                <Route
                    path=path!("/admin/dashboard")
                    view=|| view! {
                        <Guarded requirement=RouteRequirement::admin()>
                            <AdminDashboardPage/>
                        </Guarded>
                    }
                />
            </Routes>
        </Router>
    }
}
