//! Route guard component for the `/portal/*` and `/admin/*` trees.
//!
//! SYSTEM CONTEXT
//! ==============
//! The access decision itself is pure ([`crate::state::access::evaluate`]);
//! this component binds it to the session signal and the router so every
//! guarded route applies identical redirect behavior.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::components::loading::LoadingIndicator;
use crate::state::access::{AccessDecision, RouteRequirement, evaluate};
use crate::state::auth::AuthStore;

/// Render children only when the session satisfies `requirement`; otherwise
/// show the loading placeholder or redirect to the target the first failing
/// check selects.
#[component]
pub fn Guarded(requirement: RouteRequirement, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<AuthStore>();
    let location = use_location();
    view! {
        {move || {
            let session = auth.get();
            let path = location.pathname.get();
            match evaluate(&session, &requirement, &path) {
                AccessDecision::Loading => {
                    view! { <LoadingIndicator text="Checking access..."/> }.into_any()
                }
                AccessDecision::Redirect(target) => view! { <Redirect path=target/> }.into_any(),
                AccessDecision::Render => children().into_any(),
            }
        }}
    }
}
