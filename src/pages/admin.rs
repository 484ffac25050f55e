//! Admin back-office landing. Reaching it at all is the point; the guard
//! only lets admins through.

use leptos::prelude::*;

use crate::routes;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! {
        <div class="admin-page">
            <h1>"Back office"</h1>
            <p>"Property, deal, and investor management lives here."</p>
            <a href=routes::PORTAL_DASHBOARD>"Back to portal"</a>
        </div>
    }
}
