//! Public marketing landing page.

use leptos::prelude::*;

use crate::components::language_switcher::LanguageSwitcher;
use crate::routes;
use crate::state::auth::AuthStore;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<AuthStore>();
    let signed_in = move || auth.get().is_authenticated;

    view! {
        <div class="public-page">
            <header class="public-header">
                <a class="public-header__brand" href=routes::HOME>
                    "PropTech"
                </a>
                <nav class="public-header__nav">
                    <Show
                        when=signed_in
                        fallback=|| {
                            view! {
                                <a href=routes::LOGIN>"Sign In"</a>
                                <a href=routes::REGISTER>"Get Started"</a>
                            }
                        }
                    >
                        <a href=routes::PORTAL_DASHBOARD>"My Portal"</a>
                    </Show>
                    <LanguageSwitcher/>
                </nav>
            </header>
            <main class="public-hero">
                <h1>"Property investment, made transparent"</h1>
                <p>
                    "Browse vetted below-market-value opportunities with yield and ROI "
                    "figures prepared by our analysts."
                </p>
                <a class="public-hero__cta" href=routes::REGISTER>
                    "Create your investor account"
                </a>
            </main>
        </div>
    }
}
