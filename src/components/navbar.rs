//! Top navigation bar for inner pages

use leptos::prelude::*;
use leptos_router::components::A;

use crate::utils::constants::NAV_LINKS;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="page-nav">
            <div class="nav-inner">
                <A href="/">{"\u{2190} Home"}</A>
                <div class="nav-links">
                    {NAV_LINKS
                        .iter()
                        .map(|(name, href)| view! { <A href=*href>{*name}</A> })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}
