//! Application shell: router, shared context, 404 fallback.

use leptos::prelude::*;
use leptos_router::{
    components::{A, Route, Router, Routes},
    path,
};

use crate::pages::{ContactPage, HomePage};
use crate::utils::mouse::provide_mouse_position;

#[component]
pub fn App() -> impl IntoView {
    // Pointer position is shared app-wide so the particle background can
    // follow the mouse on whichever page hosts it.
    provide_mouse_position();

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound/> }>
                <Route path=path!("/") view=HomePage/>
                <Route path=path!("/contact") view=ContactPage/>
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="notfound-screen">
            <div class="card notfound-card">
                <h1>"404 - Page Not Found"</h1>
                <p>"The page you're looking for doesn't exist."</p>
                <A href="/">"Go to Home"</A>
            </div>
        </div>
    }
}
