//! Landing page with the animated particle backdrop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::components::A;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Event};

use crate::components::Particles;
use crate::utils::constants::{DISCORD_INVITE, NAV_LINKS, SITE_NAME};

const LOCK_CLASS: &str = "home-lock-scroll";

#[component]
pub fn HomePage() -> impl IntoView {
    let saved_scroll = Rc::new(Cell::new(0.0_f64));
    let touch_guard: Rc<RefCell<Option<Closure<dyn FnMut(Event)>>>> = Rc::new(RefCell::new(None));
    let locked = Rc::new(Cell::new(false));

    // Lock page scroll while the hero is mounted; the touchmove guard has
    // to be non-passive or preventDefault is ignored on mobile.
    Effect::new({
        let saved_scroll = Rc::clone(&saved_scroll);
        let touch_guard = Rc::clone(&touch_guard);
        let locked = Rc::clone(&locked);
        move || {
            if locked.get() {
                return;
            }
            let Some(window) = web_sys::window() else {
                return;
            };
            let Some(document) = window.document() else {
                return;
            };
            let Some(body) = document.body() else {
                return;
            };
            locked.set(true);

            let scroll_y = window.scroll_y().unwrap_or(0.0);
            saved_scroll.set(scroll_y);
            let _ = body
                .style()
                .set_property("--home-scroll-y", &format!("{scroll_y}px"));
            let _ = body.class_list().add_1(LOCK_CLASS);
            if let Some(root) = document.document_element() {
                let _ = root.class_list().add_1(LOCK_CLASS);
            }

            let guard = Closure::<dyn FnMut(Event)>::new({
                let body = body.clone();
                move |ev: Event| {
                    if body.class_list().contains(LOCK_CLASS) {
                        ev.prevent_default();
                    }
                }
            });
            let opts = AddEventListenerOptions::new();
            opts.set_passive(false);
            let _ = document.add_event_listener_with_callback_and_add_event_listener_options(
                "touchmove",
                guard.as_ref().unchecked_ref(),
                &opts,
            );
            *touch_guard.borrow_mut() = Some(guard);
        }
    });

    on_cleanup({
        let saved_scroll = Rc::clone(&saved_scroll);
        let touch_guard = Rc::clone(&touch_guard);
        move || {
            let Some(window) = web_sys::window() else {
                return;
            };
            let Some(document) = window.document() else {
                return;
            };
            if let Some(cb) = touch_guard.borrow_mut().take() {
                let _ = document
                    .remove_event_listener_with_callback("touchmove", cb.as_ref().unchecked_ref());
            }
            if let Some(body) = document.body() {
                let _ = body.class_list().remove_1(LOCK_CLASS);
                let _ = body.style().remove_property("--home-scroll-y");
            }
            if let Some(root) = document.document_element() {
                let _ = root.class_list().remove_1(LOCK_CLASS);
            }
            window.scroll_to_with_x_and_y(0.0, saved_scroll.get());
        }
    });

    view! {
        <div class="home-screen">
            <nav class="home-nav">
                <ul>
                    {NAV_LINKS
                        .iter()
                        .map(|(name, href)| view! { <li><A href=*href>{*name}</A></li> })
                        .collect_view()}
                </ul>
            </nav>
            <div class="glow-line"></div>
            <Particles class="particles-layer" quantity=100/>
            <h1 class="hero-title">{SITE_NAME}</h1>
            <div class="glow-line"></div>
            <div class="hero-tagline">
                <h2>
                    "Empowering "
                    <a href=DISCORD_INVITE target="_blank" rel="noreferrer">
                        "non-technical builders"
                    </a>
                    " to build."
                </h2>
            </div>
        </div>
    }
}
