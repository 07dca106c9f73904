//! Global pointer-position provider.
//!
//! A single window-level `mousemove` listener feeds a context signal with
//! viewport-space coordinates. Consumers convert those to whatever local
//! coordinate space they need; the listener itself never inspects targets.

use leptos::prelude::*;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;

/// Context handle for the shared pointer position.
#[derive(Clone, Copy)]
pub struct MousePosition {
    /// Viewport-space pointer coordinates, updated on every mousemove.
    pub position: RwSignal<(f64, f64)>,
}

/// Install the mousemove listener and provide [`MousePosition`] as context.
///
/// The listener is removed again when the providing scope is disposed.
pub fn provide_mouse_position() -> MousePosition {
    let ctx = MousePosition {
        position: RwSignal::new((0.0, 0.0)),
    };
    provide_context(ctx);

    if let Some(window) = web_sys::window() {
        let position = ctx.position;
        let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
            position.set((ev.client_x() as f64, ev.client_y() as f64));
        });

        if window
            .add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())
            .is_ok()
        {
            on_cleanup(move || {
                let _ = window
                    .remove_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());
            });
        }
    }

    ctx
}

pub fn use_mouse_position() -> MousePosition {
    expect_context::<MousePosition>()
}
