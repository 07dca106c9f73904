//! Animated particle background component.
//!
//! A full-container canvas layer rendering a field of drifting,
//! mouse-reactive dots plus periodic shooting-star streaks, driven by a
//! perpetual `requestAnimationFrame` loop. The simulation lives in the
//! DOM-free submodules; this module owns every canvas and event call.

mod field;
mod geom;
mod rng;
mod stars;
mod surface;

use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlDivElement};

use crate::utils::mouse::use_mouse_position;
use field::{Dot, DotField};
use geom::Point;
use rng::Rng32;
use stars::{ShootingStar, StarField};
use surface::{Surface, SurfaceSize};

type FrameClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;
type ListenerClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Everything the frame loop and the event listeners share.
struct ParticlesState {
    container: Option<HtmlDivElement>,
    canvas: Option<HtmlCanvasElement>,
    ctx: Option<CanvasRenderingContext2d>,
    surface: Surface,
    field: DotField,
    stars: StarField,
    /// Last in-bounds pointer offset from surface center.
    pointer: Point,
    rng: Rng32,
}

impl ParticlesState {
    fn new() -> Self {
        let dpr = web_sys::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0);
        let seed = (js_sys::Math::random() * u32::MAX as f64) as u32;

        ParticlesState {
            container: None,
            canvas: None,
            ctx: None,
            surface: Surface::new(dpr),
            field: DotField::new(),
            stars: StarField::new(js_sys::Date::now()),
            pointer: Point::ZERO,
            rng: Rng32::new(seed),
        }
    }
}

#[component]
pub fn Particles(
    #[prop(optional)] class: &'static str,
    #[prop(default = 30)] quantity: usize,
    #[prop(default = 50.0)] staticity: f64,
    #[prop(default = 50.0)] ease: f64,
    #[prop(into, default = Signal::stored(false))] refresh: Signal<bool>,
) -> impl IntoView {
    let container_ref = NodeRef::<leptos::html::Div>::new();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let mouse = use_mouse_position();

    let state = Rc::new(RefCell::new(ParticlesState::new()));
    let started = Rc::new(Cell::new(false));
    let stopped = Rc::new(Cell::new(false));
    let raf_id = Rc::new(Cell::new(None::<i32>));
    let frame: FrameClosure = Rc::new(RefCell::new(None));
    let resize_cb: ListenerClosure = Rc::new(RefCell::new(None));

    // Mount: wire the canvas up and start the loop once both refs resolve.
    Effect::new({
        let state = Rc::clone(&state);
        let started = Rc::clone(&started);
        let stopped = Rc::clone(&stopped);
        let raf_id = Rc::clone(&raf_id);
        let frame = Rc::clone(&frame);
        let resize_cb = Rc::clone(&resize_cb);
        move || {
            let (Some(container), Some(canvas)) = (container_ref.get(), canvas_ref.get()) else {
                return;
            };
            if started.get() {
                return;
            }
            started.set(true);

            let ctx = canvas
                .get_context("2d")
                .ok()
                .flatten()
                .and_then(|obj| obj.dyn_into::<CanvasRenderingContext2d>().ok());

            {
                let mut st = state.borrow_mut();
                st.container = Some(container);
                st.canvas = Some(canvas);
                st.ctx = ctx;
                init_canvas(&mut st, quantity);
            }
            log::debug!("particles mounted ({quantity} dots)");

            // reinitialize on viewport resize
            let on_resize = Closure::<dyn FnMut()>::new({
                let state = Rc::clone(&state);
                move || init_canvas(&mut state.borrow_mut(), quantity)
            });
            if let Some(window) = web_sys::window() {
                let _ = window
                    .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
            }
            *resize_cb.borrow_mut() = Some(on_resize);

            // perpetual frame loop; `stopped` breaks the self-rescheduling
            // chain on unmount
            *frame.borrow_mut() = Some(Closure::new({
                let state = Rc::clone(&state);
                let stopped = Rc::clone(&stopped);
                let frame = Rc::clone(&frame);
                let raf_id = Rc::clone(&raf_id);
                move || {
                    if stopped.get() {
                        return;
                    }
                    render_frame(&mut state.borrow_mut(), staticity, ease);
                    schedule_frame(&frame, &raf_id);
                }
            }));
            schedule_frame(&frame, &raf_id);

            // re-measure once layout settles; fonts and late styles can
            // shift the container box right after mount
            leptos::task::spawn_local({
                let state = Rc::clone(&state);
                async move {
                    TimeoutFuture::new(120).await;
                    init_canvas(&mut state.borrow_mut(), quantity);
                }
            });
        }
    });

    // Track the shared pointer, keeping only in-bounds center-relative
    // offsets; a stale target is kept when the pointer leaves the surface.
    Effect::new({
        let state = Rc::clone(&state);
        move || {
            let (x, y) = mouse.position.get();
            let Some(canvas) = canvas_ref.get_untracked() else {
                return;
            };
            let rect = canvas.get_bounding_client_rect();
            let mut st = state.borrow_mut();
            let size = st.surface.size;
            let offset = Point::new(x - rect.left() - size.w / 2.0, y - rect.top() - size.h / 2.0);
            if size.contains_center_offset(offset.x, offset.y) {
                st.pointer = offset;
            }
        }
    });

    // Any flip of the refresh prop forces reinitialization.
    Effect::new({
        let state = Rc::clone(&state);
        move || {
            refresh.track();
            init_canvas(&mut state.borrow_mut(), quantity);
        }
    });

    on_cleanup({
        let stopped = Rc::clone(&stopped);
        let raf_id = Rc::clone(&raf_id);
        let frame = Rc::clone(&frame);
        let resize_cb = Rc::clone(&resize_cb);
        move || {
            stopped.set(true);
            if let Some(window) = web_sys::window() {
                if let Some(id) = raf_id.take() {
                    let _ = window.cancel_animation_frame(id);
                }
                if let Some(cb) = resize_cb.borrow_mut().take() {
                    let _ = window
                        .remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
                }
            }
            // drop the self-referential frame closure
            frame.borrow_mut().take();
        }
    });

    view! {
        <div class=class node_ref=container_ref aria-hidden="true">
            <canvas node_ref=canvas_ref></canvas>
        </div>
    }
}

fn schedule_frame(frame: &FrameClosure, raf_id: &Rc<Cell<Option<i32>>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let borrowed = frame.borrow();
    let Some(cb) = borrowed.as_ref() else {
        return;
    };
    if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
        raf_id.set(Some(id));
    }
}

/// Size the surface to the container and respawn the dot field.
///
/// Stale dot coordinates are meaningless at a new size, so the field is
/// always cleared before repopulating.
fn init_canvas(state: &mut ParticlesState, quantity: usize) {
    resize_canvas(state);
    let size = state.surface.size;
    state.field.populate(quantity, size, &mut state.rng);
}

fn resize_canvas(state: &mut ParticlesState) {
    let (Some(container), Some(canvas), Some(ctx)) = (
        state.container.clone(),
        state.canvas.clone(),
        state.ctx.clone(),
    ) else {
        return;
    };

    state.field.clear();
    state.surface.size = SurfaceSize::new(
        container.offset_width() as f64,
        container.offset_height() as f64,
    );

    // backing store in device pixels, CSS box in logical pixels; resetting
    // the bitmap also resets the transform, so the scale is reapplied here
    canvas.set_width(state.surface.physical_width());
    canvas.set_height(state.surface.physical_height());
    let style = web_sys::HtmlElement::style(&canvas);
    let _ = style.set_property("width", &format!("{}px", state.surface.size.w));
    let _ = style.set_property("height", &format!("{}px", state.surface.size.h));
    let _ = ctx.scale(state.surface.dpr, state.surface.dpr);
}

/// One animation frame: clear, advance both subsystems, draw.
fn render_frame(state: &mut ParticlesState, staticity: f64, ease: f64) {
    let Some(ctx) = state.ctx.clone() else {
        return;
    };
    let size = state.surface.size;
    ctx.clear_rect(0.0, 0.0, size.w, size.h);

    state
        .field
        .advance(size, state.pointer, staticity, ease, &mut state.rng);
    draw_dots(&ctx, state.surface.dpr, state.field.dots());

    let now = js_sys::Date::now();
    state.stars.advance(size, now, &mut state.rng);
    draw_stars(&ctx, state.stars.stars(), now);
}

fn draw_dots(ctx: &CanvasRenderingContext2d, dpr: f64, dots: &[Dot]) {
    for dot in dots {
        let _ = ctx.translate(dot.translate_x, dot.translate_y);
        ctx.begin_path();
        let _ = ctx.arc(dot.x, dot.y, dot.size, 0.0, TAU);
        ctx.set_fill_style_str(&format!("rgba(255, 255, 255, {})", dot.alpha));
        ctx.fill();
        let _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    }
}

fn draw_stars(ctx: &CanvasRenderingContext2d, stars: &[ShootingStar], now: f64) {
    for star in stars {
        let t = star.progress(now);
        let head = star.point_at(t);
        let tail = star.tail_point(t);

        // streak: opaque at the head, transparent at the tail
        let gradient = ctx.create_linear_gradient(head.x, head.y, tail.x, tail.y);
        let _ = gradient.add_color_stop(0.0, &format!("rgba(255, 200, 90, {})", star.alpha));
        let _ = gradient.add_color_stop(1.0, "rgba(255, 200, 90, 0)");
        ctx.begin_path();
        ctx.move_to(head.x, head.y);
        ctx.line_to(tail.x, tail.y);
        ctx.set_stroke_style_canvas_gradient(&gradient);
        ctx.set_line_width(2.5);
        ctx.set_line_cap("round");
        ctx.stroke();

        // glowing head
        let glow_alpha = (star.alpha + 0.25).min(1.0);
        ctx.set_shadow_blur(12.0);
        ctx.set_shadow_color("rgba(255, 220, 150, 0.9)");
        ctx.begin_path();
        let _ = ctx.arc(head.x, head.y, 1.6, 0.0, TAU);
        ctx.set_fill_style_str(&format!("rgba(255, 230, 180, {glow_alpha})"));
        ctx.fill();
        ctx.set_shadow_blur(0.0);
    }
}
