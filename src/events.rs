//! Passive listener wiring: pointer, scroll, resize and page teardown.
//! Handlers mutate shared display state and poke the DOM overlay; the
//! frame loop is the only other reader, on the same logical thread.

use crate::core::ParticleField;
use crate::{dom, overlay};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Decorative display state fed by the passive listeners.
#[derive(Default, Clone, Copy)]
pub struct ViewState {
    pub pointer_x: f64,
    pub pointer_y: f64,
    pub scroll_y: f64,
}

pub fn wire_pointer_move(document: &web::Document, view: Rc<RefCell<ViewState>>) {
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        {
            let mut vs = view.borrow_mut();
            vs.pointer_x = ev.client_x() as f64;
            vs.pointer_y = ev.client_y() as f64;
        }
        // The overlay reads the shared state, not the raw event.
        let vs = *view.borrow();
        overlay::move_cursor_halo(&doc, vs.pointer_x, vs.pointer_y);
    }) as Box<dyn FnMut(_)>);
    if let Some(w) = web::window() {
        _ = w.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

pub fn wire_scroll(document: &web::Document, view: Rc<RefCell<ViewState>>) {
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move || {
        let y = web::window().map(|w| w.scroll_y().unwrap_or(0.0)).unwrap_or(0.0);
        view.borrow_mut().scroll_y = y;
        overlay::apply_parallax(&doc, view.borrow().scroll_y);
    }) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        _ = w.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// On resize: re-sync the canvas backing store and rebuild the particle
/// collection wholesale for the new dimensions.
pub fn wire_resize(canvas: &web::HtmlCanvasElement, field: Rc<RefCell<ParticleField>>) {
    let canvas = canvas.clone();
    let closure = Closure::wrap(Box::new(move || {
        let (w_px, h_px) = dom::sync_canvas_backing_size(&canvas);
        let mut rng = rand::thread_rng();
        field
            .borrow_mut()
            .rebuild(w_px as f32, h_px as f32, dom::viewport_width(), &mut rng);
    }) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        _ = w.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Clear the frame loop's running flag when the page goes away.
pub fn wire_teardown(running: Rc<Cell<bool>>) {
    let closure = Closure::wrap(Box::new(move || {
        running.set(false);
        log::info!("page hidden, frame loop released");
    }) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        _ = w.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
