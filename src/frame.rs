//! requestAnimationFrame loop driving the particle field. The closure
//! re-schedules itself until `running` is cleared on page teardown.

use crate::core::ParticleField;
use crate::render;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub ctx2d: web::CanvasRenderingContext2d,
    pub field: Rc<RefCell<ParticleField>>,
    pub running: Rc<Cell<bool>>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let mut field = self.field.borrow_mut();
        field.step();
        render::draw_field(&self.ctx2d, &field);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !frame_ctx_tick.borrow().running.get() {
            // Stop re-arming; the browser holds no further callback.
            return;
        }
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
