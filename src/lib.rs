#![cfg(target_arch = "wasm32")]
//! Animated birthday greeting page: a Canvas2D particle background plus
//! a button-triggered fireworks sequence with WebAudio chimes. All of
//! the behavior with actual logic lives in `core`; this crate root only
//! wires it to the DOM.

use crate::core::{plan_bursts, tone_schedule, ParticleField, Sequencer};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;

use constants::{CANVAS_ID, TRIGGER_BUTTON_ID};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("fete-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Fireworks trigger is independent of the canvas; wire it first.
    wire_fireworks_trigger(&document);

    // Decorative pointer/scroll listeners.
    let view = Rc::new(RefCell::new(events::ViewState::default()));
    events::wire_pointer_move(&document, view.clone());
    events::wire_scroll(&document, view);

    // Particle background. A missing canvas or 2d context disables the
    // simulator but never fails the page.
    match setup_simulator(&document) {
        Some((frame_ctx, running)) => {
            events::wire_teardown(running);
            frame::start_loop(frame_ctx);
        }
        None => log::warn!("#{} or its 2d context missing, background disabled", CANVAS_ID),
    }

    Ok(())
}

fn setup_simulator(
    document: &web::Document,
) -> Option<(Rc<RefCell<frame::FrameContext>>, Rc<Cell<bool>>)> {
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()?;
    let ctx2d: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .ok()?;

    let (w_px, h_px) = dom::sync_canvas_backing_size(&canvas);
    let mut rng = rand::thread_rng();
    let field = Rc::new(RefCell::new(ParticleField::new(
        w_px as f32,
        h_px as f32,
        dom::viewport_width(),
        &mut rng,
    )));
    log::info!(
        "[field] {} particles on {}x{}",
        field.borrow().particles().len(),
        w_px,
        h_px
    );
    events::wire_resize(&canvas, field.clone());

    let running = Rc::new(Cell::new(true));
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        ctx2d,
        field,
        running: running.clone(),
    }));
    Some((frame_ctx, running))
}

/// Button click: arm the active window, spawn the burst layer, schedule
/// the four chimes and the end-of-window teardown. Re-clicking while a
/// show is running restarts the window from the new click.
fn wire_fireworks_trigger(document: &web::Document) {
    let sequencer = Rc::new(RefCell::new(Sequencer::new()));
    let audio = Rc::new(RefCell::new(audio::AudioHandle::new()));
    let doc = document.clone();

    dom::add_click_listener(document, TRIGGER_BUTTON_ID, move || {
        let now_ms = js_sys::Date::now();
        sequencer.borrow_mut().trigger(now_ms);

        let viewport_width = dom::viewport_width();
        let mut rng = rand::thread_rng();
        let bursts = plan_bursts(viewport_width, &mut rng);
        overlay::show_bursts(&doc, &bursts, viewport_width);
        log::info!("[fireworks] {} bursts armed", bursts.len());

        for tone in tone_schedule() {
            let audio = audio.clone();
            dom::set_timeout_once(
                move || audio.borrow_mut().play_tone(tone.frequency_hz, tone.duration_sec),
                tone.start_offset_ms,
            );
        }

        // The expiry check makes a stale timer from an earlier trigger
        // harmless after a re-arm.
        let sequencer_end = sequencer.clone();
        let doc_end = doc.clone();
        dom::set_timeout_once(
            move || {
                if sequencer_end.borrow_mut().expire(js_sys::Date::now()) {
                    overlay::clear_bursts(&doc_end);
                }
            },
            crate::core::constants::ACTIVE_WINDOW_MS as i32,
        );
    });
}
