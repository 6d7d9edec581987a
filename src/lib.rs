#![cfg(target_arch = "wasm32")]
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod astronaut;
mod audio;
mod constants;
mod core;
mod dom;
mod dust;
mod events;
mod frame;
mod hud;
mod laser;
mod overlay;
mod rocket;
mod scene;

pub use hud::{hud_set_coords, hud_set_transmission};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("mars404-fx starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

// Each controller binds its own DOM subset and comes up independently; a
// missing element disables that controller and nothing else.
fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    if laser::init(&document).is_none() {
        log::warn!("laser bursts disabled: document has no body");
    }
    if astronaut::init(&document).is_none() {
        log::warn!("astronaut gaze disabled: missing astronaut elements");
    }
    if scene::init(&document).is_none() {
        log::warn!("scene controller disabled: missing scene elements");
    }
    if rocket::init(&document).is_none() {
        log::warn!("rocket launch disabled: missing rocket elements");
    }

    let dust = dust::init(&document);
    if dust.is_none() {
        log::warn!("dust layer disabled: missing #dust canvas");
    }
    let hud = hud::init(&document);
    if hud.is_none() {
        log::warn!("telemetry hud disabled: missing hud nodes");
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        dust,
        hud,
        started: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
