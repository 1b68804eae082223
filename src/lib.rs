#![cfg(target_arch = "wasm32")]
use crate::pacing::LoopControl;
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod env;
mod events;
mod frame;
mod grid;
mod pacing;
mod render;
mod sim;

const CANVAS_ID: &str = "constellation";

thread_local! {
    // Handle behind the exported motion API; set once by init.
    static MOTION_CONTROL: RefCell<Option<Rc<RefCell<LoopControl>>>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("constellation starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Enable or disable motion from the surrounding page. Rendering continues
/// either way; only position updates freeze.
#[wasm_bindgen(js_name = setMotionEnabled)]
pub fn set_motion_enabled(enabled: bool) {
    MOTION_CONTROL.with(|c| {
        if let Some(control) = c.borrow().as_ref() {
            control.borrow_mut().set_motion(enabled);
        }
    });
}

#[wasm_bindgen(js_name = isMotionEnabled)]
pub fn is_motion_enabled() -> bool {
    MOTION_CONTROL.with(|c| {
        c.borrow()
            .as_ref()
            .map(|control| control.borrow().motion_enabled())
            .unwrap_or(false)
    })
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, CANVAS_ID)?;
    let ctx2d = dom::context_2d(&canvas)?;

    let (width, height) = dom::sync_canvas_size(&canvas);
    let count = env::target_particle_count(
        width,
        height,
        dom::hardware_concurrency(),
        dom::device_pixel_ratio(),
    );
    let seed = js_sys::Date::now() as u64;
    let field = sim::Constellation::new(width, height, count, seed);

    let motion = !dom::prefers_reduced_motion();
    let control = Rc::new(RefCell::new(LoopControl::new(
        motion,
        constants::UPDATE_STRIDE,
    )));
    MOTION_CONTROL.with(|c| *c.borrow_mut() = Some(control.clone()));

    // Until the first pointermove: mid-viewport, a third of the way down.
    let pointer = Rc::new(Cell::new(Vec2::new(width / 2.0, height / 3.0)));

    let gradient = render::viewport_gradient(&ctx2d, width, height);
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        canvas,
        ctx2d,
        field,
        control: control.clone(),
        pointer: pointer.clone(),
        gradient,
    }));

    events::wire_pointermove(pointer);
    events::wire_resize(frame_ctx.clone());
    events::wire_visibility(&document, control.clone());
    events::wire_motion_toggle(&document, control);

    log::info!(
        "[init] {}x{}, {} particles, motion={}",
        width as u32,
        height as u32,
        count,
        motion
    );
    frame::start_loop(frame_ctx);
    Ok(())
}
