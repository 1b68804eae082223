use crate::constants::MAX_LINK_DIST;
use crate::dom;
use crate::env;
use crate::grid::SpatialGrid;
use crate::pacing::LoopControl;
use crate::render;
use crate::sim::Constellation;
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the per-frame callback touches, owned in one place. All of it
/// is driven from the single requestAnimationFrame callback, so no locking
/// is needed anywhere.
pub struct FrameContext {
    pub canvas: web::HtmlCanvasElement,
    pub ctx2d: web::CanvasRenderingContext2d,
    pub field: Constellation,
    pub control: Rc<RefCell<LoopControl>>,
    pub pointer: Rc<Cell<Vec2>>,
    pub gradient: web::CanvasGradient,
}

impl FrameContext {
    /// One animation tick. The update, when planned, completes before the
    /// render pass begins, so no frame paints a partially stepped field.
    pub fn frame(&mut self) {
        let plan = self.control.borrow_mut().next_frame();
        if plan.update {
            self.field.step(self.pointer.get());
        }
        if plan.render {
            let grid = SpatialGrid::build(
                &self.field.particles,
                MAX_LINK_DIST,
                self.field.width,
                self.field.height,
            );
            render::draw(&self.ctx2d, &self.gradient, &self.field, &grid);
        }
    }

    /// Re-derive everything that depends on the viewport: backing size,
    /// particle budget, the field itself, and the cached gradient.
    pub fn apply_resize(&mut self) {
        let (width, height) = dom::sync_canvas_size(&self.canvas);
        let count = env::target_particle_count(
            width,
            height,
            dom::hardware_concurrency(),
            dom::device_pixel_ratio(),
        );
        self.field.resize(width, height, count);
        self.gradient = render::viewport_gradient(&self.ctx2d, width, height);
        log::info!(
            "[resize] {}x{} -> {} particles",
            width as u32,
            height as u32,
            count
        );
    }
}

/// Self-rescheduling requestAnimationFrame loop. The request is re-issued on
/// every tick, paused or not, so visibility return resumes instantly.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
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
