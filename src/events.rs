use crate::frame::FrameContext;
use crate::pacing::LoopControl;
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the last pointer position. The canvas fills the viewport, so client
/// coordinates are surface coordinates.
pub fn wire_pointermove(pointer: Rc<Cell<Vec2>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        pointer.set(Vec2::new(ev.client_x() as f32, ev.client_y() as f32));
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

pub fn wire_resize(frame_ctx: Rc<RefCell<FrameContext>>) {
    let closure = Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().apply_resize();
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Pause whenever the page is hidden; becoming visible again returns to
/// whichever running state the motion flag implies.
pub fn wire_visibility(document: &web::Document, control: Rc<RefCell<LoopControl>>) {
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move || {
        let mut ctl = control.borrow_mut();
        ctl.set_hidden(doc.hidden());
        log::info!("[visibility] paused={}", ctl.is_paused());
    }) as Box<dyn FnMut()>);
    _ = document
        .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Flip the motion flag from the page's zen toggle, mirroring the state into
/// `aria-pressed` (pressed = zen, i.e. motion off). The control is optional
/// in the page; absence is fine.
pub fn wire_motion_toggle(document: &web::Document, control: Rc<RefCell<LoopControl>>) {
    let Some(el) = document.get_element_by_id("zenToggle") else {
        return;
    };
    let el_state = el.clone();
    let closure = Closure::wrap(Box::new(move || {
        let enabled = {
            let mut ctl = control.borrow_mut();
            let next = !ctl.motion_enabled();
            ctl.set_motion(next);
            next
        };
        _ = el_state.set_attribute("aria-pressed", if enabled { "false" } else { "true" });
        log::info!("[motion] enabled={}", enabled);
    }) as Box<dyn FnMut()>);
    _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
