use crate::constants::DEFAULT_CORES;
use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn canvas_by_id(
    document: &web::Document,
    id: &str,
) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{id}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("{:?}", e))
}

pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow!("{:?}", e))
}

/// Match the canvas backing store to the viewport and return the new extents.
pub fn sync_canvas_size(canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let Some(window) = web::window() else {
        return (canvas.width() as f32, canvas.height() as f32);
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    (width as f32, height as f32)
}

/// Read once at startup to seed the motion flag.
pub fn prefers_reduced_motion() -> bool {
    web::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok())
        .flatten()
        .map(|q| q.matches())
        .unwrap_or(false)
}

/// `navigator.hardwareConcurrency`, defaulting when the hint is unavailable.
pub fn hardware_concurrency() -> u32 {
    let cores = web::window()
        .map(|w| w.navigator().hardware_concurrency())
        .unwrap_or(0.0);
    if cores >= 1.0 {
        cores as u32
    } else {
        DEFAULT_CORES
    }
}

pub fn device_pixel_ratio() -> f64 {
    web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
}
