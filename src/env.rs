use crate::constants::{
    BASE_COUNT, HIDPI_DENSITY_PENALTY, MIN_PARTICLE_COUNT, REFERENCE_CORES, SMALL_VIEWPORT_SCALE,
    SMALL_VIEWPORT_WIDTH,
};

/// Derive the particle budget for a viewport.
///
/// The base count scales with the hardware concurrency hint capped at the
/// reference core count. Hi-DPI surfaces take a density penalty and narrow
/// viewports shrink further. Every non-empty viewport is floored at
/// `MIN_PARTICLE_COUNT`; a zero-area viewport yields zero particles and
/// therefore a no-op render.
pub fn target_particle_count(width: f32, height: f32, cores: u32, dpr: f64) -> usize {
    if width <= 0.0 || height <= 0.0 {
        return 0;
    }
    let concurrency = (cores as f32 / REFERENCE_CORES).min(1.0);
    let density = if dpr > 1.0 { HIDPI_DENSITY_PENALTY } else { 1.0 };
    let mut count = BASE_COUNT * concurrency * density;
    if width < SMALL_VIEWPORT_WIDTH {
        count *= SMALL_VIEWPORT_SCALE;
    }
    (count.round() as usize).max(MIN_PARTICLE_COUNT)
}
