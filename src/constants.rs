/// Field generation, density, and paint tuning constants.
///
/// These constants express intended behavior (ranges, thresholds, colors)
/// and keep magic numbers out of the code.
// Particle budget before device scaling
pub const BASE_COUNT: f32 = 120.0;

// Concurrency hint that earns the full budget; fewer cores scale it down
pub const REFERENCE_CORES: f32 = 8.0;
pub const DEFAULT_CORES: u32 = 4;

// Density penalty when devicePixelRatio > 1
pub const HIDPI_DENSITY_PENALTY: f32 = 0.85;

// Narrow viewports get a reduced budget, never below the floor
pub const SMALL_VIEWPORT_WIDTH: f32 = 600.0;
pub const SMALL_VIEWPORT_SCALE: f32 = 0.6;
pub const MIN_PARTICLE_COUNT: usize = 60;

// Maximum link distance; also the spatial grid's cell size
pub const MAX_LINK_DIST: f32 = 110.0;

// Generation ranges (velocity is per-update, symmetric around zero)
pub const VEL_RANGE: f32 = 0.4;
pub const RADIUS_MIN: f32 = 0.6;
pub const RADIUS_MAX: f32 = 1.8;

// Cursor attraction: fixed-size random subset, exponential approach
pub const CURSOR_ATTRACT_COUNT: usize = 4;
pub const CURSOR_ATTRACT_FACTOR: f32 = 0.008;

// Render every tick, update every stride-th tick
pub const UPDATE_STRIDE: u32 = 2;

// Link opacity at distance zero; falls linearly to zero at MAX_LINK_DIST
pub const LINE_ALPHA_MAX: f32 = 0.6;
pub const LINE_WIDTH: f64 = 1.0;

// Paint colors
pub const GRADIENT_START: &str = "rgba(86,214,255,0.04)";
pub const GRADIENT_END: &str = "rgba(182,133,255,0.04)";
pub const NODE_FILL: &str = "rgba(255,255,255,0.7)";
pub const LINK_RGB: &str = "86,214,255";
