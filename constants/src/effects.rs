pub const STAR_COUNT: usize = 3000;

/// Horizontal spread of the starfield (x and z, centered on origin).
pub const STAR_SPREAD: f32 = 3000.0;

/// Stars spawn between ground level and this ceiling.
pub const STAR_CEILING: f32 = 1500.0;

/// Per-tick vertical bob amplitude, phase-offset by point index.
pub const STAR_BOB: f32 = 0.1;

pub const FOG_COUNT: usize = 3000;

/// Horizontal spread of the fog layer at spawn.
pub const FOG_SPREAD: f32 = 2000.0;

/// Fog particles reset to y = 0 above this ceiling.
pub const FOG_CEILING: f32 = 400.0;

/// Horizontal positions reflect in sign beyond this bound.
pub const FOG_WRAP_BOUND: f32 = 1000.0;

/// Per-tick drift amplitude on each axis.
pub const FOG_DRIFT: f32 = 0.2;

/// Whole-layer z offset pushing the fog toward the horizon.
pub const FOG_LAYER_Z: f32 = -1000.0;

/// Per-tick probability of launching a new firework.
pub const FIREWORK_SPAWN_PROBABILITY: f32 = 0.02;

pub const FIREWORK_PARTICLES: usize = 100;

/// Seconds a burst lives before its resources are released.
pub const FIREWORK_LIFETIME: f32 = 3.0;

/// Downward velocity change per tick (per-tick step, not scaled by delta).
pub const FIREWORK_GRAVITY: f32 = 0.1;

/// Initial particle speed range.
pub const FIREWORK_SPEED_MIN: f32 = 2.0;
pub const FIREWORK_SPEED_MAX: f32 = 4.0;

/// Animated ground grid: size, line count, wobble.
pub const GRID_SIZE: f32 = 1000.0;
pub const GRID_DIVISIONS: usize = 100;
pub const GRID_BASE_OPACITY: f32 = 0.3;
pub const GRID_OPACITY_SWING: f32 = 0.1;
pub const GRID_SLIDE: f32 = 5.0;
