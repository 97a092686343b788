/// Camera world height is clamped to this range every tick.
pub const MIN_HEIGHT: f32 = 20.0;
pub const MAX_HEIGHT: f32 = 300.0;

/// Center of the sinusoidal orbit height.
pub const BASE_HEIGHT: f32 = 50.0;

/// Amplitude of the sinusoidal orbit height.
pub const HEIGHT_SWING: f32 = 20.0;

/// Starting orbit radius.
pub const START_RADIUS: f32 = 100.0;

/// Orbital angle increment per tick.
pub const ANGULAR_STEP: f32 = 0.002;

/// Radius growth factor applied on every collision; never decreases.
pub const ESCAPE_RADIUS_GROWTH: f32 = 1.1;

/// Half-extent of the probe box used for camera collision checks.
pub const PROBE_HALF_EXTENT: f32 = 1.0;
