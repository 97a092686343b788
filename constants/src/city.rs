/// Side length of the square the city is placed inside.
pub const CITY_EXTENT: f32 = 500.0;

/// Horizontal clearance margin added around a footprint before collision testing.
pub const MIN_CLEARANCE: f32 = 40.0;

/// Rejection-sampling retry cap per building; exhaustion skips the building.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// Base footprint archetype a building is derived from.
pub struct FootprintTemplate {
    pub name: &'static str,
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub count: usize,
}

/// Population tiers, processed largest-first to reduce placement failures.
pub const FOOTPRINT_TIERS: [FootprintTemplate; 3] = [
    FootprintTemplate {
        name: "large",
        width: 20.0,
        height: 100.0,
        depth: 20.0,
        count: 40,
    },
    FootprintTemplate {
        name: "medium",
        width: 15.0,
        height: 50.0,
        depth: 15.0,
        count: 60,
    },
    FootprintTemplate {
        name: "small",
        width: 10.0,
        height: 30.0,
        depth: 10.0,
        count: 80,
    },
];

/// Discrete height set a building's final height is drawn from.
pub const HEIGHT_VARIATIONS: [f32; 5] = [30.0, 50.0, 70.0, 90.0, 120.0];

/// Randomized body side length range (width and depth drawn independently).
pub const BODY_SIDE_MIN: f32 = 10.0;
pub const BODY_SIDE_MAX: f32 = 25.0;

/// Uniform x/z scale range applied per building.
pub const SCALE_MIN: f32 = 0.8;
pub const SCALE_MAX: f32 = 1.2;

/// Window slots per vertical band around the perimeter.
pub const WINDOW_SLOTS_PER_BAND: usize = 8;

/// Vertical spacing between window bands.
pub const WINDOW_BAND_HEIGHT: f32 = 2.0;

/// Probability an individual window slot is lit (included at all).
pub const WINDOW_KEEP_PROBABILITY: f32 = 0.8;

/// Probability a building carries a rotating light beam.
pub const BEAM_PROBABILITY: f32 = 0.3;

/// Probability a building carries the pyramid + antenna tower accessory.
pub const TOWER_PROBABILITY: f32 = 0.3;

/// Half-extent of the road grid on both axes.
pub const ROAD_EXTENT: f32 = 100.0;

/// Divisions of the road grid; cell size is `2 * ROAD_EXTENT / ROAD_DIVISIONS`.
pub const ROAD_DIVISIONS: usize = 10;

pub const CAR_COUNT: usize = 50;

/// Parametric speed range along a segment, in t-units per second.
pub const CAR_SPEED_MIN: f32 = 0.2;
pub const CAR_SPEED_MAX: f32 = 0.5;

/// Fixed assumed per-tick time step for cars and fireworks.
pub const NOMINAL_DELTA: f32 = 0.016;
