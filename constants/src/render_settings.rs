use bevy::prelude::*;

/// Post-processing chain parameters, mutated per tick from camera state.
#[derive(Resource, Clone, Copy)]
pub struct PostSettings {
    /// Bloom intensity at ground level.
    pub bloom_base: f32,
    /// Extra bloom added at the height cap (camera.y / 200, clamped to 1).
    pub bloom_height_bonus: f32,
    /// Bloom spread (low-frequency boost); lowered on the mobile tier.
    pub bloom_low_frequency_boost: f32,
    /// RGB channel shift baseline.
    pub chroma_baseline: f32,
    /// Amplitude of the time-driven shift oscillation.
    pub chroma_wobble: f32,
    /// Constant post-tonemapping saturation boost.
    pub post_saturation: f32,
}

pub const POST_SETTINGS: PostSettings = PostSettings {
    bloom_base: 0.3,
    bloom_height_bonus: 0.18,
    bloom_low_frequency_boost: 0.7,
    chroma_baseline: 0.002,
    chroma_wobble: 0.001,
    post_saturation: 1.8,
};

/// Reduced bloom used when a mobile-class user agent is detected.
pub const MOBILE_BLOOM_BASE: f32 = 0.18;
pub const MOBILE_BLOOM_HEIGHT_BONUS: f32 = 0.08;
pub const MOBILE_BLOOM_LOW_FREQUENCY_BOOST: f32 = 0.35;

/// Exponential scene fog density.
pub const FOG_DENSITY: f32 = 0.002;

/// Normalizing divisor for the bloom height factor.
pub const BLOOM_HEIGHT_NORM: f32 = 200.0;
