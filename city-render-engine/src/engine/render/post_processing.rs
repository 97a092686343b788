use bevy::core_pipeline::bloom::Bloom;
use bevy::core_pipeline::post_process::ChromaticAberration;
use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::pbr::{DistanceFog, FogFalloff};
use bevy::prelude::*;
use bevy::render::view::ColorGrading;
use bevy::render::view::ColorGradingGlobal;

use constants::camera::{BASE_HEIGHT, START_RADIUS};
use constants::palette::NIGHT_SKY;
use constants::render_settings::{BLOOM_HEIGHT_NORM, FOG_DENSITY, PostSettings};

use crate::engine::camera::orbit::look_target;

/// HDR orbit camera with the full post chain: bloom, chromatic
/// aberration, saturation push, exponential distance fog.
pub fn spawn_post_camera(commands: &mut Commands, settings: &PostSettings) {
    commands.spawn((
        Camera3d::default(),
        Camera {
            hdr: true,
            ..default()
        },
        Tonemapping::TonyMcMapface,
        Bloom {
            intensity: settings.bloom_base,
            low_frequency_boost: settings.bloom_low_frequency_boost,
            ..Bloom::NATURAL
        },
        ChromaticAberration {
            intensity: settings.chroma_baseline,
            ..default()
        },
        ColorGrading {
            global: ColorGradingGlobal {
                post_saturation: settings.post_saturation,
                ..default()
            },
            ..default()
        },
        DistanceFog {
            color: Color::from(NIGHT_SKY),
            falloff: FogFalloff::Exponential {
                density: FOG_DENSITY,
            },
            ..default()
        },
        Transform::from_xyz(START_RADIUS, BASE_HEIGHT, 0.0).looking_at(look_target(0.0), Vec3::Y),
    ));
}

/// Bloom strengthens with camera altitude, saturating one height norm up.
pub fn bloom_intensity(settings: &PostSettings, camera_height: f32) -> f32 {
    let lift = (camera_height / BLOOM_HEIGHT_NORM).min(1.0);
    settings.bloom_base + lift * settings.bloom_height_bonus
}

pub fn update_post_processing(
    time: Res<Time>,
    settings: Res<PostSettings>,
    mut query: Query<(&Transform, &mut Bloom, &mut ChromaticAberration), With<Camera3d>>,
) {
    let t = time.elapsed_secs();
    for (transform, mut bloom, mut chroma) in &mut query {
        bloom.intensity = bloom_intensity(&settings, transform.translation.y);
        bloom.low_frequency_boost = settings.bloom_low_frequency_boost;
        chroma.intensity = settings.chroma_baseline + (t * 2.0).sin() * settings.chroma_wobble;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use constants::render_settings::POST_SETTINGS;

    #[test]
    fn bloom_grows_with_height_up_to_the_norm() {
        let low = bloom_intensity(&POST_SETTINGS, 0.0);
        let mid = bloom_intensity(&POST_SETTINGS, BLOOM_HEIGHT_NORM / 2.0);
        let high = bloom_intensity(&POST_SETTINGS, BLOOM_HEIGHT_NORM);
        assert_eq!(low, POST_SETTINGS.bloom_base);
        assert!(mid > low && mid < high);
        assert!(
            (high - (POST_SETTINGS.bloom_base + POST_SETTINGS.bloom_height_bonus)).abs() < 1e-6
        );
    }

    #[test]
    fn bloom_saturates_past_the_norm() {
        let at_norm = bloom_intensity(&POST_SETTINGS, BLOOM_HEIGHT_NORM);
        let above = bloom_intensity(&POST_SETTINGS, BLOOM_HEIGHT_NORM * 3.0);
        assert_eq!(at_norm, above);
    }
}
