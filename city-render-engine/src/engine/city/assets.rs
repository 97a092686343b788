use bevy::prelude::*;

use constants::palette::{TAILLIGHT_RED, WINDOW_WHITE};

/// Meshes and materials shared across every building and car. Children
/// spawned with the same mesh + material pair are batched into a single
/// instanced draw, which is what makes the per-building window sets cheap.
#[derive(Resource)]
pub struct CityAssets {
    pub window_mesh: Handle<Mesh>,
    pub window_material: Handle<StandardMaterial>,
    pub car_body_mesh: Handle<Mesh>,
    pub car_roof_mesh: Handle<Mesh>,
    pub car_glow_mesh: Handle<Mesh>,
    pub headlight_mesh: Handle<Mesh>,
    pub headlight_material: Handle<StandardMaterial>,
    pub headlight_beam_mesh: Handle<Mesh>,
    pub headlight_beam_material: Handle<StandardMaterial>,
    pub taillight_mesh: Handle<Mesh>,
    pub taillight_material: Handle<StandardMaterial>,
    pub window_trim_mesh: Handle<Mesh>,
}

impl CityAssets {
    pub fn load(
        meshes: &mut Assets<Mesh>,
        materials: &mut Assets<StandardMaterial>,
    ) -> Self {
        let window_material = materials.add(StandardMaterial {
            base_color: Color::from(WINDOW_WHITE),
            emissive: LinearRgba::WHITE,
            ..default()
        });

        let headlight_material = materials.add(StandardMaterial {
            base_color: Color::from(WINDOW_WHITE).with_alpha(0.8),
            unlit: true,
            alpha_mode: AlphaMode::Blend,
            ..default()
        });

        // One shared beam material: every car's beams pulse with the same
        // global formula, so a single asset is mutated once per tick.
        let headlight_beam_material = materials.add(StandardMaterial {
            base_color: Color::from(WINDOW_WHITE).with_alpha(0.2),
            unlit: true,
            alpha_mode: AlphaMode::Blend,
            double_sided: true,
            cull_mode: None,
            ..default()
        });

        let taillight_material = materials.add(StandardMaterial {
            base_color: Color::from(TAILLIGHT_RED),
            emissive: LinearRgba::from(TAILLIGHT_RED),
            ..default()
        });

        Self {
            window_mesh: meshes.add(Cuboid::new(0.5, 1.0, 0.5)),
            window_material,
            car_body_mesh: meshes.add(Cuboid::new(4.0, 1.0, 2.0)),
            car_roof_mesh: meshes.add(Cuboid::new(2.0, 0.8, 1.8)),
            car_glow_mesh: meshes.add(Rectangle::new(6.0, 4.0)),
            headlight_mesh: meshes.add(Cone::new(0.2, 0.8)),
            headlight_material,
            headlight_beam_mesh: meshes.add(ConicalFrustum {
                radius_top: 0.1,
                radius_bottom: 0.5,
                height: 4.0,
            }),
            headlight_beam_material,
            taillight_mesh: meshes.add(Cuboid::new(0.2, 0.4, 0.1)),
            taillight_material,
            window_trim_mesh: meshes.add(Torus {
                minor_radius: 0.05,
                major_radius: 0.5,
            }),
        }
    }
}
