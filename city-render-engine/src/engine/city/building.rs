use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, TAU};

use bevy::asset::RenderAssetUsages;
use bevy::color::Alpha;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use rand::Rng;

use constants::city::{
    BEAM_PROBABILITY, BODY_SIDE_MAX, BODY_SIDE_MIN, HEIGHT_VARIATIONS, SCALE_MAX, SCALE_MIN,
    TOWER_PROBABILITY, WINDOW_BAND_HEIGHT, WINDOW_KEEP_PROBABILITY, WINDOW_SLOTS_PER_BAND,
};
use constants::palette::{BUILDING_EMISSIVES, NEON_CYAN};

use crate::engine::city::assets::CityAssets;

/// Per-building pulse state; the emission system reads it every tick.
#[derive(Component)]
pub struct Building {
    pub pulse_phase: f32,
    pub pulse_speed: f32,
    pub emissive: LinearRgba,
}

/// One lit window slot (shared mesh + material, batched per building).
#[derive(Component)]
pub struct WindowSet;

#[derive(Component)]
pub struct EdgeOutline {
    pub phase: f32,
}

#[derive(Component)]
pub struct Halo {
    pub phase: f32,
}

#[derive(Component)]
pub struct LightBeam;

/// Randomized dimensions drawn independently of the footprint archetype.
#[derive(Clone, Copy, Debug)]
pub struct BuildingDims {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub scale: f32,
}

impl BuildingDims {
    pub fn randomized(rng: &mut impl Rng) -> Self {
        Self {
            width: rng.random_range(BODY_SIDE_MIN..BODY_SIDE_MAX),
            height: HEIGHT_VARIATIONS[rng.random_range(0..HEIGHT_VARIATIONS.len())],
            depth: rng.random_range(BODY_SIDE_MIN..BODY_SIDE_MAX),
            scale: rng.random_range(SCALE_MIN..SCALE_MAX),
        }
    }

    /// World-space footprint size after the uniform x/z scale.
    pub fn placement_size(&self) -> Vec3 {
        Vec3::new(self.width * self.scale, self.height, self.depth * self.scale)
    }
}

/// Sample the ring of window slots: 8 candidates per 2-unit band, each kept
/// with 80% probability so the lit pattern comes out irregular.
pub fn window_slots(width: f32, height: f32, depth: f32, rng: &mut impl Rng) -> Vec<Vec3> {
    let bands = (height / WINDOW_BAND_HEIGHT) as usize;
    let mut slots = Vec::with_capacity(bands * WINDOW_SLOTS_PER_BAND);
    for band in 0..bands {
        for slot in 0..WINDOW_SLOTS_PER_BAND {
            if rng.random::<f32>() >= WINDOW_KEEP_PROBABILITY {
                continue;
            }
            let angle = slot as f32 * FRAC_PI_4;
            slots.push(Vec3::new(
                (width * 0.5 - 0.5) * angle.cos(),
                -height * 0.5 + band as f32 * WINDOW_BAND_HEIGHT,
                (depth * 0.5 - 0.5) * angle.sin(),
            ));
        }
    }
    slots
}

/// Wireframe outline of the body box as a 12-edge line list.
pub fn box_edges_mesh(width: f32, height: f32, depth: f32) -> Mesh {
    let (hw, hh, hd) = (width * 0.5, height * 0.5, depth * 0.5);
    let corners: Vec<[f32; 3]> = vec![
        [-hw, -hh, -hd],
        [hw, -hh, -hd],
        [hw, -hh, hd],
        [-hw, -hh, hd],
        [-hw, hh, -hd],
        [hw, hh, -hd],
        [hw, hh, hd],
        [-hw, hh, hd],
    ];
    let indices: Vec<u32> = vec![
        0, 1, 1, 2, 2, 3, 3, 0, // bottom
        4, 5, 5, 6, 6, 7, 7, 4, // top
        0, 4, 1, 5, 2, 6, 3, 7, // verticals
    ];

    let mut mesh = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, corners);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}

/// Spawn one building composite at `position`: body, windows, edge outline,
/// halo, and the probabilistic beam and tower accessories.
pub fn spawn_building(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    assets: &CityAssets,
    position: Vec3,
    dims: &BuildingDims,
    rng: &mut impl Rng,
) -> Entity {
    let BuildingDims {
        width,
        height,
        depth,
        scale,
    } = *dims;

    let accent = BUILDING_EMISSIVES[rng.random_range(0..BUILDING_EMISSIVES.len())];
    let emissive = LinearRgba::from(accent);
    let pulse_phase = rng.random_range(0.0..TAU);
    let pulse_speed = rng.random_range(0.5..2.5);

    let body_material = materials.add(StandardMaterial {
        base_color: Color::BLACK,
        emissive: emissive * 0.5,
        perceptual_roughness: 0.3,
        metallic: 0.6,
        ..default()
    });

    let building = commands
        .spawn((
            Mesh3d(meshes.add(Cuboid::new(width, height, depth))),
            MeshMaterial3d(body_material),
            Transform {
                translation: position,
                rotation: Quat::from_rotation_y(rng.random_range(0.0..TAU)),
                scale: Vec3::new(scale, 1.0, scale),
            },
            Building {
                pulse_phase,
                pulse_speed,
                emissive,
            },
        ))
        .id();

    commands.entity(building).with_children(|parent| {
        for slot in window_slots(width, height, depth, rng) {
            parent.spawn((
                Mesh3d(assets.window_mesh.clone()),
                MeshMaterial3d(assets.window_material.clone()),
                Transform::from_translation(slot),
                WindowSet,
            ));
        }

        let edge_material = materials.add(StandardMaterial {
            base_color: Color::from(accent).with_alpha(0.8),
            unlit: true,
            alpha_mode: AlphaMode::Blend,
            ..default()
        });
        parent.spawn((
            Mesh3d(meshes.add(box_edges_mesh(width, height, depth))),
            MeshMaterial3d(edge_material),
            Transform::IDENTITY,
            EdgeOutline { phase: pulse_phase },
        ));

        let halo_material = materials.add(StandardMaterial {
            base_color: Color::from(accent).with_alpha(0.3),
            unlit: true,
            alpha_mode: AlphaMode::Blend,
            double_sided: true,
            cull_mode: None,
            ..default()
        });
        parent.spawn((
            Mesh3d(meshes.add(Torus {
                minor_radius: 0.5,
                major_radius: width * 0.7,
            })),
            MeshMaterial3d(halo_material),
            Transform::from_xyz(0.0, height * 0.5 + 2.0, 0.0)
                .with_rotation(Quat::from_rotation_x(FRAC_PI_2)),
            Halo { phase: pulse_phase },
        ));

        if rng.random::<f32>() < BEAM_PROBABILITY {
            let beam_material = materials.add(StandardMaterial {
                base_color: Color::from(accent).with_alpha(0.2),
                unlit: true,
                alpha_mode: AlphaMode::Blend,
                double_sided: true,
                cull_mode: None,
                ..default()
            });
            parent.spawn((
                Mesh3d(meshes.add(ConicalFrustum {
                    radius_top: 0.5,
                    radius_bottom: 5.0,
                    height: 50.0,
                })),
                MeshMaterial3d(beam_material),
                Transform::from_xyz(0.0, height * 0.5 + 25.0, 0.0),
                LightBeam,
            ));
        }

        if rng.random::<f32>() < TOWER_PROBABILITY {
            let pyramid_material = materials.add(StandardMaterial {
                base_color: Color::BLACK,
                emissive: emissive * 0.5,
                perceptual_roughness: 0.3,
                metallic: 0.6,
                ..default()
            });
            parent.spawn((
                Mesh3d(meshes.add(Cone::new(width * 0.5, height * 1.2).mesh().resolution(4))),
                MeshMaterial3d(pyramid_material),
                Transform::from_xyz(0.0, height * 0.5, 0.0),
            ));

            let antenna_material = materials.add(StandardMaterial {
                base_color: Color::BLACK,
                emissive: LinearRgba::from(NEON_CYAN),
                ..default()
            });
            parent.spawn((
                Mesh3d(meshes.add(Cylinder::new(0.5, height * 0.5).mesh().resolution(8))),
                MeshMaterial3d(antenna_material),
                Transform::from_xyz(0.0, height, 0.0),
            ));
        }
    });

    building
}

/// Sinusoidal emissive pulse keyed to each building's phase and speed.
pub fn pulse_building_emission(
    time: Res<Time>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    query: Query<(&Building, &MeshMaterial3d<StandardMaterial>)>,
) {
    let t = time.elapsed_secs();
    for (building, material) in &query {
        let intensity = 0.5 + (t * building.pulse_speed + building.pulse_phase).sin() * 0.3;
        if let Some(material) = materials.get_mut(&material.0) {
            material.emissive = building.emissive * intensity;
        }
    }
}

pub fn animate_light_beams(
    time: Res<Time>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut query: Query<(&mut Transform, &MeshMaterial3d<StandardMaterial>), With<LightBeam>>,
) {
    let t = time.elapsed_secs();
    let opacity = 0.2 + (t * 2.0).sin() * 0.1;
    for (mut transform, material) in &mut query {
        transform.rotation = Quat::from_rotation_y(t * 0.5);
        if let Some(material) = materials.get_mut(&material.0) {
            material.base_color = material.base_color.with_alpha(opacity);
        }
    }
}

pub fn animate_edge_outlines(
    time: Res<Time>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    query: Query<(&EdgeOutline, &MeshMaterial3d<StandardMaterial>)>,
) {
    let t = time.elapsed_secs();
    for (edges, material) in &query {
        if let Some(material) = materials.get_mut(&material.0) {
            let opacity = 0.5 + (t + edges.phase).sin() * 0.3;
            material.base_color = material.base_color.with_alpha(opacity);
        }
    }
}

pub fn animate_halos(
    time: Res<Time>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut query: Query<(&Halo, &mut Transform, &MeshMaterial3d<StandardMaterial>)>,
) {
    let t = time.elapsed_secs();
    for (halo, mut transform, material) in &mut query {
        transform.rotation = Quat::from_rotation_x(FRAC_PI_2) * Quat::from_rotation_z(t * 0.5);
        transform.scale = Vec3::splat(1.0 + (t * 2.0).sin() * 0.1);
        if let Some(material) = materials.get_mut(&material.0) {
            let opacity = 0.3 + (t * 3.0 + halo.phase).sin() * 0.2;
            material.base_color = material.base_color.with_alpha(opacity);
        }
    }
}
