use bevy::asset::RenderAssetUsages;
use bevy::color::Alpha;
use bevy::prelude::*;
use bevy::render::mesh::{PrimitiveTopology, VertexAttributeValues};
use bevy::render::view::NoFrustumCulling;
use rand::Rng;

use constants::effects::{
    FOG_CEILING, FOG_COUNT, FOG_DRIFT, FOG_LAYER_Z, FOG_SPREAD, FOG_WRAP_BOUND,
};
use constants::palette::NIGHT_SKY;

/// Handles to the drifting fog layer: positions and the fading material.
#[derive(Resource)]
pub struct FogLayer {
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
}

pub fn spawn_fog(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    rng: &mut impl Rng,
) {
    let mut positions = Vec::with_capacity(FOG_COUNT);
    for _ in 0..FOG_COUNT {
        positions.push([
            (rng.random::<f32>() - 0.5) * FOG_SPREAD,
            rng.random::<f32>() * FOG_CEILING,
            (rng.random::<f32>() - 0.5) * FOG_SPREAD,
        ]);
    }

    let mut mesh = Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    let mesh = meshes.add(mesh);

    let material = materials.add(StandardMaterial {
        base_color: Color::from(NIGHT_SKY).with_alpha(0.6),
        unlit: true,
        alpha_mode: AlphaMode::Add,
        depth_bias: -1.0,
        ..default()
    });

    commands.spawn((
        Mesh3d(mesh.clone()),
        MeshMaterial3d(material.clone()),
        Transform::from_xyz(0.0, 0.0, FOG_LAYER_Z),
        NoFrustumCulling,
    ));
    commands.insert_resource(FogLayer { mesh, material });
}

/// Drift one fog point along its per-axis sinusoids and apply the wrap
/// rules: vertical resets to the floor past the ceiling, horizontal axes
/// reflect in sign past the bound.
pub fn drift(position: &mut [f32; 3], time: f32, index: usize) {
    let phase = index as f32;
    position[1] += (time + phase).sin() * FOG_DRIFT;
    position[0] += (time + phase).cos() * FOG_DRIFT;
    position[2] += (time + phase * 0.5).sin() * FOG_DRIFT;

    if position[1] > FOG_CEILING {
        position[1] = 0.0;
    }
    if position[0].abs() > FOG_WRAP_BOUND {
        position[0] = -position[0];
    }
    if position[2].abs() > FOG_WRAP_BOUND {
        position[2] = -position[2];
    }
}

pub fn animate_fog(
    fog: Res<FogLayer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    time: Res<Time>,
) {
    let t = time.elapsed_secs();

    if let Some(mesh) = meshes.get_mut(&fog.mesh) {
        if let Some(VertexAttributeValues::Float32x3(positions)) =
            mesh.attribute_mut(Mesh::ATTRIBUTE_POSITION)
        {
            for (i, position) in positions.iter_mut().enumerate() {
                drift(position, t, i);
            }
        }
    }

    if let Some(material) = materials.get_mut(&fog.material) {
        let opacity = 0.4 + (t * 0.5).sin() * 0.3;
        material.base_color = material.base_color.with_alpha(opacity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_position_resets_past_the_ceiling() {
        let mut p = [0.0, FOG_CEILING + 1.0, 0.0];
        // Zero time keeps the sinusoid contributions small relative to the
        // overshoot, so the reset branch must fire.
        drift(&mut p, 0.0, 0);
        assert_eq!(p[1], 0.0);
    }

    #[test]
    fn horizontal_positions_reflect_in_sign() {
        let mut p = [FOG_WRAP_BOUND + 5.0, 10.0, -(FOG_WRAP_BOUND + 5.0)];
        drift(&mut p, 0.0, 0);
        assert!(p[0] < 0.0, "x should reflect to the negative side");
        assert!(p[2] > 0.0, "z should reflect to the positive side");
    }

    #[test]
    fn drift_stays_within_bounds_over_many_ticks() {
        let mut p = [500.0, 200.0, -300.0];
        let mut t = 0.0;
        for i in 0..100_000 {
            drift(&mut p, t, i % FOG_COUNT);
            t += 0.016;
            assert!(p[0].abs() <= FOG_WRAP_BOUND + 1.0);
            assert!(p[1] <= FOG_CEILING + 1.0);
            assert!(p[2].abs() <= FOG_WRAP_BOUND + 1.0);
        }
    }
}
