use bevy::asset::RenderAssetUsages;
use bevy::color::Alpha;
use bevy::prelude::*;
use bevy::render::mesh::{PrimitiveTopology, VertexAttributeValues};
use bevy::render::view::NoFrustumCulling;
use rand::Rng;

use constants::effects::{STAR_BOB, STAR_CEILING, STAR_COUNT, STAR_SPREAD};
use constants::palette::ACCENT_PAIR;

/// Handle to the starfield point mesh whose positions are mutated per tick.
#[derive(Resource)]
pub struct Starfield {
    pub mesh: Handle<Mesh>,
}

/// Build the star point cloud: fixed positions, two-tone colors.
pub fn spawn_starfield(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    rng: &mut impl Rng,
) {
    let mut positions = Vec::with_capacity(STAR_COUNT);
    let mut colors = Vec::with_capacity(STAR_COUNT);
    for _ in 0..STAR_COUNT {
        positions.push([
            (rng.random::<f32>() - 0.5) * STAR_SPREAD,
            rng.random::<f32>() * STAR_CEILING,
            (rng.random::<f32>() - 0.5) * STAR_SPREAD,
        ]);
        let accent = ACCENT_PAIR[rng.random_range(0..ACCENT_PAIR.len())];
        let linear = LinearRgba::from(accent);
        colors.push([linear.red, linear.green, linear.blue, 1.0]);
    }

    let mut mesh = Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, colors);
    let mesh = meshes.add(mesh);

    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE.with_alpha(0.8),
        unlit: true,
        alpha_mode: AlphaMode::Add,
        ..default()
    });

    commands.spawn((
        Mesh3d(mesh.clone()),
        MeshMaterial3d(material),
        Transform::IDENTITY,
        NoFrustumCulling,
    ));
    commands.insert_resource(Starfield { mesh });
}

/// Per-point vertical bob, phase-offset by the point index. Positions are
/// otherwise fixed; stars never wrap and never die.
pub fn bob(y: f32, time: f32, index: usize) -> f32 {
    y + (time + index as f32).sin() * STAR_BOB
}

pub fn animate_starfield(
    field: Res<Starfield>,
    mut meshes: ResMut<Assets<Mesh>>,
    time: Res<Time>,
) {
    let Some(mesh) = meshes.get_mut(&field.mesh) else {
        return;
    };
    let t = time.elapsed_secs();
    if let Some(VertexAttributeValues::Float32x3(positions)) =
        mesh.attribute_mut(Mesh::ATTRIBUTE_POSITION)
    {
        for (i, position) in positions.iter_mut().enumerate() {
            position[1] = bob(position[1], t, i);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bob_is_bounded_by_amplitude() {
        for i in 0..100 {
            let displaced = bob(500.0, 1.234, i);
            assert!((displaced - 500.0).abs() <= STAR_BOB + f32::EPSILON);
        }
    }

    #[test]
    fn bob_phase_differs_per_point() {
        let a = bob(0.0, 0.5, 0);
        let b = bob(0.0, 0.5, 1);
        assert_ne!(a, b);
    }
}
