use bevy::asset::RenderAssetUsages;
use bevy::color::Alpha;
use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::view::NoFrustumCulling;

use constants::effects::{GRID_BASE_OPACITY, GRID_DIVISIONS, GRID_OPACITY_SWING, GRID_SIZE, GRID_SLIDE};
use constants::palette::{NEON_CYAN, NEON_PINK};

/// The glowing ground grid; its material fades and the whole plane slides
/// on z with time.
#[derive(Component)]
pub struct GroundGrid {
    pub material: Handle<StandardMaterial>,
}

/// Vertex-colored line grid: the two center lines are pink, the rest cyan.
fn grid_mesh() -> Mesh {
    let half = GRID_SIZE / 2.0;
    let cell = GRID_SIZE / GRID_DIVISIONS as f32;
    let center = GRID_DIVISIONS / 2;

    let mut positions = Vec::new();
    let mut colors = Vec::new();
    for i in 0..=GRID_DIVISIONS {
        let offset = -half + i as f32 * cell;
        let color = if i == center { NEON_PINK } else { NEON_CYAN };
        let linear = LinearRgba::from(color);
        let rgba = [linear.red, linear.green, linear.blue, 1.0];

        positions.push([offset, 0.0, -half]);
        positions.push([offset, 0.0, half]);
        positions.push([-half, 0.0, offset]);
        positions.push([half, 0.0, offset]);
        for _ in 0..4 {
            colors.push(rgba);
        }
    }

    let mut mesh = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, colors);
    mesh
}

pub fn spawn_ground_grid(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE.with_alpha(GRID_BASE_OPACITY),
        unlit: true,
        alpha_mode: AlphaMode::Add,
        ..default()
    });

    commands.spawn((
        Mesh3d(meshes.add(grid_mesh())),
        MeshMaterial3d(material.clone()),
        Transform::IDENTITY,
        NoFrustumCulling,
        GroundGrid { material },
    ));
}

pub fn animate_ground_grid(
    time: Res<Time>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut query: Query<(&GroundGrid, &mut Transform)>,
) {
    let t = time.elapsed_secs();
    for (grid, mut transform) in &mut query {
        transform.translation.z = (t * 0.5).sin() * GRID_SLIDE;
        if let Some(material) = materials.get_mut(&grid.material) {
            let opacity = GRID_BASE_OPACITY + t.sin() * GRID_OPACITY_SWING;
            material.base_color = material.base_color.with_alpha(opacity);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::render::mesh::VertexAttributeValues;

    #[test]
    fn grid_has_four_vertices_per_line_index() {
        let mesh = grid_mesh();
        let Some(VertexAttributeValues::Float32x3(positions)) =
            mesh.attribute(Mesh::ATTRIBUTE_POSITION)
        else {
            panic!("grid mesh must have positions");
        };
        assert_eq!(positions.len(), 4 * (GRID_DIVISIONS + 1));
    }

    #[test]
    fn center_lines_use_the_pink_accent() {
        let mesh = grid_mesh();
        let Some(VertexAttributeValues::Float32x4(colors)) =
            mesh.attribute(Mesh::ATTRIBUTE_COLOR)
        else {
            panic!("grid mesh must have vertex colors");
        };
        let pink = LinearRgba::from(NEON_PINK);
        let center = GRID_DIVISIONS / 2;
        let first = colors[center * 4];
        assert!((first[0] - pink.red).abs() < 1e-6);
        assert!((first[2] - pink.blue).abs() < 1e-6);
    }
}
