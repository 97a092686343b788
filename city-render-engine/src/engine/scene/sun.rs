use bevy::color::Alpha;
use bevy::prelude::*;

use constants::palette::{NEON_MAGENTA, NEON_PINK};

/// The synthwave sun disc on the horizon.
#[derive(Component)]
pub struct Sun {
    pub material: Handle<StandardMaterial>,
}

/// The flare billboard in front of the sun; re-aimed at the camera per tick.
#[derive(Component)]
pub struct SunFlare {
    pub material: Handle<StandardMaterial>,
}

pub fn spawn_sun(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let sun_material = materials.add(StandardMaterial {
        base_color: Color::from(NEON_PINK).with_alpha(0.6),
        emissive: LinearRgba::from(NEON_PINK),
        unlit: true,
        alpha_mode: AlphaMode::Add,
        ..default()
    });
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(100.0))),
        MeshMaterial3d(sun_material.clone()),
        Transform::from_xyz(0.0, -200.0, -1500.0),
        Sun {
            material: sun_material,
        },
    ));

    let flare_material = materials.add(StandardMaterial {
        base_color: Color::from(NEON_MAGENTA).with_alpha(0.4),
        unlit: true,
        alpha_mode: AlphaMode::Add,
        double_sided: true,
        cull_mode: None,
        ..default()
    });
    commands.spawn((
        Mesh3d(meshes.add(Rectangle::new(400.0, 400.0))),
        MeshMaterial3d(flare_material.clone()),
        Transform::from_xyz(0.0, -200.0, -1400.0),
        SunFlare {
            material: flare_material,
        },
    ));
}

/// Pulse rates for disc and flare.
pub fn sun_opacity(t: f32) -> f32 {
    0.6 + (t * 0.5).sin() * 0.2
}

pub fn flare_opacity(t: f32) -> f32 {
    0.4 + (t * 0.7).sin() * 0.2
}

pub fn animate_sun(
    time: Res<Time>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    sun_query: Query<&Sun>,
    mut flare_query: Query<(&SunFlare, &mut Transform)>,
    camera_query: Query<&Transform, (With<Camera3d>, Without<SunFlare>)>,
) {
    let t = time.elapsed_secs();

    for sun in &sun_query {
        if let Some(material) = materials.get_mut(&sun.material) {
            material.base_color = material.base_color.with_alpha(sun_opacity(t));
        }
    }

    let camera_position = camera_query.single().map(|c| c.translation).ok();
    for (flare, mut transform) in &mut flare_query {
        if let Some(material) = materials.get_mut(&flare.material) {
            material.base_color = material.base_color.with_alpha(flare_opacity(t));
        }
        if let Some(target) = camera_position {
            transform.look_at(target, Vec3::Y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sun_opacity_oscillates_around_its_base() {
        for step in 0..1000 {
            let t = step as f32 * 0.05;
            let o = sun_opacity(t);
            assert!((0.4..=0.8).contains(&o));
        }
    }

    #[test]
    fn flare_opacity_oscillates_around_its_base() {
        for step in 0..1000 {
            let t = step as f32 * 0.05;
            let o = flare_opacity(t);
            assert!((0.2..=0.6).contains(&o));
        }
    }
}
