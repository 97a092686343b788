use bevy::prelude::*;

use constants::palette::{NEON_CYAN, NEON_PINK};

/// Dim ambient plus two colored point lights over the city center.
pub fn spawn_lighting(commands: &mut Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.1, 0.1, 0.2),
        brightness: 80.0,
        ..default()
    });

    commands.spawn((
        PointLight {
            color: Color::from(NEON_PINK),
            intensity: 2_000_000.0,
            range: 1000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(0.0, 200.0, 0.0),
    ));

    commands.spawn((
        PointLight {
            color: Color::from(NEON_CYAN),
            intensity: 2_000_000.0,
            range: 1000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(100.0, 200.0, 100.0),
    ));
}
