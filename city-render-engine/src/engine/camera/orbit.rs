use bevy::prelude::*;

use constants::camera::{
    ANGULAR_STEP, BASE_HEIGHT, ESCAPE_RADIUS_GROWTH, HEIGHT_SWING, MAX_HEIGHT, MIN_HEIGHT,
    PROBE_HALF_EXTENT, START_RADIUS,
};

use crate::engine::spatial::bounds::{Aabb, SpatialIndex};

/// Orbit state carried across frames. Height is purely time-derived and is
/// not part of the state.
#[derive(Resource)]
pub struct OrbitCamera {
    pub angle: f32,
    pub radius: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            angle: 0.0,
            radius: START_RADIUS,
        }
    }
}

/// Outcome of one orbit step: the committed camera position and whether
/// the obstruction-escape path was taken.
pub struct OrbitStep {
    pub position: Vec3,
    pub avoided: bool,
}

pub fn orbit_position(angle: f32, radius: f32) -> (f32, f32) {
    (angle.cos() * radius, angle.sin() * radius)
}

pub fn orbit_height(time: f32) -> f32 {
    (BASE_HEIGHT + (time * 0.5).sin() * HEIGHT_SWING).clamp(MIN_HEIGHT, MAX_HEIGHT)
}

/// Slowly wandering look target over the city center.
pub fn look_target(time: f32) -> Vec3 {
    Vec3::new(
        (time * 0.7).sin() * 20.0,
        40.0 + (time * 0.4).sin() * 10.0,
        (time * 0.7).cos() * 20.0,
    )
}

impl OrbitCamera {
    /// Advance the orbit by one step. The candidate position is probed
    /// against the building index with a small box; an obstructed
    /// candidate rolls the angle back and widens the orbit instead, so
    /// the camera spirals outward past the blocking tower.
    pub fn step(&mut self, index: &SpatialIndex, time: f32) -> OrbitStep {
        self.angle += ANGULAR_STEP;
        let height = orbit_height(time);
        let (x, z) = orbit_position(self.angle, self.radius);
        let candidate = Vec3::new(x, height, z);

        let probe = Aabb::from_center_size(candidate, Vec3::splat(2.0 * PROBE_HALF_EXTENT));
        if index.intersects_any(&probe) {
            self.angle -= ANGULAR_STEP;
            self.radius *= ESCAPE_RADIUS_GROWTH;
            let (x, z) = orbit_position(self.angle, self.radius);
            OrbitStep {
                position: Vec3::new(x, height, z),
                avoided: true,
            }
        } else {
            OrbitStep {
                position: candidate,
                avoided: false,
            }
        }
    }
}

pub fn orbit_camera_controller(
    time: Res<Time>,
    index: Res<SpatialIndex>,
    mut orbit: ResMut<OrbitCamera>,
    mut query: Query<&mut Transform, With<Camera3d>>,
) {
    let t = time.elapsed_secs();
    let step = orbit.step(&index, t);
    for mut transform in &mut query {
        transform.translation = step.position;
        transform.look_at(look_target(t), Vec3::Y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_angle_sits_on_the_positive_x_axis() {
        let (x, z) = orbit_position(0.0, START_RADIUS);
        assert_eq!(x, START_RADIUS);
        assert_eq!(z, 0.0);
    }

    #[test]
    fn initial_step_sits_on_the_start_radius() {
        let mut orbit = OrbitCamera::default();
        let index = SpatialIndex::default();
        let step = orbit.step(&index, 0.0);
        assert!(!step.avoided);
        assert!((step.position.length_squared()
            - (START_RADIUS * START_RADIUS + BASE_HEIGHT * BASE_HEIGHT))
            .abs()
            < 1.0);
        assert_eq!(step.position.y, BASE_HEIGHT);
    }

    #[test]
    fn height_stays_clamped() {
        for step in 0..10_000 {
            let h = orbit_height(step as f32 * 0.1);
            assert!((MIN_HEIGHT..=MAX_HEIGHT).contains(&h));
        }
    }

    #[test]
    fn obstruction_widens_the_orbit_and_rolls_back_the_angle() {
        let mut orbit = OrbitCamera::default();
        let mut index = SpatialIndex::default();
        // A wall tall and wide enough to catch the candidate position.
        index.register(Aabb::new(
            Vec3::new(50.0, 0.0, -500.0),
            Vec3::new(150.0, 400.0, 500.0),
        ));

        let angle_before = orbit.angle;
        let radius_before = orbit.radius;
        let step = orbit.step(&index, 0.0);

        assert!(step.avoided);
        assert_eq!(orbit.angle, angle_before);
        assert!((orbit.radius - radius_before * ESCAPE_RADIUS_GROWTH).abs() < 1e-4);
        assert_eq!(step.position.y, orbit_height(0.0));
    }

    #[test]
    fn repeated_obstruction_spirals_outward() {
        let mut orbit = OrbitCamera::default();
        let mut index = SpatialIndex::default();
        index.register(Aabb::new(
            Vec3::new(-2000.0, 0.0, -2000.0),
            Vec3::new(2000.0, 400.0, 2000.0),
        ));

        for _ in 0..10 {
            orbit.step(&index, 0.0);
        }
        assert!(orbit.radius > START_RADIUS * 2.0);
    }
}
