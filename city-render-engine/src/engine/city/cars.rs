use std::f32::consts::FRAC_PI_2;

use bevy::color::Alpha;
use bevy::prelude::*;
use rand::Rng;

use constants::city::{CAR_COUNT, CAR_SPEED_MAX, CAR_SPEED_MIN, NOMINAL_DELTA};
use constants::palette::ACCENT_PAIR;

use crate::engine::city::assets::CityAssets;
use crate::engine::city::roads::RoadNetwork;

/// Car agent state: which road it is on and where along it.
#[derive(Component)]
pub struct Car {
    pub segment: usize,
    pub t: f32,
    pub speed: f32,
    pub direction: f32,
}

impl Car {
    /// Advance the parametric position; on leaving [0,1] hop to a uniformly
    /// random segment, reset t to the boundary matching the overrun
    /// direction, and return the new heading. The hop teleports the car to
    /// the new segment's endpoint on purpose — cars do not physically
    /// travel through intersections.
    pub fn advance(&mut self, roads: &RoadNetwork, dt: f32, rng: &mut impl Rng) -> Option<f32> {
        self.t += self.speed * self.direction * dt;
        if self.t > 1.0 || self.t < 0.0 {
            let overran_end = self.t > 1.0;
            self.segment = roads.random_index(rng);
            self.t = if overran_end { 0.0 } else { 1.0 };
            Some(roads.get(self.segment).heading())
        } else {
            None
        }
    }
}

/// Under-car glow plane; pulse parameters are per car.
#[derive(Component)]
pub struct CarGlow {
    pub speed: f32,
    pub intensity: f32,
}

#[derive(Component)]
pub struct HeadlightBeam;

#[derive(Component)]
pub struct WindowTrim;

/// Spawn the car fleet on random segments with random speed and facing.
pub fn spawn_cars(
    commands: &mut Commands,
    materials: &mut Assets<StandardMaterial>,
    assets: &CityAssets,
    roads: &RoadNetwork,
    rng: &mut impl Rng,
) {
    for _ in 0..CAR_COUNT {
        let segment = roads.random_index(rng);
        let t = rng.random::<f32>();
        let road = roads.get(segment);

        let accent = ACCENT_PAIR[rng.random_range(0..ACCENT_PAIR.len())];
        let emissive = LinearRgba::from(accent);

        let body_material = materials.add(StandardMaterial {
            base_color: Color::BLACK,
            emissive,
            perceptual_roughness: 0.2,
            metallic: 0.8,
            ..default()
        });
        let glow_material = materials.add(StandardMaterial {
            base_color: Color::from(accent).with_alpha(0.5),
            unlit: true,
            alpha_mode: AlphaMode::Add,
            double_sided: true,
            cull_mode: None,
            ..default()
        });
        let trim_material = materials.add(StandardMaterial {
            base_color: Color::from(accent).with_alpha(0.8),
            unlit: true,
            alpha_mode: AlphaMode::Blend,
            ..default()
        });

        let car = commands
            .spawn((
                Mesh3d(assets.car_body_mesh.clone()),
                MeshMaterial3d(body_material.clone()),
                Transform::from_translation(road.point_at(t))
                    .with_rotation(Quat::from_rotation_y(road.heading())),
                Car {
                    segment,
                    t,
                    speed: rng.random_range(CAR_SPEED_MIN..CAR_SPEED_MAX),
                    direction: if rng.random::<f32>() > 0.5 { 1.0 } else { -1.0 },
                },
            ))
            .id();

        let glow = CarGlow {
            speed: rng.random_range(1.0..3.0),
            intensity: rng.random_range(0.7..1.0),
        };

        commands.entity(car).with_children(|parent| {
            parent.spawn((
                Mesh3d(assets.car_roof_mesh.clone()),
                MeshMaterial3d(body_material),
                Transform::from_xyz(-0.5, 0.9, 0.0),
            ));
            parent.spawn((
                Mesh3d(assets.car_glow_mesh.clone()),
                MeshMaterial3d(glow_material),
                Transform::from_xyz(0.0, -0.5, 0.0)
                    .with_rotation(Quat::from_rotation_x(-FRAC_PI_2)),
                glow,
            ));
            for side in [-1.0, 1.0] {
                parent.spawn((
                    Mesh3d(assets.headlight_mesh.clone()),
                    MeshMaterial3d(assets.headlight_material.clone()),
                    Transform::from_xyz(1.9 * side, 0.0, 0.8)
                        .with_rotation(Quat::from_rotation_z(FRAC_PI_2)),
                ));
                parent.spawn((
                    Mesh3d(assets.headlight_beam_mesh.clone()),
                    MeshMaterial3d(assets.headlight_beam_material.clone()),
                    Transform::from_xyz(1.9 * side, 0.0, 2.5)
                        .with_rotation(Quat::from_rotation_x(FRAC_PI_2)),
                    HeadlightBeam,
                ));
                parent.spawn((
                    Mesh3d(assets.taillight_mesh.clone()),
                    MeshMaterial3d(assets.taillight_material.clone()),
                    Transform::from_xyz(1.9 * side, 0.0, -1.0),
                ));
            }
            parent.spawn((
                Mesh3d(assets.window_trim_mesh.clone()),
                MeshMaterial3d(trim_material),
                Transform::from_xyz(-0.5, 1.3, 0.0)
                    .with_rotation(Quat::from_rotation_x(FRAC_PI_2)),
                WindowTrim,
            ));
        });
    }
}

/// Advance every car by the fixed nominal delta and snap its transform to
/// the interpolated segment position.
pub fn advance_cars(
    roads: Res<RoadNetwork>,
    mut query: Query<(&mut Car, &mut Transform)>,
) {
    let mut rng = rand::rng();
    for (mut car, mut transform) in &mut query {
        if let Some(heading) = car.advance(&roads, NOMINAL_DELTA, &mut rng) {
            transform.rotation = Quat::from_rotation_y(heading);
        }
        transform.translation = roads.get(car.segment).point_at(car.t);
    }
}

/// Sinusoidal modulation of the glow plane, headlight beams and window
/// trim. Beams share one material across the fleet, so its opacity is
/// written once.
pub fn animate_car_accessories(
    time: Res<Time>,
    assets: Res<CityAssets>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    glow_query: Query<(&CarGlow, &MeshMaterial3d<StandardMaterial>)>,
    mut beam_query: Query<&mut Transform, With<HeadlightBeam>>,
    trim_query: Query<&MeshMaterial3d<StandardMaterial>, With<WindowTrim>>,
) {
    let t = time.elapsed_secs();

    for (glow, material) in &glow_query {
        if let Some(material) = materials.get_mut(&material.0) {
            let opacity = 0.3 + (t * glow.speed).sin() * 0.2 * glow.intensity;
            material.base_color = material.base_color.with_alpha(opacity);
        }
    }

    if let Some(material) = materials.get_mut(&assets.headlight_beam_material) {
        material.base_color = material
            .base_color
            .with_alpha(0.1 + (t * 2.0).sin() * 0.05);
    }
    let beam_stretch = 1.0 + (t * 3.0).sin() * 0.1;
    for mut transform in &mut beam_query {
        transform.scale = Vec3::new(1.0, beam_stretch, 1.0);
    }

    for material in &trim_query {
        if let Some(material) = materials.get_mut(&material.0) {
            material.base_color = material
                .base_color
                .with_alpha(0.6 + (t * 2.0).sin() * 0.2);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn north_segment_index(roads: &RoadNetwork) -> usize {
        roads
            .segments()
            .iter()
            .position(|s| {
                s.start == Vec3::new(0.0, 0.0, -100.0) && s.end == Vec3::new(0.0, 0.0, 100.0)
            })
            .expect("grid contains the central vertical segment")
    }

    #[test]
    fn car_advances_by_speed_direction_delta() {
        let roads = RoadNetwork::generate();
        let mut car = Car {
            segment: north_segment_index(&roads),
            t: 0.5,
            speed: 0.2,
            direction: 1.0,
        };

        let mut rng = StdRng::seed_from_u64(0);
        let rerouted = car.advance(&roads, 1.0, &mut rng);

        assert!(rerouted.is_none());
        assert!((car.t - 0.7).abs() < 1e-6);
        let position = roads.get(car.segment).point_at(car.t);
        assert!(position.distance(Vec3::new(0.0, 0.0, 40.0)) < 1e-4);
    }

    #[test]
    fn overrunning_the_end_hops_to_a_new_segment_start() {
        let roads = RoadNetwork::generate();
        let mut car = Car {
            segment: 0,
            t: 0.95,
            speed: 0.3,
            direction: 1.0,
        };

        let mut rng = StdRng::seed_from_u64(42);
        let heading = car.advance(&roads, 1.0, &mut rng);

        assert!(heading.is_some());
        assert_eq!(car.t, 0.0);
        assert!(car.segment < roads.len());
        assert_eq!(heading.unwrap(), roads.get(car.segment).heading());
    }

    #[test]
    fn underrunning_the_start_hops_to_a_new_segment_end() {
        let roads = RoadNetwork::generate();
        let mut car = Car {
            segment: 0,
            t: 0.05,
            speed: 0.3,
            direction: -1.0,
        };

        let mut rng = StdRng::seed_from_u64(42);
        assert!(car.advance(&roads, 1.0, &mut rng).is_some());
        assert_eq!(car.t, 1.0);
    }

    #[test]
    fn t_stays_in_range_after_every_update() {
        let roads = RoadNetwork::generate();
        let mut rng = StdRng::seed_from_u64(7);
        let mut cars: Vec<Car> = (0..32)
            .map(|i| Car {
                segment: i % roads.len(),
                t: rng.random::<f32>(),
                speed: rng.random_range(CAR_SPEED_MIN..CAR_SPEED_MAX),
                direction: if i % 2 == 0 { 1.0 } else { -1.0 },
            })
            .collect();

        for _ in 0..10_000 {
            for car in &mut cars {
                car.advance(&roads, NOMINAL_DELTA, &mut rng);
                assert!((0.0..=1.0).contains(&car.t), "t out of range: {}", car.t);
            }
        }
    }
}
