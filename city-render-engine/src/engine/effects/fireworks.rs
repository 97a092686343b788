use bevy::asset::RenderAssetUsages;
use bevy::color::Alpha;
use bevy::prelude::*;
use bevy::render::mesh::{PrimitiveTopology, VertexAttributeValues};
use bevy::render::view::NoFrustumCulling;
use rand::Rng;

use constants::city::NOMINAL_DELTA;
use constants::effects::{
    FIREWORK_GRAVITY, FIREWORK_LIFETIME, FIREWORK_PARTICLES, FIREWORK_SPAWN_PROBABILITY,
    FIREWORK_SPEED_MAX, FIREWORK_SPEED_MIN,
};
use constants::palette::ACCENT_PAIR;

/// Ballistic state of one burst: velocities advance the point positions,
/// gravity pulls them down, age drives the fade-out.
pub struct Burst {
    pub velocities: Vec<Vec3>,
    pub age: f32,
}

impl Burst {
    pub fn random(rng: &mut impl Rng) -> Self {
        // Elevation in [0, pi) keeps the vertical component non-negative,
        // so bursts bloom upward before gravity takes over.
        let velocities = (0..FIREWORK_PARTICLES)
            .map(|_| {
                let angle = rng.random::<f32>() * std::f32::consts::TAU;
                let elevation = rng.random::<f32>() * std::f32::consts::PI;
                let speed = rng.random_range(FIREWORK_SPEED_MIN..FIREWORK_SPEED_MAX);
                Vec3::new(
                    angle.sin() * elevation.cos(),
                    elevation.sin(),
                    angle.cos() * elevation.cos(),
                ) * speed
            })
            .collect();
        Self {
            velocities,
            age: 0.0,
        }
    }

    /// One integration step over the paired position buffer.
    pub fn step(&mut self, positions: &mut [[f32; 3]], dt: f32) {
        for (position, velocity) in positions.iter_mut().zip(self.velocities.iter_mut()) {
            position[0] += velocity.x;
            position[1] += velocity.y;
            position[2] += velocity.z;
            velocity.y -= FIREWORK_GRAVITY;
        }
        self.age += dt;
    }

    /// Linear fade from 1 at birth to 0 at end of life.
    pub fn opacity(&self) -> f32 {
        (1.0 - self.age / FIREWORK_LIFETIME).max(0.0)
    }

    pub fn expired(&self) -> bool {
        self.age >= FIREWORK_LIFETIME
    }
}

/// A live burst entity, owning its mesh and material so both can be
/// released the moment it expires.
#[derive(Component)]
pub struct Firework {
    pub burst: Burst,
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
}

fn spawn_burst(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    rng: &mut impl Rng,
) {
    let origin = Vec3::new(
        (rng.random::<f32>() - 0.5) * 200.0,
        100.0 + rng.random::<f32>() * 100.0,
        (rng.random::<f32>() - 0.5) * 200.0,
    );
    let positions = vec![[origin.x, origin.y, origin.z]; FIREWORK_PARTICLES];
    let colors: Vec<[f32; 4]> = (0..FIREWORK_PARTICLES)
        .map(|_| {
            let accent = ACCENT_PAIR[rng.random_range(0..ACCENT_PAIR.len())];
            let linear = LinearRgba::from(accent);
            [linear.red, linear.green, linear.blue, 1.0]
        })
        .collect();

    let mut mesh = Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, colors);
    let mesh = meshes.add(mesh);

    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE.with_alpha(1.0),
        unlit: true,
        alpha_mode: AlphaMode::Add,
        ..default()
    });

    commands.spawn((
        Mesh3d(mesh.clone()),
        MeshMaterial3d(material.clone()),
        Transform::IDENTITY,
        NoFrustumCulling,
        Firework {
            burst: Burst::random(rng),
            mesh,
            material,
        },
    ));
}

/// Roll the per-tick spawn chance, integrate every live burst, and release
/// expired bursts together with their mesh and material in the same pass.
pub fn update_fireworks(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut query: Query<(Entity, &mut Firework)>,
) {
    let mut rng = rand::rng();

    if rng.random::<f32>() < FIREWORK_SPAWN_PROBABILITY {
        spawn_burst(&mut commands, &mut meshes, &mut materials, &mut rng);
    }

    for (entity, mut firework) in &mut query {
        if firework.burst.expired() {
            meshes.remove(&firework.mesh);
            materials.remove(&firework.material);
            commands.entity(entity).despawn();
            continue;
        }

        let firework = &mut *firework;
        if let Some(mesh) = meshes.get_mut(&firework.mesh) {
            if let Some(VertexAttributeValues::Float32x3(positions)) =
                mesh.attribute_mut(Mesh::ATTRIBUTE_POSITION)
            {
                firework.burst.step(positions, NOMINAL_DELTA);
            }
        }
        if let Some(material) = materials.get_mut(&firework.material) {
            material.base_color = material.base_color.with_alpha(firework.burst.opacity());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn burst_expires_within_its_lifetime() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut burst = Burst::random(&mut rng);
        let mut positions = vec![[0.0, 150.0, 0.0]; FIREWORK_PARTICLES];

        let ticks = (FIREWORK_LIFETIME / NOMINAL_DELTA).ceil() as usize;
        for _ in 0..ticks {
            assert!(!burst.expired());
            burst.step(&mut positions, NOMINAL_DELTA);
        }
        assert!(burst.expired());
        assert_eq!(burst.opacity(), 0.0);
    }

    #[test]
    fn gravity_pulls_velocities_down() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut burst = Burst::random(&mut rng);
        let before: Vec<f32> = burst.velocities.iter().map(|v| v.y).collect();
        let mut positions = vec![[0.0, 150.0, 0.0]; FIREWORK_PARTICLES];
        burst.step(&mut positions, NOMINAL_DELTA);
        for (v, b) in burst.velocities.iter().zip(before) {
            assert!((v.y - (b - FIREWORK_GRAVITY)).abs() < 1e-6);
        }
    }

    #[test]
    fn opacity_fades_linearly() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut burst = Burst::random(&mut rng);
        assert_eq!(burst.opacity(), 1.0);
        burst.age = FIREWORK_LIFETIME / 2.0;
        assert!((burst.opacity() - 0.5).abs() < 1e-6);
        burst.age = FIREWORK_LIFETIME * 2.0;
        assert_eq!(burst.opacity(), 0.0);
    }

    #[test]
    fn expiry_releases_the_entity_and_its_assets_once() {
        let mut app = App::new();
        app.insert_resource(Assets::<Mesh>::default())
            .insert_resource(Assets::<StandardMaterial>::default())
            .add_systems(Update, update_fireworks);

        let (mesh, material) = {
            let world = app.world_mut();
            let mesh = world.resource_mut::<Assets<Mesh>>().add(Mesh::new(
                PrimitiveTopology::PointList,
                RenderAssetUsages::default(),
            ));
            let material = world
                .resource_mut::<Assets<StandardMaterial>>()
                .add(StandardMaterial::default());
            (mesh, material)
        };

        let mut rng = StdRng::seed_from_u64(5);
        let mut burst = Burst::random(&mut rng);
        burst.age = FIREWORK_LIFETIME;
        let entity = app
            .world_mut()
            .spawn(Firework {
                burst,
                mesh: mesh.clone(),
                material: material.clone(),
            })
            .id();

        app.update();
        assert!(app.world().get_entity(entity).is_err());
        assert!(app.world().resource::<Assets<Mesh>>().get(&mesh).is_none());
        assert!(
            app.world()
                .resource::<Assets<StandardMaterial>>()
                .get(&material)
                .is_none()
        );

        // A second pass over the emptied set must not release again.
        app.update();
        assert!(app.world().resource::<Assets<Mesh>>().get(&mesh).is_none());
    }

    #[test]
    fn particle_speeds_fall_in_the_configured_band() {
        let mut rng = StdRng::seed_from_u64(4);
        let burst = Burst::random(&mut rng);
        assert_eq!(burst.velocities.len(), FIREWORK_PARTICLES);
        for velocity in &burst.velocities {
            let speed = velocity.length();
            assert!(speed >= FIREWORK_SPEED_MIN - 1e-4);
            assert!(speed <= FIREWORK_SPEED_MAX + 1e-4);
        }
    }
}
