use bevy::prelude::*;
use rand::Rng;

use constants::city::{CITY_EXTENT, FOOTPRINT_TIERS, MAX_PLACEMENT_ATTEMPTS, MIN_CLEARANCE};

use crate::engine::city::assets::CityAssets;
use crate::engine::city::building::{BuildingDims, spawn_building};
use crate::engine::spatial::bounds::{Aabb, SpatialIndex};

/// Rejection-sample a position inside the city square where the inflated
/// footprint clears every registered volume. `None` after the retry cap —
/// the building is skipped, which is expected once the square fills up.
pub fn find_valid_position(
    index: &SpatialIndex,
    size: Vec3,
    rng: &mut impl Rng,
) -> Option<Vec3> {
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let position = Vec3::new(
            (rng.random::<f32>() - 0.5) * (CITY_EXTENT - size.x),
            size.y * 0.5,
            (rng.random::<f32>() - 0.5) * (CITY_EXTENT - size.z),
        );
        if !index.intersects_any(&placement_box(position, size)) {
            return Some(position);
        }
    }
    None
}

/// Inflated world volume registered for a placed building.
pub fn placement_box(position: Vec3, size: Vec3) -> Aabb {
    Aabb::footprint(position, size).inflated(MIN_CLEARANCE)
}

/// Place the three population tiers largest-first; later tiers fit into the
/// gaps the big footprints leave behind.
pub fn spawn_city(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    assets: &CityAssets,
    index: &mut SpatialIndex,
    rng: &mut impl Rng,
) {
    for tier in &FOOTPRINT_TIERS {
        let mut placed = 0;
        for _ in 0..tier.count {
            let dims = BuildingDims::randomized(rng);
            let size = dims.placement_size();
            let Some(position) = find_valid_position(index, size, rng) else {
                debug!(
                    "{} building skipped after {} placement attempts",
                    tier.name, MAX_PLACEMENT_ATTEMPTS
                );
                continue;
            };
            index.register(placement_box(position, size));
            spawn_building(commands, meshes, materials, assets, position, &dims, rng);
            placed += 1;
        }
        info!("placed {placed}/{} {} buildings", tier.count, tier.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    // Footprint template L.
    const LARGE: Vec3 = Vec3::new(20.0, 100.0, 20.0);

    #[test]
    fn duplicate_placement_at_same_coordinates_is_rejected() {
        let mut index = SpatialIndex::default();
        let position = Vec3::new(12.0, 50.0, -30.0);
        index.register(placement_box(position, LARGE));

        // An identical footprint at the same coordinates must collide.
        assert!(index.intersects_any(&placement_box(position, LARGE)));

        // Rejection sampling either lands elsewhere or gives up; it never
        // returns the occupied spot.
        let mut rng = StdRng::seed_from_u64(99);
        if let Some(found) = find_valid_position(&index, LARGE, &mut rng) {
            assert!(!index.intersects_any(&placement_box(found, LARGE)));
            assert!(found.distance(position) > 0.0);
        }
    }

    #[test]
    fn exhausted_sampling_returns_none() {
        let mut index = SpatialIndex::default();
        // One volume covering the whole city square leaves nowhere to go.
        index.register(Aabb::new(
            Vec3::new(-CITY_EXTENT, 0.0, -CITY_EXTENT),
            Vec3::new(CITY_EXTENT, 200.0, CITY_EXTENT),
        ));

        let mut rng = StdRng::seed_from_u64(1);
        assert!(find_valid_position(&index, LARGE, &mut rng).is_none());
    }

    #[test]
    fn placed_volumes_are_pairwise_disjoint() {
        let mut index = SpatialIndex::default();
        let mut rng = StdRng::seed_from_u64(2024);

        for tier in &FOOTPRINT_TIERS {
            for _ in 0..tier.count {
                let dims = BuildingDims::randomized(&mut rng);
                let size = dims.placement_size();
                if let Some(position) = find_valid_position(&index, size, &mut rng) {
                    index.register(placement_box(position, size));
                }
            }
        }

        assert!(!index.is_empty());
        let boxes = index.boxes();
        for i in 0..boxes.len() {
            for j in (i + 1)..boxes.len() {
                assert!(
                    !boxes[i].intersects(&boxes[j]),
                    "volumes {i} and {j} overlap"
                );
            }
        }
    }

    #[test]
    fn sampled_positions_keep_the_footprint_inside_the_square() {
        let index = SpatialIndex::default();
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..50 {
            let position = find_valid_position(&index, LARGE, &mut rng).unwrap();
            assert!(position.x.abs() <= (CITY_EXTENT - LARGE.x) * 0.5);
            assert!(position.z.abs() <= (CITY_EXTENT - LARGE.z) * 0.5);
            assert_eq!(position.y, LARGE.y * 0.5);
        }
    }
}
