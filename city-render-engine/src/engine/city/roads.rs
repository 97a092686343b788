use bevy::prelude::*;
use rand::Rng;

use constants::city::{ROAD_DIVISIONS, ROAD_EXTENT};

/// One straight road on the ground plane (y = 0).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoadSegment {
    pub start: Vec3,
    pub end: Vec3,
}

impl RoadSegment {
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.start.lerp(self.end, t)
    }

    /// Yaw of the segment's direction vector.
    pub fn heading(&self) -> f32 {
        let dir = (self.end - self.start).normalize();
        dir.x.atan2(dir.z)
    }
}

/// Fixed square grid of road segments, generated once and shared read-only
/// by every car.
#[derive(Resource)]
pub struct RoadNetwork {
    segments: Vec<RoadSegment>,
}

impl RoadNetwork {
    pub fn generate() -> Self {
        let cell = 2.0 * ROAD_EXTENT / ROAD_DIVISIONS as f32;
        let mut segments = Vec::with_capacity(2 * (ROAD_DIVISIONS + 1));
        for step in 0..=ROAD_DIVISIONS {
            let offset = -ROAD_EXTENT + step as f32 * cell;
            segments.push(RoadSegment {
                start: Vec3::new(offset, 0.0, -ROAD_EXTENT),
                end: Vec3::new(offset, 0.0, ROAD_EXTENT),
            });
            segments.push(RoadSegment {
                start: Vec3::new(-ROAD_EXTENT, 0.0, offset),
                end: Vec3::new(ROAD_EXTENT, 0.0, offset),
            });
        }
        Self { segments }
    }

    pub fn get(&self, index: usize) -> RoadSegment {
        self.segments[index]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[RoadSegment] {
        &self.segments
    }

    pub fn random_index(&self, rng: &mut impl Rng) -> usize {
        rng.random_range(0..self.segments.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_has_one_segment_pair_per_line() {
        let roads = RoadNetwork::generate();
        assert_eq!(roads.len(), 2 * (ROAD_DIVISIONS + 1));
    }

    #[test]
    fn segments_lie_flat_and_span_the_grid() {
        let roads = RoadNetwork::generate();
        for segment in roads.segments() {
            assert_eq!(segment.start.y, 0.0);
            assert_eq!(segment.end.y, 0.0);
            assert_eq!(segment.start.distance(segment.end), 2.0 * ROAD_EXTENT);
        }
    }

    #[test]
    fn heading_follows_the_direction_vector() {
        let north = RoadSegment {
            start: Vec3::new(0.0, 0.0, -100.0),
            end: Vec3::new(0.0, 0.0, 100.0),
        };
        assert_eq!(north.heading(), 0.0);

        let east = RoadSegment {
            start: Vec3::new(-100.0, 0.0, 0.0),
            end: Vec3::new(100.0, 0.0, 0.0),
        };
        assert!((east.heading() - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn point_at_interpolates_linearly() {
        let segment = RoadSegment {
            start: Vec3::new(0.0, 0.0, -100.0),
            end: Vec3::new(0.0, 0.0, 100.0),
        };
        assert_eq!(segment.point_at(0.5), Vec3::ZERO);
        assert!(segment.point_at(0.7).distance(Vec3::new(0.0, 0.0, 40.0)) < 1e-4);
    }
}
