use bevy::prelude::*;

/// Axis-aligned bounding box in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Footprint box for a building standing on the ground plane:
    /// horizontal extents around `center`, vertical from 0 to `size.y`.
    pub fn footprint(center: Vec3, size: Vec3) -> Self {
        Self {
            min: Vec3::new(center.x - size.x * 0.5, 0.0, center.z - size.z * 0.5),
            max: Vec3::new(center.x + size.x * 0.5, size.y, center.z + size.z * 0.5),
        }
    }

    /// Enlarge by a clearance margin on the horizontal plane only.
    pub fn inflated(&self, margin: f32) -> Self {
        Self {
            min: Vec3::new(self.min.x - margin, self.min.y, self.min.z - margin),
            max: Vec3::new(self.max.x + margin, self.max.y, self.max.z + margin),
        }
    }

    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }
}

/// Collision set of placed-building volumes. Buildings are static once
/// placed, so there is no removal operation; queries are a linear scan
/// over a bounded set.
#[derive(Resource, Default)]
pub struct SpatialIndex {
    boxes: Vec<Aabb>,
}

impl SpatialIndex {
    pub fn register(&mut self, aabb: Aabb) {
        self.boxes.push(aabb);
    }

    pub fn intersects_any(&self, aabb: &Aabb) -> bool {
        self.boxes.iter().any(|b| b.intersects(aabb))
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn boxes(&self) -> &[Aabb] {
        &self.boxes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disjoint_boxes_do_not_intersect() {
        let a = Aabb::from_center_size(Vec3::ZERO, Vec3::splat(2.0));
        let b = Aabb::from_center_size(Vec3::new(10.0, 0.0, 0.0), Vec3::splat(2.0));
        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));
    }

    #[test]
    fn overlapping_boxes_intersect() {
        let a = Aabb::from_center_size(Vec3::ZERO, Vec3::splat(4.0));
        let b = Aabb::from_center_size(Vec3::new(1.0, 1.0, 1.0), Vec3::splat(4.0));
        assert!(a.intersects(&b));
    }

    #[test]
    fn touching_faces_count_as_intersecting() {
        let a = Aabb::new(Vec3::ZERO, Vec3::splat(1.0));
        let b = Aabb::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0));
        assert!(a.intersects(&b));
    }

    #[test]
    fn inflation_is_horizontal_only() {
        let a = Aabb::footprint(Vec3::ZERO, Vec3::new(10.0, 30.0, 10.0));
        let inflated = a.inflated(40.0);
        assert_eq!(inflated.min.x, -45.0);
        assert_eq!(inflated.max.z, 45.0);
        assert_eq!(inflated.min.y, 0.0);
        assert_eq!(inflated.max.y, 30.0);
    }

    #[test]
    fn index_reports_membership_against_registered_boxes() {
        let mut index = SpatialIndex::default();
        index.register(Aabb::from_center_size(Vec3::ZERO, Vec3::splat(10.0)));

        let probe = Aabb::from_center_size(Vec3::new(3.0, 0.0, 0.0), Vec3::splat(2.0));
        assert!(index.intersects_any(&probe));

        let clear = Aabb::from_center_size(Vec3::new(50.0, 0.0, 0.0), Vec3::splat(2.0));
        assert!(!index.intersects_any(&clear));
    }
}
