/// Axis-Aligned Bounding Box
///
/// Used for frustum culling. Stored in local space on render
/// instances and transformed by the world matrix at culling time.

use glam::{Mat4, Vec3};

/// Axis-aligned bounding box with componentwise `min <= max` when
/// non-degenerate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
}

impl Aabb {
    /// Empty box: `+inf` min, `-inf` max.
    ///
    /// Folding any point into it makes that point both corners. The
    /// infinite sentinels rely on IEEE-754 comparisons (`inf > finite`
    /// is well-defined); a large finite sentinel would silently clip
    /// geometry beyond it.
    pub const EMPTY: Aabb = Aabb {
        min: Vec3::INFINITY,
        max: Vec3::NEG_INFINITY,
    };

    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Smallest box enclosing all points of the iterator.
    ///
    /// An empty iterator yields `Aabb::EMPTY`.
    pub fn from_points<I: IntoIterator<Item = Vec3>>(points: I) -> Self {
        let mut aabb = Aabb::EMPTY;
        for point in points {
            aabb.fold_point(point);
        }
        aabb
    }

    /// Grow the box to enclose `point`.
    pub fn fold_point(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// True if no point has been folded in (`min > max` on any axis).
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Box center.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// The 8 corners, all combinations of min/max per axis.
    pub fn corners(&self) -> [Vec3; 8] {
        [
            Vec3::new(self.min.x, self.min.y, self.min.z),
            Vec3::new(self.min.x, self.min.y, self.max.z),
            Vec3::new(self.min.x, self.max.y, self.min.z),
            Vec3::new(self.min.x, self.max.y, self.max.z),
            Vec3::new(self.max.x, self.min.y, self.min.z),
            Vec3::new(self.max.x, self.min.y, self.max.z),
            Vec3::new(self.max.x, self.max.y, self.min.z),
            Vec3::new(self.max.x, self.max.y, self.max.z),
        ]
    }

    /// Transform this AABB by a matrix, returning the enclosing AABB.
    ///
    /// Transforms all 8 corners as homogeneous points (`w = 1`) and
    /// folds them into a fresh box seeded with the infinite
    /// sentinels. This is a conservative (loose) re-bounding, not a
    /// tight oriented-box transform: a rotated box gets a larger
    /// enclosing AABB than its true extent, while a pure
    /// scale+translate stays exact.
    pub fn transformed(&self, matrix: &Mat4) -> Aabb {
        let mut out = Aabb::EMPTY;
        for corner in self.corners() {
            let transformed = (*matrix * corner.extend(1.0)).truncate();
            out.fold_point(transformed);
        }
        out
    }
}

#[cfg(test)]
#[path = "bounds_tests.rs"]
mod tests;
