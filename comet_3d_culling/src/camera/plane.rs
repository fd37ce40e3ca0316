/// Signed plane — unit normal plus distance from the origin.
///
/// A plane is the set of points `p` with `dot(p, normal) == distance`.
/// Points with `dot(p, normal) > distance` lie on the outside
/// (positive) side. Frustum planes face outward, so "outside the
/// plane" means "outside the viewing volume".

use glam::Vec3;
use crate::error::{Error, Result};

/// Cross products with squared length below this are treated as degenerate.
const MIN_NORMAL_LENGTH_SQUARED: f32 = 1e-12;

/// A signed plane partitioning space into inside/outside half-spaces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit-length plane normal
    pub normal: Vec3,
    /// Signed distance from the origin along the normal
    pub distance: f32,
}

impl Plane {
    /// Build a plane from a point on it and its normal.
    ///
    /// `normal` must already be unit length; it is stored as-is.
    /// An un-normalized input corrupts every later distance
    /// comparison, so callers normalize first.
    pub fn from_point_and_normal(point: Vec3, normal: Vec3) -> Self {
        Self {
            normal,
            distance: point.dot(normal),
        }
    }

    /// Build a plane from three non-collinear points.
    ///
    /// The normal is `normalize(cross(p2 - p1, p3 - p1))`: the winding
    /// `p1 -> p2 -> p3` picks the facing direction (right-hand rule).
    /// Collinear or coincident points produce a zero-length cross
    /// product and fail with `DegenerateGeometry` instead of
    /// normalizing into NaN.
    pub fn from_points(p1: Vec3, p2: Vec3, p3: Vec3) -> Result<Self> {
        let cross = (p2 - p1).cross(p3 - p1);
        if cross.length_squared() < MIN_NORMAL_LENGTH_SQUARED {
            return Err(Error::DegenerateGeometry(format!(
                "cannot build a plane from collinear points {:?}, {:?}, {:?}",
                p1, p2, p3
            )));
        }
        let normal = cross.normalize();

        Ok(Self {
            normal,
            distance: normal.dot(p1),
        })
    }

    /// Signed distance from `point` to the plane (positive = outside).
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) - self.distance
    }

    /// True if `point` lies strictly on the outside (positive) side.
    pub fn is_outside(&self, point: Vec3) -> bool {
        self.normal.dot(point) > self.distance
    }
}

#[cfg(test)]
#[path = "plane_tests.rs"]
mod tests;
