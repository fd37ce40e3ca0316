/// Frustum — six outward-facing planes for visibility culling.
///
/// A point inside the viewing volume satisfies
/// `dot(p, normal) <= distance` for all six planes.
///
/// Built from camera intrinsics by `Frustum::from_view()`; the
/// spherical camera delegates here for both its main frustum and
/// per-shadow-cascade frustums.

use std::f32::consts::PI;
use glam::Vec3;
use crate::error::{Error, Result};
use crate::scene::Aabb;
use super::plane::Plane;

/// Named frustum plane slots.
///
/// The six planes are stored in this order; naming the slots avoids
/// silent reordering bugs from bare positional indexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrustumPlane {
    Near = 0,
    Far = 1,
    Top = 2,
    Bottom = 3,
    Left = 4,
    Right = 5,
}

impl FrustumPlane {
    /// All six planes in storage order.
    pub const ALL: [FrustumPlane; 6] = [
        FrustumPlane::Near,
        FrustumPlane::Far,
        FrustumPlane::Top,
        FrustumPlane::Bottom,
        FrustumPlane::Left,
        FrustumPlane::Right,
    ];
}

/// Six outward-facing frustum planes, ordered per `FrustumPlane`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    planes: [Plane; 6],
}

impl Frustum {
    /// Build a frustum from camera intrinsics.
    ///
    /// `up` is the world up vector; it only needs to be non-parallel
    /// to the view direction — it is re-orthogonalized against
    /// forward before use. `field_of_view` is the vertical FOV in
    /// radians.
    ///
    /// # Errors
    ///
    /// * `InvalidParameter` — `field_of_view` outside `(0, pi)`,
    ///   `aspect_ratio <= 0`, `near_plane <= 0`, or
    ///   `near_plane >= far_plane`
    /// * `DegenerateGeometry` — `target` coincides with `position`,
    ///   or `up` is parallel to the view direction (pitch pole)
    pub fn from_view(
        position: Vec3,
        target: Vec3,
        up: Vec3,
        field_of_view: f32,
        aspect_ratio: f32,
        near_plane: f32,
        far_plane: f32,
    ) -> Result<Self> {
        if !(field_of_view > 0.0 && field_of_view < PI) {
            return Err(Error::InvalidParameter(format!(
                "field of view must lie in (0, pi), got {}",
                field_of_view
            )));
        }
        if aspect_ratio <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "aspect ratio must be positive, got {}",
                aspect_ratio
            )));
        }
        if near_plane <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "near plane must be positive, got {}",
                near_plane
            )));
        }
        if near_plane >= far_plane {
            return Err(Error::InvalidParameter(format!(
                "near plane {} must be closer than far plane {}",
                near_plane, far_plane
            )));
        }

        let forward = (target - position).try_normalize().ok_or_else(|| {
            Error::DegenerateGeometry(
                "camera target coincides with camera position".to_string(),
            )
        })?;
        let left = up.cross(forward).try_normalize().ok_or_else(|| {
            Error::DegenerateGeometry(
                "up vector is parallel to the view direction".to_string(),
            )
        })?;
        // Re-orthogonalized up: the supplied up only has to be
        // non-parallel to forward.
        let up = forward.cross(left).normalize();

        let near_center = position + forward * near_plane;
        let far_center = position + forward * far_plane;

        let a = 2.0 * (field_of_view * 0.5).tan();
        let near_height = near_plane * a;
        let far_height = far_plane * a;
        let near_width = aspect_ratio * near_height;
        let far_width = aspect_ratio * far_height;

        let far_top_left = far_center + 0.5 * far_width * left + 0.5 * far_height * up;
        let far_bottom_left = far_top_left - far_height * up;
        let far_top_right = far_top_left - far_width * left;
        let far_bottom_right = far_top_right - far_height * up;

        let near_top_left = near_center + 0.5 * near_width * left + 0.5 * near_height * up;
        let near_bottom_left = near_top_left - near_height * up;
        let near_top_right = near_top_left - near_width * left;
        let near_bottom_right = near_top_right - near_height * up;

        // Side plane windings are chosen so every normal faces away
        // from the viewing volume.
        let planes = [
            // Near
            Plane::from_point_and_normal(near_center, -forward),
            // Far
            Plane::from_point_and_normal(far_center, forward),
            // Top
            Plane::from_points(far_top_left, near_top_left, far_top_right)?,
            // Bottom
            Plane::from_points(far_bottom_left, far_bottom_right, near_bottom_left)?,
            // Left
            Plane::from_points(far_bottom_left, near_bottom_left, far_top_left)?,
            // Right
            Plane::from_points(far_bottom_right, far_top_right, near_bottom_right)?,
        ];

        Ok(Self { planes })
    }

    /// Get one plane by name.
    pub fn plane(&self, which: FrustumPlane) -> &Plane {
        &self.planes[which as usize]
    }

    /// All six planes in `FrustumPlane` order.
    pub fn planes(&self) -> &[Plane; 6] {
        &self.planes
    }

    /// Test if an AABB lies entirely outside at least one plane.
    ///
    /// Counts the AABB corners strictly outside each plane; if any
    /// single plane has all 8 corners outside, the box cannot be
    /// visible and the test short-circuits. Conservative: a box
    /// straddling a frustum corner region can report "not outside"
    /// while being invisible, but a visible box is never culled.
    /// Fixed work: at most 6x8 point comparisons.
    pub fn is_outside(&self, aabb: &Aabb) -> bool {
        let corners = aabb.corners();

        for plane in &self.planes {
            if corners.iter().all(|&corner| plane.is_outside(corner)) {
                return true;
            }
        }

        false
    }

    /// Test if an AABB is (potentially) inside or intersecting.
    ///
    /// Negation of `is_outside()`; may return false positives
    /// (conservative), never false negatives.
    pub fn intersects_aabb(&self, aabb: &Aabb) -> bool {
        !self.is_outside(aabb)
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
