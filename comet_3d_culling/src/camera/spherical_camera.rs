/// SphericalCamera — orientation stored as yaw/pitch angles.
///
/// The forward direction is always recomputed from (yaw, pitch) via
/// the fixed spherical-to-Cartesian formula with Y up; no basis or
/// quaternion is cached. All fields are public: an external
/// controller mutates position/yaw/pitch once per frame, then the
/// rendering/culling path queries the camera read-only.
///
/// `pitch` is conventionally kept in (0, pi) to stay off the
/// up-vector singularity at the poles. The camera does not clamp on
/// its own; frustum queries at the exact pole fail with
/// `DegenerateGeometry` rather than producing NaN planes.

use std::f32::consts::{FRAC_PI_2, PI};
use glam::{Mat4, Vec3};
use crate::error::{Error, Result};
use crate::engine_warn;
use super::frustum::Frustum;
use super::view_provider::{CameraShadowInfo, Extent2D, ViewProvider};

const DEFAULT_NEAR_PLANE: f32 = 1.0;
const DEFAULT_FAR_PLANE: f32 = 500.0;
const DEFAULT_FIELD_OF_VIEW: f32 = PI / 3.0;

/// Camera with spherical-coordinate orientation.
#[derive(Debug, Clone)]
pub struct SphericalCamera {
    /// World-space position
    pub position: Vec3,
    /// Angle in the XZ plane, radians
    pub yaw: f32,
    /// Angle from the +Y pole, radians, conventionally in (0, pi)
    pub pitch: f32,
    /// Near clip distance (> 0)
    pub near_plane: f32,
    /// Far clip distance (> near_plane)
    pub far_plane: f32,
    /// Vertical field of view, radians, in (0, pi)
    pub field_of_view: f32,
    /// Shadow cascade depth ranges
    pub shadow_info: CameraShadowInfo,
}

impl SphericalCamera {
    /// Create a camera with explicit parameters.
    ///
    /// Values are stored unvalidated; queries that derive a
    /// projection or frustum reject invalid configurations.
    pub fn new(
        position: Vec3,
        yaw: f32,
        pitch: f32,
        near_plane: f32,
        far_plane: f32,
        field_of_view: f32,
    ) -> Self {
        Self {
            position,
            yaw,
            pitch,
            near_plane,
            far_plane,
            field_of_view,
            shadow_info: CameraShadowInfo::default(),
        }
    }

    /// Unit forward vector derived from (yaw, pitch).
    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.cos() * self.pitch.sin(),
            self.pitch.cos(),
            self.yaw.sin() * self.pitch.sin(),
        )
    }

    /// Point the camera at a world-space target.
    ///
    /// Recomputes yaw/pitch from the normalized direction to
    /// `target`; the inverse of `forward()`. A target at the camera
    /// position has no defined direction — the orientation is left
    /// unchanged and a warning is logged.
    pub fn look_at(&mut self, target: Vec3) {
        let Some(direction) = (target - self.position).try_normalize() else {
            engine_warn!(
                "comet3d::SphericalCamera",
                "look_at target coincides with the camera position; orientation unchanged"
            );
            return;
        };

        self.yaw = direction.z.atan2(direction.x);
        self.pitch = direction.y.clamp(-1.0, 1.0).acos();
    }

    fn validate_projection(&self) -> Result<()> {
        if !(self.field_of_view > 0.0 && self.field_of_view < PI) {
            return Err(Error::InvalidParameter(format!(
                "field of view must lie in (0, pi), got {}",
                self.field_of_view
            )));
        }
        if self.near_plane <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "near plane must be positive, got {}",
                self.near_plane
            )));
        }
        if self.near_plane >= self.far_plane {
            return Err(Error::InvalidParameter(format!(
                "near plane {} must be closer than far plane {}",
                self.near_plane, self.far_plane
            )));
        }
        Ok(())
    }
}

impl Default for SphericalCamera {
    /// Camera at the origin looking along +X (yaw 0, pitch pi/2).
    fn default() -> Self {
        Self::new(
            Vec3::ZERO,
            0.0,
            FRAC_PI_2,
            DEFAULT_NEAR_PLANE,
            DEFAULT_FAR_PLANE,
            DEFAULT_FIELD_OF_VIEW,
        )
    }
}

impl ViewProvider for SphericalCamera {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn view_direction(&self) -> Vec3 {
        self.forward()
    }

    fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_lh(self.position, self.position + self.forward(), Vec3::Y)
    }

    fn projection_matrix(&self, viewport: Extent2D) -> Result<Mat4> {
        let aspect_ratio = viewport.aspect_ratio()?;
        self.validate_projection()?;

        Ok(Mat4::perspective_lh(
            self.field_of_view,
            aspect_ratio,
            self.near_plane,
            self.far_plane,
        ))
    }

    fn frustum(&self, viewport: Extent2D) -> Result<Frustum> {
        self.frustum_with_range(viewport, self.near_plane, self.far_plane)
    }

    fn frustum_with_range(
        &self,
        viewport: Extent2D,
        near_plane: f32,
        far_plane: f32,
    ) -> Result<Frustum> {
        let aspect_ratio = viewport.aspect_ratio()?;
        let target = self.position + self.forward();

        Frustum::from_view(
            self.position,
            target,
            Vec3::Y,
            self.field_of_view,
            aspect_ratio,
            near_plane,
            far_plane,
        )
    }

    fn shadow_info(&self) -> &CameraShadowInfo {
        &self.shadow_info
    }
}

#[cfg(test)]
#[path = "spherical_camera_tests.rs"]
mod tests;
