/// ViewProvider — capability interface for camera models.
///
/// Consumers (culler, render layer, shadow system) depend on this
/// trait, not on a concrete camera. One implementation exists today
/// (SphericalCamera); orbit or free-look models can slot in later
/// without touching any consumer.

use glam::{Mat4, Vec3};
use crate::error::{Error, Result};
use super::frustum::Frustum;

/// Viewport size in pixels, supplied by the windowing collaborator.
///
/// Opaque to the camera apart from its aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent2D {
    pub width: u32,
    pub height: u32,
}

impl Extent2D {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width/height ratio. Zero-sized viewports are rejected rather
    /// than producing an infinite or NaN projection.
    pub fn aspect_ratio(&self) -> Result<f32> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidParameter(format!(
                "viewport extent must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(self.width as f32 / self.height as f32)
    }
}

/// One near/far depth sub-range of the camera's view range, used for
/// multi-resolution shadow rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowCascade {
    pub near_plane: f32,
    pub far_plane: f32,
}

/// Ordered shadow cascade ranges, nearest first.
///
/// The render layer builds one culling frustum per cascade via
/// `ViewProvider::frustum_with_range()`.
#[derive(Debug, Clone, Default)]
pub struct CameraShadowInfo {
    pub cascades: Vec<ShadowCascade>,
}

/// Capability interface for camera models.
///
/// Matrix conventions: left-handed view/projection, column vectors —
/// the combined transform is `projection * view` (view applied
/// first).
pub trait ViewProvider: Send + Sync {
    /// Camera position in world space.
    fn position(&self) -> Vec3;

    /// Unit view direction in world space.
    fn view_direction(&self) -> Vec3;

    /// View matrix (inverse of the camera's world transform).
    fn view_matrix(&self) -> Mat4;

    /// Perspective projection matrix for the given viewport.
    fn projection_matrix(&self, viewport: Extent2D) -> Result<Mat4>;

    /// Combined view-projection matrix (projection * view).
    fn view_projection_matrix(&self, viewport: Extent2D) -> Result<Mat4> {
        Ok(self.projection_matrix(viewport)? * self.view_matrix())
    }

    /// Culling frustum over the camera's own near/far range.
    fn frustum(&self, viewport: Extent2D) -> Result<Frustum>;

    /// Culling frustum with a substituted depth range.
    ///
    /// Used for shadow-cascade splits: each cascade is an independent
    /// near/far pair over the same camera orientation.
    fn frustum_with_range(
        &self,
        viewport: Extent2D,
        near_plane: f32,
        far_plane: f32,
    ) -> Result<Frustum>;

    /// Shadow cascade ranges for this camera.
    fn shadow_info(&self) -> &CameraShadowInfo;
}

#[cfg(test)]
#[path = "view_provider_tests.rs"]
mod tests;
