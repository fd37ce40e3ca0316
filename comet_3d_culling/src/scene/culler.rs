/// Camera culling strategies.
///
/// A CameraCuller determines which RenderInstances are visible
/// from a given camera. Implementations range from brute-force
/// (return all) to per-instance frustum testing.

use crate::camera::{Extent2D, RenderView, ViewProvider};
use crate::error::Result;
use crate::engine_trace;
use super::scene::Scene;
use super::render_instance::RenderInstanceKey;

/// Strategy for determining visible instances from a camera.
///
/// Called once per frame before drawing. The returned RenderView
/// is ephemeral and consumed by the render layer.
///
/// `&mut self` allows stateful implementations (e.g. caching)
/// to maintain state across frames.
pub trait CameraCuller: Send + Sync {
    /// Cull the scene against the camera and return visible instances.
    ///
    /// Fails if the camera configuration cannot produce a valid
    /// projection or frustum.
    fn cull(
        &mut self,
        scene: &Scene,
        camera: &dyn ViewProvider,
        viewport: Extent2D,
    ) -> Result<RenderView>;
}

/// Brute-force culler — returns ALL visible-flagged instances
/// (no frustum test).
///
/// Suitable for small scenes or as a baseline for comparison.
pub struct BruteForceCuller;

impl BruteForceCuller {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BruteForceCuller {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraCuller for BruteForceCuller {
    fn cull(
        &mut self,
        scene: &Scene,
        camera: &dyn ViewProvider,
        viewport: Extent2D,
    ) -> Result<RenderView> {
        let visible: Vec<RenderInstanceKey> = scene
            .render_instances()
            .filter_map(|(key, instance)| instance.is_visible().then_some(key))
            .collect();

        Ok(RenderView::new(
            camera.view_projection_matrix(viewport)?,
            visible,
        ))
    }
}

/// Frustum culler — tests instance world-space AABBs against the
/// camera frustum.
///
/// Each instance's local bounding box is carried into world space by
/// its world matrix, then tested against the six frustum planes.
pub struct FrustumCuller;

impl FrustumCuller {
    pub fn new() -> Self {
        Self
    }

    /// Cull the scene once per shadow cascade.
    ///
    /// Builds one frustum per cascade range over the same camera
    /// orientation and returns the per-cascade RenderViews in
    /// cascade order (nearest first).
    pub fn cull_cascades(
        &mut self,
        scene: &Scene,
        camera: &dyn ViewProvider,
        viewport: Extent2D,
    ) -> Result<Vec<RenderView>> {
        let cascades = camera.shadow_info().cascades.clone();
        let view_projection = camera.view_projection_matrix(viewport)?;

        let mut views = Vec::with_capacity(cascades.len());
        for cascade in &cascades {
            let frustum =
                camera.frustum_with_range(viewport, cascade.near_plane, cascade.far_plane)?;

            let visible: Vec<RenderInstanceKey> = scene
                .render_instances()
                .filter_map(|(key, instance)| {
                    if !instance.is_visible() {
                        return None;
                    }
                    frustum
                        .intersects_aabb(&instance.world_bounds())
                        .then_some(key)
                })
                .collect();

            views.push(RenderView::new(view_projection, visible));
        }

        Ok(views)
    }
}

impl Default for FrustumCuller {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraCuller for FrustumCuller {
    fn cull(
        &mut self,
        scene: &Scene,
        camera: &dyn ViewProvider,
        viewport: Extent2D,
    ) -> Result<RenderView> {
        let frustum = camera.frustum(viewport)?;

        let visible: Vec<RenderInstanceKey> = scene
            .render_instances()
            .filter_map(|(key, instance)| {
                if !instance.is_visible() {
                    return None;
                }
                let world_bounds = instance
                    .bounding_box()
                    .transformed(instance.world_matrix());
                frustum.intersects_aabb(&world_bounds).then_some(key)
            })
            .collect();

        engine_trace!(
            "comet3d::FrustumCuller",
            "{} of {} instances visible",
            visible.len(),
            scene.render_instance_count()
        );

        Ok(RenderView::new(
            camera.view_projection_matrix(viewport)?,
            visible,
        ))
    }
}

#[cfg(test)]
#[path = "culler_tests.rs"]
mod tests;
