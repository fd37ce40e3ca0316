/// RenderView — result of frustum culling.
///
/// Created by a CameraCuller. Contains a snapshot of the combined
/// view-projection matrix at culling time and the list of visible
/// instance keys.
///
/// Ephemeral: lives for one frame. No Arc, no Mutex.
/// Shareable: the caller can pass the same RenderView to multiple passes.

use glam::Mat4;
use crate::scene::RenderInstanceKey;

/// Result of frustum culling. Ephemeral — lives for one frame.
///
/// Created exclusively by CameraCuller implementations.
#[derive(Debug, Clone)]
pub struct RenderView {
    view_projection: Mat4,
    visible_instances: Vec<RenderInstanceKey>,
}

impl RenderView {
    /// Create a new RenderView (crate-internal: only cullers create these).
    pub(crate) fn new(view_projection: Mat4, visible_instances: Vec<RenderInstanceKey>) -> Self {
        Self {
            view_projection,
            visible_instances,
        }
    }

    /// View-projection matrix snapshot at the time of culling.
    pub fn view_projection_matrix(&self) -> &Mat4 {
        &self.view_projection
    }

    /// Keys of visible RenderInstances in the Scene.
    pub fn visible_instances(&self) -> &[RenderInstanceKey] {
        &self.visible_instances
    }

    /// Number of visible instances.
    pub fn visible_count(&self) -> usize {
        self.visible_instances.len()
    }
}

#[cfg(test)]
#[path = "render_view_tests.rs"]
mod tests;
