/// Scene — a collection of RenderInstances for culling.
///
/// Uses a SlotMap for O(1) insert/remove with stable keys.
/// Instances are stored contiguously for cache-friendly iteration.

use rustc_hash::FxHashSet;
use slotmap::SlotMap;
use glam::Mat4;
use crate::engine_debug;
use super::bounds::Aabb;
use super::render_instance::{RenderInstance, RenderInstanceKey};

/// A scene containing RenderInstances.
///
/// Instances are managed via stable keys (RenderInstanceKey).
/// Keys remain valid even after other instances are removed.
#[derive(Debug, Default)]
pub struct Scene {
    /// Render instances stored in a slot map for O(1) insert/remove
    render_instances: SlotMap<RenderInstanceKey, RenderInstance>,
    /// Instances whose world matrix changed since last take_dirty_transforms()
    dirty_transforms: FxHashSet<RenderInstanceKey>,
}

impl Scene {
    /// Create a new empty scene
    pub fn new() -> Self {
        Self {
            render_instances: SlotMap::with_key(),
            dirty_transforms: FxHashSet::default(),
        }
    }

    /// Add a RenderInstance to the scene
    ///
    /// Returns a stable key that remains valid until the instance is
    /// removed.
    ///
    /// # Arguments
    ///
    /// * `world_matrix` - World transform matrix
    /// * `bounding_box` - AABB in local space
    pub fn create_render_instance(
        &mut self,
        world_matrix: Mat4,
        bounding_box: Aabb,
    ) -> RenderInstanceKey {
        self.render_instances
            .insert(RenderInstance::new(world_matrix, bounding_box))
    }

    /// Remove a RenderInstance. Returns false if the key is invalid.
    pub fn remove_render_instance(&mut self, key: RenderInstanceKey) -> bool {
        self.dirty_transforms.remove(&key);
        self.render_instances.remove(key).is_some()
    }

    /// Get a RenderInstance by key
    pub fn render_instance(&self, key: RenderInstanceKey) -> Option<&RenderInstance> {
        self.render_instances.get(key)
    }

    /// Get a mutable RenderInstance by key
    pub fn render_instance_mut(
        &mut self,
        key: RenderInstanceKey,
    ) -> Option<&mut RenderInstance> {
        self.render_instances.get_mut(key)
    }

    /// Set the world matrix of a render instance. Returns false if key is invalid.
    pub fn set_world_matrix(&mut self, key: RenderInstanceKey, matrix: Mat4) -> bool {
        if let Some(instance) = self.render_instances.get_mut(key) {
            instance.set_world_matrix(matrix);
            self.dirty_transforms.insert(key);
            true
        } else {
            false
        }
    }

    /// Get the set of instances with pending transform changes.
    pub fn dirty_transforms(&self) -> &FxHashSet<RenderInstanceKey> {
        &self.dirty_transforms
    }

    /// Take and clear the dirty transform set.
    pub fn take_dirty_transforms(&mut self) -> FxHashSet<RenderInstanceKey> {
        std::mem::take(&mut self.dirty_transforms)
    }

    /// Iterate over all render instance keys.
    pub fn render_instance_keys(&self) -> impl Iterator<Item = RenderInstanceKey> + '_ {
        self.render_instances.keys()
    }

    /// Iterate over all render instances (key, instance)
    pub fn render_instances(
        &self,
    ) -> impl Iterator<Item = (RenderInstanceKey, &RenderInstance)> {
        self.render_instances.iter()
    }

    /// Get the number of render instances
    pub fn render_instance_count(&self) -> usize {
        self.render_instances.len()
    }

    /// Remove all render instances
    pub fn clear(&mut self) {
        let removed = self.render_instances.len();
        self.render_instances.clear();
        self.dirty_transforms.clear();
        engine_debug!("comet3d::Scene", "scene cleared, {} instances removed", removed);
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
