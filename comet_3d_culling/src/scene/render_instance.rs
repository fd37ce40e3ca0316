/// Render instance types for the scene system.
///
/// A RenderInstance is the culling core's view of a renderable
/// object: a world transform plus a local-space bounding box. The
/// GPU-side objects (buffers, pipelines) belong to the render layer
/// and are not represented here.

use glam::Mat4;
use bitflags::bitflags;
use bytemuck::{Pod, Zeroable};
use slotmap::new_key_type;
use super::bounds::Aabb;

// ===== SLOT MAP KEY =====

new_key_type! {
    /// Stable key for a RenderInstance within a Scene.
    ///
    /// Keys remain valid even after other instances are removed.
    /// A key becomes invalid only when its own instance is removed.
    pub struct RenderInstanceKey;
}

// ===== FLAGS =====

bitflags! {
    /// Render instance flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct InstanceFlags: u64 {
        /// Instance participates in rendering and culling
        const VISIBLE = 1 << 0;
        /// Instance casts shadows
        const CAST_SHADOW = 1 << 1;
        /// Instance receives shadows
        const RECEIVE_SHADOW = 1 << 2;
        // Bits 3-63 reserved for future extensions
    }
}

// ===== TRANSFORM DATA =====

/// Per-object transform constants, laid out for direct GPU upload.
///
/// World matrix first, combined view-projection second — the layout
/// of the render layer's transform constant buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct TransformData {
    pub world: [[f32; 4]; 4],
    pub view_projection: [[f32; 4]; 4],
}

// ===== RENDER INSTANCE =====

/// A culling-level renderable object.
///
/// The world matrix is pre-computed by the game layer; the bounding
/// box stays in local space and is transformed at culling time.
#[derive(Debug, Clone)]
pub struct RenderInstance {
    /// World transform matrix (pre-computed by the game layer)
    world_matrix: Mat4,
    /// Axis-Aligned Bounding Box in local space
    bounding_box: Aabb,
    /// Bit flags (visibility, shadow casting, etc.)
    flags: InstanceFlags,
}

impl RenderInstance {
    /// Create an instance with the VISIBLE flag set.
    pub fn new(world_matrix: Mat4, bounding_box: Aabb) -> Self {
        Self {
            world_matrix,
            bounding_box,
            flags: InstanceFlags::VISIBLE,
        }
    }

    // ===== ACCESSORS =====

    /// Get the world transform matrix
    pub fn world_matrix(&self) -> &Mat4 {
        &self.world_matrix
    }

    /// Set the world transform matrix
    pub fn set_world_matrix(&mut self, matrix: Mat4) {
        self.world_matrix = matrix;
    }

    /// Get the bounding box (local space)
    pub fn bounding_box(&self) -> &Aabb {
        &self.bounding_box
    }

    /// Set the bounding box (local space)
    pub fn set_bounding_box(&mut self, bounding_box: Aabb) {
        self.bounding_box = bounding_box;
    }

    /// Local bounding box carried into world space by the world matrix.
    pub fn world_bounds(&self) -> Aabb {
        self.bounding_box.transformed(&self.world_matrix)
    }

    /// Get the flags
    pub fn flags(&self) -> InstanceFlags {
        self.flags
    }

    /// Set the flags
    pub fn set_flags(&mut self, flags: InstanceFlags) {
        self.flags = flags;
    }

    /// Set visibility flag
    pub fn set_visible(&mut self, visible: bool) {
        self.flags.set(InstanceFlags::VISIBLE, visible);
    }

    /// Check if visible
    pub fn is_visible(&self) -> bool {
        self.flags.contains(InstanceFlags::VISIBLE)
    }

    /// Transform constants for this instance under the given
    /// view-projection matrix, ready for GPU upload.
    pub fn transform_data(&self, view_projection: &Mat4) -> TransformData {
        TransformData {
            world: self.world_matrix.to_cols_array_2d(),
            view_projection: view_projection.to_cols_array_2d(),
        }
    }
}

#[cfg(test)]
#[path = "render_instance_tests.rs"]
mod tests;
