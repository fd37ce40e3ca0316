/*!
# Comet3D Culling

Camera and visibility geometry core for the Comet3D renderer.

This crate owns the math that decides what gets drawn: signed planes,
axis-aligned bounding boxes, view frustums, and a spherical (yaw/pitch)
camera model that derives view/projection transforms and culling
frustums on demand. GPU resource management, shader compilation, and
windowing are external collaborators and live elsewhere.

## Architecture

- **Plane / Frustum**: six outward-facing planes built from camera
  intrinsics, tested against world-space AABBs
- **Aabb**: conservative 8-corner re-bounding through arbitrary 4x4
  transforms
- **ViewProvider**: capability trait for camera models, with
  `SphericalCamera` as the concrete implementation
- **Scene / CameraCuller**: per-frame visibility pass producing an
  ephemeral `RenderView` of visible instance keys
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod camera;
pub mod scene;

// Main comet3d namespace module
pub mod comet3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine singleton (logger access)
    pub use crate::engine::Engine;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        // Note: engine_* macros are NOT re-exported here - they are internal only
    }

    // Camera sub-module with all view/frustum types
    pub mod camera {
        pub use crate::camera::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }
}

// Re-export math library at crate root
pub use glam;
