//! Scene management module
//!
//! Provides bounding volumes, render instance storage, and the
//! per-frame culling strategies that decide which instances reach
//! the render layer.

mod bounds;
mod render_instance;
mod scene;
mod culler;

pub use bounds::Aabb;
pub use render_instance::{
    RenderInstance, RenderInstanceKey, InstanceFlags, TransformData,
};
pub use scene::Scene;
pub use culler::{CameraCuller, BruteForceCuller, FrustumCuller};
