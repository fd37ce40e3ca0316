//! Camera module — planes, frustums, and camera models.
//!
//! The engine does NOT store or manage cameras. A camera is an
//! externally-owned state struct: a controller mutates it once per
//! frame, the rendering/culling path queries it read-only for the
//! rest of the frame.

mod plane;
mod frustum;
mod view_provider;
mod spherical_camera;
mod render_view;

pub use plane::Plane;
pub use frustum::{Frustum, FrustumPlane};
pub use view_provider::{ViewProvider, Extent2D, ShadowCascade, CameraShadowInfo};
pub use spherical_camera::SphericalCamera;
pub use render_view::RenderView;
