use std::f32::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, PI};
use glam::{Mat4, Vec3};
use crate::camera::ShadowCascade;
use crate::error::Error;
use crate::scene::Aabb;
use super::*;

const EPSILON: f32 = 1e-5;

fn square_viewport() -> Extent2D {
    Extent2D::new(800, 800)
}

fn assert_vec3_eq(a: Vec3, b: Vec3) {
    assert!((a - b).length() < EPSILON, "{:?} != {:?}", a, b);
}

// ============================================================================
// Defaults / construction
// ============================================================================

#[test]
fn test_default_camera() {
    let camera = SphericalCamera::default();

    assert_eq!(camera.position, Vec3::ZERO);
    assert_eq!(camera.yaw, 0.0);
    assert!((camera.pitch - FRAC_PI_2).abs() < EPSILON);
    assert_eq!(camera.near_plane, 1.0);
    assert_eq!(camera.far_plane, 500.0);
    assert!((camera.field_of_view - PI / 3.0).abs() < EPSILON);
    assert!(camera.shadow_info.cascades.is_empty());
}

#[test]
fn test_default_camera_looks_along_positive_x() {
    let camera = SphericalCamera::default();
    assert_vec3_eq(camera.forward(), Vec3::X);
}

// ============================================================================
// forward
// ============================================================================

#[test]
fn test_forward_spherical_formula() {
    let mut camera = SphericalCamera::default();

    // yaw pi/2, pitch pi/2 -> +Z
    camera.yaw = FRAC_PI_2;
    camera.pitch = FRAC_PI_2;
    assert_vec3_eq(camera.forward(), Vec3::Z);

    // pitch near 0 -> +Y pole
    camera.yaw = 0.0;
    camera.pitch = 1e-4;
    assert!((camera.forward() - Vec3::Y).length() < 1e-3);

    // yaw pi/4, pitch pi/2 -> diagonal in XZ
    camera.yaw = FRAC_PI_4;
    camera.pitch = FRAC_PI_2;
    let expected = Vec3::new(FRAC_PI_4.cos(), 0.0, FRAC_PI_4.sin());
    assert_vec3_eq(camera.forward(), expected);
}

#[test]
fn test_forward_is_unit_length() {
    let mut camera = SphericalCamera::default();
    for (yaw, pitch) in [(0.3, 1.2), (-2.0, 0.4), (5.0, 2.8)] {
        camera.yaw = yaw;
        camera.pitch = pitch;
        assert!((camera.forward().length() - 1.0).abs() < EPSILON);
    }
}

// ============================================================================
// look_at
// ============================================================================

#[test]
fn test_look_at_forward_round_trip() {
    let mut camera = SphericalCamera::default();
    camera.position = Vec3::new(20.0, 20.0, 20.0);

    let targets = [
        Vec3::ZERO,
        Vec3::new(100.0, 5.0, -3.0),
        Vec3::new(20.0, 10.0, 50.0),
        Vec3::new(-7.0, 22.0, 20.0),
    ];

    for target in targets {
        camera.look_at(target);
        let expected = (target - camera.position).normalize();
        assert!(
            (camera.forward() - expected).length() < EPSILON,
            "round-trip failed for target {:?}",
            target
        );
    }
}

#[test]
fn test_look_at_keeps_pitch_in_open_interval() {
    let mut camera = SphericalCamera::default();
    camera.position = Vec3::ZERO;
    camera.look_at(Vec3::new(3.0, 1.0, -2.0));

    assert!(camera.pitch > 0.0 && camera.pitch < PI);
}

#[test]
fn test_look_at_target_at_position_is_a_noop() {
    let mut camera = SphericalCamera::default();
    camera.position = Vec3::new(1.0, 2.0, 3.0);
    camera.yaw = 0.7;
    camera.pitch = 1.1;

    camera.look_at(camera.position);

    assert_eq!(camera.yaw, 0.7);
    assert_eq!(camera.pitch, 1.1);
}

// ============================================================================
// view / projection matrices
// ============================================================================

#[test]
fn test_view_matrix_matches_look_at() {
    let mut camera = SphericalCamera::default();
    camera.position = Vec3::new(2.0, 3.0, 4.0);
    camera.yaw = 0.5;
    camera.pitch = 1.3;

    let expected = Mat4::look_at_lh(
        camera.position,
        camera.position + camera.forward(),
        Vec3::Y,
    );
    assert_eq!(camera.view_matrix(), expected);
}

#[test]
fn test_view_matrix_maps_position_to_origin() {
    let mut camera = SphericalCamera::default();
    camera.position = Vec3::new(10.0, -4.0, 7.0);

    let eye = camera.view_matrix() * camera.position.extend(1.0);
    assert!(eye.truncate().length() < EPSILON);
}

#[test]
fn test_projection_matrix() {
    let camera = SphericalCamera::default();
    let viewport = Extent2D::new(800, 600);

    let expected = Mat4::perspective_lh(FRAC_PI_3, 800.0 / 600.0, 1.0, 500.0);
    assert_eq!(camera.projection_matrix(viewport).unwrap(), expected);
}

#[test]
fn test_view_projection_matrix_is_projection_times_view() {
    let mut camera = SphericalCamera::default();
    camera.position = Vec3::new(1.0, 2.0, 3.0);
    let viewport = square_viewport();

    let expected = camera.projection_matrix(viewport).unwrap() * camera.view_matrix();
    assert_eq!(camera.view_projection_matrix(viewport).unwrap(), expected);
}

#[test]
fn test_projection_rejects_zero_viewport() {
    let camera = SphericalCamera::default();

    for viewport in [Extent2D::new(0, 600), Extent2D::new(800, 0)] {
        let result = camera.projection_matrix(viewport);
        assert!(matches!(result, Err(Error::InvalidParameter(_))));
    }
}

#[test]
fn test_projection_rejects_swapped_depth_range() {
    let mut camera = SphericalCamera::default();
    camera.near_plane = 100.0;
    camera.far_plane = 1.0;

    let result = camera.projection_matrix(square_viewport());
    assert!(matches!(result, Err(Error::InvalidParameter(_))));
}

#[test]
fn test_projection_rejects_invalid_fov() {
    let mut camera = SphericalCamera::default();
    camera.field_of_view = PI;

    let result = camera.projection_matrix(square_viewport());
    assert!(matches!(result, Err(Error::InvalidParameter(_))));
}

// ============================================================================
// frustum / frustum_with_range
// ============================================================================

#[test]
fn test_frustum_far_plane_straddle() {
    // Camera at origin, yaw 0, pitch pi/2 (looking +X), fov pi/3,
    // near 1, far 100, aspect 1
    let mut camera = SphericalCamera::default();
    camera.far_plane = 100.0;

    let frustum = camera.frustum(square_viewport()).unwrap();

    // Straddles the far plane: overlaps the frustum
    let straddling = Aabb::new(Vec3::new(99.0, -1.0, -1.0), Vec3::new(101.0, 1.0, 1.0));
    assert!(!frustum.is_outside(&straddling));

    // Fully beyond the far plane: culled
    let beyond = Aabb::new(Vec3::new(200.0, -1.0, -1.0), Vec3::new(202.0, 1.0, 1.0));
    assert!(frustum.is_outside(&beyond));
}

#[test]
fn test_frustum_rejects_swapped_depth_range() {
    let mut camera = SphericalCamera::default();
    camera.near_plane = 100.0;
    camera.far_plane = 1.0;

    let result = camera.frustum(square_viewport());
    assert!(matches!(result, Err(Error::InvalidParameter(_))));
}

#[test]
fn test_frustum_with_range_overrides_depth() {
    let camera = SphericalCamera::default(); // far = 500

    let full = camera.frustum(square_viewport()).unwrap();
    let split = camera
        .frustum_with_range(square_viewport(), 1.0, 100.0)
        .unwrap();

    // A box at depth 300 is inside the full range but past the split
    let aabb = Aabb::new(Vec3::new(299.0, -1.0, -1.0), Vec3::new(301.0, 1.0, 1.0));
    assert!(!full.is_outside(&aabb));
    assert!(split.is_outside(&aabb));
}

#[test]
fn test_frustum_with_range_rejects_invalid_override() {
    let camera = SphericalCamera::default();

    let result = camera.frustum_with_range(square_viewport(), 50.0, 10.0);
    assert!(matches!(result, Err(Error::InvalidParameter(_))));
}

#[test]
fn test_frustum_at_pitch_pole_is_degenerate() {
    // pitch 0 points at the +Y pole, parallel to world up
    let mut camera = SphericalCamera::default();
    camera.pitch = 0.0;

    let result = camera.frustum(square_viewport());
    assert!(matches!(result, Err(Error::DegenerateGeometry(_))));
}

// ============================================================================
// ViewProvider surface
// ============================================================================

#[test]
fn test_view_provider_accessors() {
    let mut camera = SphericalCamera::default();
    camera.position = Vec3::new(4.0, 5.0, 6.0);

    let provider: &dyn ViewProvider = &camera;
    assert_eq!(provider.position(), Vec3::new(4.0, 5.0, 6.0));
    assert_vec3_eq(provider.view_direction(), camera.forward());
}

#[test]
fn test_shadow_info_cascades() {
    let mut camera = SphericalCamera::default();
    camera.shadow_info.cascades = vec![
        ShadowCascade { near_plane: 1.0, far_plane: 50.0 },
        ShadowCascade { near_plane: 50.0, far_plane: 200.0 },
    ];

    let info = camera.shadow_info();
    assert_eq!(info.cascades.len(), 2);
    assert_eq!(info.cascades[0].far_plane, 50.0);

    // Each cascade builds a valid frustum over its own range
    for cascade in &info.cascades {
        let frustum = camera.frustum_with_range(
            square_viewport(),
            cascade.near_plane,
            cascade.far_plane,
        );
        assert!(frustum.is_ok());
    }
}
