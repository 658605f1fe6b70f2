use glam::{DMat4, DVec3, DVec4};
use super::*;

// ============================================================================
// HELPERS
// ============================================================================

/// Inverse projection of a map camera hovering `height` units above the
/// z = 0 plane and looking straight down, y axis pointing south.
fn map_camera_inverse(height: f64) -> DMat4 {
    let projection = DMat4::perspective_rh_gl(
        std::f64::consts::FRAC_PI_2, // 90° FOV
        1.0,                         // aspect ratio
        1.0,                         // near
        100.0,                       // far
    );
    let view = DMat4::look_at_rh(
        DVec3::new(0.0, 0.0, height), // eye
        DVec3::ZERO,                  // target
        DVec3::Y,                     // up
    );
    let flip_y = DMat4::from_scale(DVec3::new(1.0, -1.0, 1.0));
    (projection * view * flip_y).inverse()
}

fn assert_vec4_near(actual: DVec4, expected: DVec4) {
    assert!(
        actual.abs_diff_eq(expected, 1e-9),
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

// ============================================================================
// Frustum::from_inverse_projection
// ============================================================================

#[test]
fn test_frustum_from_identity_is_clip_cube() {
    let frustum = Frustum::from_inverse_projection_unscaled(&DMat4::IDENTITY);

    assert_eq!(frustum.points[0], DVec3::new(-1.0, 1.0, -1.0));
    assert_eq!(frustum.points[5], DVec3::new(1.0, 1.0, 1.0));
    assert_eq!(frustum.points[7], DVec3::new(-1.0, -1.0, 1.0));

    assert_vec4_near(frustum.planes[PLANE_NEAR], DVec4::new(0.0, 0.0, 1.0, 1.0));
    assert_vec4_near(frustum.planes[PLANE_FAR], DVec4::new(0.0, 0.0, -1.0, 1.0));
    assert_vec4_near(frustum.planes[PLANE_LEFT], DVec4::new(1.0, 0.0, 0.0, 1.0));
    assert_vec4_near(frustum.planes[PLANE_RIGHT], DVec4::new(-1.0, 0.0, 0.0, 1.0));
    assert_vec4_near(frustum.planes[PLANE_BOTTOM], DVec4::new(0.0, 1.0, 0.0, 1.0));
    assert_vec4_near(frustum.planes[PLANE_TOP], DVec4::new(0.0, -1.0, 0.0, 1.0));
}

#[test]
fn test_frustum_planes_are_normalized() {
    let frustum = Frustum::from_inverse_projection_unscaled(&map_camera_inverse(10.0));

    for plane in &frustum.planes {
        let normal_len = plane.truncate().length();
        assert!((normal_len - 1.0).abs() < 1e-9, "plane normal should be unit length");
    }
}

#[test]
fn test_frustum_scaling_leaves_z_unscaled() {
    // 2^1 / 512 = 1 / 256 on X and Y, Z only divided by w (= 1 here)
    let frustum = Frustum::from_inverse_projection(&DMat4::IDENTITY, 512.0, 1.0);

    assert_eq!(frustum.points[1], DVec3::new(1.0 / 256.0, 1.0 / 256.0, -1.0));
    assert_eq!(frustum.points[7], DVec3::new(-1.0 / 256.0, -1.0 / 256.0, 1.0));
}

#[test]
fn test_frustum_zoom_doubles_xy_extent() {
    let inv = map_camera_inverse(10.0);
    let z0 = Frustum::from_inverse_projection(&inv, 512.0, 0.0);
    let z1 = Frustum::from_inverse_projection(&inv, 512.0, 1.0);

    for (a, b) in z0.points.iter().zip(z1.points.iter()) {
        assert!((a.x * 2.0 - b.x).abs() < 1e-9);
        assert!((a.y * 2.0 - b.y).abs() < 1e-9);
        assert!((a.z - b.z).abs() < 1e-9);
    }
}

#[test]
fn test_frustum_singular_matrix_propagates_nan() {
    let frustum = Frustum::from_inverse_projection_unscaled(&DMat4::ZERO);

    assert!(frustum.points.iter().all(|p| p.is_nan()));
    assert!(frustum.planes.iter().all(|p| p.is_nan()));
}

// ============================================================================
// Plane orientation
// ============================================================================

#[test]
fn test_point_below_camera_is_inside() {
    let frustum = Frustum::from_inverse_projection_unscaled(&map_camera_inverse(10.0));

    // Camera at z = 10, 90° FOV: the ground footprint is [-10, 10]²
    assert!(frustum.contains_point(DVec3::ZERO));
    assert!(frustum.contains_point(DVec3::new(5.0, -5.0, 0.0)));
    assert!(frustum.contains_point(DVec3::new(0.0, 0.0, 8.0)));
}

#[test]
fn test_points_outside_camera_volume() {
    let frustum = Frustum::from_inverse_projection_unscaled(&map_camera_inverse(10.0));

    // Off to the side
    assert!(!frustum.contains_point(DVec3::new(15.0, 0.0, 0.0)));
    assert!(!frustum.contains_point(DVec3::new(0.0, -15.0, 0.0)));
    // Behind the camera and closer than the near plane
    assert!(!frustum.contains_point(DVec3::new(0.0, 0.0, 20.0)));
    assert!(!frustum.contains_point(DVec3::new(0.0, 0.0, 9.5)));
    // Beyond the far plane
    assert!(!frustum.contains_point(DVec3::new(0.0, 0.0, -95.0)));
}

#[test]
fn test_every_plane_faces_the_interior() {
    let frustum = Frustum::from_inverse_projection_unscaled(&map_camera_inverse(10.0));
    let inside = DVec3::new(1.0, 2.0, -3.0).extend(1.0);

    for (i, plane) in frustum.planes.iter().enumerate() {
        assert!(plane.dot(inside) > 0.0, "plane {} points away from the interior", i);
    }
}

#[test]
fn test_frustum_is_deterministic() {
    let inv = map_camera_inverse(42.0);
    let a = Frustum::from_inverse_projection(&inv, 512.0, 3.0);
    let b = Frustum::from_inverse_projection(&inv, 512.0, 3.0);

    assert_eq!(a, b);
}

// ============================================================================
// Plane constants
// ============================================================================

#[test]
fn test_plane_constants() {
    assert_eq!(PLANE_NEAR, 0);
    assert_eq!(PLANE_FAR, 1);
    assert_eq!(PLANE_LEFT, 2);
    assert_eq!(PLANE_RIGHT, 3);
    assert_eq!(PLANE_BOTTOM, 4);
    assert_eq!(PLANE_TOP, 5);
}
