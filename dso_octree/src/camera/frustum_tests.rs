use glam::{DQuat, DVec3};
use std::f64::consts::{FRAC_PI_2, PI};
use super::*;

fn forward_frustum() -> ViewFrustum {
    // 90° vertical FOV, square viewport, eye at origin looking down -Z
    ViewFrustum::new(DVec3::ZERO, DQuat::IDENTITY, FRAC_PI_2, 1.0)
}

// ============================================================================
// ViewFrustum::new
// ============================================================================

#[test]
fn test_frustum_planes_are_normalized() {
    let frustum = ViewFrustum::new(
        DVec3::new(12.0, -3.0, 7.5),
        DQuat::from_rotation_x(0.3) * DQuat::from_rotation_y(1.1),
        0.8,
        16.0 / 9.0,
    );

    for plane in frustum.planes() {
        assert!((plane.normal.length() - 1.0).abs() < 1e-12, "plane normal should be unit length");
    }
}

#[test]
fn test_frustum_planes_pass_through_observer() {
    let observer = DVec3::new(1000.0, 2000.0, -500.0);
    let frustum = ViewFrustum::new(observer, DQuat::from_rotation_z(0.7), 1.0, 1.5);

    for plane in frustum.planes() {
        assert!(plane.signed_distance(observer).abs() < 1e-9);
    }
}

#[test]
fn test_frustum_contains_point_straight_ahead() {
    let frustum = forward_frustum();

    assert!(frustum.contains_point(DVec3::new(0.0, 0.0, -10.0)));
    assert!(frustum.contains_point(DVec3::new(5.0, 5.0, -10.0)));
    assert!(frustum.contains_point(DVec3::new(0.0, 0.0, -1.0e12)));
}

#[test]
fn test_frustum_rejects_point_behind_observer() {
    let frustum = forward_frustum();
    let behind = DVec3::new(0.0, 0.0, 10.0);

    assert!(!frustum.contains_point(behind));
    assert!(frustum.planes()[PLANE_NEAR].signed_distance(behind) < 0.0);
}

#[test]
fn test_frustum_side_planes() {
    let frustum = forward_frustum();
    let planes = frustum.planes();

    let below = DVec3::new(0.0, -15.0, -10.0);
    let above = DVec3::new(0.0, 15.0, -10.0);
    let left = DVec3::new(-15.0, 0.0, -10.0);
    let right = DVec3::new(15.0, 0.0, -10.0);

    assert!(planes[PLANE_BOTTOM].signed_distance(below) < 0.0);
    assert!(planes[PLANE_TOP].signed_distance(above) < 0.0);
    assert!(planes[PLANE_LEFT].signed_distance(left) < 0.0);
    assert!(planes[PLANE_RIGHT].signed_distance(right) < 0.0);

    for point in [below, above, left, right] {
        assert!(!frustum.contains_point(point));
    }
}

#[test]
fn test_frustum_aspect_widens_horizontally() {
    let square = forward_frustum();
    let wide = ViewFrustum::new(DVec3::ZERO, DQuat::IDENTITY, FRAC_PI_2, 2.0);
    let point = DVec3::new(15.0, 0.0, -10.0);

    assert!(!square.contains_point(point));
    assert!(wide.contains_point(point));
    // Vertical extent is unchanged
    assert!(!wide.contains_point(DVec3::new(0.0, 15.0, -10.0)));
}

#[test]
fn test_frustum_orientation_turns_view() {
    // Half turn about Y: camera now looks down +Z
    let frustum = ViewFrustum::new(DVec3::ZERO, DQuat::from_rotation_y(PI), FRAC_PI_2, 1.0);

    assert!(frustum.contains_point(DVec3::new(0.0, 0.0, 10.0)));
    assert!(!frustum.contains_point(DVec3::new(0.0, 0.0, -10.0)));
}

#[test]
fn test_frustum_observer_offset() {
    let observer = DVec3::new(1000.0, 1000.0, 1000.0);
    let frustum = ViewFrustum::new(observer, DQuat::IDENTITY, FRAC_PI_2, 1.0);

    assert!(frustum.contains_point(observer + DVec3::new(0.0, 0.0, -10.0)));
    assert!(!frustum.contains_point(observer + DVec3::new(0.0, 0.0, 10.0)));
    assert!(!frustum.contains_point(observer + DVec3::new(50.0, 0.0, -10.0)));
}

// ============================================================================
// ViewFrustum::everything / from_planes
// ============================================================================

#[test]
fn test_everything_frustum_accepts_all_points() {
    let frustum = ViewFrustum::everything();

    for point in [
        DVec3::ZERO,
        DVec3::new(1.0e10, -1.0e10, 1.0e10),
        DVec3::new(-3.0, 4.0, 1.0e15),
    ] {
        assert!(frustum.contains_point(point));
    }
    assert!(frustum.intersects_cube(DVec3::new(-1.0e9, 0.0, 0.0), 1.0));
}

#[test]
fn test_from_planes_keeps_order() {
    let planes = [
        Plane::new(DVec3::X, 0.0),
        Plane::new(DVec3::Y, 1.0),
        Plane::new(DVec3::Z, 2.0),
        Plane::new(DVec3::NEG_X, 3.0),
        Plane::new(DVec3::NEG_Y, 4.0),
    ];
    let frustum = ViewFrustum::from_planes(planes);

    assert_eq!(frustum.planes(), &planes);
}

// ============================================================================
// Sphere / cube tests
// ============================================================================

#[test]
fn test_intersects_sphere() {
    let frustum = forward_frustum();

    // Center behind the eye, radius reaching in front of it
    assert!(frustum.intersects_sphere(DVec3::new(0.0, 0.0, 5.0), 10.0));
    assert!(!frustum.intersects_sphere(DVec3::new(0.0, 0.0, 5.0), 1.0));
}

#[test]
fn test_intersects_cube() {
    let frustum = forward_frustum();

    assert!(frustum.intersects_cube(DVec3::new(0.0, 0.0, -20.0), 1.0));
    // Straddles the near plane
    assert!(frustum.intersects_cube(DVec3::new(0.0, 0.0, 0.5), 1.0));
    // Fully behind
    assert!(!frustum.intersects_cube(DVec3::new(0.0, 0.0, 20.0), 1.0));
    // Far off to the side
    assert!(!frustum.intersects_cube(DVec3::new(100.0, 0.0, -10.0), 5.0));
}

#[test]
fn test_intersects_cube_is_conservative() {
    let frustum = forward_frustum();

    // Any cube containing an inside point must be accepted
    let inside = DVec3::new(3.0, -2.0, -8.0);
    for half in [0.5, 2.0, 50.0] {
        let center = inside + DVec3::new(half * 0.9, -half * 0.9, half * 0.5);
        assert!(frustum.intersects_cube(center, half));
    }
}
