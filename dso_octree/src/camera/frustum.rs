/// ViewFrustum: five clipping planes for visibility culling.
///
/// The frustum has no far plane: deep-sky objects are culled by brightness,
/// not by distance. Each plane's normal points inward, so a point is inside
/// the frustum if its signed distance to every plane is >= 0.
///
/// Camera convention: in camera space the observer looks down -Z with +Y up.
/// The orientation passed to `ViewFrustum::new()` rotates camera space into
/// world space.

use glam::{DQuat, DVec3};
use super::Plane;

/// Frustum plane indices
pub const PLANE_BOTTOM: usize = 0;
pub const PLANE_TOP: usize = 1;
pub const PLANE_LEFT: usize = 2;
pub const PLANE_RIGHT: usize = 3;
pub const PLANE_NEAR: usize = 4;

/// Number of planes in a view frustum
pub const PLANE_COUNT: usize = 5;

/// Infinite perspective frustum in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewFrustum {
    /// Frustum planes: bottom, top, left, right, near
    planes: [Plane; PLANE_COUNT],
}

impl ViewFrustum {
    /// Build the frustum of an observer.
    ///
    /// # Arguments
    ///
    /// * `observer` - Eye position in world space (light years)
    /// * `orientation` - Camera-to-world rotation
    /// * `fov_y` - Vertical field of view in radians, in (0, PI)
    /// * `aspect` - Viewport width / height
    ///
    /// The near plane passes through the observer, so everything in front of
    /// the eye and within the angular extent of the view is inside.
    pub fn new(observer: DVec3, orientation: DQuat, fov_y: f64, aspect: f64) -> Self {
        debug_assert!(fov_y > 0.0 && fov_y < std::f64::consts::PI, "fov_y out of range");
        debug_assert!(aspect > 0.0, "aspect must be positive");

        let h = (fov_y * 0.5).tan();
        let w = h * aspect;

        // Camera-space inward normals of the side planes, all through the eye
        let camera_normals = [
            DVec3::new(0.0, 1.0, -h),
            DVec3::new(0.0, -1.0, -h),
            DVec3::new(1.0, 0.0, -w),
            DVec3::new(-1.0, 0.0, -w),
            DVec3::new(0.0, 0.0, -1.0),
        ];

        let planes = camera_normals.map(|n| {
            let world_normal = orientation * n.normalize();
            Plane::from_point_normal(observer, world_normal)
        });

        Self { planes }
    }

    /// Frustum that accepts every point in space.
    ///
    /// Useful for diagnostics and for isolating magnitude culling in tests.
    pub fn everything() -> Self {
        let accept_all = Plane::new(DVec3::Z, f64::INFINITY);
        Self { planes: [accept_all; PLANE_COUNT] }
    }

    /// Create a frustum from explicit planes (normals pointing inward).
    pub fn from_planes(planes: [Plane; PLANE_COUNT]) -> Self {
        Self { planes }
    }

    /// The five planes, in the order bottom, top, left, right, near.
    #[inline]
    pub fn planes(&self) -> &[Plane; PLANE_COUNT] {
        &self.planes
    }

    /// Test whether a point is inside (or on the boundary of) the frustum.
    pub fn contains_point(&self, point: DVec3) -> bool {
        self.planes.iter().all(|plane| plane.signed_distance(point) >= 0.0)
    }

    /// Test whether a sphere touches the frustum.
    ///
    /// Conservative: may return true for spheres near a frustum edge that are
    /// actually outside, never false for a sphere that overlaps the volume.
    pub fn intersects_sphere(&self, center: DVec3, radius: f64) -> bool {
        self.planes.iter().all(|plane| plane.signed_distance(center) >= -radius)
    }

    /// Test whether an axis-aligned cube touches the frustum.
    ///
    /// `half_extent` is half the cube's edge length. For each plane the cube
    /// is projected onto the normal (`r = half_extent * sum(|n_i|)`); the cube
    /// is rejected if its center lies further than `r` behind any plane.
    pub fn intersects_cube(&self, center: DVec3, half_extent: f64) -> bool {
        self.planes.iter().all(|plane| {
            let r = half_extent * plane.normal.abs().element_sum();
            plane.signed_distance(center) >= -r
        })
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
