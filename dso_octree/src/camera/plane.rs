/// Plane: oriented half-space boundary used for frustum culling.
///
/// A plane is stored as a normal `n` and an offset `d`; the signed distance
/// of a point `p` is `n·p + d`. Points with a non-negative signed distance
/// are on the "inside" (the side the normal points toward).

use glam::DVec3;

/// Oriented plane in double precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Normal vector (unit length for metric signed distances)
    pub normal: DVec3,
    /// Signed offset: `signed_distance(p) = normal·p + offset`
    pub offset: f64,
}

impl Plane {
    /// Create a plane from a normal and an offset.
    pub fn new(normal: DVec3, offset: f64) -> Self {
        Self { normal, offset }
    }

    /// Create the plane through `point` with the given normal.
    pub fn from_point_normal(point: DVec3, normal: DVec3) -> Self {
        Self {
            normal,
            offset: -normal.dot(point),
        }
    }

    /// Signed distance from `point` to the plane (positive on the normal side).
    #[inline]
    pub fn signed_distance(&self, point: DVec3) -> f64 {
        self.normal.dot(point) + self.offset
    }

    /// Rescale so the normal has unit length. Degenerate planes are returned as-is.
    pub fn normalized(&self) -> Self {
        let len = self.normal.length();
        if len > 0.0 {
            Self {
                normal: self.normal / len,
                offset: self.offset / len,
            }
        } else {
            *self
        }
    }
}
