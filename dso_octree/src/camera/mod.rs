//! Camera module: planes and the infinite view frustum.
//!
//! Provides passive data containers for the traversal processors.
//! The octree does NOT store or manage cameras. Frustums are built by the
//! caller once per frame and handed to the visibility traversal.

mod plane;
mod frustum;

pub use plane::Plane;
pub use frustum::{
    ViewFrustum,
    PLANE_BOTTOM, PLANE_TOP, PLANE_LEFT, PLANE_RIGHT, PLANE_NEAR, PLANE_COUNT,
};
