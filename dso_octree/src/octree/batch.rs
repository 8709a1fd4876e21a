//! Batch queries: many independent traversals against one tree, in parallel.
//!
//! - Processes queries in parallel via rayon
//! - Each query runs the ordinary sequential traversal
//! - Results keep the order of the input queries
//!
//! Useful for several viewports per frame, or for sweeping probe points
//! through the catalog.

use glam::{DQuat, DVec3};
use rayon::prelude::*;
use crate::camera::{Plane, ViewFrustum};
use super::handler::ObjectHit;
use super::object::OctreeObject;
use super::static_octree::StaticOctree;

/// Parameters of one visibility query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityQuery {
    pub observer: DVec3,
    pub frustum_planes: [Plane; 5],
    pub limiting_magnitude: f32,
}

impl VisibilityQuery {
    pub fn new(observer: DVec3, frustum_planes: [Plane; 5], limiting_magnitude: f32) -> Self {
        Self {
            observer,
            frustum_planes,
            limiting_magnitude,
        }
    }

    /// Query for a perspective view (see `ViewFrustum::new()`).
    pub fn from_view(
        observer: DVec3,
        orientation: DQuat,
        fov_y: f64,
        aspect: f64,
        limiting_magnitude: f32,
    ) -> Self {
        let frustum = ViewFrustum::new(observer, orientation, fov_y, aspect);
        Self::new(observer, *frustum.planes(), limiting_magnitude)
    }
}

impl<T: OctreeObject + Sync> StaticOctree<T> {
    /// Run every visibility query in parallel.
    ///
    /// `result[i]` holds the hits of `queries[i]`, in the same order the
    /// sequential `collect_visible()` would produce.
    pub fn par_collect_visible(&self, queries: &[VisibilityQuery]) -> Vec<Vec<ObjectHit<'_, T>>> {
        if queries.is_empty() {
            return Vec::new();
        }

        queries
            .par_iter()
            .map(|query| {
                self.collect_visible(query.observer, &query.frustum_planes, query.limiting_magnitude)
            })
            .collect()
    }

    /// Run a proximity query around each observer in parallel.
    pub fn par_collect_close(&self, observers: &[DVec3], radius: f64) -> Vec<Vec<ObjectHit<'_, T>>> {
        if observers.is_empty() {
            return Vec::new();
        }

        observers
            .par_iter()
            .map(|&observer| self.collect_close(observer, radius))
            .collect()
    }
}
