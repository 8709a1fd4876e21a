/// Traversal processors: visibility and proximity queries.
///
/// Both are synchronous recursive descents starting at a node whose cube
/// half-width is `scale`; children are visited with half the scale. Each
/// node's own objects are processed before its children, and children in
/// octant order 0..8, so the handler call order is deterministic for a
/// given tree and query.
///
/// Pruning relies on one bound: no point of a node's cube is closer to the
/// observer than `|observer - center| - scale * sqrt(3)` (the radius of the
/// cube's circumscribed sphere).

use glam::DVec3;
use crate::astro::{abs_to_app_mag, app_to_abs_mag, NEAR_FIELD_DISTANCE};
use crate::camera::Plane;
use super::handler::ObjectHandler;
use super::node::OctreeNode;
use super::object::OctreeObject;

/// Circumscribed-sphere radius of a unit half-width cube.
const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Absolute-magnitude cutoff used when the observer may be inside a node.
const PERMISSIVE_MAGNITUDE: f64 = 1000.0;

impl OctreeNode {
    /// Visibility traversal.
    ///
    /// Invokes `handler` for every object of this subtree whose node survives
    /// frustum culling and whose apparent magnitude, seen from `observer`, is
    /// strictly brighter than `limiting_magnitude`.
    ///
    /// Per node:
    /// 1. Reject the subtree if the cube lies entirely behind any of the five
    ///    planes.
    /// 2. Pre-filter node objects against the dimmest absolute magnitude that
    ///    could still be visible at the node's minimum distance.
    /// 3. Test survivors against their true distance. Within
    ///    `NEAR_FIELD_DISTANCE` the absolute magnitude is used as-is.
    /// 4. Recurse only if the subtree's brightest object could be visible
    ///    from the node's minimum distance.
    ///
    /// # Arguments
    ///
    /// * `objects` - The tree's flat object array
    /// * `handler` - Receives `(object, distance, absolute magnitude)`
    /// * `observer` - Eye position in world space
    /// * `frustum_planes` - Five inward-facing planes (see `ViewFrustum`)
    /// * `limiting_magnitude` - Faintest apparent magnitude to report (exclusive)
    /// * `scale` - Half-width of this node's cube
    pub fn process_visible_objects<'a, T, H>(
        &self,
        objects: &'a [T],
        handler: &mut H,
        observer: DVec3,
        frustum_planes: &[Plane; 5],
        limiting_magnitude: f32,
        scale: f64,
    ) where
        T: OctreeObject,
        H: ObjectHandler<'a, T> + ?Sized,
    {
        debug_assert!(scale > 0.0, "node scale must be positive");

        let center = self.center();

        for plane in frustum_planes {
            let r = scale * plane.normal.abs().element_sum();
            if plane.signed_distance(center) < -r {
                return;
            }
        }

        let limit = limiting_magnitude as f64;
        let min_distance = (observer - center).length() - scale * SQRT_3;

        let dimmest = if min_distance > 0.0 {
            app_to_abs_mag(limit, min_distance)
        } else {
            PERMISSIVE_MAGNITUDE
        };

        for object in &objects[self.object_range()] {
            let absolute_magnitude = object.absolute_magnitude();
            if absolute_magnitude as f64 >= dimmest {
                continue;
            }

            let distance = (observer - object.position()).length() - object.bounding_radius();
            let apparent_magnitude = if distance >= NEAR_FIELD_DISTANCE {
                abs_to_app_mag(absolute_magnitude as f64, distance)
            } else {
                absolute_magnitude as f64
            };

            // Compared in single precision, like the catalog magnitudes
            if (apparent_magnitude as f32) < limiting_magnitude {
                handler.process(object, distance, absolute_magnitude);
            }
        }

        let Some(children) = self.children() else {
            return;
        };

        if min_distance <= 0.0
            || abs_to_app_mag(self.exclusion_factor() as f64, min_distance) <= limit
        {
            let child_scale = scale * 0.5;
            for child in children {
                child.process_visible_objects(
                    objects,
                    handler,
                    observer,
                    frustum_planes,
                    limiting_magnitude,
                    child_scale,
                );
            }
        }
    }

    /// Proximity traversal.
    ///
    /// Invokes `handler` for every object of this subtree whose position lies
    /// within `radius` of `observer` (inclusive). The reported distance is the
    /// distance to the object's bounding sphere, which is negative when the
    /// observer is inside it.
    ///
    /// # Arguments
    ///
    /// * `objects` - The tree's flat object array
    /// * `handler` - Receives `(object, distance, absolute magnitude)`
    /// * `observer` - Search center in world space
    /// * `radius` - Search radius
    /// * `scale` - Half-width of this node's cube
    pub fn process_close_objects<'a, T, H>(
        &self,
        objects: &'a [T],
        handler: &mut H,
        observer: DVec3,
        radius: f64,
        scale: f64,
    ) where
        T: OctreeObject,
        H: ObjectHandler<'a, T> + ?Sized,
    {
        debug_assert!(scale > 0.0, "node scale must be positive");

        let node_distance = (observer - self.center()).length() - scale * SQRT_3;
        if node_distance > radius {
            return;
        }

        let radius_squared = radius * radius;
        for object in &objects[self.object_range()] {
            let offset = observer - object.position();
            let distance_squared = offset.length_squared();
            if distance_squared <= radius_squared {
                handler.process(
                    object,
                    distance_squared.sqrt() - object.bounding_radius(),
                    object.absolute_magnitude(),
                );
            }
        }

        if let Some(children) = self.children() {
            let child_scale = scale * 0.5;
            for child in children {
                child.process_close_objects(objects, handler, observer, radius, child_scale);
            }
        }
    }
}

#[cfg(test)]
#[path = "traversal_tests.rs"]
mod tests;
