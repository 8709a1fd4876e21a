/// StaticOctree: immutable spatial index over a deep-sky catalog.
///
/// Owns the catalog in one flat array, laid out in pre-order so every node
/// references a contiguous run of it, plus the root node and the root cube's
/// half-width. The tree is built once by `OctreeBuilder` and never changes;
/// any number of threads may query it concurrently through `&StaticOctree`.

use glam::DVec3;
use crate::camera::Plane;
use super::builder::OctreeConfig;
use super::handler::{HitCollector, ObjectHandler, ObjectHit};
use super::node::OctreeNode;
use super::object::OctreeObject;
use super::stats::OctreeStats;

/// Frozen octree over objects of type `T`.
#[derive(Debug)]
pub struct StaticOctree<T> {
    /// All objects, in pre-order node layout
    objects: Vec<T>,
    root: OctreeNode,
    config: OctreeConfig,
}

impl<T> StaticOctree<T> {
    pub(crate) fn from_parts(objects: Vec<T>, root: OctreeNode, config: OctreeConfig) -> Self {
        Self { objects, root, config }
    }

    #[inline]
    pub fn root(&self) -> &OctreeNode {
        &self.root
    }

    /// Half-width of the root cube.
    #[inline]
    pub fn root_scale(&self) -> f64 {
        self.config.root_scale
    }

    /// Every object in the tree, in pre-order node layout.
    #[inline]
    pub fn objects(&self) -> &[T] {
        &self.objects
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Configuration the tree was built with.
    pub fn config(&self) -> &OctreeConfig {
        &self.config
    }

    /// Objects stored directly at `node` (not its descendants).
    ///
    /// `node` must belong to this tree.
    #[inline]
    pub fn node_objects(&self, node: &OctreeNode) -> &[T] {
        &self.objects[node.object_range()]
    }

    /// Compute structural statistics (walks the whole tree).
    pub fn stats(&self) -> OctreeStats {
        OctreeStats::collect(&self.root, self.objects.len())
    }
}

impl<T: OctreeObject> StaticOctree<T> {
    /// Visit every object that is in view and bright enough.
    ///
    /// Runs the visibility traversal from the root. See
    /// `OctreeNode::process_visible_objects()` for the pruning rules.
    pub fn process_visible_objects<'a, H>(
        &'a self,
        handler: &mut H,
        observer: DVec3,
        frustum_planes: &[Plane; 5],
        limiting_magnitude: f32,
    ) where
        H: ObjectHandler<'a, T> + ?Sized,
    {
        self.root.process_visible_objects(
            &self.objects,
            handler,
            observer,
            frustum_planes,
            limiting_magnitude,
            self.root_scale(),
        );
    }

    /// Visit every object within `radius` of `observer`.
    pub fn process_close_objects<'a, H>(&'a self, handler: &mut H, observer: DVec3, radius: f64)
    where
        H: ObjectHandler<'a, T> + ?Sized,
    {
        self.root
            .process_close_objects(&self.objects, handler, observer, radius, self.root_scale());
    }

    /// Collect the visibility traversal's hits in invocation order.
    pub fn collect_visible(
        &self,
        observer: DVec3,
        frustum_planes: &[Plane; 5],
        limiting_magnitude: f32,
    ) -> Vec<ObjectHit<'_, T>> {
        let mut collector = HitCollector::new();
        self.process_visible_objects(&mut collector, observer, frustum_planes, limiting_magnitude);
        collector.into_hits()
    }

    /// Collect the proximity traversal's hits in invocation order.
    pub fn collect_close(&self, observer: DVec3, radius: f64) -> Vec<ObjectHit<'_, T>> {
        let mut collector = HitCollector::new();
        self.process_close_objects(&mut collector, observer, radius);
        collector.into_hits()
    }
}

#[cfg(test)]
#[path = "static_octree_tests.rs"]
mod tests;
