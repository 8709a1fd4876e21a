/// OctreeNode: one cube of the frozen octree.
///
/// A node does not own objects. It references a contiguous run
/// (`first_object..first_object + object_count`) of the tree's flat object
/// array, laid out in pre-order so a node's own objects come before those
/// of its descendants.
///
/// The cube's half-width (`scale`) is not stored: the traversal starts from
/// the tree's root scale and halves it at each level.
///
/// Octant bit layout for children: bit0 = X, bit1 = Y, bit2 = Z
/// (0 = low side, 1 = high side of the node center).

use std::ops::Range;
use glam::DVec3;

/// Number of children of an inner node.
pub const CHILD_COUNT: usize = 8;

/// A single node in the frozen octree.
#[derive(Debug)]
pub struct OctreeNode {
    /// Cube center in world space
    center: DVec3,
    /// Brightest absolute magnitude in this subtree (INFINITY if empty)
    exclusion_factor: f32,
    /// Index of the node's first object in the flat object array
    first_object: usize,
    /// Number of objects stored directly at this node
    object_count: usize,
    /// Eight children, or None for a leaf
    children: Option<Box<[OctreeNode; CHILD_COUNT]>>,
}

impl OctreeNode {
    pub(crate) fn new(
        center: DVec3,
        exclusion_factor: f32,
        first_object: usize,
        object_count: usize,
        children: Option<Box<[OctreeNode; CHILD_COUNT]>>,
    ) -> Self {
        Self {
            center,
            exclusion_factor,
            first_object,
            object_count,
            children,
        }
    }

    #[inline]
    pub fn center(&self) -> DVec3 {
        self.center
    }

    /// Brightest absolute magnitude of every object in this subtree,
    /// the node's own objects included.
    #[inline]
    pub fn exclusion_factor(&self) -> f32 {
        self.exclusion_factor
    }

    #[inline]
    pub fn first_object(&self) -> usize {
        self.first_object
    }

    #[inline]
    pub fn object_count(&self) -> usize {
        self.object_count
    }

    /// Range of this node's own objects in the flat object array.
    #[inline]
    pub fn object_range(&self) -> Range<usize> {
        self.first_object..self.first_object + self.object_count
    }

    #[inline]
    pub fn children(&self) -> Option<&[OctreeNode; CHILD_COUNT]> {
        self.children.as_deref()
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Test whether a point lies in the node's closed cube.
    pub fn contains_point(&self, point: DVec3, scale: f64) -> bool {
        let offset = (point - self.center).abs();
        offset.max_element() <= scale
    }
}

/// Determine which octant a point falls into relative to a center.
///
/// Bit layout: bit0 = X, bit1 = Y, bit2 = Z (0 = low, 1 = high).
/// Points on a split plane go to the high side.
#[inline]
pub fn point_octant(center: DVec3, point: DVec3) -> usize {
    ((point.x >= center.x) as usize)
        | (((point.y >= center.y) as usize) << 1)
        | (((point.z >= center.z) as usize) << 2)
}

/// Center of child `octant` of a cube centered at `center`.
///
/// `child_scale` is the child's half-width (half the parent's).
#[inline]
pub fn child_center(center: DVec3, child_scale: f64, octant: usize) -> DVec3 {
    DVec3::new(
        if octant & 1 == 0 { center.x - child_scale } else { center.x + child_scale },
        if octant & 2 == 0 { center.y - child_scale } else { center.y + child_scale },
        if octant & 4 == 0 { center.z - child_scale } else { center.z + child_scale },
    )
}
