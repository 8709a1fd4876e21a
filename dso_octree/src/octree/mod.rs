//! Octree module: static spatial index over deep-sky objects.
//!
//! - `OctreeBuilder` builds a `StaticOctree` once from a flat catalog
//! - `StaticOctree` answers visibility (frustum + magnitude) and proximity
//!   queries through caller-supplied `ObjectHandler`s
//! - Batch queries run independent traversals in parallel
//!
//! The tree is immutable after construction.

mod batch;
mod builder;
mod handler;
mod node;
mod object;
mod static_octree;
mod stats;
mod traversal;

pub use batch::VisibilityQuery;
pub use builder::{OctreeBuilder, OctreeConfig, MAX_TREE_DEPTH};
pub use handler::{CountingHandler, HitCollector, ObjectHandler, ObjectHit};
pub use node::{child_center, point_octant, OctreeNode, CHILD_COUNT};
pub use object::{CatalogObject, OctreeObject};
pub use static_octree::StaticOctree;
pub use stats::OctreeStats;
