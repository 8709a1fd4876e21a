/// OctreeBuilder: builds a `StaticOctree` from a flat catalog.
///
/// Construction runs in two phases:
///
/// 1. **Insertion** into a dynamic tree. Objects are inserted brightest
///    first. An object stays at the first node where it is bright enough
///    for that level (absolute magnitude <= the node's placement threshold)
///    or where its bounding sphere straddles one of the node's split planes.
///    Otherwise it descends to the child octant containing its position.
///    A leaf holding `split_threshold` objects splits on the next descent.
///    The placement threshold grows by `magnitude_decay` per level, so
///    bright objects gather near the root and faint ones sink.
///
/// 2. **Freezing**. A pre-order walk moves every object into one flat
///    array and records each node's `(first_object, object_count)` run.
///    Exclusion factors are computed from the leaves up.

use glam::DVec3;
use rdst::RadixSort;
use crate::error::{Error, Result};
use crate::{dso_debug, dso_error, dso_info, dso_trace, dso_warn};
use super::node::{child_center, point_octant, OctreeNode, CHILD_COUNT};
use super::object::OctreeObject;
use super::static_octree::StaticOctree;

const LOG_SOURCE: &str = "dso_octree::builder";

/// Relative padding added around a fitted catalog.
const FIT_MARGIN: f64 = 1.0e-3;

/// Smallest root half-width produced by `OctreeConfig::fitted()`.
const MIN_FIT_SCALE: f64 = 1.0;

/// Largest accepted `OctreeConfig::max_depth`. Insertion and traversal
/// recurse once per level, and 64 halvings of any f64 root scale already
/// reach the limit of its precision.
pub const MAX_TREE_DEPTH: u32 = 64;

/// Octree construction parameters.
///
/// Defaults describe a deep-sky catalog in light years: a root cube wide
/// enough for the observable universe, centered near the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct OctreeConfig {
    /// Center of the root cube
    pub root_center: DVec3,
    /// Half-width of the root cube
    pub root_scale: f64,
    /// Placement threshold at the root: objects at least this bright stay there
    pub root_magnitude: f32,
    /// Added to the placement threshold at each level below the root
    pub magnitude_decay: f32,
    /// Number of objects a leaf holds before it splits
    pub split_threshold: usize,
    /// Nodes at this depth never split (root = depth 0). At most
    /// `MAX_TREE_DEPTH`.
    pub max_depth: u32,
    /// Insert objects brightest first (radix sort on absolute magnitude)
    pub sort_by_brightness: bool,
}

impl Default for OctreeConfig {
    fn default() -> Self {
        Self {
            root_center: DVec3::splat(1000.0),
            root_scale: 1.0e10,
            root_magnitude: 8.0,
            magnitude_decay: 0.5,
            split_threshold: 10,
            max_depth: 32,
            sort_by_brightness: true,
        }
    }
}

impl OctreeConfig {
    /// Default config with a root cube fitted around the objects' positions.
    ///
    /// An empty catalog yields the default root cube.
    pub fn fitted<T: OctreeObject>(objects: &[T]) -> Self {
        let mut config = Self::default();

        let mut positions = objects.iter().map(|object| object.position());
        let Some(first) = positions.next() else {
            return config;
        };
        let (min, max) = positions.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));

        let half_extent = ((max - min) * 0.5).max_element();
        config.root_center = (min + max) * 0.5;
        config.root_scale = (half_extent * (1.0 + FIT_MARGIN)).max(MIN_FIT_SCALE);
        config
    }

    pub fn with_root(mut self, center: DVec3, scale: f64) -> Self {
        self.root_center = center;
        self.root_scale = scale;
        self
    }

    pub fn with_root_magnitude(mut self, root_magnitude: f32) -> Self {
        self.root_magnitude = root_magnitude;
        self
    }

    pub fn with_magnitude_decay(mut self, magnitude_decay: f32) -> Self {
        self.magnitude_decay = magnitude_decay;
        self
    }

    pub fn with_split_threshold(mut self, split_threshold: usize) -> Self {
        self.split_threshold = split_threshold;
        self
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_sort_by_brightness(mut self, sort_by_brightness: bool) -> Self {
        self.sort_by_brightness = sort_by_brightness;
        self
    }

    /// Check that the parameters describe a buildable tree.
    pub fn validate(&self) -> Result<()> {
        if !self.root_center.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "root center must be finite, got {}", self.root_center
            )));
        }
        if !(self.root_scale.is_finite() && self.root_scale > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "root scale must be finite and positive, got {}", self.root_scale
            )));
        }
        if !self.root_magnitude.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "root magnitude must be finite, got {}", self.root_magnitude
            )));
        }
        if !self.magnitude_decay.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "magnitude decay must be finite, got {}", self.magnitude_decay
            )));
        }
        if self.split_threshold == 0 {
            return Err(Error::InvalidConfig(
                "split threshold must be at least 1".to_string(),
            ));
        }
        if self.max_depth > MAX_TREE_DEPTH {
            return Err(Error::InvalidConfig(format!(
                "max depth must be at most {}, got {}", MAX_TREE_DEPTH, self.max_depth
            )));
        }
        Ok(())
    }
}

/// Builds static octrees with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct OctreeBuilder {
    config: OctreeConfig,
}

impl OctreeBuilder {
    pub fn new(config: OctreeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OctreeConfig {
        &self.config
    }

    /// Build a static octree owning `objects`.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidConfig` if the configuration fails `validate()`
    /// - `Error::InvalidObject` if an object has a non-finite position or
    ///   magnitude, or a negative or non-finite bounding radius
    /// - `Error::ObjectOutsideRoot` if an object's position lies outside the
    ///   root cube
    pub fn build<T: OctreeObject>(&self, objects: Vec<T>) -> Result<StaticOctree<T>> {
        if let Err(err) = self.config.validate() {
            dso_error!(LOG_SOURCE, "{}", err);
            return Err(err);
        }
        if let Err(err) = self.validate_objects(&objects) {
            dso_error!(LOG_SOURCE, "{}", err);
            return Err(err);
        }

        let order = if self.config.sort_by_brightness {
            brightness_order(&objects)
        } else {
            (0..objects.len()).collect()
        };

        let mut root = DynamicNode::new(
            self.config.root_center,
            self.config.root_scale,
            self.config.root_magnitude,
            0,
        );
        for &index in &order {
            root.insert(index, &objects, &self.config);
        }

        let mut layout = Vec::with_capacity(objects.len());
        let root = root.freeze(&objects, &mut layout);
        let objects = permute(objects, &layout);

        let tree = StaticOctree::from_parts(objects, root, self.config.clone());
        let stats = tree.stats();

        dso_info!(
            LOG_SOURCE,
            "Built octree: {} objects in {} nodes ({} leaves, max depth {})",
            stats.object_count, stats.node_count, stats.leaf_count, stats.max_depth
        );
        dso_debug!(
            LOG_SOURCE,
            "Objects per depth: {:?}, root holds {}, largest node holds {}",
            stats.objects_per_depth, stats.root_object_count, stats.max_node_object_count
        );
        if stats.is_degenerate(self.config.split_threshold) {
            dso_warn!(
                LOG_SOURCE,
                "Degenerate octree: all {} objects stored at the root, which never split (root magnitude {})",
                stats.object_count, self.config.root_magnitude
            );
        }

        Ok(tree)
    }

    fn validate_objects<T: OctreeObject>(&self, objects: &[T]) -> Result<()> {
        let center = self.config.root_center;
        let scale = self.config.root_scale;

        for (index, object) in objects.iter().enumerate() {
            let position = object.position();
            if !position.is_finite() {
                return Err(Error::InvalidObject {
                    index,
                    reason: format!("position {} is not finite", position),
                });
            }
            let magnitude = object.absolute_magnitude();
            if !magnitude.is_finite() {
                return Err(Error::InvalidObject {
                    index,
                    reason: format!("absolute magnitude {} is not finite", magnitude),
                });
            }
            let radius = object.bounding_radius();
            if !(radius.is_finite() && radius >= 0.0) {
                return Err(Error::InvalidObject {
                    index,
                    reason: format!("bounding radius {} is negative or not finite", radius),
                });
            }
            if (position - center).abs().max_element() > scale {
                return Err(Error::ObjectOutsideRoot { index });
            }
        }
        Ok(())
    }
}

/// Map an f32 to a u32 whose unsigned order matches the float's order.
#[inline]
fn ordered_bits(value: f32) -> u32 {
    let bits = value.to_bits();
    if bits & 0x8000_0000 != 0 {
        !bits
    } else {
        bits | 0x8000_0000
    }
}

/// Catalog indices sorted brightest first, ties in catalog order.
fn brightness_order<T: OctreeObject>(objects: &[T]) -> Vec<usize> {
    if objects.len() > u32::MAX as usize {
        let mut order: Vec<usize> = (0..objects.len()).collect();
        order.sort_by(|&a, &b| {
            objects[a].absolute_magnitude().total_cmp(&objects[b].absolute_magnitude())
        });
        return order;
    }

    // Magnitude in the high half, catalog index in the low half
    let mut keys: Vec<u64> = objects
        .iter()
        .enumerate()
        .map(|(index, object)| {
            ((ordered_bits(object.absolute_magnitude()) as u64) << 32) | index as u64
        })
        .collect();
    keys.radix_sort_unstable();

    keys.into_iter().map(|key| (key & 0xFFFF_FFFF) as usize).collect()
}

/// Reorder `objects` so that `objects[layout[i]]` ends up at position `i`.
fn permute<T>(objects: Vec<T>, layout: &[usize]) -> Vec<T> {
    debug_assert_eq!(objects.len(), layout.len());
    let mut slots: Vec<Option<T>> = objects.into_iter().map(Some).collect();
    layout.iter().filter_map(|&index| slots[index].take()).collect()
}

/// Node of the insertion-phase tree. Objects are catalog indices.
struct DynamicNode {
    center: DVec3,
    scale: f64,
    /// Objects at least this bright stay at this node
    threshold: f32,
    depth: u32,
    objects: Vec<usize>,
    children: Option<Box<[DynamicNode; CHILD_COUNT]>>,
}

impl DynamicNode {
    fn new(center: DVec3, scale: f64, threshold: f32, depth: u32) -> Self {
        Self {
            center,
            scale,
            threshold,
            depth,
            objects: Vec::new(),
            children: None,
        }
    }

    /// Whether `object` belongs at this node rather than in a child.
    fn keeps<T: OctreeObject>(&self, object: &T) -> bool {
        if object.absolute_magnitude() <= self.threshold {
            return true;
        }
        // Bounding sphere crosses one of the three split planes
        let offset = (object.position() - self.center).abs();
        offset.min_element() < object.bounding_radius()
    }

    fn insert<T: OctreeObject>(&mut self, index: usize, objects: &[T], config: &OctreeConfig) {
        let object = &objects[index];
        if self.keeps(object) {
            self.objects.push(index);
            return;
        }

        if self.children.is_none() {
            if self.objects.len() < config.split_threshold || self.depth >= config.max_depth {
                self.objects.push(index);
                return;
            }
            self.split(objects, config);
        }

        let octant = point_octant(self.center, object.position());
        match self.children.as_mut() {
            Some(children) => children[octant].insert(index, objects, config),
            None => self.objects.push(index),
        }
    }

    /// Create the eight children and move every object that no longer
    /// belongs here down into them.
    fn split<T: OctreeObject>(&mut self, objects: &[T], config: &OctreeConfig) {
        let child_scale = self.scale * 0.5;
        let child_threshold = self.threshold + config.magnitude_decay;
        let child_depth = self.depth + 1;

        let mut children: Box<[DynamicNode; CHILD_COUNT]> = Box::new(std::array::from_fn(|octant| {
            DynamicNode::new(
                child_center(self.center, child_scale, octant),
                child_scale,
                child_threshold,
                child_depth,
            )
        }));

        dso_trace!(
            LOG_SOURCE,
            "Splitting node at depth {} ({} objects)",
            self.depth, self.objects.len()
        );

        let existing = std::mem::take(&mut self.objects);
        for index in existing {
            let object = &objects[index];
            if self.keeps(object) {
                self.objects.push(index);
            } else {
                let octant = point_octant(self.center, object.position());
                children[octant].insert(index, objects, config);
            }
        }

        self.children = Some(children);
    }

    /// Freeze this subtree: append objects to `layout` in pre-order and
    /// compute exclusion factors bottom-up.
    fn freeze<T: OctreeObject>(self, objects: &[T], layout: &mut Vec<usize>) -> OctreeNode {
        let first_object = layout.len();
        let object_count = self.objects.len();

        let mut exclusion_factor = f32::INFINITY;
        for &index in &self.objects {
            exclusion_factor = exclusion_factor.min(objects[index].absolute_magnitude());
        }
        layout.extend_from_slice(&self.objects);

        let children = match self.children {
            Some(children) => {
                let frozen: [OctreeNode; CHILD_COUNT] =
                    (*children).map(|child| child.freeze(objects, layout));
                for child in &frozen {
                    exclusion_factor = exclusion_factor.min(child.exclusion_factor());
                }
                Some(Box::new(frozen))
            }
            None => None,
        };

        OctreeNode::new(self.center, exclusion_factor, first_object, object_count, children)
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
