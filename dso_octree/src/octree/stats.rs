/// Structural statistics of a frozen octree.
///
/// Used by the builder to log a construction summary and to detect
/// degenerate trees, and by callers tuning `OctreeConfig`.

use super::node::OctreeNode;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OctreeStats {
    /// Total number of nodes, root included
    pub node_count: usize,
    /// Nodes without children
    pub leaf_count: usize,
    /// Depth of the deepest node (root = 0)
    pub max_depth: u32,
    /// Total number of objects
    pub object_count: usize,
    /// `objects_per_depth[d]` = objects stored at nodes of depth `d`
    pub objects_per_depth: Vec<usize>,
    /// Largest number of objects stored at a single node
    pub max_node_object_count: usize,
    /// Objects stored at the root itself
    pub root_object_count: usize,
}

impl OctreeStats {
    pub(crate) fn collect(root: &OctreeNode, object_count: usize) -> Self {
        let mut stats = Self {
            object_count,
            root_object_count: root.object_count(),
            ..Self::default()
        };
        stats.visit(root, 0);
        stats
    }

    fn visit(&mut self, node: &OctreeNode, depth: u32) {
        self.node_count += 1;
        self.max_depth = self.max_depth.max(depth);
        self.max_node_object_count = self.max_node_object_count.max(node.object_count());

        let level = depth as usize;
        if self.objects_per_depth.len() <= level {
            self.objects_per_depth.resize(level + 1, 0);
        }
        self.objects_per_depth[level] += node.object_count();

        match node.children() {
            Some(children) => {
                for child in children {
                    self.visit(child, depth + 1);
                }
            }
            None => self.leaf_count += 1,
        }
    }

    /// Average number of objects per leaf.
    pub fn objects_per_leaf(&self) -> f64 {
        if self.leaf_count == 0 {
            0.0
        } else {
            self.object_count as f64 / self.leaf_count as f64
        }
    }

    /// True if the root stores every object and never split although the
    /// catalog is larger than `split_threshold`. Queries stay correct on
    /// such a tree but degrade to a linear scan.
    pub fn is_degenerate(&self, split_threshold: usize) -> bool {
        self.node_count == 1
            && self.root_object_count == self.object_count
            && self.object_count > split_threshold
    }
}
