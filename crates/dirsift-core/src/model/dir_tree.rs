/// Arena-backed directory tree.
///
/// All nodes live in a single `Vec<TreeNode>`. Relationships between nodes
/// use `NodeIndex` (a thin `u32` wrapper) rather than heap pointers; each
/// child is owned by exactly one parent.
use super::tree_node::{NodeIndex, TreeNode};
use compact_str::CompactString;
use std::collections::HashMap;

/// A tree of named nodes with ordered children.
#[derive(Debug, Clone, Default)]
pub struct DirTree {
    /// Arena: every node in a flat vector.
    pub nodes: Vec<TreeNode>,

    /// Root node indices, in the order they were added.
    pub roots: Vec<NodeIndex>,
}

impl DirTree {
    /// Create an empty tree with pre-allocated capacity.
    pub fn with_capacity(estimated_nodes: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(estimated_nodes),
            roots: Vec::new(),
        }
    }

    /// Build a single-rooted tree from a flat list of `/`-separated paths.
    ///
    /// Paths that start with `root_name/` have that prefix removed first.
    /// Every segment but the last becomes a directory node, shared between
    /// paths that go through it; the last segment becomes a file node.
    /// Children keep the order in which they were first seen, so a sorted
    /// input yields sorted levels.
    pub fn from_paths<S: AsRef<str>>(root_name: &str, paths: &[S]) -> Self {
        let mut tree = Self::with_capacity(paths.len() + 1);
        let trimmed = root_name.trim_end_matches('/');
        let root = tree.add_root(if trimmed.is_empty() { root_name } else { trimmed });
        let prefix = format!("{trimmed}/");

        // Relative directory path -> node, scan-lifetime only.
        let mut dir_map: HashMap<String, NodeIndex> = HashMap::new();

        for path in paths {
            let path = path.as_ref();
            let relative = path.strip_prefix(prefix.as_str()).unwrap_or(path);
            let segments: Vec<&str> = relative.split('/').filter(|s| !s.is_empty()).collect();
            let Some((file_name, dirs)) = segments.split_last() else {
                continue;
            };

            let mut parent = root;
            let mut dir_path = String::new();
            for dir in dirs {
                if !dir_path.is_empty() {
                    dir_path.push('/');
                }
                dir_path.push_str(dir);
                parent = match dir_map.get(&dir_path) {
                    Some(&idx) => idx,
                    None => {
                        let idx = tree.add_node(TreeNode::new_dir(*dir));
                        tree.add_child(parent, idx);
                        dir_map.insert(dir_path.clone(), idx);
                        idx
                    }
                };
            }

            let leaf = tree.add_node(TreeNode::new_file(*file_name));
            tree.add_child(parent, leaf);
        }
        tree
    }

    /// Allocate a new node in the arena and return its index.
    pub fn add_node(&mut self, node: TreeNode) -> NodeIndex {
        let idx = NodeIndex::new(self.nodes.len());
        self.nodes.push(node);
        idx
    }

    /// Add a root directory to the tree.
    pub fn add_root(&mut self, name: impl Into<CompactString>) -> NodeIndex {
        let idx = self.add_node(TreeNode::new_dir(name));
        self.roots.push(idx);
        idx
    }

    /// Attach `child` as the last child of `parent`. O(1).
    pub fn add_child(&mut self, parent: NodeIndex, child: NodeIndex) {
        self.nodes[child.idx()].parent = Some(parent);
        self.nodes[child.idx()].next_sibling = None;
        match self.nodes[parent.idx()].last_child {
            Some(last) => self.nodes[last.idx()].next_sibling = Some(child),
            None => self.nodes[parent.idx()].first_child = Some(child),
        }
        self.nodes[parent.idx()].last_child = Some(child);
    }

    /// Direct children of a node, in insertion order.
    pub fn children(&self, parent: NodeIndex) -> Vec<NodeIndex> {
        let mut children = Vec::new();
        let mut child = self.nodes[parent.idx()].first_child;
        while let Some(idx) = child {
            children.push(idx);
            child = self.nodes[idx.idx()].next_sibling;
        }
        children
    }

    /// First direct child of `parent` called `name`.
    pub fn find_child(&self, parent: NodeIndex, name: &str) -> Option<NodeIndex> {
        self.children(parent)
            .into_iter()
            .find(|&idx| self.nodes[idx.idx()].name.as_str() == name)
    }

    /// Reconstruct the `/`-joined path of a node by walking up to its root.
    pub fn full_path(&self, index: NodeIndex) -> String {
        let mut segments = Vec::new();
        let mut current = Some(index);
        while let Some(idx) = current {
            segments.push(self.nodes[idx.idx()].name.as_str());
            current = self.nodes[idx.idx()].parent;
        }
        segments.reverse();
        segments.join("/")
    }

    #[inline]
    pub fn node(&self, index: NodeIndex) -> &TreeNode {
        &self.nodes[index.idx()]
    }

    /// Total number of nodes in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
