/// A single node in the arena-allocated directory tree.
///
/// Nodes are stored in a flat `Vec<TreeNode>` owned by `DirTree`.
/// Parent-child relationships use indices rather than pointers, so a node is
/// owned by exactly one tree and there is nothing to reference-count.
use compact_str::CompactString;

/// Lightweight index into the arena `Vec<TreeNode>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    /// Create a new `NodeIndex` from a `usize`.
    #[inline]
    pub fn new(index: usize) -> Self {
        debug_assert!(index <= u32::MAX as usize, "NodeIndex overflow");
        Self(index as u32)
    }

    /// Return the index as a `usize` for Vec indexing.
    #[inline]
    pub fn idx(self) -> usize {
        self.0 as usize
    }
}

/// A file or directory in the tree.
///
/// Children form a singly-linked list via `first_child` / `next_sibling`,
/// kept in insertion order with the help of `last_child`.
#[derive(Debug, Clone)]
pub struct TreeNode {
    /// Entry name only, never a full path.
    pub name: CompactString,

    pub is_dir: bool,

    /// `None` for roots.
    pub parent: Option<NodeIndex>,

    pub first_child: Option<NodeIndex>,

    /// Tail of the child list, for O(1) append.
    pub last_child: Option<NodeIndex>,

    pub next_sibling: Option<NodeIndex>,
}

impl TreeNode {
    pub fn new_file(name: impl Into<CompactString>) -> Self {
        Self::new(name.into(), false)
    }

    pub fn new_dir(name: impl Into<CompactString>) -> Self {
        Self::new(name.into(), true)
    }

    fn new(name: CompactString, is_dir: bool) -> Self {
        Self {
            name,
            is_dir,
            parent: None,
            first_child: None,
            last_child: None,
            next_sibling: None,
        }
    }
}
