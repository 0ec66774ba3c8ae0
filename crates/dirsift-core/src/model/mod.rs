/// Data model for the dirsift directory tree.
///
/// Re-exports the arena-allocated tree structure and its serializer.
pub mod dir_tree;
pub mod serialize;
pub mod tree_node;

pub use dir_tree::DirTree;
pub use serialize::{serialize, serialize_node};
pub use tree_node::{NodeIndex, TreeNode};
