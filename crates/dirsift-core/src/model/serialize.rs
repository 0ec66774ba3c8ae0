/// Flat textual listing of a `DirTree`.
///
/// For every node, the names of all its direct children are written first,
/// one per line, and only then is each child's own subtree written, in child
/// order. This is not a classic pre-order walk: `A{B{E},C{D}}` lists as
/// `B C E D`, not `B E C D`.
use super::dir_tree::DirTree;
use super::tree_node::NodeIndex;

/// Serialize every root of `tree`, in root order. Root names are not emitted.
pub fn serialize(tree: &DirTree) -> String {
    let mut out = String::new();
    for &root in &tree.roots {
        write_level(tree, root, &mut out);
    }
    out
}

/// Serialize the subtree below `node`.
pub fn serialize_node(tree: &DirTree, node: NodeIndex) -> String {
    let mut out = String::new();
    write_level(tree, node, &mut out);
    out
}

fn write_level(tree: &DirTree, node: NodeIndex, out: &mut String) {
    let children = tree.children(node);
    for &child in &children {
        out.push_str(&tree.node(child).name);
        out.push('\n');
    }
    for &child in &children {
        write_level(tree, child, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TreeNode;

    fn attach(tree: &mut DirTree, parent: NodeIndex, node: TreeNode) -> NodeIndex {
        let idx = tree.add_node(node);
        tree.add_child(parent, idx);
        idx
    }

    #[test]
    fn test_children_listed_before_subtrees() {
        let mut tree = DirTree::with_capacity(4);
        let a = tree.add_root("A");
        attach(&mut tree, a, TreeNode::new_file("B"));
        let c = attach(&mut tree, a, TreeNode::new_dir("C"));
        attach(&mut tree, c, TreeNode::new_file("D"));

        assert_eq!(serialize(&tree), "B\nC\nD\n");
        assert_eq!(serialize_node(&tree, c), "D\n");
    }

    #[test]
    fn test_level_order_differs_from_preorder() {
        let mut tree = DirTree::with_capacity(5);
        let a = tree.add_root("A");
        let b = attach(&mut tree, a, TreeNode::new_dir("B"));
        let c = attach(&mut tree, a, TreeNode::new_dir("C"));
        attach(&mut tree, b, TreeNode::new_file("E"));
        attach(&mut tree, c, TreeNode::new_file("D"));

        assert_eq!(serialize(&tree), "B\nC\nE\nD\n");
    }

    #[test]
    fn test_empty_tree_serializes_to_nothing() {
        let mut tree = DirTree::default();
        assert_eq!(serialize(&tree), "");
        tree.add_root("lonely");
        assert_eq!(serialize(&tree), "");
    }

    #[test]
    fn test_multiple_roots() {
        let mut tree = DirTree::default();
        let first = tree.add_root("one");
        attach(&mut tree, first, TreeNode::new_file("x"));
        let second = tree.add_root("two");
        attach(&mut tree, second, TreeNode::new_file("y"));

        assert_eq!(serialize(&tree), "x\ny\n");
    }
}
