//! Binary tree model
//!
//! This module provides the tree the traversals walk over:
//! - [`TreeNode`]: a node owning its optional left and right subtrees
//! - [`create_default_tree`]: the canonical 7-node tree shown on startup
//! - Depth-first queries ([`all_nodes`], [`all_edges`], [`tree_depth`],
//!   [`count_nodes`], [`find_node`])
//! - [`layout`]: render coordinates for each node
//!
//! Every query takes `Option<&TreeNode>` so an absent tree degrades to an
//! empty result instead of failing.

pub mod layout;

pub use layout::{compute_node_positions, TOP_PADDING};

/// A binary tree node
///
/// `value` doubles as the node's identity: node states are keyed by it, so
/// values must be unique within one tree.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    pub value: i32,
    pub left: Option<Box<TreeNode>>,
    pub right: Option<Box<TreeNode>>,
    /// Render coordinates, only written by [`compute_node_positions`]
    pub x: f64,
    pub y: f64,
}

impl TreeNode {
    /// Create a leaf node
    pub fn new(value: i32) -> Self {
        TreeNode {
            value,
            left: None,
            right: None,
            x: 0.0,
            y: 0.0,
        }
    }

    /// Attach a left subtree (builder style)
    pub fn with_left(mut self, left: TreeNode) -> Self {
        self.left = Some(Box::new(left));
        self
    }

    /// Attach a right subtree (builder style)
    pub fn with_right(mut self, right: TreeNode) -> Self {
        self.right = Some(Box::new(right));
        self
    }

    pub fn left(&self) -> Option<&TreeNode> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&TreeNode> {
        self.right.as_deref()
    }
}

/// A parent/child link, one per existing child pointer
#[derive(Debug, Clone, Copy)]
pub struct Edge<'a> {
    pub parent: &'a TreeNode,
    pub child: &'a TreeNode,
}

/// Build the canonical tree:
///
/// ```text
///         4
///       /   \
///      2     6
///     / \   / \
///    1   3 5   7
/// ```
pub fn create_default_tree() -> TreeNode {
    TreeNode::new(4)
        .with_left(TreeNode::new(2).with_left(TreeNode::new(1)).with_right(TreeNode::new(3)))
        .with_right(TreeNode::new(6).with_left(TreeNode::new(5)).with_right(TreeNode::new(7)))
}

/// All nodes in preorder
pub fn all_nodes(root: Option<&TreeNode>) -> Vec<&TreeNode> {
    fn collect<'a>(node: Option<&'a TreeNode>, out: &mut Vec<&'a TreeNode>) {
        if let Some(node) = node {
            out.push(node);
            collect(node.left(), out);
            collect(node.right(), out);
        }
    }

    let mut nodes = Vec::new();
    collect(root, &mut nodes);
    nodes
}

/// All parent/child edges in preorder discovery order (left before right)
pub fn all_edges(root: Option<&TreeNode>) -> Vec<Edge<'_>> {
    fn collect<'a>(node: Option<&'a TreeNode>, out: &mut Vec<Edge<'a>>) {
        let Some(node) = node else { return };
        if let Some(left) = node.left() {
            out.push(Edge {
                parent: node,
                child: left,
            });
        }
        if let Some(right) = node.right() {
            out.push(Edge {
                parent: node,
                child: right,
            });
        }
        collect(node.left(), out);
        collect(node.right(), out);
    }

    let mut edges = Vec::new();
    collect(root, &mut edges);
    edges
}

/// Number of levels; an absent tree has depth 0, a lone root depth 1
pub fn tree_depth(root: Option<&TreeNode>) -> usize {
    match root {
        None => 0,
        Some(node) => 1 + tree_depth(node.left()).max(tree_depth(node.right())),
    }
}

pub fn count_nodes(root: Option<&TreeNode>) -> usize {
    match root {
        None => 0,
        Some(node) => 1 + count_nodes(node.left()) + count_nodes(node.right()),
    }
}

/// First node with the given value in preorder
pub fn find_node(root: Option<&TreeNode>, value: i32) -> Option<&TreeNode> {
    let node = root?;
    if node.value == value {
        return Some(node);
    }
    find_node(node.left(), value).or_else(|| find_node(node.right(), value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(nodes: &[&TreeNode]) -> Vec<i32> {
        nodes.iter().map(|n| n.value).collect()
    }

    #[test]
    fn test_default_tree_shape() {
        let root = create_default_tree();
        assert_eq!(root.value, 4);
        assert_eq!(count_nodes(Some(&root)), 7);
        assert_eq!(tree_depth(Some(&root)), 3);
        assert_eq!(values(&all_nodes(Some(&root))), vec![4, 2, 1, 3, 6, 5, 7]);
    }

    #[test]
    fn test_edges_in_preorder_discovery() {
        let root = create_default_tree();
        let pairs: Vec<(i32, i32)> = all_edges(Some(&root))
            .iter()
            .map(|e| (e.parent.value, e.child.value))
            .collect();
        assert_eq!(pairs, vec![(4, 2), (4, 6), (2, 1), (2, 3), (6, 5), (6, 7)]);
    }

    #[test]
    fn test_empty_tree_queries() {
        assert!(all_nodes(None).is_empty());
        assert!(all_edges(None).is_empty());
        assert_eq!(tree_depth(None), 0);
        assert_eq!(count_nodes(None), 0);
        assert!(find_node(None, 4).is_none());
    }

    #[test]
    fn test_find_node_returns_first_preorder_match() {
        let root = TreeNode::new(1)
            .with_left(TreeNode::new(9).with_left(TreeNode::new(2)))
            .with_right(TreeNode::new(9));
        let found = find_node(Some(&root), 9).expect("node 9 exists");
        assert!(found.left.is_some(), "left-side 9 should be found first");
        assert!(find_node(Some(&root), 42).is_none());
    }

    #[test]
    fn test_single_child_edges() {
        let root = TreeNode::new(1).with_right(TreeNode::new(2).with_left(TreeNode::new(3)));
        assert_eq!(all_edges(Some(&root)).len(), 2);
        assert_eq!(tree_depth(Some(&root)), 3);
    }
}
