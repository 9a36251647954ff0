//! Interval-bisection layout
//!
//! Each node sits at the horizontal midpoint of its interval. The root owns
//! `[0, width]`; a left child gets the lower half of its parent's interval and
//! a right child the upper half. Levels are spaced a quarter of the height
//! apart, below a fixed top margin.

use super::TreeNode;

/// Vertical margin above the root
pub const TOP_PADDING: f64 = 40.0;

/// Assign `x`/`y` to every node. No-op for an absent root.
///
/// Positions depend only on the arguments and the tree shape, so calling this
/// repeatedly with the same inputs yields the same coordinates.
pub fn compute_node_positions(root: Option<&mut TreeNode>, width: f64, height: f64) {
    if let Some(root) = root {
        place(root, 0.0, width, 0, height / 4.0);
    }
}

fn place(node: &mut TreeNode, low: f64, high: f64, level: usize, level_gap: f64) {
    let mid = (low + high) / 2.0;
    node.x = mid;
    node.y = TOP_PADDING + level as f64 * level_gap;

    if let Some(left) = node.left.as_deref_mut() {
        place(left, low, mid, level + 1, level_gap);
    }
    if let Some(right) = node.right.as_deref_mut() {
        place(right, mid, high, level + 1, level_gap);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{create_default_tree, find_node};

    #[test]
    fn test_default_tree_positions() {
        let mut root = create_default_tree();
        compute_node_positions(Some(&mut root), 800.0, 400.0);

        let at = |v: i32| {
            let n = find_node(Some(&root), v).unwrap();
            (n.x, n.y)
        };
        assert_eq!(at(4), (400.0, TOP_PADDING));
        assert_eq!(at(2), (200.0, TOP_PADDING + 100.0));
        assert_eq!(at(6), (600.0, TOP_PADDING + 100.0));
        assert_eq!(at(1), (100.0, TOP_PADDING + 200.0));
        assert_eq!(at(7), (700.0, TOP_PADDING + 200.0));
    }

    #[test]
    fn test_layout_is_idempotent() {
        let mut root = create_default_tree();
        compute_node_positions(Some(&mut root), 640.0, 480.0);
        let first = root.clone();
        compute_node_positions(Some(&mut root), 640.0, 480.0);
        assert_eq!(first, root);
    }

    #[test]
    fn test_absent_root_is_noop() {
        compute_node_positions(None, 100.0, 100.0);
    }
}
