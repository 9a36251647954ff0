//! Code listings shown beside the tree, one per traversal order

use super::{LineTable, TraversalGenerator, TraversalOrder};

/// Every listing has exactly this many lines
pub const CODE_LINES: usize = 6;

const INORDER_LISTING: [&str; CODE_LINES] = [
    "fn inorder(node: Option<&Node>) {",
    "    let Some(node) = node else { return };",
    "    inorder(node.left);",
    "    visit(node.value);",
    "    inorder(node.right);",
    "}",
];

const PREORDER_LISTING: [&str; CODE_LINES] = [
    "fn preorder(node: Option<&Node>) {",
    "    let Some(node) = node else { return };",
    "    visit(node.value);",
    "    preorder(node.left);",
    "    preorder(node.right);",
    "}",
];

const POSTORDER_LISTING: [&str; CODE_LINES] = [
    "fn postorder(node: Option<&Node>) {",
    "    let Some(node) = node else { return };",
    "    postorder(node.left);",
    "    postorder(node.right);",
    "    visit(node.value);",
    "}",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct Inorder;

#[derive(Debug, Clone, Copy, Default)]
pub struct Preorder;

#[derive(Debug, Clone, Copy, Default)]
pub struct Postorder;

impl TraversalGenerator for Inorder {
    fn order(&self) -> TraversalOrder {
        TraversalOrder::Inorder
    }

    fn line_table(&self) -> LineTable {
        LineTable {
            entry: 1,
            null_check: 2,
            recurse_left: 3,
            process: 4,
            recurse_right: 5,
            exit: 6,
        }
    }

    fn code_listing(&self) -> &'static [&'static str; CODE_LINES] {
        &INORDER_LISTING
    }
}

impl TraversalGenerator for Preorder {
    fn order(&self) -> TraversalOrder {
        TraversalOrder::Preorder
    }

    fn line_table(&self) -> LineTable {
        LineTable {
            entry: 1,
            null_check: 2,
            process: 3,
            recurse_left: 4,
            recurse_right: 5,
            exit: 6,
        }
    }

    fn code_listing(&self) -> &'static [&'static str; CODE_LINES] {
        &PREORDER_LISTING
    }
}

impl TraversalGenerator for Postorder {
    fn order(&self) -> TraversalOrder {
        TraversalOrder::Postorder
    }

    fn line_table(&self) -> LineTable {
        LineTable {
            entry: 1,
            null_check: 2,
            recurse_left: 3,
            recurse_right: 4,
            process: 5,
            exit: 6,
        }
    }

    fn code_listing(&self) -> &'static [&'static str; CODE_LINES] {
        &POSTORDER_LISTING
    }
}
