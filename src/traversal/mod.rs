//! Traversal step generators
//!
//! A generator maps a tree (possibly absent) to the complete, ordered
//! sequence of [`ExecutionStep`]s a recursive depth-first interpreter would
//! produce for one traversal order:
//! - [`listing`]: the fixed 6-line code listing and [`LineTable`] of each order
//! - [`generate`]: the shared recursive walk
//!
//! The three orders only differ in where the "process" action sits relative
//! to the left and right recursion:
//!
//! ```text
//! inorder    entry, null check, left, process, right, exit
//! preorder   entry, null check, process, left, right, exit
//! postorder  entry, null check, left, right, process, exit
//! ```
//!
//! Every visited child slot, present or absent, gets its own CALL and RETURN,
//! so a tree of N nodes always yields 2N + 1 calls and the same number of
//! returns.

pub mod generate;
pub mod listing;

use crate::step::ExecutionStep;
use crate::tree::TreeNode;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use listing::{Inorder, Postorder, Preorder, CODE_LINES};

/// The three supported depth-first orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TraversalOrder {
    #[default]
    Inorder,
    Preorder,
    Postorder,
}

/// One of the three body actions whose ordering defines a traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyAction {
    Process,
    RecurseLeft,
    RecurseRight,
}

impl TraversalOrder {
    pub const ALL: [TraversalOrder; 3] = [
        TraversalOrder::Inorder,
        TraversalOrder::Preorder,
        TraversalOrder::Postorder,
    ];

    /// Lenient lookup: any unrecognized tag falls back to inorder
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or_default()
    }

    pub fn tag(self) -> &'static str {
        match self {
            TraversalOrder::Inorder => "inorder",
            TraversalOrder::Preorder => "preorder",
            TraversalOrder::Postorder => "postorder",
        }
    }

    /// Ordering of the body actions between the null check and the exit
    pub fn body(self) -> [BodyAction; 3] {
        use BodyAction::*;
        match self {
            TraversalOrder::Inorder => [RecurseLeft, Process, RecurseRight],
            TraversalOrder::Preorder => [Process, RecurseLeft, RecurseRight],
            TraversalOrder::Postorder => [RecurseLeft, RecurseRight, Process],
        }
    }
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Strict parse failure, used where an unknown tag should be reported
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown traversal order '{0}' (expected inorder, preorder or postorder)")]
pub struct ParseOrderError(pub String);

impl FromStr for TraversalOrder {
    type Err = ParseOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inorder" => Ok(TraversalOrder::Inorder),
            "preorder" => Ok(TraversalOrder::Preorder),
            "postorder" => Ok(TraversalOrder::Postorder),
            other => Err(ParseOrderError(other.to_string())),
        }
    }
}

/// Code lines (1-indexed) each part of the recursive function lives on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineTable {
    pub entry: usize,
    pub null_check: usize,
    pub process: usize,
    pub recurse_left: usize,
    pub recurse_right: usize,
    pub exit: usize,
}

/// Produces the step timeline for one traversal order
pub trait TraversalGenerator {
    fn order(&self) -> TraversalOrder;

    fn line_table(&self) -> LineTable;

    fn code_listing(&self) -> &'static [&'static str; CODE_LINES];

    /// Name of the simulated recursive function, shown on stack frames
    fn function_name(&self) -> &'static str {
        self.order().tag()
    }

    fn generate(&self, root: Option<&TreeNode>) -> Vec<ExecutionStep> {
        generate::generate_steps(root, self.order().body(), self.line_table())
    }
}

/// Generator for a parsed order
pub fn generator_for(order: TraversalOrder) -> &'static dyn TraversalGenerator {
    match order {
        TraversalOrder::Inorder => &Inorder,
        TraversalOrder::Preorder => &Preorder,
        TraversalOrder::Postorder => &Postorder,
    }
}

/// Generator for a raw tag; never fails, unknown tags get inorder
pub fn traversal_generator(tag: &str) -> &'static dyn TraversalGenerator {
    generator_for(TraversalOrder::from_tag(tag))
}
