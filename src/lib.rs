//! # Introduction
//!
//! treewalk steps through recursive binary tree traversals (inorder,
//! preorder, postorder) one simulated interpreter action at a time, keeping
//! the tree, a call-stack view and the code listing in sync. Every step can
//! be undone exactly.
//!
//! ## Pipeline
//!
//! ```text
//! Tree → Generator → Steps → Engine → StateManager → subscribers (TUI)
//! ```
//!
//! 1. [`tree`] — the binary tree, its default shape and layout.
//! 2. [`step`] — [`step::ExecutionStep`] and its six constructors.
//! 3. [`traversal`] — generators turning (tree, order) into the full step
//!    timeline.
//! 4. [`state`] — [`state::AppState`] snapshots and the
//!    [`state::StateManager`] with undo history and subscriptions.
//! 5. [`engine`] — [`engine::ExecutionEngine`], stepping forward/backward and
//!    timed auto-play.
//! 6. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use treewalk::engine::ExecutionEngine;
//! use treewalk::traversal::TraversalOrder;
//!
//! let mut engine = ExecutionEngine::with_default_tree();
//! engine.initialize(TraversalOrder::Preorder);
//! engine.run_to_end();
//! assert_eq!(engine.state().traversal_output, vec![4, 2, 1, 3, 6, 5, 7]);
//! ```

pub mod engine;
pub mod state;
pub mod step;
pub mod traversal;
pub mod tree;
pub mod ui;
