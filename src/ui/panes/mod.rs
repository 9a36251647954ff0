//! TUI pane rendering modules
//!
//! Every pane is a stateless render function over data read from the engine
//! and the latest [`AppState`](crate::state::AppState) snapshot.
//!
//! # Pane Modules
//!
//! - [`tree`]: the tree, nodes coloured by their traversal state
//! - [`stack`]: simulated call stack, most recent call on top
//! - [`source`]: code listing with the current line highlighted
//! - [`output`]: values emitted so far
//! - [`status`]: status bar with keybindings and playback state

pub mod output;
pub mod source;
pub mod stack;
pub mod status;
pub mod tree;

pub use output::render_output_pane;
pub use source::render_source_pane;
pub use stack::render_stack_pane;
pub use status::{render_status_bar, StatusRenderData};
pub use tree::render_tree_pane;
