//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, keyboard event loop, auto-play ticking
//! - **[`panes`]** — stateless render functions for each visible pane (tree,
//!   call stack, code, output, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with an
//! [`ExecutionEngine`] and call [`App::run`] to start the event loop. The app
//! renders from the state snapshots the engine delivers to its subscribers.
//!
//! [`ExecutionEngine`]: crate::engine::ExecutionEngine
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
