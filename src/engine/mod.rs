//! Traversal execution engine
//!
//! This module ties the generators to the state manager:
//! - [`execution`]: [`ExecutionEngine`], the cursor over a precomputed timeline
//! - [`playback`]: the auto-play timer handle
//! - [`errors`]: boundary signals returned by stepping
//!
//! # Execution Model
//!
//! The whole step sequence for (tree, order) is generated up front. Stepping
//! forward snapshots the current state into the history and then applies the
//! next step; stepping backward pops that snapshot and installs it. Nothing is
//! recomputed on the way back, so undo is exact.

pub mod errors;
pub mod execution;
pub mod playback;

pub use errors::StepError;
pub use execution::ExecutionEngine;
pub use playback::PlaybackTimer;
