//! Application state snapshots
//!
//! [`AppState`] is the complete picture of the simulation at one point in
//! the timeline. It is plain owned data: cloning it yields a fully
//! independent copy, which is what the undo history relies on.
//!
//! Writes go through [`StatePatch`], a partial update whose collection
//! fields replace the stored ones wholesale. See [`manager::StateManager`].

pub mod manager;

use crate::step::NodeState;
use crate::traversal::TraversalOrder;
use rustc_hash::FxHashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use manager::{StateManager, Subscriber, SubscriptionId};

/// Default auto-play interval
pub const DEFAULT_SPEED_MS: u64 = 1000;
/// Fastest allowed auto-play interval
pub const MIN_SPEED_MS: u64 = 50;
/// Slowest allowed auto-play interval
pub const MAX_SPEED_MS: u64 = 5000;

/// Simulated activation record of one recursive call
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StackFrame {
    pub function_name: String,
    /// Argument of the call, `None` for a null child
    pub node: Option<i32>,
    /// Code line of the caller's call site, `None` for the root call
    pub return_address: Option<usize>,
}

impl StackFrame {
    pub fn new(function_name: &str, node: Option<i32>, return_address: Option<usize>) -> Self {
        StackFrame {
            function_name: function_name.to_string(),
            node,
            return_address,
        }
    }

    /// Call signature as shown on the stack, e.g. `inorder(4)` or `inorder(null)`
    pub fn signature(&self) -> String {
        match self.node {
            Some(v) => format!("{}({})", self.function_name, v),
            None => format!("{}(null)", self.function_name),
        }
    }
}

/// Full simulation state at one point in the timeline
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AppState {
    /// Index of the last applied step, `None` before the first one
    pub current_step: Option<usize>,
    /// Bottom (oldest call) to top (newest call)
    pub call_stack: Vec<StackFrame>,
    pub node_states: FxHashMap<i32, NodeState>,
    /// 1-indexed code line, 0 when nothing is highlighted
    pub highlighted_line: usize,
    pub traversal_type: TraversalOrder,
    pub is_playing: bool,
    /// Milliseconds per auto-play step
    pub animation_speed: u64,
    /// Node values in the order they were processed
    pub traversal_output: Vec<i32>,
}

impl Default for AppState {
    fn default() -> Self {
        AppState {
            current_step: None,
            call_stack: Vec::new(),
            node_states: FxHashMap::default(),
            highlighted_line: 0,
            traversal_type: TraversalOrder::Inorder,
            is_playing: false,
            animation_speed: DEFAULT_SPEED_MS,
            traversal_output: Vec::new(),
        }
    }
}

impl AppState {
    /// Stack frames in visual order: most recent call first
    pub fn frames_top_first(&self) -> impl ExactSizeIterator<Item = &StackFrame> {
        self.call_stack.iter().rev()
    }

    pub fn node_state(&self, value: i32) -> NodeState {
        self.node_states.get(&value).copied().unwrap_or_default()
    }

    /// Merge a patch into this state, moving its collections in
    pub fn apply(&mut self, patch: StatePatch) {
        if let Some(current_step) = patch.current_step {
            self.current_step = current_step;
        }
        if let Some(call_stack) = patch.call_stack {
            self.call_stack = call_stack;
        }
        if let Some(node_states) = patch.node_states {
            self.node_states = node_states;
        }
        if let Some(line) = patch.highlighted_line {
            self.highlighted_line = line;
        }
        if let Some(order) = patch.traversal_type {
            self.traversal_type = order;
        }
        if let Some(playing) = patch.is_playing {
            self.is_playing = playing;
        }
        if let Some(speed) = patch.animation_speed {
            self.animation_speed = speed;
        }
        if let Some(output) = patch.traversal_output {
            self.traversal_output = output;
        }
    }
}

/// Partial update; `None` leaves a field untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatePatch {
    /// `Some(None)` moves the cursor back before the first step
    pub current_step: Option<Option<usize>>,
    pub call_stack: Option<Vec<StackFrame>>,
    pub node_states: Option<FxHashMap<i32, NodeState>>,
    pub highlighted_line: Option<usize>,
    pub traversal_type: Option<TraversalOrder>,
    pub is_playing: Option<bool>,
    pub animation_speed: Option<u64>,
    pub traversal_output: Option<Vec<i32>>,
}

impl From<AppState> for StatePatch {
    /// A patch that overwrites every field
    fn from(state: AppState) -> Self {
        StatePatch {
            current_step: Some(state.current_step),
            call_stack: Some(state.call_stack),
            node_states: Some(state.node_states),
            highlighted_line: Some(state.highlighted_line),
            traversal_type: Some(state.traversal_type),
            is_playing: Some(state.is_playing),
            animation_speed: Some(state.animation_speed),
            traversal_output: Some(state.traversal_output),
        }
    }
}

/// Compare two states the way history round-trips are checked.
///
/// Stack frames are compared by function name and argument only; the return
/// address is derived from the timeline and not part of a frame's identity.
pub fn states_equal(a: &AppState, b: &AppState) -> bool {
    a.current_step == b.current_step
        && a.highlighted_line == b.highlighted_line
        && a.traversal_type == b.traversal_type
        && a.is_playing == b.is_playing
        && a.animation_speed == b.animation_speed
        && a.call_stack.len() == b.call_stack.len()
        && a
            .call_stack
            .iter()
            .zip(&b.call_stack)
            .all(|(x, y)| x.function_name == y.function_name && x.node == y.node)
        && a.node_states == b.node_states
        && a.traversal_output == b.traversal_output
}

/// Clamp an auto-play interval into the supported range
pub fn clamp_speed(ms: u64) -> u64 {
    ms.clamp(MIN_SPEED_MS, MAX_SPEED_MS)
}
