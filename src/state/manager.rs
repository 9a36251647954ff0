// State management with undo history and change notification

use super::{AppState, StackFrame, StatePatch};
use crate::step::NodeState;
use crate::traversal::TraversalOrder;
use rustc_hash::FxHashMap;
use std::fmt;

/// Callback invoked with the resulting state after every change
pub type Subscriber = Box<dyn FnMut(&AppState)>;

/// Token returned by [`StateManager::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Owns the live [`AppState`], a LIFO history of earlier snapshots, and the
/// list of subscribers.
pub struct StateManager {
    state: AppState,
    history: Vec<AppState>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl StateManager {
    pub fn new() -> Self {
        StateManager {
            state: AppState::default(),
            history: Vec::new(),
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Independent copy of the current state
    pub fn get_state(&self) -> AppState {
        self.state.clone()
    }

    /// Borrow the current state for reading
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Merge a patch into the current state and notify subscribers
    pub fn set_state(&mut self, patch: StatePatch) {
        self.state.apply(patch);
        self.notify();
    }

    /// Install a full snapshot as the current state
    pub fn restore(&mut self, snapshot: AppState) {
        self.set_state(StatePatch::from(snapshot));
    }

    // ========== History ==========

    /// Save a copy of the current state
    pub fn push_history(&mut self) {
        self.history.push(self.state.clone());
    }

    /// Remove and return the most recent snapshot; does not touch the current state
    pub fn pop_history(&mut self) -> Option<AppState> {
        self.history.pop()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    // ========== Subscriptions ==========

    pub fn subscribe(&mut self, callback: Subscriber) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, callback));
        id
    }

    /// Remove exactly the given subscription; returns whether it was registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn notify(&mut self) {
        for (_, callback) in self.subscribers.iter_mut() {
            callback(&self.state);
        }
    }

    /// Back to the initial state with an empty history
    pub fn reset(&mut self) {
        self.history.clear();
        self.state = AppState::default();
        self.notify();
    }

    // ========== Convenience mutators ==========
    //
    // Each builds fresh collections from the current ones and hands them to
    // `set_state`, so no collection is ever shared with a history entry.

    pub fn set_step_index(&mut self, index: Option<usize>) {
        self.set_state(StatePatch {
            current_step: Some(index),
            ..Default::default()
        });
    }

    pub fn set_highlighted_line(&mut self, line: usize) {
        self.set_state(StatePatch {
            highlighted_line: Some(line),
            ..Default::default()
        });
    }

    pub fn set_traversal_type(&mut self, order: TraversalOrder) {
        self.set_state(StatePatch {
            traversal_type: Some(order),
            ..Default::default()
        });
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.set_state(StatePatch {
            is_playing: Some(playing),
            ..Default::default()
        });
    }

    pub fn set_animation_speed(&mut self, ms: u64) {
        self.set_state(StatePatch {
            animation_speed: Some(ms),
            ..Default::default()
        });
    }

    pub fn push_call_stack(&mut self, frame: StackFrame) {
        let mut call_stack = self.state.call_stack.clone();
        call_stack.push(frame);
        self.set_state(StatePatch {
            call_stack: Some(call_stack),
            ..Default::default()
        });
    }

    /// Pop the top frame; `None` (and no change) if the stack is empty
    pub fn pop_call_stack(&mut self) -> Option<StackFrame> {
        let mut call_stack = self.state.call_stack.clone();
        let frame = call_stack.pop()?;
        self.set_state(StatePatch {
            call_stack: Some(call_stack),
            ..Default::default()
        });
        Some(frame)
    }

    pub fn set_node_state(&mut self, value: i32, node_state: NodeState) {
        let mut node_states = self.state.node_states.clone();
        node_states.insert(value, node_state);
        self.set_state(StatePatch {
            node_states: Some(node_states),
            ..Default::default()
        });
    }

    /// Replace the node-state map with `Unvisited` for each given node
    pub fn reset_node_states<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = i32>,
    {
        let node_states: FxHashMap<i32, NodeState> = values
            .into_iter()
            .map(|v| (v, NodeState::Unvisited))
            .collect();
        self.set_state(StatePatch {
            node_states: Some(node_states),
            ..Default::default()
        });
    }

    pub fn add_to_output(&mut self, value: i32) {
        let mut output = self.state.traversal_output.clone();
        output.push(value);
        self.set_state(StatePatch {
            traversal_output: Some(output),
            ..Default::default()
        });
    }
}

impl Default for StateManager {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StateManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateManager")
            .field("state", &self.state)
            .field("history_len", &self.history.len())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
