// Execution engine: a cursor over the precomputed step timeline

use super::errors::StepError;
use super::playback::PlaybackTimer;
use crate::state::{
    clamp_speed, AppState, StackFrame, StateManager, StatePatch, Subscriber, SubscriptionId,
};
use crate::step::{ExecutionStep, NodeState, StackAction, StepKind};
use crate::traversal::{generator_for, TraversalGenerator, TraversalOrder, CODE_LINES};
use crate::tree::{all_nodes, create_default_tree, TreeNode};
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::{debug, error, trace};

/// Drives one tree through one traversal order at a time
pub struct ExecutionEngine {
    tree: Option<TreeNode>,
    generator: &'static dyn TraversalGenerator,
    steps: Vec<ExecutionStep>,
    state: StateManager,
    timer: Option<PlaybackTimer>,
}

impl ExecutionEngine {
    /// Create an engine for `tree`, initialized for inorder
    pub fn new(tree: Option<TreeNode>) -> Self {
        let mut engine = ExecutionEngine {
            tree,
            generator: generator_for(TraversalOrder::Inorder),
            steps: Vec::new(),
            state: StateManager::new(),
            timer: None,
        };
        engine.initialize(TraversalOrder::Inorder);
        engine
    }

    pub fn with_default_tree() -> Self {
        Self::new(Some(create_default_tree()))
    }

    /// Regenerate the timeline for `order` and start over from scratch
    pub fn initialize(&mut self, order: TraversalOrder) {
        self.pause();
        self.generator = generator_for(order);
        self.steps = self.generator.generate(self.tree.as_ref());
        debug!(order = %order, steps = self.steps.len(), "initialized traversal");
        self.reset_state();
    }

    /// Same as [`initialize`](Self::initialize), unknown tags run inorder
    pub fn initialize_tag(&mut self, tag: &str) {
        self.initialize(TraversalOrder::from_tag(tag));
    }

    /// Rewind to before the first step, keeping the tree and the timeline
    pub fn reset(&mut self) {
        self.pause();
        self.reset_state();
        debug!(order = %self.generator.order(), "reset traversal");
    }

    /// Install a fresh state in one update, so subscribers never see a
    /// half-reset state
    fn reset_state(&mut self) {
        let speed = self.state.state().animation_speed;
        let node_states: FxHashMap<i32, NodeState> = all_nodes(self.tree.as_ref())
            .iter()
            .map(|n| (n.value, NodeState::Unvisited))
            .collect();

        self.state.clear_history();
        self.state.restore(AppState {
            traversal_type: self.generator.order(),
            node_states,
            animation_speed: speed,
            ..AppState::default()
        });
    }

    // ========== Stepping ==========

    fn next_index(&self) -> usize {
        self.state.state().current_step.map_or(0, |i| i + 1)
    }

    /// Line of the recursive call that led to the CALL at `index`
    fn call_site(&self, index: usize) -> Option<usize> {
        let previous = self.steps.get(index.checked_sub(1)?)?;
        match previous.kind {
            StepKind::RecurseLeft | StepKind::RecurseRight => Some(previous.code_line),
            _ => None,
        }
    }

    /// Apply the next step of the timeline
    pub fn next_step(&mut self) -> Result<(), StepError> {
        let index = self.next_index();
        let Some(step) = self.steps.get(index) else {
            return Err(StepError::AtEnd);
        };

        let current = self.state.state();
        let mut patch = StatePatch {
            current_step: Some(Some(index)),
            highlighted_line: Some(step.code_line),
            ..Default::default()
        };

        match step.stack_action {
            StackAction::Push => {
                let mut call_stack = current.call_stack.clone();
                call_stack.push(StackFrame::new(
                    self.generator.function_name(),
                    step.node,
                    self.call_site(index),
                ));
                patch.call_stack = Some(call_stack);
            }
            StackAction::Pop => {
                let mut call_stack = current.call_stack.clone();
                if call_stack.pop().is_none() {
                    error!(step = index, "return applied to an empty call stack");
                    debug_assert!(false, "unbalanced step sequence at step {}", index);
                }
                patch.call_stack = Some(call_stack);
            }
            StackAction::None => {}
        }

        if let Some(value) = step.node {
            let mut node_states = current.node_states.clone();
            node_states.insert(value, step.node_state);
            patch.node_states = Some(node_states);

            if step.kind == StepKind::ProcessNode {
                let mut output = current.traversal_output.clone();
                output.push(value);
                patch.traversal_output = Some(output);
            }
        }

        trace!(step = index, kind = ?step.kind, node = ?step.node, line = step.code_line, "apply step");
        self.state.push_history();
        self.state.set_state(patch);
        Ok(())
    }

    /// Undo the last applied step by reinstalling the snapshot taken before it.
    ///
    /// Playback controls (`is_playing`, `animation_speed`) belong to the live
    /// session and are carried over into the restored state.
    pub fn previous_step(&mut self) -> Result<(), StepError> {
        if self.is_at_start() {
            return Err(StepError::AtStart);
        }
        let Some(mut snapshot) = self.state.pop_history() else {
            return Err(StepError::AtStart);
        };

        let live = self.state.state();
        snapshot.is_playing = live.is_playing;
        snapshot.animation_speed = live.animation_speed;

        trace!(step = ?snapshot.current_step, "step back");
        self.state.restore(snapshot);
        Ok(())
    }

    /// Step back until the start; returns how many steps were undone
    pub fn rewind(&mut self) -> usize {
        let mut moved = 0;
        while self.previous_step().is_ok() {
            moved += 1;
        }
        moved
    }

    /// Step forward until the end; returns how many steps were applied
    pub fn run_to_end(&mut self) -> usize {
        let mut moved = 0;
        while self.next_step().is_ok() {
            moved += 1;
        }
        moved
    }

    // ========== Auto-play ==========

    /// Start auto-play; no-op while already playing
    pub fn play(&mut self) {
        if self.timer.is_some() {
            return;
        }
        let speed = self.state.state().animation_speed;
        self.timer = Some(PlaybackTimer::start(
            Duration::from_millis(speed),
            Instant::now(),
        ));
        self.state.set_playing(true);
        debug!(speed_ms = speed, "auto-play started");
    }

    /// Stop auto-play; no scheduled tick fires afterwards
    pub fn pause(&mut self) {
        if self.timer.take().is_some() {
            self.state.set_playing(false);
            debug!("auto-play paused");
        }
    }

    pub fn toggle_play(&mut self) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Change the auto-play interval (clamped). A running timer restarts
    /// with the new interval. Returns the interval actually applied.
    pub fn set_speed(&mut self, ms: u64) -> u64 {
        let speed = clamp_speed(ms);
        self.state.set_animation_speed(speed);
        if self.timer.is_some() {
            self.timer = Some(PlaybackTimer::start(
                Duration::from_millis(speed),
                Instant::now(),
            ));
        }
        debug!(speed_ms = speed, "animation speed changed");
        speed
    }

    /// Advance auto-play if its deadline has passed. Returns true if a step
    /// was applied. Reaching the end stops auto-play.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(timer) = self.timer.as_mut() else {
            return false;
        };
        if !timer.fire(now) {
            return false;
        }
        match self.next_step() {
            Ok(()) => true,
            Err(_) => {
                self.pause();
                false
            }
        }
    }

    /// Time until the next auto-play tick, `None` when paused
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.timer.as_ref().map(|t| t.remaining(now))
    }

    /// Interval of the running auto-play timer, `None` when paused
    pub fn playback_interval(&self) -> Option<Duration> {
        self.timer.as_ref().map(PlaybackTimer::interval)
    }

    pub fn is_playing(&self) -> bool {
        self.timer.is_some()
    }

    // ========== Queries ==========

    pub fn is_at_start(&self) -> bool {
        self.state.state().current_step.is_none()
    }

    pub fn is_at_end(&self) -> bool {
        self.next_index() >= self.steps.len()
    }

    /// The most recently applied step
    pub fn current_step(&self) -> Option<&ExecutionStep> {
        self.state
            .state()
            .current_step
            .and_then(|i| self.steps.get(i))
    }

    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    pub fn steps(&self) -> &[ExecutionStep] {
        &self.steps
    }

    pub fn traversal_type(&self) -> TraversalOrder {
        self.generator.order()
    }

    pub fn function_name(&self) -> &'static str {
        self.generator.function_name()
    }

    pub fn code_listing(&self) -> &'static [&'static str; CODE_LINES] {
        self.generator.code_listing()
    }

    pub fn tree(&self) -> Option<&TreeNode> {
        self.tree.as_ref()
    }

    /// Borrow the live state
    pub fn state(&self) -> &AppState {
        self.state.state()
    }

    /// Independent copy of the live state
    pub fn get_state(&self) -> AppState {
        self.state.get_state()
    }

    pub fn history_len(&self) -> usize {
        self.state.history_len()
    }

    pub fn subscribe(&mut self, callback: Subscriber) -> SubscriptionId {
        self.state.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.state.unsubscribe(id)
    }
}

impl Default for ExecutionEngine {
    fn default() -> Self {
        Self::with_default_tree()
    }
}
