//! Execution steps
//!
//! An [`ExecutionStep`] is one atomic unit of simulated recursive execution.
//! Steps are only built through the six named constructors on
//! [`ExecutionStep`], which fix the derived fields for each [`StepKind`]:
//!
//! | Constructor       | Stack action | Node state (value present)   | Node state (absent) |
//! |-------------------|--------------|------------------------------|---------------------|
//! | `call`            | Push         | Processing                   | Unvisited           |
//! | `check_null`      | None         | Processing                   | Unvisited           |
//! | `process_node`    | None         | Visited                      | -                   |
//! | `recurse_left`    | None         | Processing                   | -                   |
//! | `recurse_right`   | None         | Processing                   | -                   |
//! | `return_from`     | Pop          | Finished (Unvisited if null) | Unvisited           |
//!
//! Consequently `stack_action` is `Push` exactly for calls and `Pop` exactly
//! for returns, in every traversal order.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What a step does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StepKind {
    Call,
    CheckNull,
    ProcessNode,
    RecurseLeft,
    RecurseRight,
    Return,
}

/// Effect of a step on the simulated call stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StackAction {
    Push,
    Pop,
    None,
}

/// Visual phase of a tree node during the traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NodeState {
    #[default]
    Unvisited,
    Processing,
    Visited,
    Finished,
}

impl NodeState {
    pub fn label(self) -> &'static str {
        match self {
            NodeState::Unvisited => "unvisited",
            NodeState::Processing => "processing",
            NodeState::Visited => "visited",
            NodeState::Finished => "finished",
        }
    }
}

impl fmt::Display for NodeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One immutable entry of the execution timeline
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExecutionStep {
    pub kind: StepKind,
    /// `None` for a call made with an absent child
    pub node: Option<i32>,
    /// 1-indexed line of the order's code listing
    pub code_line: usize,
    pub stack_action: StackAction,
    /// State to give `node` once the step is applied (ignored when `node` is `None`)
    pub node_state: NodeState,
    pub description: String,
}

fn present_or_unvisited(node: Option<i32>, state: NodeState) -> NodeState {
    if node.is_some() {
        state
    } else {
        NodeState::Unvisited
    }
}

fn describe(node: Option<i32>) -> String {
    match node {
        Some(v) => format!("node {}", v),
        None => "null".to_string(),
    }
}

impl ExecutionStep {
    pub fn call(node: Option<i32>, code_line: usize) -> Self {
        ExecutionStep {
            kind: StepKind::Call,
            node,
            code_line,
            stack_action: StackAction::Push,
            node_state: present_or_unvisited(node, NodeState::Processing),
            description: format!("Call with {}", describe(node)),
        }
    }

    pub fn check_null(node: Option<i32>, code_line: usize) -> Self {
        let description = match node {
            Some(v) => format!("Node {} is not null, continue", v),
            None => "Node is null".to_string(),
        };
        ExecutionStep {
            kind: StepKind::CheckNull,
            node,
            code_line,
            stack_action: StackAction::None,
            node_state: present_or_unvisited(node, NodeState::Processing),
            description,
        }
    }

    pub fn process_node(value: i32, code_line: usize) -> Self {
        ExecutionStep {
            kind: StepKind::ProcessNode,
            node: Some(value),
            code_line,
            stack_action: StackAction::None,
            node_state: NodeState::Visited,
            description: format!("Visit node {} and append it to the output", value),
        }
    }

    pub fn recurse_left(value: i32, code_line: usize) -> Self {
        ExecutionStep {
            kind: StepKind::RecurseLeft,
            node: Some(value),
            code_line,
            stack_action: StackAction::None,
            node_state: NodeState::Processing,
            description: format!("Recurse into the left child of {}", value),
        }
    }

    pub fn recurse_right(value: i32, code_line: usize) -> Self {
        ExecutionStep {
            kind: StepKind::RecurseRight,
            node: Some(value),
            code_line,
            stack_action: StackAction::None,
            node_state: NodeState::Processing,
            description: format!("Recurse into the right child of {}", value),
        }
    }

    /// `is_null_return` marks the early return taken by the null check
    pub fn return_from(node: Option<i32>, code_line: usize, is_null_return: bool) -> Self {
        let node_state = if is_null_return {
            NodeState::Unvisited
        } else {
            present_or_unvisited(node, NodeState::Finished)
        };
        let description = if is_null_return {
            "Return immediately (null node)".to_string()
        } else {
            format!("Return from {}", describe(node))
        };
        ExecutionStep {
            kind: StepKind::Return,
            node,
            code_line,
            stack_action: StackAction::Pop,
            node_state,
            description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_action_follows_kind() {
        let steps = [
            ExecutionStep::call(Some(1), 1),
            ExecutionStep::call(None, 1),
            ExecutionStep::check_null(Some(1), 2),
            ExecutionStep::process_node(1, 3),
            ExecutionStep::recurse_left(1, 4),
            ExecutionStep::recurse_right(1, 5),
            ExecutionStep::return_from(Some(1), 6, false),
            ExecutionStep::return_from(None, 2, true),
        ];
        for step in &steps {
            let expected = match step.kind {
                StepKind::Call => StackAction::Push,
                StepKind::Return => StackAction::Pop,
                _ => StackAction::None,
            };
            assert_eq!(step.stack_action, expected, "{:?}", step.kind);
        }
    }

    #[test]
    fn test_node_state_policy() {
        assert_eq!(ExecutionStep::call(Some(3), 1).node_state, NodeState::Processing);
        assert_eq!(ExecutionStep::call(None, 1).node_state, NodeState::Unvisited);
        assert_eq!(ExecutionStep::check_null(None, 2).node_state, NodeState::Unvisited);
        assert_eq!(ExecutionStep::process_node(3, 4).node_state, NodeState::Visited);
        assert_eq!(
            ExecutionStep::return_from(Some(3), 6, false).node_state,
            NodeState::Finished
        );
        assert_eq!(
            ExecutionStep::return_from(Some(3), 2, true).node_state,
            NodeState::Unvisited
        );
    }
}
