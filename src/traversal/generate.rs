//! Recursive depth-first step generation shared by all orders

use super::{BodyAction, LineTable};
use crate::step::ExecutionStep;
use crate::tree::TreeNode;

/// Walk the tree exactly as the recursive function would and record each step.
///
/// Absent children still receive a CALL, a CHECK_NULL and a null RETURN
/// (attributed to the null-check line, where the early return lives).
pub fn generate_steps(
    root: Option<&TreeNode>,
    body: [BodyAction; 3],
    lines: LineTable,
) -> Vec<ExecutionStep> {
    let mut steps = Vec::new();
    walk(root, &body, &lines, &mut steps);
    steps
}

fn walk(
    node: Option<&TreeNode>,
    body: &[BodyAction; 3],
    lines: &LineTable,
    steps: &mut Vec<ExecutionStep>,
) {
    let value = node.map(|n| n.value);
    steps.push(ExecutionStep::call(value, lines.entry));
    steps.push(ExecutionStep::check_null(value, lines.null_check));

    let Some(node) = node else {
        steps.push(ExecutionStep::return_from(None, lines.null_check, true));
        return;
    };

    for action in body {
        match action {
            BodyAction::Process => {
                steps.push(ExecutionStep::process_node(node.value, lines.process));
            }
            BodyAction::RecurseLeft => {
                steps.push(ExecutionStep::recurse_left(node.value, lines.recurse_left));
                walk(node.left(), body, lines, steps);
            }
            BodyAction::RecurseRight => {
                steps.push(ExecutionStep::recurse_right(node.value, lines.recurse_right));
                walk(node.right(), body, lines, steps);
            }
        }
    }

    steps.push(ExecutionStep::return_from(
        Some(node.value),
        lines.exit,
        false,
    ));
}

#[cfg(test)]
mod tests {
    use crate::step::StepKind;
    use crate::traversal::{generator_for, TraversalOrder};
    use crate::tree::TreeNode;

    #[test]
    fn test_absent_root_is_call_check_return() {
        let steps = generator_for(TraversalOrder::Inorder).generate(None);
        let kinds: Vec<StepKind> = steps.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![StepKind::Call, StepKind::CheckNull, StepKind::Return]);
        assert!(steps.iter().all(|s| s.node.is_none()));
        assert_eq!(steps[2].code_line, 2);
    }

    #[test]
    fn test_single_node_preorder_shape() {
        let root = TreeNode::new(9);
        let steps = generator_for(TraversalOrder::Preorder).generate(Some(&root));
        let kinds: Vec<StepKind> = steps.iter().map(|s| s.kind).collect();
        use StepKind::*;
        assert_eq!(
            kinds,
            vec![
                Call, CheckNull, ProcessNode, RecurseLeft, Call, CheckNull, Return, RecurseRight,
                Call, CheckNull, Return, Return,
            ]
        );
        let lines: Vec<usize> = steps.iter().map(|s| s.code_line).collect();
        assert_eq!(lines, vec![1, 2, 3, 4, 1, 2, 2, 5, 1, 2, 2, 6]);
    }
}
