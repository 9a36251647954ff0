// Step generation tests for the three traversal orders

use treewalk::step::{ExecutionStep, StackAction, StepKind};
use treewalk::traversal::{generator_for, traversal_generator, TraversalOrder, CODE_LINES};
use treewalk::tree::{create_default_tree, TreeNode};

fn default_steps(order: TraversalOrder) -> Vec<ExecutionStep> {
    let root = create_default_tree();
    generator_for(order).generate(Some(&root))
}

fn processed(steps: &[ExecutionStep]) -> Vec<i32> {
    steps
        .iter()
        .filter(|s| s.kind == StepKind::ProcessNode)
        .filter_map(|s| s.node)
        .collect()
}

fn count(steps: &[ExecutionStep], kind: StepKind) -> usize {
    steps.iter().filter(|s| s.kind == kind).count()
}

#[test]
fn test_inorder_visits_sorted() {
    assert_eq!(
        processed(&default_steps(TraversalOrder::Inorder)),
        vec![1, 2, 3, 4, 5, 6, 7]
    );
}

#[test]
fn test_preorder_visits_root_first() {
    assert_eq!(
        processed(&default_steps(TraversalOrder::Preorder)),
        vec![4, 2, 1, 3, 6, 5, 7]
    );
}

#[test]
fn test_postorder_visits_root_last() {
    assert_eq!(
        processed(&default_steps(TraversalOrder::Postorder)),
        vec![1, 3, 2, 5, 7, 6, 4]
    );
}

#[test]
fn test_default_tree_has_fifteen_calls_and_returns() {
    for order in TraversalOrder::ALL {
        let steps = default_steps(order);
        assert_eq!(count(&steps, StepKind::Call), 15, "{}", order);
        assert_eq!(count(&steps, StepKind::Return), 15, "{}", order);
        // 7 real nodes * 6 steps + 8 null children * 3 steps
        assert_eq!(steps.len(), 66, "{}", order);
    }
}

#[test]
fn test_stack_balance() {
    for order in TraversalOrder::ALL {
        let mut depth: i64 = 0;
        for step in default_steps(order) {
            match step.stack_action {
                StackAction::Push => depth += 1,
                StackAction::Pop => depth -= 1,
                StackAction::None => {}
            }
            assert!(depth >= 0, "{}: stack went negative", order);
        }
        assert_eq!(depth, 0, "{}: stack not balanced", order);
    }
}

#[test]
fn test_stack_action_matches_kind() {
    for order in TraversalOrder::ALL {
        for step in default_steps(order) {
            assert_eq!(step.stack_action == StackAction::Push, step.kind == StepKind::Call);
            assert_eq!(step.stack_action == StackAction::Pop, step.kind == StepKind::Return);
        }
    }
}

#[test]
fn test_code_lines_within_listing() {
    for order in TraversalOrder::ALL {
        for step in default_steps(order) {
            assert!(
                (1..=CODE_LINES).contains(&step.code_line),
                "{}: line {} out of range",
                order,
                step.code_line
            );
        }
    }
}

#[test]
fn test_every_call_is_followed_by_null_check() {
    let steps = default_steps(TraversalOrder::Inorder);
    for pair in steps.windows(2) {
        if pair[0].kind == StepKind::Call {
            assert_eq!(pair[1].kind, StepKind::CheckNull);
            assert_eq!(pair[1].node, pair[0].node);
        }
    }
}

#[test]
fn test_null_calls_return_immediately() {
    let steps = default_steps(TraversalOrder::Postorder);
    let null_calls: Vec<usize> = steps
        .iter()
        .enumerate()
        .filter(|(_, s)| s.kind == StepKind::Call && s.node.is_none())
        .map(|(i, _)| i)
        .collect();

    assert_eq!(null_calls.len(), 8);
    for i in null_calls {
        assert_eq!(steps[i + 1].kind, StepKind::CheckNull);
        assert_eq!(steps[i + 2].kind, StepKind::Return);
        assert!(steps[i + 2].node.is_none());
    }
}

#[test]
fn test_inorder_prefix() {
    let steps = default_steps(TraversalOrder::Inorder);
    let prefix: Vec<(StepKind, Option<i32>, usize)> = steps
        .iter()
        .take(8)
        .map(|s| (s.kind, s.node, s.code_line))
        .collect();

    use StepKind::*;
    assert_eq!(
        prefix,
        vec![
            (Call, Some(4), 1),
            (CheckNull, Some(4), 2),
            (RecurseLeft, Some(4), 3),
            (Call, Some(2), 1),
            (CheckNull, Some(2), 2),
            (RecurseLeft, Some(2), 3),
            (Call, Some(1), 1),
            (CheckNull, Some(1), 2),
        ]
    );
}

#[test]
fn test_bogus_tag_generates_inorder_steps() {
    let root = create_default_tree();
    let bogus = traversal_generator("bogus").generate(Some(&root));
    let inorder = traversal_generator("inorder").generate(Some(&root));
    assert_eq!(bogus, inorder);
}

#[test]
fn test_orders_differ_only_in_body_sequence() {
    let kinds = |order| -> Vec<StepKind> {
        default_steps(order).iter().map(|s| s.kind).collect()
    };
    let inorder = kinds(TraversalOrder::Inorder);
    let preorder = kinds(TraversalOrder::Preorder);
    assert_eq!(inorder.len(), preorder.len());
    assert_ne!(inorder, preorder);
    assert_eq!(inorder[..2], preorder[..2]);
}

#[test]
fn test_skewed_tree() {
    // 1 -> right 2 -> right 3
    let root = TreeNode::new(1).with_right(TreeNode::new(2).with_right(TreeNode::new(3)));
    let steps = generator_for(TraversalOrder::Preorder).generate(Some(&root));
    assert_eq!(processed(&steps), vec![1, 2, 3]);
    assert_eq!(count(&steps, StepKind::Call), 2 * 3 + 1);
}
