use proptest::prelude::*;
use treewalk::engine::ExecutionEngine;
use treewalk::state::states_equal;
use treewalk::step::{StackAction, StepKind};
use treewalk::traversal::{generator_for, TraversalOrder};
use treewalk::tree::{count_nodes, TreeNode};

/// Build a binary search tree by inserting values in order, skipping duplicates
fn bst_from(values: &[i32]) -> Option<TreeNode> {
    fn insert(node: &mut Option<Box<TreeNode>>, value: i32) {
        match node {
            None => *node = Some(Box::new(TreeNode::new(value))),
            Some(n) => {
                if value < n.value {
                    insert(&mut n.left, value);
                } else if value > n.value {
                    insert(&mut n.right, value);
                }
            }
        }
    }

    let mut root: Option<Box<TreeNode>> = None;
    for &v in values {
        insert(&mut root, v);
    }
    root.map(|b| *b)
}

fn reference_order(node: Option<&TreeNode>, order: TraversalOrder, out: &mut Vec<i32>) {
    let Some(node) = node else { return };
    if order == TraversalOrder::Preorder {
        out.push(node.value);
    }
    reference_order(node.left(), order, out);
    if order == TraversalOrder::Inorder {
        out.push(node.value);
    }
    reference_order(node.right(), order, out);
    if order == TraversalOrder::Postorder {
        out.push(node.value);
    }
}

fn any_order() -> impl Strategy<Value = TraversalOrder> {
    prop_oneof![
        Just(TraversalOrder::Inorder),
        Just(TraversalOrder::Preorder),
        Just(TraversalOrder::Postorder),
    ]
}

proptest! {
    #[test]
    fn stack_stays_balanced(
        values in proptest::collection::vec(0i32..100, 0..40),
        order in any_order(),
    ) {
        let tree = bst_from(&values);
        let steps = generator_for(order).generate(tree.as_ref());

        let mut depth: i64 = 0;
        for step in &steps {
            match step.stack_action {
                StackAction::Push => depth += 1,
                StackAction::Pop => depth -= 1,
                StackAction::None => {}
            }
            prop_assert!(depth >= 0, "stack went negative");
        }
        prop_assert_eq!(depth, 0);

        let n = count_nodes(tree.as_ref());
        let calls = steps.iter().filter(|s| s.kind == StepKind::Call).count();
        let returns = steps.iter().filter(|s| s.kind == StepKind::Return).count();
        prop_assert_eq!(calls, 2 * n + 1);
        prop_assert_eq!(returns, calls);
    }

    #[test]
    fn engine_output_matches_recursive_traversal(
        values in proptest::collection::vec(-50i32..50, 0..30),
        order in any_order(),
    ) {
        let tree = bst_from(&values);
        let mut expected = Vec::new();
        reference_order(tree.as_ref(), order, &mut expected);

        let mut engine = ExecutionEngine::new(tree);
        engine.initialize(order);
        engine.run_to_end();
        prop_assert_eq!(&engine.state().traversal_output, &expected);
        prop_assert!(engine.state().call_stack.is_empty());
    }

    #[test]
    fn undo_restores_earlier_state(
        values in proptest::collection::vec(0i32..30, 1..20),
        order in any_order(),
        prefix in 0usize..40,
        forward in 0usize..80,
    ) {
        let mut engine = ExecutionEngine::new(bst_from(&values));
        engine.initialize(order);
        for _ in 0..prefix {
            let _ = engine.next_step();
        }
        let before = engine.get_state();

        let mut applied = 0;
        for _ in 0..forward {
            if engine.next_step().is_ok() {
                applied += 1;
            }
        }
        for _ in 0..applied {
            prop_assert!(engine.previous_step().is_ok());
        }
        prop_assert!(states_equal(engine.state(), &before));
    }
}
