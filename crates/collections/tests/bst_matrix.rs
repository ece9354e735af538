use dsa_collections::{render_traversal, BinarySearchTree};
use proptest::prelude::*;

fn showcase_tree() -> BinarySearchTree<i32> {
    let mut tree = BinarySearchTree::new();
    for value in [50, 30, 70, 20, 40, 60, 80, 25] {
        tree.insert(value);
    }
    tree
}

#[test]
fn inorder_yields_ascending_matrix() {
    let tree = showcase_tree();
    let inorder: Vec<i32> = tree.inorder().into_iter().copied().collect();
    assert_eq!(inorder, [20, 25, 30, 40, 50, 60, 70, 80]);
}

#[test]
fn traversal_orders_matrix() {
    let tree = showcase_tree();
    let preorder: Vec<i32> = tree.preorder().into_iter().copied().collect();
    let postorder: Vec<i32> = tree.postorder().into_iter().copied().collect();
    assert_eq!(preorder, [50, 30, 20, 25, 40, 70, 60, 80]);
    assert_eq!(postorder, [25, 20, 40, 30, 60, 80, 70, 50]);
}

#[test]
fn duplicate_insert_is_dropped_matrix() {
    let mut tree = showcase_tree();
    assert_eq!(tree.len(), 8);
    tree.insert(40);
    tree.insert(50);
    assert_eq!(tree.len(), 8);
    let inorder: Vec<i32> = tree.inorder().into_iter().copied().collect();
    assert_eq!(inorder, [20, 25, 30, 40, 50, 60, 70, 80]);
}

#[test]
fn search_min_max_height_matrix() {
    let tree = showcase_tree();
    assert!(tree.search(&40));
    assert!(tree.search(&25));
    assert!(!tree.search(&99));
    assert_eq!(tree.min(), Some(&20));
    assert_eq!(tree.max(), Some(&80));
    assert_eq!(tree.height(), 3);

    let empty: BinarySearchTree<i32> = BinarySearchTree::new();
    assert_eq!(empty.height(), -1);
    assert_eq!(empty.min(), None);
    assert_eq!(empty.max(), None);

    let mut single = BinarySearchTree::new();
    single.insert(1);
    assert_eq!(single.height(), 0);
}

#[test]
fn degenerate_chain_height_matrix() {
    // Ascending inserts degrade to a right spine; documented limitation.
    let mut tree = BinarySearchTree::new();
    for value in 1..=7 {
        tree.insert(value);
    }
    assert_eq!(tree.height(), 6);
}

#[test]
fn delete_root_with_two_children_matrix() {
    let mut tree = showcase_tree();
    assert!(tree.delete(&50));
    let inorder: Vec<&i32> = tree.inorder();
    assert_eq!(render_traversal(&inorder), "20 25 30 40 60 70 80");
}

#[test]
fn delete_leaf_and_single_child_matrix() {
    let mut tree = showcase_tree();

    // 25 is a leaf.
    assert!(tree.delete(&25));
    assert!(!tree.search(&25));

    // 30 still has two children; its successor 40 takes its slot.
    assert!(tree.delete(&30));
    let inorder: Vec<i32> = tree.inorder().into_iter().copied().collect();
    assert_eq!(inorder, [20, 40, 50, 60, 70, 80]);
    assert_eq!(tree.height(), 2);
}

#[test]
fn delete_absent_value_matrix() {
    let mut tree = showcase_tree();
    assert!(!tree.delete(&99));
    assert_eq!(tree.len(), 8);
}

#[test]
fn delete_until_empty_matrix() {
    let mut tree = showcase_tree();
    for value in [50, 30, 70, 20, 40, 60, 80, 25] {
        assert!(tree.delete(&value));
    }
    assert!(tree.is_empty());
    assert_eq!(tree.height(), -1);
    assert!(tree.inorder().is_empty());
}

proptest! {
    #[test]
    fn inorder_is_sorted_for_any_insert_sequence(
        values in proptest::collection::vec(0i32..1000, 0..40),
    ) {
        let mut tree = BinarySearchTree::new();
        for value in &values {
            tree.insert(*value);
        }
        let inorder: Vec<i32> = tree.inorder().into_iter().copied().collect();
        let mut expected = values.clone();
        expected.sort_unstable();
        expected.dedup();
        prop_assert_eq!(inorder, expected);
    }

    #[test]
    fn delete_preserves_order_for_any_sequence(
        values in proptest::collection::vec(0i32..100, 1..30),
        victim_seed in 0usize..30,
    ) {
        let mut tree = BinarySearchTree::new();
        for value in &values {
            tree.insert(*value);
        }
        let victim = values[victim_seed % values.len()];
        prop_assert!(tree.delete(&victim));

        let inorder: Vec<i32> = tree.inorder().into_iter().copied().collect();
        let mut expected = values.clone();
        expected.sort_unstable();
        expected.dedup();
        let position = expected.iter().position(|v| *v == victim);
        if let Some(position) = position {
            expected.remove(position);
        }
        prop_assert_eq!(inorder, expected);
    }
}
