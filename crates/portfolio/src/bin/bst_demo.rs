//! `bst-demo`: the binary-search-tree showcase the tree page renders.

use dsa_portfolio::{render_traversal, BinarySearchTree};

fn main() {
    let values = [50, 30, 70, 20, 40, 60, 80, 25];
    println!("Inserting values: {values:?}");

    let mut tree = BinarySearchTree::new();
    for value in values {
        tree.insert(value);
    }

    println!();
    println!(
        "Inorder traversal (sorted): {}",
        render_traversal(&tree.inorder())
    );
    println!("Preorder traversal: {}", render_traversal(&tree.preorder()));
    println!(
        "Postorder traversal: {}",
        render_traversal(&tree.postorder())
    );

    println!();
    println!("Search for 40: {}", tree.search(&40));
    println!("Search for 25: {}", tree.search(&25));

    println!();
    if let (Some(min), Some(max)) = (tree.min(), tree.max()) {
        println!("Minimum value: {min}");
        println!("Maximum value: {max}");
    }
    println!("Height of the tree: {}", tree.height());

    tree.delete(&50);
    println!();
    println!(
        "Inorder traversal after deleting the root: {}",
        render_traversal(&tree.inorder())
    );
}
