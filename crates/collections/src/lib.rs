//! Classic teaching data structures behind the portfolio demos.
//!
//! All linked structures are arena-backed: instead of raw pointers or
//! reference counting, every "pointer" is an `Option<u32>` index into a
//! structure-owned `Vec` arena. Detached nodes stay in the arena until the
//! structure is dropped; at the dataset sizes these demos handle (tens of
//! elements) that trade is invisible and keeps the code free of `unsafe`.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`deque`] | [`Deque`], the doubly-linked queue behind the BFS frontier |
//! [`bst`] | [`BinarySearchTree`], an unbalanced ordered tree, iterative ops |
//! [`graph`] | [`Graph`], a directed adjacency map with BFS/DFS path queries |
//! [`error`] | [`DequeError`] and [`GraphError`] reported conditions |

pub mod bst;
pub mod deque;
pub mod error;
pub mod graph;

pub use bst::{render_traversal, BinarySearchTree};
pub use deque::Deque;
pub use error::{DequeError, GraphError};
pub use graph::Graph;
