//! Facade for the portfolio's data-structure demos.
//!
//! Re-exports the core crates and carries the static metro dataset the
//! route-finder page queries. The web layer (routes, templates, assets)
//! lives outside this workspace and consumes these APIs as-is.

pub mod stations;

pub use dsa_collections::{
    render_traversal, BinarySearchTree, Deque, DequeError, Graph, GraphError,
};
pub use dsa_sort_trace::{
    replay, run_sort, run_sort_with_rng, SortAlgorithm, SortError, SortReport, SortStep,
    StepAction,
};
pub use stations::{build_metro_graph, manila_metro, MetroDataset};
