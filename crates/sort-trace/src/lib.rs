//! Instrumented sorting engine.
//!
//! Each algorithm sorts an internal copy of its input and, alongside the
//! result, emits an append-only trace of every elementary operation. Each
//! [`SortStep`] snapshots the array strictly *after* its action completes,
//! so replaying the trace in order reconstructs every intermediate state
//! for the front end to animate.
//!
//! The [`manager`] module is the orchestration facade the presentation
//! layer calls: it validates parameters, generates random input, dispatches
//! to an algorithm, tallies operation counts, and renders the trace into
//! human-readable lines. It contains no algorithmic logic of its own.

pub mod algorithms;
pub mod error;
pub mod manager;
pub mod step;

pub use algorithms::{
    bubble_sort, insertion_sort, merge_sort, quick_sort, selection_sort, SortAlgorithm,
    SortOutcome,
};
pub use error::SortError;
pub use manager::{
    generate_random_array, run_sort, run_sort_with_rng, OperationCounts, SortReport,
};
pub use step::{replay, SortStep, StepAction};
