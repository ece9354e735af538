//! Orchestration facade over the engine.
//!
//! Validates the request, generates the random input, dispatches, then
//! summarizes: operation counts tallied off the trace's action tags and a
//! human-readable line per step. No algorithmic content lives here.

use std::fmt::Debug;

use rand::Rng;
use serde::Serialize;

use crate::algorithms::SortAlgorithm;
use crate::error::SortError;
use crate::step::{SortStep, StepAction};

/// Inclusive bounds on the requested array size.
pub const MIN_SIZE: usize = 5;
pub const MAX_SIZE: usize = 50;

/// Inclusive bounds on generated element values.
pub const MIN_VALUE: i32 = 1;
pub const MAX_VALUE: i32 = 100;

/// Everything the presentation layer needs to display one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SortReport {
    pub algorithm: SortAlgorithm,
    pub original: Vec<i32>,
    pub sorted: Vec<i32>,
    /// Human-readable rendering of `raw_steps`, one line per step.
    pub steps: Vec<String>,
    pub raw_steps: Vec<SortStep<i32>>,
    pub comparisons: usize,
    pub swaps: usize,
    pub shifts: usize,
    pub total_steps: usize,
}

/// Operation counts tallied from a trace by action tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OperationCounts {
    pub comparisons: usize,
    pub swaps: usize,
    pub shifts: usize,
}

impl OperationCounts {
    pub fn tally<T>(steps: &[SortStep<T>]) -> Self {
        let mut counts = OperationCounts::default();
        for step in steps {
            match step.action {
                StepAction::Compare => counts.comparisons += 1,
                StepAction::Swap => counts.swaps += 1,
                StepAction::Shift => counts.shifts += 1,
                // Inserts and merges are structural, not counted operations.
                StepAction::Insert | StepAction::Merge => {}
            }
        }
        counts
    }
}

/// Run `algorithm` over a fresh random array of `size` elements.
///
/// The algorithm key is checked first, then the size bound; both checks
/// happen before any input is generated.
pub fn run_sort(algorithm: &str, size: usize) -> Result<SortReport, SortError> {
    run_sort_with_rng(algorithm, size, &mut rand::thread_rng())
}

/// [`run_sort`] with an injected generator, for deterministic callers.
pub fn run_sort_with_rng<R: Rng>(
    algorithm: &str,
    size: usize,
    rng: &mut R,
) -> Result<SortReport, SortError> {
    let algorithm: SortAlgorithm = algorithm.parse()?;
    if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
        return Err(SortError::InvalidSize(size));
    }

    let data = generate_random_array(size, rng);
    let outcome = algorithm.sort(&data);
    let counts = OperationCounts::tally(&outcome.steps);
    let steps = format_steps(&outcome.steps);

    Ok(SortReport {
        algorithm: outcome.algorithm,
        original: outcome.original,
        sorted: outcome.sorted,
        steps,
        total_steps: outcome.steps.len(),
        raw_steps: outcome.steps,
        comparisons: counts.comparisons,
        swaps: counts.swaps,
        shifts: counts.shifts,
    })
}

/// Random integers in `[MIN_VALUE, MAX_VALUE]`.
pub fn generate_random_array<R: Rng>(size: usize, rng: &mut R) -> Vec<i32> {
    (0..size).map(|_| rng.gen_range(MIN_VALUE..=MAX_VALUE)).collect()
}

/// Render a trace into display lines, numbered from 1.
pub fn format_steps<T: Debug>(steps: &[SortStep<T>]) -> Vec<String> {
    steps
        .iter()
        .enumerate()
        .map(|(i, step)| format_step(i + 1, step))
        .collect()
}

fn format_step<T: Debug>(number: usize, step: &SortStep<T>) -> String {
    let desc = match step.action {
        StepAction::Compare => match step.indices.as_slice() {
            [a, b, ..] => format!("Step {number}: Compare index {a} and {b}"),
            _ => format!("Step {number}: Compare"),
        },
        StepAction::Swap => match step.indices.as_slice() {
            [a, b, ..] => format!("Step {number}: Swap index {a} and {b}"),
            _ => format!("Step {number}: Swap"),
        },
        StepAction::Shift => match step.indices.as_slice() {
            [from, to, ..] => format!("Step {number}: Shift index {from} to {to}"),
            _ => format!("Step {number}: Shift"),
        },
        StepAction::Insert => match step.indices.as_slice() {
            [slot, ..] => format!("Step {number}: Insert at index {slot}"),
            _ => format!("Step {number}: Insert"),
        },
        StepAction::Merge => format!("Step {number}: Merge arrays"),
    };
    format!("{desc} → {:?}", step.array)
}
