//! The step trace: one record per elementary operation.

use serde::{Deserialize, Serialize};

/// Closed set of elementary operations a sort can perform. Tagged as an
/// enum (not free-form strings) so counting and formatting stay exhaustive
/// under the compiler's eye.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepAction {
    Compare,
    Swap,
    Shift,
    Insert,
    Merge,
}

/// One entry of a sort trace.
///
/// `array` is the full array strictly *after* the action completed;
/// `indices` are the positions the action touched (two for compare/swap/
/// shift, one for insert, the inclusive `[lo, hi]` bounds for merge).
/// `pivot` is set on quick-sort steps and names the pivot's position at
/// the time of the step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortStep<T> {
    pub action: StepAction,
    pub indices: Vec<usize>,
    pub array: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pivot: Option<usize>,
}

impl<T: Clone> SortStep<T> {
    fn new(action: StepAction, indices: Vec<usize>, array: &[T], pivot: Option<usize>) -> Self {
        Self {
            action,
            indices,
            array: array.to_vec(),
            pivot,
        }
    }

    pub(crate) fn compare(i: usize, j: usize, array: &[T]) -> Self {
        Self::new(StepAction::Compare, vec![i, j], array, None)
    }

    pub(crate) fn compare_at_pivot(i: usize, pivot: usize, array: &[T]) -> Self {
        Self::new(StepAction::Compare, vec![i, pivot], array, Some(pivot))
    }

    pub(crate) fn swap(i: usize, j: usize, array: &[T]) -> Self {
        Self::new(StepAction::Swap, vec![i, j], array, None)
    }

    pub(crate) fn swap_at_pivot(i: usize, j: usize, pivot: usize, array: &[T]) -> Self {
        Self::new(StepAction::Swap, vec![i, j], array, Some(pivot))
    }

    pub(crate) fn shift(from: usize, to: usize, array: &[T]) -> Self {
        Self::new(StepAction::Shift, vec![from, to], array, None)
    }

    pub(crate) fn insert(slot: usize, array: &[T]) -> Self {
        Self::new(StepAction::Insert, vec![slot], array, None)
    }

    pub(crate) fn merge(lo: usize, hi: usize, array: &[T]) -> Self {
        Self::new(StepAction::Merge, vec![lo, hi], array, None)
    }
}

/// Replay a trace from its starting array: the state after the last step.
///
/// Snapshots are authoritative, so replaying is reading the final one; an
/// empty trace (input already sorted under an algorithm that skips work)
/// replays to the original.
pub fn replay<T: Clone>(original: &[T], steps: &[SortStep<T>]) -> Vec<T> {
    steps
        .last()
        .map_or_else(|| original.to_vec(), |step| step.array.clone())
}
