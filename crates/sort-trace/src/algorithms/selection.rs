use crate::algorithms::{SortAlgorithm, SortOutcome};
use crate::step::SortStep;

/// Selection sort: scan the unsorted remainder for its minimum, then one
/// swap to place it.
///
/// Emits a `compare` per candidate scanned; the `swap` is emitted only
/// when the minimum actually moves.
pub fn selection_sort<T: Ord + Clone>(input: &[T]) -> SortOutcome<T> {
    let mut arr = input.to_vec();
    let mut steps = Vec::new();
    let n = arr.len();

    for i in 0..n {
        let mut min_idx = i;
        for j in i + 1..n {
            steps.push(SortStep::compare(j, min_idx, &arr));
            if arr[j] < arr[min_idx] {
                min_idx = j;
            }
        }
        if min_idx != i {
            arr.swap(i, min_idx);
            steps.push(SortStep::swap(i, min_idx, &arr));
        }
    }

    SortOutcome {
        algorithm: SortAlgorithm::Selection,
        original: input.to_vec(),
        sorted: arr,
        steps,
    }
}
