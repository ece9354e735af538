use crate::algorithms::{SortAlgorithm, SortOutcome};
use crate::step::SortStep;

/// Bubble sort: repeated adjacent compare/swap passes.
///
/// Emits one `compare` per comparison and one `swap` per exchange. A pass
/// that swaps nothing proves the array sorted and ends the run early, so
/// the trace length tracks how unsorted the input actually was.
pub fn bubble_sort<T: Ord + Clone>(input: &[T]) -> SortOutcome<T> {
    let mut arr = input.to_vec();
    let mut steps = Vec::new();
    let n = arr.len();

    for pass in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - 1 - pass {
            steps.push(SortStep::compare(j, j + 1, &arr));
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                steps.push(SortStep::swap(j, j + 1, &arr));
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }

    SortOutcome {
        algorithm: SortAlgorithm::Bubble,
        original: input.to_vec(),
        sorted: arr,
        steps,
    }
}
