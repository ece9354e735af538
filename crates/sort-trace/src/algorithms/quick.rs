use crate::algorithms::{SortAlgorithm, SortOutcome};
use crate::step::SortStep;

/// Quick sort: Lomuto partition, last element as pivot, explicit stack of
/// pending ranges instead of recursion (worst-case partition depth is
/// linear, and the stack keeps it off the call stack).
///
/// Emits a `compare` per comparison against the pivot and a `swap` per
/// exchange; every partition step carries `pivot: Some(index)` naming the
/// pivot's position at that moment.
pub fn quick_sort<T: Ord + Clone>(input: &[T]) -> SortOutcome<T> {
    let mut arr = input.to_vec();
    let mut steps = Vec::new();

    if arr.len() > 1 {
        let mut pending = vec![(0usize, arr.len() - 1)];
        while let Some((lo, hi)) = pending.pop() {
            if lo >= hi {
                continue;
            }
            let p = partition(&mut arr, lo, hi, &mut steps);
            if p > lo {
                pending.push((lo, p - 1));
            }
            if p < hi {
                pending.push((p + 1, hi));
            }
        }
    }

    SortOutcome {
        algorithm: SortAlgorithm::Quick,
        original: input.to_vec(),
        sorted: arr,
        steps,
    }
}

fn partition<T: Ord + Clone>(
    arr: &mut Vec<T>,
    lo: usize,
    hi: usize,
    steps: &mut Vec<SortStep<T>>,
) -> usize {
    let pivot = hi;
    let mut boundary = lo;
    for j in lo..hi {
        steps.push(SortStep::compare_at_pivot(j, pivot, arr));
        if arr[j] <= arr[pivot] {
            if boundary != j {
                arr.swap(boundary, j);
                steps.push(SortStep::swap_at_pivot(boundary, j, pivot, arr));
            }
            boundary += 1;
        }
    }
    if boundary != hi {
        arr.swap(boundary, hi);
        steps.push(SortStep::swap_at_pivot(boundary, hi, pivot, arr));
    }
    boundary
}
