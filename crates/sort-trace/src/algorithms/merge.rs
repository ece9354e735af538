use crate::algorithms::{SortAlgorithm, SortOutcome};
use crate::step::SortStep;

/// Merge sort: recursive divide, instrumented merge.
///
/// Emits a `compare` for each cross-half comparison and one `merge` step
/// per merge operation carrying the post-merge snapshot and the inclusive
/// `[lo, hi]` bounds of the merged span. Compare indices name the slots
/// the candidates occupied before the merge began.
///
/// Recursion depth is log2(n), under seven frames at the 50-element cap
/// the manager enforces, so the recursive shape is kept.
pub fn merge_sort<T: Ord + Clone>(input: &[T]) -> SortOutcome<T> {
    let mut arr = input.to_vec();
    let mut steps = Vec::new();
    let n = arr.len();

    if n > 1 {
        sort_range(&mut arr, 0, n - 1, &mut steps);
    }

    SortOutcome {
        algorithm: SortAlgorithm::Merge,
        original: input.to_vec(),
        sorted: arr,
        steps,
    }
}

fn sort_range<T: Ord + Clone>(arr: &mut Vec<T>, lo: usize, hi: usize, steps: &mut Vec<SortStep<T>>) {
    if lo >= hi {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    sort_range(arr, lo, mid, steps);
    sort_range(arr, mid + 1, hi, steps);
    merge_range(arr, lo, mid, hi, steps);
}

fn merge_range<T: Ord + Clone>(
    arr: &mut Vec<T>,
    lo: usize,
    mid: usize,
    hi: usize,
    steps: &mut Vec<SortStep<T>>,
) {
    let left = arr[lo..=mid].to_vec();
    let right = arr[mid + 1..=hi].to_vec();

    let mut i = 0;
    let mut j = 0;
    let mut k = lo;
    while i < left.len() && j < right.len() {
        steps.push(SortStep::compare(lo + i, mid + 1 + j, arr));
        if left[i] <= right[j] {
            arr[k] = left[i].clone();
            i += 1;
        } else {
            arr[k] = right[j].clone();
            j += 1;
        }
        k += 1;
    }
    while i < left.len() {
        arr[k] = left[i].clone();
        i += 1;
        k += 1;
    }
    while j < right.len() {
        arr[k] = right[j].clone();
        j += 1;
        k += 1;
    }

    steps.push(SortStep::merge(lo, hi, arr));
}
