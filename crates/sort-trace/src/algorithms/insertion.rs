use crate::algorithms::{SortAlgorithm, SortOutcome};
use crate::step::SortStep;

/// Insertion sort: shift larger predecessors rightward, then drop the held
/// value into its slot.
///
/// Emits a `shift` per element moved (indices `[from, to]`) and one
/// `insert` per position. Mid-shift snapshots show the duplicated
/// predecessor while the inserted value is held aside, which is the state
/// an animation should draw.
pub fn insertion_sort<T: Ord + Clone>(input: &[T]) -> SortOutcome<T> {
    let mut arr = input.to_vec();
    let mut steps = Vec::new();

    for i in 1..arr.len() {
        let value = arr[i].clone();
        let mut slot = i;
        while slot > 0 && arr[slot - 1] > value {
            arr[slot] = arr[slot - 1].clone();
            steps.push(SortStep::shift(slot - 1, slot, &arr));
            slot -= 1;
        }
        arr[slot] = value;
        steps.push(SortStep::insert(slot, &arr));
    }

    SortOutcome {
        algorithm: SortAlgorithm::Insertion,
        original: input.to_vec(),
        sorted: arr,
        steps,
    }
}
