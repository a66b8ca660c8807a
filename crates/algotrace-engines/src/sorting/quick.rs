use std::cmp::Ordering;

use super::{SortOutcome, Tape};
use crate::event::{Decision, Entity, Event};

/// Lomuto partition of `values[low..=high]` around `values[high]`.
/// Returns the pivot's final position.
fn partition(tape: &mut Tape, low: usize, high: usize) -> usize {
    let pivot = tape.values[high];
    tape.record(
        Event::decide(Decision::Pivot, Entity::Index(high)),
        format!("Pivot [{}]={} for range [{}..={}]", high, pivot, low, high),
    );

    let mut store = low;
    for j in low..high {
        if tape.compare(j, high) != Ordering::Greater {
            if store != j {
                tape.swap(store, j);
            }
            store += 1;
        }
    }
    if store != high {
        tape.swap(store, high);
    }
    store
}

/// Quicksort on an explicit range stack; the left part is always sorted
/// before the right.
pub fn quick_sort(input: &[i64]) -> SortOutcome {
    let mut tape = Tape::new("quicksort", input);
    let mut ranges = Vec::new();
    if tape.len() > 1 {
        ranges.push((0, tape.len() - 1));
    }

    while let Some((low, high)) = ranges.pop() {
        tape.window = Some((low, high));
        let pivot = partition(&mut tape, low, high);
        if pivot + 1 < high {
            ranges.push((pivot + 1, high));
        }
        if pivot > low + 1 {
            ranges.push((low, pivot - 1));
        }
    }
    tape.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventKind;

    #[test]
    fn records_one_pivot_per_partition() {
        let (values, trace) = quick_sort(&[3, 6, 1, 5, 2, 4]).into_parts();

        assert_eq!(values, vec![1, 2, 3, 4, 5, 6]);
        let pivots = trace
            .iter()
            .filter(|s| s.event.decision() == Some(Decision::Pivot))
            .count();
        assert!(pivots >= 2);
        // First partition: pivot 4 ends at index 3.
        let first_pivot = trace
            .iter()
            .find(|s| s.kind() == EventKind::Decide)
            .unwrap();
        assert_eq!(first_pivot.state.window, Some((0, 5)));
    }

    #[test]
    fn sorted_input_partitions_without_swaps() {
        let input: Vec<i64> = (0..200).collect();
        let (values, trace) = quick_sort(&input).into_parts();
        assert_eq!(values, input);
        assert_eq!(trace.count(EventKind::Swap), 0);
    }
}
