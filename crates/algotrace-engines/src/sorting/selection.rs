use std::cmp::Ordering;

use super::{SortOutcome, Tape};

/// Selection sort. Swaps only when the minimum is not already in place.
pub fn selection_sort(input: &[i64]) -> SortOutcome {
    let mut tape = Tape::new("selection sort", input);
    let n = tape.len();

    for i in 0..n {
        let mut min = i;
        for j in i + 1..n {
            if tape.compare(j, min) == Ordering::Less {
                min = j;
            }
        }
        if min != i {
            tape.swap(i, min);
        }
    }
    tape.finish()
}
