use std::cmp::Ordering;

use super::{SortOutcome, Tape};

/// Insertion sort by adjacent exchanges: each new element is swapped left
/// until its left neighbor is not larger.
pub fn insertion_sort(input: &[i64]) -> SortOutcome {
    let mut tape = Tape::new("insertion sort", input);

    for i in 1..tape.len() {
        let mut j = i;
        while j > 0 && tape.compare(j - 1, j) == Ordering::Greater {
            tape.swap(j - 1, j);
            j -= 1;
        }
    }
    tape.finish()
}
