use std::cmp::Ordering;

use super::{SortOutcome, Tape};

/// Bubble sort. Runs every pass; the largest remaining value settles at the
/// end of each.
pub fn bubble_sort(input: &[i64]) -> SortOutcome {
    let mut tape = Tape::new("bubble sort", input);
    let n = tape.len();

    for pass in 0..n.saturating_sub(1) {
        for j in 0..n - pass - 1 {
            if tape.compare(j, j + 1) == Ordering::Greater {
                tape.swap(j, j + 1);
            }
        }
    }
    tape.finish()
}
