use std::cmp::Ordering;

use super::{SortOutcome, Tape};

/// Restore the max-heap property below `root` within `values[..end]`.
fn sift_down(tape: &mut Tape, mut root: usize, end: usize) {
    loop {
        let mut largest = root;
        for child in [2 * root + 1, 2 * root + 2] {
            if child < end && tape.compare(child, largest) == Ordering::Greater {
                largest = child;
            }
        }
        if largest == root {
            return;
        }
        tape.swap(root, largest);
        root = largest;
    }
}

/// Heap sort: build a max-heap, then repeatedly move the root behind the
/// shrinking heap. The frame window is the live heap.
pub fn heap_sort(input: &[i64]) -> SortOutcome {
    let mut tape = Tape::new("heap sort", input);
    let n = tape.len();
    if n > 1 {
        tape.window = Some((0, n - 1));
    }

    for root in (0..n / 2).rev() {
        sift_down(&mut tape, root, n);
    }
    for end in (1..n).rev() {
        tape.swap(0, end);
        tape.window = Some((0, end - 1));
        sift_down(&mut tape, 0, end);
    }
    tape.finish()
}
