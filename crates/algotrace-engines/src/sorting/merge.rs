use std::cmp::Ordering;

use super::{SortOutcome, Tape};
use crate::event::{Decision, Entity, Event};

enum Task {
    Sort(usize, usize),
    Merge(usize, usize, usize),
}

/// Merge `values[left..=mid]` and `values[mid+1..=right]` through the buffer.
fn merge(tape: &mut Tape, left: usize, mid: usize, right: usize) {
    tape.window = Some((left, right));
    let range = Entity::Range(left, right);

    if tape.compare(mid, mid + 1) != Ordering::Greater {
        tape.record(
            Event::decide(Decision::Merge, range),
            format!("Runs [{}..={}] already in order", left, right),
        );
        return;
    }

    let (mut i, mut j) = (left, mid + 1);
    for k in left..=right {
        let take_left = j > right || (i <= mid && tape.compare(i, j) != Ordering::Greater);
        let source = if take_left { &mut i } else { &mut j };
        let from = *source;
        *source += 1;
        tape.write_buffer(k, tape.values[from], Entity::Index(from));
    }

    for k in left..=right {
        tape.restore(k);
    }
    tape.record(
        Event::decide(Decision::Merge, range),
        format!("Merged [{}..={}]", left, right),
    );
}

/// Top-down merge sort on an explicit task stack. Equal keys keep their
/// input order.
pub fn merge_sort(input: &[i64]) -> SortOutcome {
    let mut tape = Tape::new("merge sort", input);
    let n = tape.len();
    if n > 1 {
        tape.buffer = Some(vec![0; n]);
    }

    let mut tasks = vec![Task::Sort(0, n.saturating_sub(1))];
    while let Some(task) = tasks.pop() {
        match task {
            Task::Sort(left, right) if left < right => {
                let mid = left + (right - left) / 2;
                tasks.push(Task::Merge(left, mid, right));
                tasks.push(Task::Sort(mid + 1, right));
                tasks.push(Task::Sort(left, mid));
            }
            Task::Sort(..) => {}
            Task::Merge(left, mid, right) => merge(&mut tape, left, mid, right),
        }
    }
    tape.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventKind;

    #[test]
    fn copies_through_buffer_and_back() {
        let (values, trace) = merge_sort(&[2, 1]).into_parts();

        assert_eq!(values, vec![1, 2]);
        assert_eq!(
            trace.kinds(),
            vec![
                EventKind::Init,
                EventKind::Examine,
                EventKind::Examine,
                EventKind::Update,
                EventKind::Update,
                EventKind::Update,
                EventKind::Update,
                EventKind::Decide,
                EventKind::Complete,
            ]
        );
        let after_fill = &trace[4];
        assert_eq!(after_fill.state.buffer, Some(vec![1, 2]));
        assert_eq!(after_fill.state.values, vec![2, 1]);
    }

    #[test]
    fn every_run_closes_with_a_merge_decision() {
        let (_, trace) = merge_sort(&[5, 3, 1, 4, 2]).into_parts();
        let ranges: Vec<_> = trace
            .iter()
            .filter(|s| s.event.decision() == Some(Decision::Merge))
            .flat_map(|s| s.event.entities())
            .collect();
        assert_eq!(
            ranges,
            vec![
                Entity::Range(0, 1),
                Entity::Range(0, 2),
                Entity::Range(3, 4),
                Entity::Range(0, 4),
            ]
        );
    }
}
