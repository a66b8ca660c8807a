//! Instrumented sorting engines.
//!
//! Every comparison is an `Examine`, every in-place exchange a `Swap`, and
//! every single-element copy an `Update`, so no data movement is hidden
//! between frames. Each run opens with `Init` and closes with `Complete`.
//!
//! On already-sorted input the comparison sorts other than heap sort record
//! no `Swap` or `Update` at all. Heap sort always exchanges the root during
//! extraction.

mod bubble;
mod heap;
mod insertion;
mod merge;
mod quick;
mod radix;
mod selection;

pub use bubble::bubble_sort;
pub use heap::heap_sort;
pub use insertion::insertion_sort;
pub use merge::merge_sort;
pub use quick::quick_sort;
pub use radix::radix_sort;
pub use selection::selection_sort;

use std::cmp::Ordering;

use crate::event::{Entity, Event};
use crate::trace::{Outcome, Recorder};

/// State of a sorting run at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrayFrame {
    pub values: Vec<i64>,
    /// Auxiliary buffer (merge and radix sort).
    pub buffer: Option<Vec<i64>>,
    /// Active inclusive range (quicksort partition, merge run, heap).
    pub window: Option<(usize, usize)>,
}

/// The sorted array and its trace.
pub type SortOutcome = Outcome<Vec<i64>, ArrayFrame>;

/// Working array plus the recorder every sort writes through.
struct Tape {
    name: &'static str,
    values: Vec<i64>,
    buffer: Option<Vec<i64>>,
    window: Option<(usize, usize)>,
    recorder: Recorder<ArrayFrame>,
}

impl Tape {
    fn new(name: &'static str, input: &[i64]) -> Self {
        let mut tape = Self {
            name,
            values: input.to_vec(),
            buffer: None,
            window: None,
            recorder: Recorder::new(),
        };
        tape.record(
            Event::Init,
            format!("Starting {} on {} elements", name, input.len()),
        );
        tape
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn record(&mut self, event: Event, status: impl Into<String>) {
        let frame = ArrayFrame {
            values: self.values.clone(),
            buffer: self.buffer.clone(),
            window: self.window,
        };
        self.recorder.record(event, frame, status);
    }

    /// Compare `values[i]` with `values[j]`, recording the comparison.
    fn compare(&mut self, i: usize, j: usize) -> Ordering {
        let (a, b) = (self.values[i], self.values[j]);
        self.record(
            Event::examine(Entity::Index(i), Some(Entity::Index(j))),
            format!("Comparing [{}]={} with [{}]={}", i, a, j, b),
        );
        a.cmp(&b)
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.values.swap(i, j);
        self.record(
            Event::swap(Entity::Index(i), Entity::Index(j)),
            format!("Swapped [{}] and [{}]", i, j),
        );
    }

    /// Copy `value` into `buffer[k]`.
    fn write_buffer(&mut self, k: usize, value: i64, source: Entity) {
        if let Some(buffer) = self.buffer.as_mut() {
            buffer[k] = value;
        }
        self.record(
            Event::update(Entity::Buffer(k), Some(source)),
            format!("Copied {} from {} to buffer[{}]", value, source, k),
        );
    }

    /// Copy `buffer[k]` back into `values[k]`.
    fn restore(&mut self, k: usize) {
        if let Some(value) = self.buffer.as_ref().map(|buffer| buffer[k]) {
            self.values[k] = value;
            self.record(
                Event::update(Entity::Index(k), Some(Entity::Buffer(k))),
                format!("Copied {} back to [{}]", value, k),
            );
        }
    }

    fn finish(mut self) -> SortOutcome {
        self.window = None;
        self.record(Event::Complete, format!("{} completed", self.name));
        tracing::debug!(
            algorithm = self.name,
            frames = self.recorder.len(),
            elements = self.values.len(),
            "sort complete"
        );
        Outcome::new(self.values, self.recorder.finish())
    }
}
