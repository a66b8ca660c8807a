//! Snapshots and the append-only trace an engine builds during one run.
//!
//! Engines record through a [`Recorder`], which only accepts owned frame
//! values. A [`Trace`] can only be produced by [`Recorder::finish`], after
//! which it is read-only. Because every frame is an owned deep copy, seeking
//! to frame `k` is plain indexing.

use crate::event::{Event, EventKind};

/// One instant of an engine run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot<S> {
    /// What happened.
    pub event: Event,
    /// Owned copy of the state needed to render this instant.
    pub state: S,
    /// Human-readable status line.
    pub status: String,
}

impl<S> Snapshot<S> {
    /// Tag of the recorded event.
    #[inline]
    pub fn kind(&self) -> EventKind {
        self.event.kind()
    }
}

/// A finished, ordered, immutable sequence of snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trace<S> {
    snapshots: Vec<Snapshot<S>>,
}

impl<S> Trace<S> {
    /// Number of frames.
    #[inline]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Frame `k`, if `k < len()`.
    #[inline]
    pub fn get(&self, k: usize) -> Option<&Snapshot<S>> {
        self.snapshots.get(k)
    }

    /// First frame.
    pub fn first(&self) -> Option<&Snapshot<S>> {
        self.snapshots.first()
    }

    /// Final frame.
    pub fn last(&self) -> Option<&Snapshot<S>> {
        self.snapshots.last()
    }

    /// Frames in recording order.
    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot<S>> {
        self.snapshots.iter()
    }

    /// All frames as a slice.
    pub fn as_slice(&self) -> &[Snapshot<S>] {
        &self.snapshots
    }

    /// Number of frames tagged `kind`.
    pub fn count(&self, kind: EventKind) -> usize {
        self.snapshots.iter().filter(|s| s.kind() == kind).count()
    }

    /// Event tags in recording order.
    pub fn kinds(&self) -> Vec<EventKind> {
        self.snapshots.iter().map(Snapshot::kind).collect()
    }
}

impl<S> std::ops::Index<usize> for Trace<S> {
    type Output = Snapshot<S>;

    fn index(&self, k: usize) -> &Snapshot<S> {
        &self.snapshots[k]
    }
}

impl<'a, S> IntoIterator for &'a Trace<S> {
    type Item = &'a Snapshot<S>;
    type IntoIter = std::slice::Iter<'a, Snapshot<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshots.iter()
    }
}

/// Append-only builder for a [`Trace`].
#[derive(Debug)]
pub struct Recorder<S> {
    snapshots: Vec<Snapshot<S>>,
}

impl<S> Default for Recorder<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Recorder<S> {
    pub fn new() -> Self {
        Self {
            snapshots: Vec::new(),
        }
    }

    /// Append one snapshot. The state is moved in, never borrowed.
    pub fn record(&mut self, event: Event, state: S, status: impl Into<String>) {
        self.snapshots.push(Snapshot {
            event,
            state,
            status: status.into(),
        });
    }

    /// Frames recorded so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Seal the recording.
    pub fn finish(self) -> Trace<S> {
        Trace {
            snapshots: self.snapshots,
        }
    }
}

/// An engine's final result together with its full trace.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outcome<R, S> {
    pub result: R,
    pub trace: Trace<S>,
}

impl<R, S> Outcome<R, S> {
    pub fn new(result: R, trace: Trace<S>) -> Self {
        Self { result, trace }
    }

    /// Split into `(result, trace)`.
    pub fn into_parts(self) -> (R, Trace<S>) {
        (self.result, self.trace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Entity;

    #[test]
    fn recorder_preserves_order() {
        let mut recorder = Recorder::new();
        recorder.record(Event::Init, vec![3, 1], "start");
        recorder.record(Event::swap(Entity::Index(0), Entity::Index(1)), vec![1, 3], "swap");
        recorder.record(Event::Complete, vec![1, 3], "done");
        let trace = recorder.finish();

        assert_eq!(trace.len(), 3);
        assert_eq!(
            trace.kinds(),
            vec![EventKind::Init, EventKind::Swap, EventKind::Complete]
        );
        assert_eq!(trace[1].status, "swap");
        assert_eq!(trace.count(EventKind::Swap), 1);
    }

    #[test]
    fn recorded_state_is_independent_of_working_state() {
        let mut working = vec![5, 4];
        let mut recorder = Recorder::new();
        recorder.record(Event::Init, working.clone(), "before");
        working.swap(0, 1);
        working[0] = 99;
        let trace = recorder.finish();

        assert_eq!(trace[0].state, vec![5, 4]);
    }

    #[test]
    fn get_is_bounded() {
        let mut recorder = Recorder::new();
        recorder.record(Event::Init, (), "only");
        let trace = recorder.finish();

        assert!(trace.get(0).is_some());
        assert!(trace.get(1).is_none());
        assert_eq!(trace.first(), trace.last());
    }

    #[test]
    fn outcome_splits() {
        let mut recorder: Recorder<()> = Recorder::new();
        recorder.record(Event::Complete, (), "done");
        let (result, trace) = Outcome::new(7, recorder.finish()).into_parts();
        assert_eq!(result, 7);
        assert_eq!(trace.len(), 1);
    }
}
