//! Stable min-priority queue shared by Dijkstra and Prim.
//!
//! Entries are ordered by `(priority, insertion sequence)`: the smallest
//! priority comes out first, and among equal priorities the entry inserted
//! earliest comes out first. The sequence number is assigned on push and is
//! unique per queue, so the order is total and never depends on the payload
//! or on heap internals.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

#[derive(Debug, Clone)]
struct Entry<P, T> {
    priority: P,
    seq: u64,
    item: T,
}

impl<P: Ord, T> Entry<P, T> {
    fn rank(&self) -> (&P, u64) {
        (&self.priority, self.seq)
    }
}

impl<P: Ord, T> PartialEq for Entry<P, T> {
    fn eq(&self, other: &Self) -> bool {
        self.rank() == other.rank()
    }
}

impl<P: Ord, T> Eq for Entry<P, T> {}

impl<P: Ord, T> PartialOrd for Entry<P, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: Ord, T> Ord for Entry<P, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

/// Min-queue with first-in-first-out tie breaking.
#[derive(Debug, Clone)]
pub struct StableMinQueue<P, T> {
    heap: BinaryHeap<Reverse<Entry<P, T>>>,
    next_seq: u64,
}

impl<P: Ord, T> Default for StableMinQueue<P, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Ord, T> StableMinQueue<P, T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn push(&mut self, priority: P, item: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Entry { priority, seq, item }));
    }

    /// Remove the minimum entry.
    pub fn pop(&mut self) -> Option<(P, T)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.priority, entry.item))
    }

    /// The entry `pop` would return next.
    pub fn peek(&self) -> Option<(&P, &T)> {
        self.heap
            .peek()
            .map(|Reverse(entry)| (&entry.priority, &entry.item))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<P: Ord + Clone, T: Clone> StableMinQueue<P, T> {
    /// Owned copy of the contents in extraction order. The queue is untouched.
    pub fn snapshot(&self) -> Vec<(P, T)> {
        let mut entries: Vec<&Entry<P, T>> = self.heap.iter().map(|Reverse(entry)| entry).collect();
        entries.sort();
        entries
            .into_iter()
            .map(|entry| (entry.priority.clone(), entry.item.clone()))
            .collect()
    }
}
