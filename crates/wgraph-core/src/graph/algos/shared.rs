use crate::graph::types::Weight;
use crate::logging::TraversalMetrics;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Entry for the min-heap, ordered by key and then by insertion sequence
/// so that equal keys pop first-in first-out
#[derive(Debug, Clone)]
pub struct HeapEntry<T> {
    pub key: Weight,
    pub seq: u64,
    pub item: T,
}

impl<T> PartialEq for HeapEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.seq == other.seq
    }
}

impl<T> Eq for HeapEntry<T> {}

impl<T> PartialOrd for HeapEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for HeapEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key
            .cmp(&other.key)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Min-priority queue with lazy deletion.
///
/// Stale entries are never removed on insert; callers check their own
/// visited/finalized marker after each [`pop`](Self::pop) and drop what is
/// no longer wanted.
#[derive(Debug)]
pub struct LazyQueue<T> {
    heap: BinaryHeap<Reverse<HeapEntry<T>>>,
    next_seq: u64,
}

impl<T> LazyQueue<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn push(&mut self, key: Weight, item: T, metrics: &mut TraversalMetrics) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(HeapEntry { key, seq, item }));
        metrics.record_push();
    }

    /// Remove the entry with the smallest key, returning `(key, item)`
    pub fn pop(&mut self) -> Option<(Weight, T)> {
        self.heap
            .pop()
            .map(|Reverse(HeapEntry { key, item, .. })| (key, item))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T> Default for LazyQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
