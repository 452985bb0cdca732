use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityEntry<T> {
    pub item: T,
    pub key: f64,
    seq: u64,
}

impl<T> PriorityEntry<T> {
    fn pops_before(&self, other: &Self) -> bool {
        self.key
            .total_cmp(&other.key)
            .then(self.seq.cmp(&other.seq))
            == Ordering::Less
    }
}

/// Min-priority queue with lazy deletion.
///
/// Equal keys pop in insertion order. The same item may be queued several
/// times with different keys; consumers discard entries that are already
/// settled. Entries are kept sorted with the minimum last, so the whole queue
/// can be inspected in pop order and compared for equality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinPriorityQueue<T> {
    entries: Vec<PriorityEntry<T>>,
    next_seq: u64,
}

impl<T> Default for MinPriorityQueue<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 0,
        }
    }
}

impl<T> MinPriorityQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: T, key: f64) {
        let entry = PriorityEntry {
            item,
            key,
            seq: self.next_seq,
        };
        self.next_seq += 1;

        let at = self.entries.partition_point(|e| entry.pops_before(e));
        self.entries.insert(at, entry);
    }

    pub fn pop_min(&mut self) -> Option<(T, f64)> {
        self.entries.pop().map(|e| (e.item, e.key))
    }

    pub fn peek_min(&self) -> Option<(&T, f64)> {
        self.entries.last().map(|e| (&e.item, e.key))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in pop order, minimum first.
    pub fn iter(&self) -> impl Iterator<Item = &PriorityEntry<T>> {
        self.entries.iter().rev()
    }
}
