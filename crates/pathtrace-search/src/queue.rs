//! Stable min-priority queue.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

struct Entry<T> {
    priority: i32,
    seq: u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest priority first,
        // and among equal priorities the earliest insertion.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A min-priority queue that is first-in-first-out among equal priorities.
///
/// There is no decrease-key: re-enqueue an item when its priority improves
/// and skip the stale copies when they are dequeued.
pub struct PriorityQueue<T> {
    heap: BinaryHeap<Entry<T>>,
    seq: u64,
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            seq: 0,
        }
    }

    /// Insert `item` behind every entry whose priority is `<= priority`.
    pub fn enqueue(&mut self, item: T, priority: i32) {
        self.heap.push(Entry {
            priority,
            seq: self.seq,
            item,
        });
        self.seq += 1;
    }

    /// Remove and return the lowest-priority item, or `None` when empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.heap.pop().map(|e| e.item)
    }

    /// Priority of the item [`dequeue`](Self::dequeue) would return next.
    pub fn peek_priority(&self) -> Option<i32> {
        self.heap.peek().map(|e| e.priority)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.seq = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dequeues_in_ascending_priority() {
        let mut q = PriorityQueue::new();
        q.enqueue("c", 3);
        q.enqueue("a", 1);
        q.enqueue("b", 2);
        assert_eq!(q.len(), 3);
        assert_eq!(q.peek_priority(), Some(1));
        assert_eq!(q.dequeue(), Some("a"));
        assert_eq!(q.dequeue(), Some("b"));
        assert_eq!(q.dequeue(), Some("c"));
        assert!(q.is_empty());
    }

    #[test]
    fn ties_are_first_in_first_out() {
        let mut q = PriorityQueue::new();
        for (i, p) in [5, 1, 5, 1, 5, 0].into_iter().enumerate() {
            q.enqueue(i, p);
        }
        let order: Vec<_> = std::iter::from_fn(|| q.dequeue()).collect();
        assert_eq!(order, vec![5, 1, 3, 0, 2, 4]);
    }

    #[test]
    fn fifo_holds_across_interleaved_dequeues() {
        let mut q = PriorityQueue::new();
        q.enqueue('a', 2);
        q.enqueue('b', 1);
        assert_eq!(q.dequeue(), Some('b'));
        q.enqueue('c', 2);
        q.enqueue('d', 2);
        assert_eq!(q.dequeue(), Some('a'));
        assert_eq!(q.dequeue(), Some('c'));
        assert_eq!(q.dequeue(), Some('d'));
    }

    #[test]
    fn empty_dequeue_is_none() {
        let mut q: PriorityQueue<u8> = PriorityQueue::default();
        assert_eq!(q.dequeue(), None);
        assert_eq!(q.peek_priority(), None);
        q.enqueue(1, 0);
        q.clear();
        assert!(q.is_empty());
        assert_eq!(q.dequeue(), None);
    }

    #[test]
    fn stale_entries_stay_queued() {
        // The same item may be queued many times; each copy is returned.
        let mut q = PriorityQueue::with_capacity(4);
        q.enqueue(7, 9);
        q.enqueue(7, 4);
        assert_eq!(q.dequeue(), Some(7));
        assert_eq!(q.dequeue(), Some(7));
        assert_eq!(q.dequeue(), None);
    }
}
