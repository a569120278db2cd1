//! Priority queues over the binary heap.

use crate::Container;
use crate::comparator::Comparator;

use super::BinaryHeap;

/// A comparator-driven priority queue.
///
/// Thin wrapper over [`BinaryHeap`] with a queue-flavored surface: `add`,
/// `poll`, `peek`, a non-destructive `sorted` drain, and a static `heapify`
/// constructor. The front of the queue is the comparator's smallest element;
/// see [`MinPriorityQueue`] and [`MaxPriorityQueue`] for the fixed-order
/// variants.
#[derive(Clone, Debug)]
pub struct PriorityQueue<T> {
    heap: BinaryHeap<T>,
}

impl<T> PriorityQueue<T> {
    /// Creates an empty queue ordered by the element type's natural order.
    pub fn new() -> Self
    where
        T: Ord,
    {
        Self { heap: BinaryHeap::new() }
    }

    /// Creates an empty queue ordered by the given comparator.
    pub fn with_comparator(cmp: Comparator<T>) -> Self {
        Self { heap: BinaryHeap::with_comparator(cmp) }
    }

    /// Heapifies a vector in O(n).
    pub fn heapify(data: Vec<T>) -> Self
    where
        T: Ord,
    {
        Self { heap: BinaryHeap::from_vec(data) }
    }

    /// Heapifies a vector in O(n) under the given comparator.
    pub fn heapify_with_comparator(data: Vec<T>, cmp: Comparator<T>) -> Self {
        Self { heap: BinaryHeap::from_vec_with_comparator(data, cmp) }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// True when the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Enqueues an element.
    pub fn add(&mut self, value: T) {
        self.heap.push(value);
    }

    /// Dequeues the front element.
    pub fn poll(&mut self) -> Option<T> {
        self.heap.poll()
    }

    /// The front element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek()
    }

    /// A deepest leaf of the backing heap (the last array slot).
    pub fn leaf(&self) -> Option<&T> {
        self.heap.leaf()
    }

    /// True when a comparator-equal element is present. O(n).
    pub fn contains(&self, value: &T) -> bool {
        self.heap.contains(value)
    }

    /// Removes the first comparator-equal element. True when one was
    /// removed.
    pub fn remove(&mut self, value: &T) -> bool {
        self.heap.remove(value)
    }

    /// Front-to-back drain of a clone; the receiver is untouched.
    pub fn sorted(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.heap.sorted()
    }

    /// Drains the queue front to back.
    pub fn drain_sorted(&mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len());
        while let Some(x) = self.poll() {
            out.push(x);
        }
        out
    }

    /// Elements in heap-shape order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.heap.iter()
    }
}

impl<T: Ord> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Container for PriorityQueue<T> {
    fn len(&self) -> usize {
        self.heap.len()
    }

    fn clear(&mut self) {
        self.heap.clear();
    }
}

/// Priority queue that always dequeues the smallest element.
#[derive(Clone, Debug)]
pub struct MinPriorityQueue<T> {
    inner: PriorityQueue<T>,
}

impl<T: Ord> MinPriorityQueue<T> {
    /// Creates an empty min-queue.
    pub fn new() -> Self {
        Self { inner: PriorityQueue::with_comparator(Comparator::natural()) }
    }

    /// Heapifies a vector in O(n).
    pub fn heapify(data: Vec<T>) -> Self {
        Self { inner: PriorityQueue::heapify_with_comparator(data, Comparator::natural()) }
    }

    /// Enqueues an element.
    pub fn add(&mut self, value: T) {
        self.inner.add(value);
    }

    /// Dequeues the smallest element.
    pub fn poll(&mut self) -> Option<T> {
        self.inner.poll()
    }

    /// The smallest element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.inner.peek()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// True when empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Ascending drain of a clone.
    pub fn sorted(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.inner.sorted()
    }
}

impl<T: Ord> Default for MinPriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Priority queue that always dequeues the largest element.
#[derive(Clone, Debug)]
pub struct MaxPriorityQueue<T> {
    inner: PriorityQueue<T>,
}

impl<T: Ord> MaxPriorityQueue<T> {
    /// Creates an empty max-queue.
    pub fn new() -> Self {
        Self { inner: PriorityQueue::with_comparator(Comparator::reverse()) }
    }

    /// Heapifies a vector in O(n).
    pub fn heapify(data: Vec<T>) -> Self {
        Self { inner: PriorityQueue::heapify_with_comparator(data, Comparator::reverse()) }
    }

    /// Enqueues an element.
    pub fn add(&mut self, value: T) {
        self.inner.add(value);
    }

    /// Dequeues the largest element.
    pub fn poll(&mut self) -> Option<T> {
        self.inner.poll()
    }

    /// The largest element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.inner.peek()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// True when empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Descending drain of a clone.
    pub fn sorted(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.inner.sorted()
    }
}

impl<T: Ord> Default for MaxPriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Task {
        key: i32,
    }

    #[test]
    fn test_custom_comparator_drain() {
        let cmp = Comparator::new("by-key-desc", |a: &Task, b: &Task| b.key.cmp(&a.key));
        let mut pq = PriorityQueue::with_comparator(cmp);
        for key in [1, 6, 5, 2, 0, 9] {
            pq.add(Task { key });
        }
        let drained: Vec<i32> = pq.drain_sorted().into_iter().map(|t| t.key).collect();
        assert_eq!(drained, vec![9, 6, 5, 2, 1, 0]);
        assert!(pq.is_empty());
    }

    #[test]
    fn test_min_and_max_variants() {
        let mut min = MinPriorityQueue::new();
        let mut max = MaxPriorityQueue::new();
        for x in [4, 1, 3, 2] {
            min.add(x);
            max.add(x);
        }
        assert_eq!(min.peek(), Some(&1));
        assert_eq!(max.peek(), Some(&4));
        assert_eq!(min.sorted(), vec![1, 2, 3, 4]);
        assert_eq!(max.sorted(), vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_heapify_and_leaf() {
        let pq = PriorityQueue::heapify(vec![5, 2, 8, 1]);
        assert_eq!(pq.peek(), Some(&1));
        assert!(pq.leaf().is_some());
        assert_eq!(pq.len(), 4);
    }

    #[test]
    fn test_contains_and_remove() {
        let mut pq = PriorityQueue::heapify(vec![3, 1, 4, 1, 5]);
        assert!(pq.contains(&4));
        assert!(pq.remove(&4));
        assert!(!pq.contains(&4));
        assert_eq!(pq.sorted(), vec![1, 1, 3, 5]);
    }
}
