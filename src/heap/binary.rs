//! Array-backed binary heap with a pluggable comparator.

use std::cmp::Ordering;

use crate::Container;
use crate::capacities;
use crate::comparator::Comparator;

/// A binary min-heap ordered by a [`Comparator`].
///
/// Node `i` parents `2i + 1` and `2i + 2`; the comparator's smallest element
/// sits at the root. A max-heap is the same structure under a reversed
/// comparator ([`Comparator::reversed`]). `push`/`poll` are O(log n),
/// [`Self::from_vec`] heapifies bottom-up in O(n).
#[derive(Clone, Debug)]
pub struct BinaryHeap<T> {
    data: Vec<T>,
    cmp: Comparator<T>,
}

impl<T> BinaryHeap<T> {
    /// Creates an empty heap ordered by the element type's natural order.
    pub fn new() -> Self
    where
        T: Ord,
    {
        Self::with_comparator(Comparator::natural())
    }

    /// Creates an empty heap ordered by the given comparator.
    pub fn with_comparator(cmp: Comparator<T>) -> Self {
        Self::with_capacity_and_comparator(capacities::DEFAULT_HEAP_CAPACITY, cmp)
    }

    /// Creates an empty heap with room for `capacity` elements.
    pub fn with_capacity_and_comparator(capacity: usize, cmp: Comparator<T>) -> Self {
        Self { data: Vec::with_capacity(capacity), cmp }
    }

    /// Heapifies a vector bottom-up in O(n).
    pub fn from_vec(data: Vec<T>) -> Self
    where
        T: Ord,
    {
        Self::from_vec_with_comparator(data, Comparator::natural())
    }

    /// Heapifies a vector bottom-up under the given comparator.
    pub fn from_vec_with_comparator(data: Vec<T>, cmp: Comparator<T>) -> Self {
        let mut heap = Self { data, cmp };
        if heap.data.len() > 1 {
            for i in (0..=(heap.data.len() - 2) / 2).rev() {
                heap.sift_down(i);
            }
        }
        heap
    }

    /// Builds a heap by converting each raw record of the iterator.
    pub fn from_iter_with<R, I, F>(iter: I, f: F, cmp: Comparator<T>) -> Self
    where
        I: IntoIterator<Item = R>,
        F: FnMut(R) -> T,
    {
        Self::from_vec_with_comparator(iter.into_iter().map(f).collect(), cmp)
    }

    /// The comparator ordering this heap.
    pub fn comparator(&self) -> &Comparator<T> {
        &self.cmp
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Inserts an element and sifts it up.
    pub fn push(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the root (the comparator's smallest element).
    pub fn poll(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        let last = self.data.len() - 1;
        self.data.swap(0, last);
        let top = self.data.pop();
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        top
    }

    /// The root without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// The last element of the backing array (a deepest leaf).
    pub fn leaf(&self) -> Option<&T> {
        self.data.last()
    }

    /// True when a comparator-equal element is present. O(n).
    pub fn contains(&self, value: &T) -> bool {
        self.data.iter().any(|x| self.cmp.eq(x, value))
    }

    /// Removes the first comparator-equal element. O(n) search plus a
    /// sift. True when one was removed.
    pub fn remove(&mut self, value: &T) -> bool {
        let Some(pos) = self.data.iter().position(|x| self.cmp.eq(x, value)) else {
            return false;
        };
        let last = self.data.len() - 1;
        self.data.swap(pos, last);
        self.data.pop();
        if pos < self.data.len() {
            // The displaced element may violate in either direction.
            self.sift_down(pos);
            self.sift_up(pos);
        }
        true
    }

    /// Elements in heap-shape order (the backing array).
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Ascending drain of a clone; the receiver is untouched.
    pub fn sorted(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut clone = self.clone();
        let mut out = Vec::with_capacity(clone.len());
        while let Some(x) = clone.poll() {
            out.push(x);
        }
        out
    }

    /// New heap holding the elements the predicate accepts.
    pub fn filter<F>(&self, mut pred: F) -> Self
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        Self::from_vec_with_comparator(
            self.data.iter().filter(|x| pred(x)).cloned().collect(),
            self.cmp.clone(),
        )
    }

    /// New heap with every element transformed; result elements use their
    /// natural order.
    pub fn map<U, F>(&self, f: F) -> BinaryHeap<U>
    where
        U: Ord,
        F: FnMut(&T) -> U,
    {
        self.map_with(Comparator::natural(), f)
    }

    /// Like [`Self::map`] with an explicit comparator for the result.
    pub fn map_with<U, F>(&self, cmp: Comparator<U>, f: F) -> BinaryHeap<U>
    where
        F: FnMut(&T) -> U,
    {
        BinaryHeap::from_vec_with_comparator(self.data.iter().map(f).collect(), cmp)
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.cmp.compare(&self.data[i], &self.data[parent]) == Ordering::Less {
                self.data.swap(i, parent);
                i = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * i + 1;
            let right = 2 * i + 2;
            let mut smallest = i;
            if left < len
                && self.cmp.compare(&self.data[left], &self.data[smallest]) == Ordering::Less
            {
                smallest = left;
            }
            if right < len
                && self.cmp.compare(&self.data[right], &self.data[smallest]) == Ordering::Less
            {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.data.swap(i, smallest);
            i = smallest;
        }
    }

    /// Every parent orders at or before its children.
    #[cfg(test)]
    pub(crate) fn is_valid_heap(&self) -> bool {
        (1..self.data.len()).all(|i| {
            self.cmp.compare(&self.data[(i - 1) / 2], &self.data[i]) != Ordering::Greater
        })
    }
}

impl<T: Ord> Default for BinaryHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Container for BinaryHeap<T> {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn clear(&mut self) {
        self.data.clear();
    }
}

impl<'a, T> IntoIterator for &'a BinaryHeap<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_poll_ordering() {
        let mut heap = BinaryHeap::new();
        for x in [5, 1, 4, 2, 3] {
            heap.push(x);
            assert!(heap.is_valid_heap());
        }
        assert_eq!(heap.peek(), Some(&1));
        let mut drained = Vec::new();
        while let Some(x) = heap.poll() {
            drained.push(x);
        }
        assert_eq!(drained, vec![1, 2, 3, 4, 5]);
        assert_eq!(heap.poll(), None);
    }

    #[test]
    fn test_heapify_is_valid() {
        let heap = BinaryHeap::from_vec(vec![9, 3, 7, 1, 8, 2, 5]);
        assert!(heap.is_valid_heap());
        assert_eq!(heap.peek(), Some(&1));
        assert_eq!(heap.sorted(), vec![1, 2, 3, 5, 7, 8, 9]);
        // sorted() leaves the heap intact
        assert_eq!(heap.len(), 7);
    }

    #[test]
    fn test_max_heap_via_reversed_comparator() {
        let cmp = Comparator::<i32>::natural().reversed();
        let mut heap = BinaryHeap::with_comparator(cmp);
        for x in [1, 6, 5, 2, 0, 9] {
            heap.push(x);
        }
        assert_eq!(heap.peek(), Some(&9));
        assert_eq!(heap.sorted(), vec![9, 6, 5, 2, 1, 0]);
    }

    #[test]
    fn test_remove_keeps_heap_valid() {
        let mut heap = BinaryHeap::from_vec(vec![1, 3, 2, 7, 4, 9, 8]);
        assert!(heap.remove(&3));
        assert!(heap.is_valid_heap());
        assert!(!heap.remove(&3));
        assert!(!heap.contains(&3));
        assert_eq!(heap.len(), 6);
        assert_eq!(heap.sorted(), vec![1, 2, 4, 7, 8, 9]);
    }

    #[test]
    fn test_filter_and_map() {
        let heap = BinaryHeap::from_vec((1..=10).collect());
        let odds = heap.filter(|x| x % 2 == 1);
        assert!(odds.is_valid_heap());
        assert_eq!(odds.sorted(), vec![1, 3, 5, 7, 9]);

        let tenths = heap.map(|x| x * 10);
        assert_eq!(tenths.peek(), Some(&10));
        assert_eq!(tenths.len(), 10);
    }

    #[test]
    fn test_from_iter_with_extractor() {
        let records = [("a", 3), ("b", 1), ("c", 2)];
        let heap = BinaryHeap::from_iter_with(records, |(_, n)| n, Comparator::natural());
        assert_eq!(heap.sorted(), vec![1, 2, 3]);
    }

    #[test]
    fn test_heap_property_invariant() {
        use rand::{Rng, SeedableRng, rngs::StdRng};

        let mut rng = StdRng::seed_from_u64(42);
        let mut heap = BinaryHeap::new();
        for _ in 0..500 {
            if rng.gen_bool(0.7) || heap.is_empty() {
                heap.push(rng.gen_range(0..1000));
            } else {
                let top = *heap.peek().unwrap();
                let polled = heap.poll().unwrap();
                assert_eq!(top, polled);
            }
            assert!(heap.is_valid_heap());
        }
    }
}
