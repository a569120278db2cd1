//! Fibonacci heap: a forest with lazy consolidation.

use std::cmp::Ordering;

use log::trace;

use crate::Container;
use crate::comparator::Comparator;

#[derive(Clone, Debug)]
struct FibNode<T> {
    item: T,
    degree: usize,
    children: Vec<FibNode<T>>,
}

impl<T> FibNode<T> {
    fn singleton(item: T) -> Self {
        Self { item, degree: 0, children: Vec::new() }
    }
}

/// A Fibonacci heap: O(1) `push` and `merge`, amortized O(log n) `poll`.
///
/// New elements join the root list untouched; structure is only imposed
/// lazily when `poll` promotes the extracted minimum's children and then
/// consolidates, linking equal-degree roots until every root degree is
/// unique.
#[derive(Clone, Debug)]
pub struct FibonacciHeap<T> {
    roots: Vec<FibNode<T>>,
    min_idx: usize,
    len: usize,
    cmp: Comparator<T>,
}

impl<T> FibonacciHeap<T> {
    /// Creates an empty heap ordered by the element type's natural order.
    pub fn new() -> Self
    where
        T: Ord,
    {
        Self::with_comparator(Comparator::natural())
    }

    /// Creates an empty heap ordered by the given comparator.
    pub fn with_comparator(cmp: Comparator<T>) -> Self {
        Self { roots: Vec::new(), min_idx: 0, len: 0, cmp }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.roots.clear();
        self.min_idx = 0;
        self.len = 0;
    }

    /// Inserts an element as a fresh single-node tree. O(1).
    pub fn push(&mut self, item: T) {
        let is_new_min = self.roots.is_empty()
            || self.cmp.compare(&item, &self.roots[self.min_idx].item) == Ordering::Less;
        self.roots.push(FibNode::singleton(item));
        if is_new_min {
            self.min_idx = self.roots.len() - 1;
        }
        self.len += 1;
    }

    /// The smallest element without removing it. O(1).
    pub fn peek(&self) -> Option<&T> {
        self.roots.get(self.min_idx).map(|n| &n.item)
    }

    /// Removes and returns the smallest element, then consolidates the
    /// forest.
    pub fn poll(&mut self) -> Option<T> {
        if self.roots.is_empty() {
            return None;
        }
        let min = self.roots.swap_remove(self.min_idx);
        self.roots.extend(min.children);
        self.len -= 1;
        self.consolidate();
        Some(min.item)
    }

    /// Moves every element of `other` into `self`, leaving `other` empty.
    /// O(1): the root lists are spliced and the smaller minimum wins.
    pub fn merge(&mut self, other: &mut Self) {
        if other.roots.is_empty() {
            return;
        }
        let other_min_wins = self.roots.is_empty()
            || self.cmp.compare(&other.roots[other.min_idx].item, &self.roots[self.min_idx].item)
                == Ordering::Less;
        if other_min_wins {
            self.min_idx = self.roots.len() + other.min_idx;
        }
        self.roots.append(&mut other.roots);
        self.len += other.len;
        other.min_idx = 0;
        other.len = 0;
    }

    /// Links equal-degree roots until every root degree is unique, then
    /// relocates the minimum pointer.
    fn consolidate(&mut self) {
        if self.roots.is_empty() {
            self.min_idx = 0;
            return;
        }
        let before = self.roots.len();
        let mut by_degree: Vec<Option<FibNode<T>>> = Vec::new();
        for mut node in self.roots.drain(..) {
            loop {
                if by_degree.len() <= node.degree {
                    by_degree.resize_with(node.degree + 1, || None);
                }
                match by_degree[node.degree].take() {
                    None => {
                        let d = node.degree;
                        by_degree[d] = Some(node);
                        break;
                    }
                    Some(other) => {
                        node = Self::link(&self.cmp, node, other);
                    }
                }
            }
        }
        self.roots.extend(by_degree.into_iter().flatten());

        self.min_idx = 0;
        for i in 1..self.roots.len() {
            if self.cmp.compare(&self.roots[i].item, &self.roots[self.min_idx].item)
                == Ordering::Less
            {
                self.min_idx = i;
            }
        }
        trace!(
            "fibonacci heap consolidated {} roots into {}",
            before,
            self.roots.len()
        );
    }

    /// Makes the larger root a child of the smaller one.
    fn link(cmp: &Comparator<T>, a: FibNode<T>, b: FibNode<T>) -> FibNode<T> {
        let (mut parent, child) = if cmp.compare(&a.item, &b.item) == Ordering::Greater {
            (b, a)
        } else {
            (a, b)
        };
        parent.children.push(child);
        parent.degree += 1;
        parent
    }

    /// Every root degree is unique and every parent orders at or before
    /// its children.
    #[cfg(test)]
    fn is_consolidated(&self) -> bool {
        let mut seen = std::collections::HashSet::new();
        self.roots.iter().all(|r| seen.insert(r.degree) && self.subtree_ordered(r))
    }

    #[cfg(test)]
    fn subtree_ordered(&self, node: &FibNode<T>) -> bool {
        node.children.iter().all(|c| {
            self.cmp.compare(&node.item, &c.item) != Ordering::Greater && self.subtree_ordered(c)
        })
    }
}

impl<T: Ord> Default for FibonacciHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Container for FibonacciHeap<T> {
    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        FibonacciHeap::clear(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_peek_poll() {
        let mut heap = FibonacciHeap::new();
        assert_eq!(heap.peek(), None);
        for x in [7, 2, 9, 4, 1, 8] {
            heap.push(x);
        }
        assert_eq!(heap.len(), 6);
        assert_eq!(heap.peek(), Some(&1));

        let mut drained = Vec::new();
        while let Some(x) = heap.poll() {
            drained.push(x);
            assert!(heap.is_consolidated());
        }
        assert_eq!(drained, vec![1, 2, 4, 7, 8, 9]);
        assert!(heap.is_empty());
    }

    #[test]
    fn test_consolidation_unifies_degrees() {
        let mut heap = FibonacciHeap::new();
        for x in 0..64 {
            heap.push(x);
        }
        // Before the first poll the forest is 64 singletons.
        assert_eq!(heap.roots.len(), 64);
        assert_eq!(heap.poll(), Some(0));
        assert!(heap.is_consolidated());
        // 63 nodes consolidate into one tree per set bit.
        assert_eq!(heap.roots.len(), 63usize.count_ones() as usize);
    }

    #[test]
    fn test_merge_splices_and_keeps_min() {
        let mut a = FibonacciHeap::new();
        let mut b = FibonacciHeap::new();
        for x in [5, 3, 8] {
            a.push(x);
        }
        for x in [4, 1, 9] {
            b.push(x);
        }
        a.merge(&mut b);
        assert_eq!(a.len(), 6);
        assert!(b.is_empty());
        assert_eq!(a.peek(), Some(&1));

        let mut drained = Vec::new();
        while let Some(x) = a.poll() {
            drained.push(x);
        }
        assert_eq!(drained, vec![1, 3, 4, 5, 8, 9]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut heap = FibonacciHeap::new();
        for x in [2, 2, 1, 2] {
            heap.push(x);
        }
        let mut drained = Vec::new();
        while let Some(x) = heap.poll() {
            drained.push(x);
        }
        assert_eq!(drained, vec![1, 2, 2, 2]);
    }

    #[test]
    fn test_interleaved_operations() {
        use rand::{Rng, SeedableRng, rngs::StdRng};

        let mut rng = StdRng::seed_from_u64(7);
        let mut heap = FibonacciHeap::new();
        let mut shadow = std::collections::BinaryHeap::new();
        for _ in 0..400 {
            if rng.gen_bool(0.6) || shadow.is_empty() {
                let x: i32 = rng.gen_range(0..100);
                heap.push(x);
                shadow.push(std::cmp::Reverse(x));
            } else {
                assert_eq!(heap.poll(), shadow.pop().map(|r| r.0));
            }
            assert_eq!(heap.len(), shadow.len());
        }
    }
}
