//! Ordered set over the red-black engine.

use crate::Container;
use crate::comparator::Comparator;
use crate::error::ContainerResult;

use super::core::{BalanceMode, TreeCore};
use super::{IterationKind, TreeKeys};

/// A sorted set of keys.
///
/// The engine stores unit values, so a set node carries nothing beyond its
/// key. Iteration is ascending; the set algebra follows comparator equality,
/// and the operand sets are never modified.
#[derive(Clone, Debug)]
pub struct TreeSet<T> {
    core: TreeCore<T, ()>,
}

impl<T> TreeSet<T> {
    /// Creates an empty set ordered by the element type's natural order.
    pub fn new() -> Self
    where
        T: Ord,
    {
        Self::with_comparator(Comparator::natural())
    }

    /// Creates an empty set ordered by the given comparator.
    pub fn with_comparator(cmp: Comparator<T>) -> Self {
        Self { core: TreeCore::new(cmp, BalanceMode::RedBlack) }
    }

    /// Selects the traversal engine used by [`Self::dfs`].
    pub fn with_iteration_kind(mut self, kind: IterationKind) -> Self {
        self.core.set_iteration_kind(kind);
        self
    }

    /// Builds a set from an iterator of elements.
    pub fn from_elements<I>(elements: I) -> ContainerResult<Self>
    where
        T: Ord,
        I: IntoIterator<Item = T>,
    {
        let mut set = Self::new();
        for x in elements {
            set.insert(x)?;
        }
        Ok(set)
    }

    /// The comparator ordering this set.
    pub fn comparator(&self) -> &Comparator<T> {
        self.core.comparator()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.core.len()
    }

    /// True when the set is empty.
    pub fn is_empty(&self) -> bool {
        self.core.is_empty()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Inserts an element. `Ok(true)` when it was not already present.
    /// Fails with `InvalidKey` (set unchanged) when the comparator's
    /// validity policy rejects it.
    pub fn insert(&mut self, value: T) -> ContainerResult<bool> {
        Ok(self.core.insert(value, ())?.is_none())
    }

    /// True when a comparator-equal element is present.
    pub fn contains(&self, value: &T) -> bool {
        self.core.contains(value)
    }

    /// Removes a comparator-equal element. True when one was present.
    pub fn remove(&mut self, value: &T) -> bool {
        self.core.remove(value).is_some()
    }

    /// Removes and returns the stored element equal to `value`.
    pub fn take(&mut self, value: &T) -> Option<T> {
        self.core.remove_entry(value).map(|(k, ())| k)
    }

    /// Smallest element. O(1).
    pub fn first(&self) -> Option<&T> {
        self.core.first().map(|(k, _)| k)
    }

    /// Largest element. O(1).
    pub fn last(&self) -> Option<&T> {
        self.core.last().map(|(k, _)| k)
    }

    /// Removes and returns the smallest element.
    pub fn poll_first(&mut self) -> Option<T> {
        self.core.poll_first().map(|(k, _)| k)
    }

    /// Removes and returns the largest element.
    pub fn poll_last(&mut self) -> Option<T> {
        self.core.poll_last().map(|(k, _)| k)
    }

    /// Greatest element `<= value`.
    pub fn floor(&self, value: &T) -> Option<&T> {
        self.core.floor(value).map(|(k, _)| k)
    }

    /// Least element `>= value`.
    pub fn ceiling(&self, value: &T) -> Option<&T> {
        self.core.ceiling(value).map(|(k, _)| k)
    }

    /// Greatest element strictly below `value`.
    pub fn lower(&self, value: &T) -> Option<&T> {
        self.core.lower(value).map(|(k, _)| k)
    }

    /// Least element strictly above `value`.
    pub fn higher(&self, value: &T) -> Option<&T> {
        self.core.higher(value).map(|(k, _)| k)
    }

    /// Ascending iterator over the closed range `[lo, hi]`.
    pub fn range(&self, lo: &T, hi: &T) -> TreeKeys<'_, T, ()> {
        TreeKeys { inner: self.core.range(lo, hi) }
    }

    /// Ascending element iterator.
    pub fn iter(&self) -> TreeKeys<'_, T, ()> {
        TreeKeys { inner: self.core.iter() }
    }

    /// Depth-first traversal in the given visit order, on the configured
    /// traversal engine.
    pub fn dfs<F>(&self, order: crate::tree::DfsOrder, mut visit: F)
    where
        F: FnMut(&T),
    {
        self.core.dfs(order, |k, _| visit(k));
    }

    /// Breadth-first traversal from the root.
    pub fn bfs<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        self.core.bfs(|k, _| visit(k));
    }

    /// Number of levels (0 when empty).
    pub fn height(&self) -> usize {
        self.core.height()
    }

    /// True when an in-order walk yields strictly increasing elements.
    pub fn is_bst(&self) -> bool {
        self.core.is_bst()
    }

    /// Elements present in either set.
    pub fn union(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        let mut out = self.clone();
        for x in other.iter() {
            let _ = out.core.insert(x.clone(), ());
        }
        out
    }

    /// Elements present in both sets.
    pub fn intersection(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        let mut out = Self::with_comparator(self.core.comparator().clone());
        for x in self.iter() {
            if other.contains(x) {
                let _ = out.core.insert(x.clone(), ());
            }
        }
        out
    }

    /// Elements of `self` absent from `other`.
    pub fn difference(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        let mut out = Self::with_comparator(self.core.comparator().clone());
        for x in self.iter() {
            if !other.contains(x) {
                let _ = out.core.insert(x.clone(), ());
            }
        }
        out
    }

    /// Elements present in exactly one of the sets.
    pub fn symmetric_difference(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        let mut out = self.difference(other);
        for x in other.iter() {
            if !self.contains(x) {
                let _ = out.core.insert(x.clone(), ());
            }
        }
        out
    }

    /// True when every element of `self` is in `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.iter().all(|x| other.contains(x))
    }

    /// True when every element of `other` is in `self`.
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// True when the sets share no element.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.iter().all(|x| !other.contains(x))
    }

    /// New set holding the elements the predicate accepts.
    pub fn filter<F>(&self, mut pred: F) -> Self
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        let mut out = Self::with_comparator(self.core.comparator().clone());
        for x in self.iter() {
            if pred(x) {
                let _ = out.core.insert(x.clone(), ());
            }
        }
        out
    }

    /// New set with every element transformed; result elements use their
    /// natural order.
    pub fn map<U, F>(&self, mut f: F) -> TreeSet<U>
    where
        U: Ord,
        F: FnMut(&T) -> U,
    {
        let mut out = TreeSet::<U>::new();
        for x in self.iter() {
            let _ = out.core.insert(f(x), ());
        }
        out
    }
}

impl<T: Ord> Default for TreeSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Container for TreeSet<T> {
    fn len(&self) -> usize {
        self.core.len()
    }

    fn clear(&mut self) {
        self.core.clear();
    }
}

impl<'a, T> IntoIterator for &'a TreeSet<T> {
    type Item = &'a T;
    type IntoIter = TreeKeys<'a, T, ()>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let mut set = TreeSet::new();
        assert!(set.insert(3).unwrap());
        assert!(set.insert(1).unwrap());
        assert!(set.insert(2).unwrap());
        assert!(!set.insert(2).unwrap());

        assert_eq!(set.len(), 3);
        assert!(set.contains(&2));
        assert!(!set.contains(&4));

        let values: Vec<i32> = set.iter().copied().collect();
        assert_eq!(values, vec![1, 2, 3]);

        assert!(set.remove(&2));
        assert!(!set.remove(&4));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_min_max_and_polls() {
        let mut set = TreeSet::new();
        assert_eq!(set.first(), None);
        for x in [5, 1, 9] {
            set.insert(x).unwrap();
        }
        assert_eq!(set.first(), Some(&1));
        assert_eq!(set.last(), Some(&9));
        assert_eq!(set.poll_first(), Some(1));
        assert_eq!(set.poll_last(), Some(9));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_set_algebra() {
        let a = TreeSet::from_elements(1..=5).unwrap();
        let b = TreeSet::from_elements(3..=7).unwrap();

        let union = a.union(&b);
        assert_eq!(union.iter().copied().collect::<Vec<_>>(), (1..=7).collect::<Vec<_>>());

        let inter = a.intersection(&b);
        assert_eq!(inter.iter().copied().collect::<Vec<_>>(), vec![3, 4, 5]);

        let diff = a.difference(&b);
        assert_eq!(diff.iter().copied().collect::<Vec<_>>(), vec![1, 2]);

        let sym = a.symmetric_difference(&b);
        assert_eq!(sym.iter().copied().collect::<Vec<_>>(), vec![1, 2, 6, 7]);

        assert!(inter.is_subset(&a));
        assert!(a.is_superset(&inter));
        assert!(diff.is_disjoint(&b));
    }

    #[test]
    fn test_range_and_navigation() {
        let set = TreeSet::from_elements((0..50).map(|x| x * 2)).unwrap();
        let window: Vec<i32> = set.range(&10, &20).copied().collect();
        assert_eq!(window, vec![10, 12, 14, 16, 18, 20]);
        assert_eq!(set.floor(&11), Some(&10));
        assert_eq!(set.ceiling(&11), Some(&12));
        assert_eq!(set.lower(&10), Some(&8));
        assert_eq!(set.higher(&98), None);
    }

    #[test]
    fn test_reverse_comparator() {
        let mut set = TreeSet::with_comparator(Comparator::<i32>::reverse());
        for x in [1, 3, 2] {
            set.insert(x).unwrap();
        }
        let values: Vec<i32> = set.iter().copied().collect();
        assert_eq!(values, vec![3, 2, 1]);
        assert_eq!(set.first(), Some(&3));
    }
}
