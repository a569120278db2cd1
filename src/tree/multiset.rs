//! Ordered multiset: one tree node per distinct element, with a count.

use crate::Container;
use crate::comparator::Comparator;
use crate::error::ContainerResult;

use super::core::{BalanceMode, TreeCore};
use super::TreeIter;

/// A sorted collection of elements with multiplicities.
///
/// Each distinct element occupies one node carrying its count, so memory is
/// proportional to the number of distinct elements. [`Self::len`] is the sum
/// of counts; [`Self::distinct_len`] is the node count. A count reaching
/// zero removes the node.
#[derive(Clone, Debug)]
pub struct TreeMultiSet<T> {
    core: TreeCore<T, usize>,
    total: usize,
}

impl<T> TreeMultiSet<T> {
    /// Creates an empty multiset ordered by the element type's natural
    /// order.
    pub fn new() -> Self
    where
        T: Ord,
    {
        Self::with_comparator(Comparator::natural())
    }

    /// Creates an empty multiset ordered by the given comparator.
    pub fn with_comparator(cmp: Comparator<T>) -> Self {
        Self { core: TreeCore::new(cmp, BalanceMode::RedBlack), total: 0 }
    }

    /// Builds a multiset from an iterator of elements.
    pub fn from_elements<I>(elements: I) -> ContainerResult<Self>
    where
        T: Ord,
        I: IntoIterator<Item = T>,
    {
        let mut set = Self::new();
        for x in elements {
            set.add(x)?;
        }
        Ok(set)
    }

    /// Total number of elements, multiplicities included.
    pub fn len(&self) -> usize {
        self.total
    }

    /// Number of distinct elements.
    pub fn distinct_len(&self) -> usize {
        self.core.len()
    }

    /// True when no element is present.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Removes everything.
    pub fn clear(&mut self) {
        self.core.clear();
        self.total = 0;
    }

    /// Adds one occurrence of `value`, returning its new count.
    pub fn add(&mut self, value: T) -> ContainerResult<usize> {
        self.add_n(value, 1)
    }

    /// Adds `n` occurrences of `value` (a no-op when `n == 0`), returning
    /// the new count.
    pub fn add_n(&mut self, value: T, n: usize) -> ContainerResult<usize> {
        if n == 0 {
            return Ok(self.count_of(&value));
        }
        if let Some(count) = self.core.get_mut(&value) {
            *count += n;
            self.total += n;
            return Ok(*count);
        }
        self.core.insert(value, n)?;
        self.total += n;
        Ok(n)
    }

    /// Multiplicity of `value` (0 when absent).
    pub fn count_of(&self, value: &T) -> usize {
        self.core.get(value).copied().unwrap_or(0)
    }

    /// True when at least one occurrence of `value` is present.
    pub fn contains(&self, value: &T) -> bool {
        self.core.contains(value)
    }

    /// Removes one occurrence of `value`. True when one was present.
    pub fn remove(&mut self, value: &T) -> bool {
        self.remove_n(value, 1) == 1
    }

    /// Removes up to `n` occurrences of `value`, returning how many were
    /// removed. The node disappears when its count reaches zero.
    pub fn remove_n(&mut self, value: &T, n: usize) -> usize {
        let Some(count) = self.core.get_mut(value) else {
            return 0;
        };
        if *count > n {
            *count -= n;
            self.total -= n;
            n
        } else {
            let removed = *count;
            self.core.remove(value);
            self.total -= removed;
            removed
        }
    }

    /// Removes every occurrence of `value`, returning the count removed.
    pub fn remove_all(&mut self, value: &T) -> usize {
        let removed = self.core.remove(value).unwrap_or(0);
        self.total -= removed;
        removed
    }

    /// Forces `value`'s count to `n` (`n == 0` removes it). Returns the
    /// previous count.
    pub fn set_count(&mut self, value: T, n: usize) -> ContainerResult<usize> {
        if n == 0 {
            return Ok(self.remove_all(&value));
        }
        if let Some(count) = self.core.get_mut(&value) {
            let prev = *count;
            *count = n;
            self.total = self.total - prev + n;
            return Ok(prev);
        }
        self.core.insert(value, n)?;
        self.total += n;
        Ok(0)
    }

    /// Smallest element and its count.
    pub fn first(&self) -> Option<(&T, usize)> {
        self.core.first().map(|(k, c)| (k, *c))
    }

    /// Largest element and its count.
    pub fn last(&self) -> Option<(&T, usize)> {
        self.core.last().map(|(k, c)| (k, *c))
    }

    /// Ascending iterator over `(element, count)` pairs.
    pub fn iter(&self) -> TreeIter<'_, T, usize> {
        TreeIter { inner: self.core.iter() }
    }

    /// Ascending iterator repeating each element by its multiplicity.
    pub fn expanded(&self) -> impl Iterator<Item = &T> + '_ {
        self.iter().flat_map(|(x, c)| std::iter::repeat(x).take(*c))
    }
}

impl<T: Ord> Default for TreeMultiSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Container for TreeMultiSet<T> {
    fn len(&self) -> usize {
        self.total
    }

    fn clear(&mut self) {
        TreeMultiSet::clear(self);
    }
}
