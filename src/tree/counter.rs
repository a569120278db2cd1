//! Ordered counter: sorted keys with per-key tallies.

use crate::Container;
use crate::comparator::Comparator;
use crate::error::ContainerResult;

use super::core::{BalanceMode, TreeCore};
use super::TreeIter;

/// A sorted tally of keys.
///
/// Same storage as [`TreeMultiSet`](crate::TreeMultiSet) — one red-black
/// node per key with a count — with a counting-flavored surface:
/// `increment`/`decrement` and most-common queries. A count reaching zero
/// removes the key.
#[derive(Clone, Debug)]
pub struct TreeCounter<K> {
    core: TreeCore<K, usize>,
    total: usize,
}

impl<K> TreeCounter<K> {
    /// Creates an empty counter ordered by the key type's natural order.
    pub fn new() -> Self
    where
        K: Ord,
    {
        Self::with_comparator(Comparator::natural())
    }

    /// Creates an empty counter ordered by the given comparator.
    pub fn with_comparator(cmp: Comparator<K>) -> Self {
        Self { core: TreeCore::new(cmp, BalanceMode::RedBlack), total: 0 }
    }

    /// Tallies every key of the iterator.
    pub fn from_keys<I>(keys: I) -> ContainerResult<Self>
    where
        K: Ord,
        I: IntoIterator<Item = K>,
    {
        let mut counter = Self::new();
        for k in keys {
            counter.increment(k)?;
        }
        Ok(counter)
    }

    /// Sum of all counts.
    pub fn len(&self) -> usize {
        self.total
    }

    /// Number of distinct keys.
    pub fn distinct_len(&self) -> usize {
        self.core.len()
    }

    /// True when every count is zero.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Resets the counter.
    pub fn clear(&mut self) {
        self.core.clear();
        self.total = 0;
    }

    /// Adds 1 to `key`'s count, returning the new count.
    pub fn increment(&mut self, key: K) -> ContainerResult<usize> {
        self.increment_by(key, 1)
    }

    /// Adds `n` to `key`'s count (no-op when `n == 0`), returning the new
    /// count.
    pub fn increment_by(&mut self, key: K, n: usize) -> ContainerResult<usize> {
        if n == 0 {
            return Ok(self.count_of(&key));
        }
        if let Some(count) = self.core.get_mut(&key) {
            *count += n;
            self.total += n;
            return Ok(*count);
        }
        self.core.insert(key, n)?;
        self.total += n;
        Ok(n)
    }

    /// Subtracts 1 from `key`'s count, returning the new count. The key is
    /// removed when its count reaches zero.
    pub fn decrement(&mut self, key: &K) -> usize {
        self.decrement_by(key, 1)
    }

    /// Subtracts up to `n` from `key`'s count, returning the new count.
    pub fn decrement_by(&mut self, key: &K, n: usize) -> usize {
        let Some(count) = self.core.get_mut(key) else {
            return 0;
        };
        if *count > n {
            *count -= n;
            self.total -= n;
            *count
        } else {
            let removed = *count;
            self.core.remove(key);
            self.total -= removed;
            0
        }
    }

    /// Current count for `key` (0 when absent).
    pub fn count_of(&self, key: &K) -> usize {
        self.core.get(key).copied().unwrap_or(0)
    }

    /// True when `key` has a nonzero count.
    pub fn contains(&self, key: &K) -> bool {
        self.core.contains(key)
    }

    /// Forces `key`'s count (`n == 0` removes it). Returns the previous
    /// count.
    pub fn set_count(&mut self, key: K, n: usize) -> ContainerResult<usize> {
        if n == 0 {
            let prev = self.core.remove(&key).unwrap_or(0);
            self.total -= prev;
            return Ok(prev);
        }
        if let Some(count) = self.core.get_mut(&key) {
            let prev = *count;
            *count = n;
            self.total = self.total - prev + n;
            return Ok(prev);
        }
        self.core.insert(key, n)?;
        self.total += n;
        Ok(0)
    }

    /// Removes `key` entirely, returning its count.
    pub fn remove(&mut self, key: &K) -> usize {
        let removed = self.core.remove(key).unwrap_or(0);
        self.total -= removed;
        removed
    }

    /// The key with the highest count, ties broken by key order.
    pub fn most_common(&self) -> Option<(&K, usize)> {
        let mut best: Option<(&K, usize)> = None;
        for (k, c) in self.iter() {
            if best.map(|(_, bc)| *c > bc).unwrap_or(true) {
                best = Some((k, *c));
            }
        }
        best
    }

    /// Ascending iterator over `(key, count)` pairs.
    pub fn iter(&self) -> TreeIter<'_, K, usize> {
        TreeIter { inner: self.core.iter() }
    }
}

impl<K: Ord> Default for TreeCounter<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Container for TreeCounter<K> {
    fn len(&self) -> usize {
        self.total
    }

    fn clear(&mut self) {
        TreeCounter::clear(self);
    }
}
