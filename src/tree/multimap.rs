//! Ordered multimap: one tree node per key, a bucket of values on each.

use crate::Container;
use crate::comparator::Comparator;
use crate::error::ContainerResult;

use super::core::{BalanceMode, TreeCore};
use super::TreeIter;

/// A sorted map in which every key holds a bucket of values.
///
/// The node count equals the number of distinct keys; duplicate keys append
/// to the bucket and never create a second node. A key may exist with an
/// empty bucket (inserted via [`Self::insert_key`]); removing the last value
/// of a bucket removes the node.
#[derive(Clone, Debug)]
pub struct TreeMultiMap<K, V> {
    core: TreeCore<K, Vec<V>>,
    total: usize,
}

impl<K, V> TreeMultiMap<K, V> {
    /// Creates an empty multimap ordered by the key type's natural order.
    pub fn new() -> Self
    where
        K: Ord,
    {
        Self::with_comparator(Comparator::natural())
    }

    /// Creates an empty multimap ordered by the given comparator.
    pub fn with_comparator(cmp: Comparator<K>) -> Self {
        Self { core: TreeCore::new(cmp, BalanceMode::RedBlack), total: 0 }
    }

    /// Builds a multimap from `(key, value)` entries.
    pub fn from_entries<I>(entries: I) -> ContainerResult<Self>
    where
        K: Ord,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut map = Self::new();
        for (k, v) in entries {
            map.insert(k, v)?;
        }
        Ok(map)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.core.len()
    }

    /// Number of stored values across all buckets.
    pub fn total_len(&self) -> usize {
        self.total
    }

    /// True when no key is present.
    pub fn is_empty(&self) -> bool {
        self.core.is_empty()
    }

    /// Removes every key and bucket.
    pub fn clear(&mut self) {
        self.core.clear();
        self.total = 0;
    }

    /// Appends `value` to `key`'s bucket. `Ok(true)` when the key was new.
    pub fn insert(&mut self, key: K, value: V) -> ContainerResult<bool> {
        if let Some(bucket) = self.core.get_mut(&key) {
            bucket.push(value);
            self.total += 1;
            return Ok(false);
        }
        self.core.insert(key, vec![value])?;
        self.total += 1;
        Ok(true)
    }

    /// Ensures `key` exists, with an empty bucket when new. `Ok(true)` when
    /// the key was new.
    pub fn insert_key(&mut self, key: K) -> ContainerResult<bool> {
        if self.core.contains(&key) {
            return Ok(false);
        }
        self.core.insert(key, Vec::new())?;
        Ok(true)
    }

    /// True when `key` is present (even with an empty bucket).
    pub fn contains_key(&self, key: &K) -> bool {
        self.core.contains(key)
    }

    /// The values stored under `key`, oldest first.
    pub fn values_of(&self, key: &K) -> Option<&[V]> {
        self.core.get(key).map(|b| b.as_slice())
    }

    /// True when `key`'s bucket holds a value equal to `value`.
    pub fn has_entry(&self, key: &K, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.core.get(key).is_some_and(|b| b.contains(value))
    }

    /// Removes the first value equal to `value` from `key`'s bucket; the
    /// node goes with it when the bucket empties. True when a value was
    /// removed.
    pub fn remove_value(&mut self, key: &K, value: &V) -> bool
    where
        V: PartialEq,
    {
        let Some(bucket) = self.core.get_mut(key) else {
            return false;
        };
        let Some(pos) = bucket.iter().position(|x| x == value) else {
            return false;
        };
        bucket.remove(pos);
        self.total -= 1;
        if bucket.is_empty() {
            self.core.remove(key);
        }
        true
    }

    /// Removes every value equal to `value` from `key`'s bucket, returning
    /// how many were removed.
    pub fn remove_values(&mut self, key: &K, value: &V) -> usize
    where
        V: PartialEq,
    {
        let Some(bucket) = self.core.get_mut(key) else {
            return 0;
        };
        let before = bucket.len();
        bucket.retain(|x| x != value);
        let removed = before - bucket.len();
        self.total -= removed;
        if removed > 0 && bucket.is_empty() {
            self.core.remove(key);
        }
        removed
    }

    /// Removes `key` with its whole bucket.
    pub fn remove_key(&mut self, key: &K) -> Option<Vec<V>> {
        let bucket = self.core.remove(key)?;
        self.total -= bucket.len();
        Some(bucket)
    }

    /// Smallest key with its bucket.
    pub fn first(&self) -> Option<(&K, &[V])> {
        self.core.first().map(|(k, b)| (k, b.as_slice()))
    }

    /// Largest key with its bucket.
    pub fn last(&self) -> Option<(&K, &[V])> {
        self.core.last().map(|(k, b)| (k, b.as_slice()))
    }

    /// Ascending iterator over `(key, bucket)` pairs.
    pub fn iter(&self) -> TreeIter<'_, K, Vec<V>> {
        TreeIter { inner: self.core.iter() }
    }

    /// Every `(key, value)` pair, keys ascending, bucket order within a
    /// key.
    pub fn flat_entries(&self) -> Vec<(&K, &V)> {
        let mut out = Vec::with_capacity(self.total);
        for (k, bucket) in self.iter() {
            for v in bucket {
                out.push((k, v));
            }
        }
        out
    }
}

impl<K: Ord, V> Default for TreeMultiMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Container for TreeMultiMap<K, V> {
    fn len(&self) -> usize {
        self.core.len()
    }

    fn clear(&mut self) {
        TreeMultiMap::clear(self);
    }
}
