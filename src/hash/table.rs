//! Separate-chaining hash table.

use log::trace;

use crate::comparator::HashPolicy;
use crate::utils::next_power_of_two;
use crate::{Container, capacities, load_factors};

/// A hash map with separate chaining.
///
/// Buckets are dynamic arrays of `(key, value)` pairs; capacity is always a
/// power of two so the bucket index is `hash & (capacity - 1)`. When
/// `len / capacity` reaches the load factor the table grows by the
/// configured multiplier and every pair is reinserted. Iteration order is
/// bucket-scan order and changes across resizes; use
/// [`LinkedHashTable`](crate::LinkedHashTable) when insertion order matters.
#[derive(Clone, Debug)]
pub struct HashTable<K, V> {
    buckets: Vec<Vec<(K, V)>>,
    size: usize,
    load_factor: f64,
    growth: usize,
    policy: HashPolicy<K>,
}

impl<K, V> HashTable<K, V> {
    /// Creates an empty table keyed by the key type's `Hash`/`Eq`.
    pub fn new() -> Self
    where
        K: std::hash::Hash + Eq,
    {
        Self::with_capacity_and_policy(
            capacities::DEFAULT_HASH_TABLE_CAPACITY,
            HashPolicy::standard(),
        )
    }

    /// Creates an empty table with at least the given bucket capacity.
    pub fn with_capacity(capacity: usize) -> Self
    where
        K: std::hash::Hash + Eq,
    {
        Self::with_capacity_and_policy(capacity, HashPolicy::standard())
    }

    /// Creates an empty table with a custom hash policy.
    pub fn with_policy(policy: HashPolicy<K>) -> Self {
        Self::with_capacity_and_policy(capacities::DEFAULT_HASH_TABLE_CAPACITY, policy)
    }

    /// Creates an empty table with the given capacity and policy. The
    /// capacity is rounded up to a power of two.
    pub fn with_capacity_and_policy(capacity: usize, policy: HashPolicy<K>) -> Self {
        let capacity = next_power_of_two(capacity.max(1));
        Self {
            buckets: std::iter::repeat_with(Vec::new).take(capacity).collect(),
            size: 0,
            load_factor: load_factors::DEFAULT_LOAD_FACTOR,
            growth: load_factors::DEFAULT_GROWTH_MULTIPLIER,
            policy,
        }
    }

    /// Overrides the resize threshold (must lie in `(0, 1]`).
    pub fn with_load_factor(mut self, load_factor: f64) -> Self {
        self.load_factor = load_factor.clamp(f64::MIN_POSITIVE, 1.0);
        self
    }

    /// Overrides the capacity multiplier applied on resize (at least 2).
    pub fn with_growth_multiplier(mut self, growth: usize) -> Self {
        self.growth = growth.max(2);
        self
    }

    /// Builds a table by converting each raw record of the iterator into an
    /// entry.
    pub fn from_iter_with<R, I, F>(iter: I, mut to_entry: F, policy: HashPolicy<K>) -> Self
    where
        I: IntoIterator<Item = R>,
        F: FnMut(R) -> (K, V),
    {
        let mut table = Self::with_policy(policy);
        for record in iter {
            let (k, v) = to_entry(record);
            table.set(k, v);
        }
        table
    }

    /// Current bucket-array capacity.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// The hash policy keying this table.
    pub fn policy(&self) -> &HashPolicy<K> {
        &self.policy
    }

    /// Current occupancy ratio.
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.buckets.len() as f64
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.size
    }

    /// True when the table is empty.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Removes every entry, keeping the bucket array.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.size = 0;
    }

    fn bucket_index(&self, key: &K) -> usize {
        (self.policy.hash(key) as usize) & (self.buckets.len() - 1)
    }

    /// Inserts or replaces, returning the previous value for the key.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        let idx = self.bucket_index(&key);
        for (k, v) in &mut self.buckets[idx] {
            if self.policy.eq(k, &key) {
                return Some(std::mem::replace(v, value));
            }
        }
        self.buckets[idx].push((key, value));
        self.size += 1;
        if self.load_factor() >= self.load_factor {
            self.resize();
        }
        None
    }

    /// Inserts every entry of the iterator, returning how many keys were
    /// new.
    pub fn set_many<I>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut created = 0;
        for (k, v) in entries {
            if self.set(k, v).is_none() {
                created += 1;
            }
        }
        created
    }

    /// Looks up the value stored under `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        let idx = self.bucket_index(key);
        self.buckets[idx]
            .iter()
            .find(|(k, _)| self.policy.eq(k, key))
            .map(|(_, v)| v)
    }

    /// Mutable lookup.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let idx = self.bucket_index(key);
        let policy = self.policy.clone();
        self.buckets[idx]
            .iter_mut()
            .find(|(k, _)| policy.eq(k, key))
            .map(|(_, v)| v)
    }

    /// True when `key` is present.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Removes `key`, returning its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let idx = self.bucket_index(key);
        let policy = self.policy.clone();
        let pos = self.buckets[idx].iter().position(|(k, _)| policy.eq(k, key))?;
        let (_, value) = self.buckets[idx].swap_remove(pos);
        self.size -= 1;
        Some(value)
    }

    /// True when some entry stores a value equal to `value`. O(n).
    pub fn has_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.values().any(|v| v == value)
    }

    /// Iterator over entries in bucket-scan order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.buckets.iter().flatten().map(|(k, v)| (k, v))
    }

    /// Iterator over keys in bucket-scan order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    /// Iterator over values in bucket-scan order.
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }

    /// Calls `f` for every entry.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&K, &V),
    {
        for (k, v) in self.iter() {
            f(k, v);
        }
    }

    /// Folds over every entry.
    pub fn fold<Acc, F>(&self, mut init: Acc, mut f: F) -> Acc
    where
        F: FnMut(Acc, &K, &V) -> Acc,
    {
        for (k, v) in self.iter() {
            init = f(init, k, v);
        }
        init
    }

    /// True when the predicate accepts every entry.
    pub fn all<F>(&self, mut pred: F) -> bool
    where
        F: FnMut(&K, &V) -> bool,
    {
        self.iter().all(|(k, v)| pred(k, v))
    }

    /// True when the predicate accepts some entry.
    pub fn any<F>(&self, mut pred: F) -> bool
    where
        F: FnMut(&K, &V) -> bool,
    {
        self.iter().any(|(k, v)| pred(k, v))
    }

    /// New table holding the entries the predicate accepts.
    pub fn filter<F>(&self, mut pred: F) -> Self
    where
        K: Clone,
        V: Clone,
        F: FnMut(&K, &V) -> bool,
    {
        let mut out = Self::with_policy(self.policy.clone())
            .with_load_factor(self.load_factor)
            .with_growth_multiplier(self.growth);
        for (k, v) in self.iter() {
            if pred(k, v) {
                out.set(k.clone(), v.clone());
            }
        }
        out
    }

    /// New table with every value transformed, keys kept.
    pub fn map_values<V2, F>(&self, mut f: F) -> HashTable<K, V2>
    where
        K: Clone,
        F: FnMut(&K, &V) -> V2,
    {
        let mut out = HashTable::with_policy(self.policy.clone());
        for (k, v) in self.iter() {
            out.set(k.clone(), f(k, v));
        }
        out
    }

    /// Doubles (by the growth multiplier) the bucket array and reinserts
    /// every pair under the new mask.
    fn resize(&mut self) {
        let new_capacity = next_power_of_two(self.buckets.len() * self.growth);
        let old = std::mem::replace(
            &mut self.buckets,
            std::iter::repeat_with(Vec::new).take(new_capacity).collect(),
        );
        trace!(
            "hash table resized from {} to {} buckets ({} entries)",
            old.len(),
            new_capacity,
            self.size
        );
        let mask = new_capacity - 1;
        for (key, value) in old.into_iter().flatten() {
            let idx = (self.policy.hash(&key) as usize) & mask;
            self.buckets[idx].push((key, value));
        }
    }
}

impl<K: std::hash::Hash + Eq, V> Default for HashTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Container for HashTable<K, V> {
    fn len(&self) -> usize {
        self.size
    }

    fn clear(&mut self) {
        HashTable::clear(self);
    }
}
