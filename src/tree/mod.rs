//! Ordered-tree containers.
//!
//! A single arena-backed engine carries the search, rotation and
//! rebalancing machinery; the public types select a balancing discipline and
//! a value policy on top of it:
//!
//! - [`BinarySearchTree`], [`AvlTree`], [`RedBlackTree`]: key-value trees
//!   differing only in rebalancing
//! - [`TreeMap`] / [`TreeSet`]: the everyday ordered map and set (red-black)
//! - [`TreeMultiMap`] (bucketed values), [`TreeMultiSet`] and
//!   [`TreeCounter`] (per-node counts)

pub(crate) mod core;

mod avl;
mod bst;
mod counter;
mod map;
mod multimap;
mod multiset;
mod red_black;
mod set;

pub use avl::AvlTree;
pub use bst::BinarySearchTree;
pub use counter::TreeCounter;
pub use map::TreeMap;
pub use multimap::TreeMultiMap;
pub use multiset::TreeMultiSet;
pub use red_black::RedBlackTree;
pub use set::TreeSet;

use self::core::{CoreIter, TreeCore};

/// Visit order for depth-first traversal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DfsOrder {
    /// Node before its subtrees.
    Pre,
    /// Left subtree, node, right subtree.
    In,
    /// Subtrees before the node.
    Post,
}

/// Which traversal engine `dfs` runs on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum IterationKind {
    /// Call-stack recursion.
    Recursive,
    /// Explicit-stack iteration (the default).
    #[default]
    Iterative,
}

/// Borrowed in-order iterator over a tree's `(key, value)` entries.
pub struct TreeIter<'a, K, V> {
    inner: CoreIter<'a, K, V>,
}

impl<'a, K, V> Iterator for TreeIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<'a, K, V> DoubleEndedIterator for TreeIter<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

/// Borrowed ascending iterator over a tree's keys.
pub struct TreeKeys<'a, K, V> {
    inner: CoreIter<'a, K, V>,
}

impl<'a, K, V> Iterator for TreeKeys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }
}

impl<'a, K, V> DoubleEndedIterator for TreeKeys<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

/// Borrowed ascending iterator over a tree's values.
pub struct TreeValues<'a, K, V> {
    inner: CoreIter<'a, K, V>,
}

impl<'a, K, V> Iterator for TreeValues<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }
}

/// Owning ascending iterator produced by consuming a tree.
pub struct TreeIntoIter<K, V> {
    core: TreeCore<K, V>,
}

impl<K, V> Iterator for TreeIntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.core.poll_first()
    }
}

/// Generates the key-value surface shared by the concrete ordered trees.
/// Each instantiation differs only in its balancing discipline.
macro_rules! ordered_tree_api {
    ($name:ident, $mode:expr) => {
        impl<K, V> $name<K, V> {
            /// Creates an empty tree ordered by the key type's natural
            /// order.
            pub fn new() -> Self
            where
                K: Ord,
            {
                Self::with_comparator($crate::comparator::Comparator::natural())
            }

            /// Creates an empty tree ordered by the given comparator.
            pub fn with_comparator(cmp: $crate::comparator::Comparator<K>) -> Self {
                Self { core: $crate::tree::core::TreeCore::new(cmp, $mode) }
            }

            /// Selects the traversal engine used by [`Self::dfs`].
            pub fn with_iteration_kind(mut self, kind: $crate::tree::IterationKind) -> Self {
                self.core.set_iteration_kind(kind);
                self
            }

            /// Builds a tree from `(key, value)` entries. Later entries
            /// replace earlier ones with equal keys.
            pub fn from_entries<I>(entries: I) -> $crate::error::ContainerResult<Self>
            where
                K: Ord,
                I: IntoIterator<Item = (K, V)>,
            {
                let mut tree = Self::new();
                for (k, v) in entries {
                    tree.insert(k, v)?;
                }
                Ok(tree)
            }

            /// The comparator ordering this tree.
            pub fn comparator(&self) -> &$crate::comparator::Comparator<K> {
                self.core.comparator()
            }

            /// Number of keys in the tree.
            pub fn len(&self) -> usize {
                self.core.len()
            }

            /// True when the tree holds no keys.
            pub fn is_empty(&self) -> bool {
                self.core.is_empty()
            }

            /// Removes every entry.
            pub fn clear(&mut self) {
                self.core.clear();
            }

            /// Inserts or replaces. `Ok(None)` means a new node was
            /// created; `Ok(Some(old))` means the key existed and its value
            /// was replaced. Fails with `InvalidKey` (tree unchanged) when
            /// the comparator's validity policy rejects the key.
            pub fn insert(
                &mut self,
                key: K,
                value: V,
            ) -> $crate::error::ContainerResult<Option<V>> {
                self.core.insert(key, value)
            }

            /// Looks up the value stored under `key`.
            pub fn get(&self, key: &K) -> Option<&V> {
                self.core.get(key)
            }

            /// Mutable lookup.
            pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
                self.core.get_mut(key)
            }

            /// Borrows the stored entry for `key`.
            pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
                self.core.get_key_value(key)
            }

            /// True when `key` is present.
            pub fn contains_key(&self, key: &K) -> bool {
                self.core.contains(key)
            }

            /// Removes `key`, returning its value.
            pub fn remove(&mut self, key: &K) -> Option<V> {
                self.core.remove(key)
            }

            /// Removes `key`, returning the stored entry.
            pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
                self.core.remove_entry(key)
            }

            /// Smallest entry. O(1) through the header cache.
            pub fn first(&self) -> Option<(&K, &V)> {
                self.core.first()
            }

            /// Largest entry. O(1) through the header cache.
            pub fn last(&self) -> Option<(&K, &V)> {
                self.core.last()
            }

            /// Removes and returns the smallest entry.
            pub fn poll_first(&mut self) -> Option<(K, V)> {
                self.core.poll_first()
            }

            /// Removes and returns the largest entry.
            pub fn poll_last(&mut self) -> Option<(K, V)> {
                self.core.poll_last()
            }

            /// Greatest entry with key `<= key`.
            pub fn floor(&self, key: &K) -> Option<(&K, &V)> {
                self.core.floor(key)
            }

            /// Least entry with key `>= key`.
            pub fn ceiling(&self, key: &K) -> Option<(&K, &V)> {
                self.core.ceiling(key)
            }

            /// Greatest entry with key strictly below `key`.
            pub fn lower(&self, key: &K) -> Option<(&K, &V)> {
                self.core.lower(key)
            }

            /// Least entry with key strictly above `key`.
            pub fn higher(&self, key: &K) -> Option<(&K, &V)> {
                self.core.higher(key)
            }

            /// Ascending iterator over the closed range `[lo, hi]`.
            pub fn range(&self, lo: &K, hi: &K) -> $crate::tree::TreeIter<'_, K, V> {
                $crate::tree::TreeIter { inner: self.core.range(lo, hi) }
            }

            /// Projects every entry in `[lo, hi]`, ascending.
            pub fn range_search<R, F>(&self, lo: &K, hi: &K, mut f: F) -> Vec<R>
            where
                F: FnMut(&K, &V) -> R,
            {
                self.core.range(lo, hi).map(|(k, v)| f(k, v)).collect()
            }

            /// Ascending entry iterator.
            pub fn iter(&self) -> $crate::tree::TreeIter<'_, K, V> {
                $crate::tree::TreeIter { inner: self.core.iter() }
            }

            /// Ascending key iterator.
            pub fn keys(&self) -> $crate::tree::TreeKeys<'_, K, V> {
                $crate::tree::TreeKeys { inner: self.core.iter() }
            }

            /// Value iterator in ascending key order.
            pub fn values(&self) -> $crate::tree::TreeValues<'_, K, V> {
                $crate::tree::TreeValues { inner: self.core.iter() }
            }

            /// Depth-first traversal in the given visit order, on the
            /// configured traversal engine.
            pub fn dfs<F>(&self, order: $crate::tree::DfsOrder, visit: F)
            where
                F: FnMut(&K, &V),
            {
                self.core.dfs(order, visit)
            }

            /// Breadth-first traversal from the root.
            pub fn bfs<F>(&self, visit: F)
            where
                F: FnMut(&K, &V),
            {
                self.core.bfs(visit)
            }

            /// Morris in-order traversal: O(1) auxiliary space, temporarily
            /// threads right pointers and restores them before returning.
            pub fn morris<F>(&mut self, visit: F)
            where
                F: FnMut(&K, &V),
            {
                self.core.morris(visit)
            }

            /// Entries grouped by depth, root level first.
            pub fn levels(&self) -> Vec<Vec<(&K, &V)>> {
                self.core.levels()
            }

            /// Entries stored on childless nodes, ascending.
            pub fn leaves(&self) -> Vec<(&K, &V)> {
                self.core.leaves()
            }

            /// Number of levels (0 for an empty tree).
            pub fn height(&self) -> usize {
                self.core.height()
            }

            /// Depth of `key`'s node below the root, if present.
            pub fn depth(&self, key: &K) -> Option<usize> {
                self.core.depth(key)
            }

            /// True when an in-order walk yields strictly increasing keys.
            pub fn is_bst(&self) -> bool {
                self.core.is_bst()
            }

            /// True when every node's balance factor lies in {-1, 0, +1}.
            pub fn is_avl_balanced(&self) -> bool {
                self.core.is_avl_balanced()
            }

            /// New tree of the same kind holding the entries the predicate
            /// accepts.
            pub fn filter<F>(&self, mut pred: F) -> Self
            where
                K: Clone,
                V: Clone,
                F: FnMut(&K, &V) -> bool,
            {
                let mut out = Self::with_comparator(self.core.comparator().clone());
                out.core.set_iteration_kind(self.core.iteration_kind());
                for (k, v) in self.iter() {
                    if pred(k, v) {
                        let _ = out.core.insert(k.clone(), v.clone());
                    }
                }
                out
            }

            /// New tree of the same kind with every entry transformed. The
            /// result keys use their natural order.
            pub fn map<K2, V2, F>(&self, mut f: F) -> $name<K2, V2>
            where
                K2: Ord,
                F: FnMut(&K, &V) -> (K2, V2),
            {
                let mut out = $name::<K2, V2>::new();
                for (k, v) in self.iter() {
                    let (k2, v2) = f(k, v);
                    let _ = out.core.insert(k2, v2);
                }
                out
            }

            /// Like [`Self::map`] with an explicit comparator for the result
            /// keys. Fails when a mapped key is rejected by that
            /// comparator's validity policy.
            pub fn map_with<K2, V2, F>(
                &self,
                cmp: $crate::comparator::Comparator<K2>,
                mut f: F,
            ) -> $crate::error::ContainerResult<$name<K2, V2>>
            where
                F: FnMut(&K, &V) -> (K2, V2),
            {
                let mut out = $name::<K2, V2>::with_comparator(cmp);
                for (k, v) in self.iter() {
                    let (k2, v2) = f(k, v);
                    out.core.insert(k2, v2)?;
                }
                Ok(out)
            }
        }

        impl<K: Ord, V> Default for $name<K, V> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<K, V> $crate::Container for $name<K, V> {
            fn len(&self) -> usize {
                self.core.len()
            }

            fn clear(&mut self) {
                self.core.clear();
            }
        }

        impl<'a, K, V> IntoIterator for &'a $name<K, V> {
            type Item = (&'a K, &'a V);
            type IntoIter = $crate::tree::TreeIter<'a, K, V>;

            fn into_iter(self) -> Self::IntoIter {
                self.iter()
            }
        }

        impl<K, V> IntoIterator for $name<K, V> {
            type Item = (K, V);
            type IntoIter = $crate::tree::TreeIntoIter<K, V>;

            fn into_iter(self) -> Self::IntoIter {
                $crate::tree::TreeIntoIter { core: self.core }
            }
        }
    };
}

pub(crate) use ordered_tree_api;
