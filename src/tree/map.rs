//! Ordered map over the red-black engine.

use super::core::{BalanceMode, TreeCore};
use super::ordered_tree_api;

/// A sorted key-value map.
///
/// Red-black balanced, so every operation is O(log n) and iteration yields
/// entries in ascending key order. Equal keys replace the stored value and
/// never create a second node.
///
/// # Example
///
/// ```
/// use holdall::TreeMap;
///
/// let mut scores = TreeMap::new();
/// scores.insert("carol", 88).unwrap();
/// scores.insert("alice", 95).unwrap();
/// scores.insert("bob", 72).unwrap();
///
/// assert_eq!(scores.first(), Some((&"alice", &95)));
/// assert_eq!(scores.floor(&"bp").map(|(k, _)| *k), Some("bob"));
/// ```
#[derive(Clone, Debug)]
pub struct TreeMap<K, V> {
    core: TreeCore<K, V>,
}

ordered_tree_api!(TreeMap, BalanceMode::RedBlack);

impl<K, V> TreeMap<K, V> {
    /// Inserts every entry of the iterator, replacing on equal keys.
    pub fn insert_many<I>(&mut self, entries: I) -> crate::error::ContainerResult<usize>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut created = 0;
        for (k, v) in entries {
            if self.insert(k, v)?.is_none() {
                created += 1;
            }
        }
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_basics() {
        let mut map = TreeMap::new();
        assert!(map.is_empty());
        assert_eq!(map.insert(2, "two").unwrap(), None);
        assert_eq!(map.insert(1, "one").unwrap(), None);
        assert_eq!(map.insert(2, "TWO").unwrap(), Some("two"));
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&2), Some(&"TWO"));
        assert_eq!(map.get(&3), None);

        *map.get_mut(&1).unwrap() = "ONE";
        assert_eq!(map.get(&1), Some(&"ONE"));
    }

    #[test]
    fn test_iteration_is_sorted_regardless_of_insertion() {
        let mut map = TreeMap::new();
        map.insert_many([(5, ()), (1, ()), (4, ()), (2, ()), (3, ())]).unwrap();
        let keys: Vec<i32> = map.keys().copied().collect();
        assert_eq!(keys, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_insert_many_counts_created() {
        let mut map = TreeMap::new();
        let created = map.insert_many([(1, 1), (2, 2), (1, 10)]).unwrap();
        assert_eq!(created, 2);
        assert_eq!(map.get(&1), Some(&10));
    }

    #[test]
    fn test_into_iter_consumes_in_order() {
        let mut map = TreeMap::new();
        map.insert_many([(3, 'c'), (1, 'a'), (2, 'b')]).unwrap();
        let entries: Vec<(i32, char)> = map.into_iter().collect();
        assert_eq!(entries, vec![(1, 'a'), (2, 'b'), (3, 'c')]);
    }

    #[test]
    fn test_range_search_projection() {
        let mut map = TreeMap::new();
        for k in 1..=9 {
            map.insert(k, k * 100).unwrap();
        }
        let picked = map.range_search(&4, &6, |k, v| (*k, *v));
        assert_eq!(picked, vec![(4, 400), (5, 500), (6, 600)]);
    }
}
