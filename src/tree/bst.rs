//! Plain binary search tree (no rebalancing).

use super::core::{BalanceMode, TreeCore};
use super::ordered_tree_api;

/// An unbalanced binary search tree.
///
/// Shape depends entirely on insertion order, so worst-case operations are
/// O(n); use [`AvlTree`](crate::AvlTree) or
/// [`RedBlackTree`](crate::RedBlackTree) when adversarial orderings are
/// possible. Useful as the cheapest ordered container when inputs are known
/// to arrive shuffled, and as the reference shape for traversal tests.
#[derive(Clone, Debug)]
pub struct BinarySearchTree<K, V> {
    core: TreeCore<K, V>,
}

ordered_tree_api!(BinarySearchTree, BalanceMode::Unbalanced);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::DfsOrder;

    #[test]
    fn test_shape_follows_insertion_order() {
        let mut tree = BinarySearchTree::new();
        for k in [8, 3, 10, 1, 6] {
            tree.insert(k, ()).unwrap();
        }
        // No rebalancing: 8 stays the root.
        let mut pre = Vec::new();
        tree.dfs(DfsOrder::Pre, |k, _| pre.push(*k));
        assert_eq!(pre, vec![8, 3, 1, 6, 10]);
        assert_eq!(tree.depth(&8), Some(0));
        assert_eq!(tree.depth(&6), Some(2));
    }

    #[test]
    fn test_degenerate_chain() {
        let mut tree = BinarySearchTree::new();
        for k in 1..=8 {
            tree.insert(k, k).unwrap();
        }
        assert_eq!(tree.height(), 8);
        assert!(tree.is_bst());
        assert!(!tree.is_avl_balanced());
    }

    #[test]
    fn test_remove_with_two_children() {
        let mut tree = BinarySearchTree::new();
        for k in [5, 2, 8, 1, 3, 7, 9] {
            tree.insert(k, k * 10).unwrap();
        }
        assert_eq!(tree.remove(&5), Some(50));
        let keys: Vec<i32> = tree.keys().copied().collect();
        assert_eq!(keys, vec![1, 2, 3, 7, 8, 9]);
        assert!(tree.is_bst());
    }
}
