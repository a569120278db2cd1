//! AVL tree: height-balanced binary search tree.

use super::core::{BalanceMode, TreeCore};
use super::ordered_tree_api;

/// A height-balanced search tree.
///
/// Every node's balance factor stays in {-1, 0, +1}; heights are cached on
/// the nodes and refreshed along the rotation path, so lookups, inserts and
/// deletes are O(log n) with the tightest height bound of the tree family.
#[derive(Clone, Debug)]
pub struct AvlTree<K, V> {
    core: TreeCore<K, V>,
}

ordered_tree_api!(AvlTree, BalanceMode::Avl);
