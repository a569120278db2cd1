//! Red-black tree: the workhorse balanced search tree.

use super::core::{BalanceMode, TreeCore};
use super::ordered_tree_api;

/// A red-black balanced search tree.
///
/// Invariants held after every mutation: the root is black, no red node has
/// a red child, and every root-to-leaf path crosses the same number of black
/// nodes. Leaf slots all point at one shared black sentinel, and a header
/// node caches the minimum and maximum so `first`/`last` are O(1).
///
/// This is the engine configuration behind [`TreeMap`](crate::TreeMap) and
/// the other ordered associative containers.
#[derive(Clone, Debug)]
pub struct RedBlackTree<K, V> {
    core: TreeCore<K, V>,
}

ordered_tree_api!(RedBlackTree, BalanceMode::RedBlack);

impl<K, V> RedBlackTree<K, V> {
    /// True when the red-black invariants hold. Always true after public
    /// mutations; exposed for auditing and tests.
    pub fn is_red_black_valid(&self) -> bool {
        self.core.is_red_black_valid()
    }
}
