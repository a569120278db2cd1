//! # Holdall Container Library
//!
//! Holdall is a uniform family of in-memory data structures: linear
//! sequences, priority structures, ordered and hash-based associative
//! containers, a prefix index, coordinate-keyed containers and graph types,
//! all sharing one comparator model and one error model.
//!
//! ## Features
//!
//! - **Ordered trees**: a single arena-backed engine (sentinel NIL node,
//!   header-threaded min/max cache) behind binary-search, AVL and red-black
//!   trees and the tree-based map / set / multimap / multiset / counter
//! - **Heaps**: comparator-driven binary heap, Fibonacci heap with lazy
//!   consolidation, and priority-queue wrappers
//! - **Hash tables**: separate chaining with load-factor resize, an
//!   insertion-ordered linked variant, a hash set and coordinate-keyed
//!   containers
//! - **Sequences**: singly and doubly linked lists with opaque node handles,
//!   and a bucketed ring-array deque with O(1) indexed access
//! - **Prefix index**: a trie with case-sensitivity toggle
//! - **Graphs**: directed and undirected, with DFS/BFS, Dijkstra and
//!   topological sort over the crate's own hash map and binary heap
//!
//! ## Concurrency
//!
//! Containers are single-threaded values: no operation is reentrant-safe
//! with itself and no memory is shared between instances. Iterator
//! invalidation under mutation is ruled out statically by the borrow
//! checker.
//!
//! ## Example
//!
//! ```
//! use holdall::TreeMap;
//!
//! let mut map = TreeMap::new();
//! map.insert(3, "three").unwrap();
//! map.insert(1, "one").unwrap();
//! map.insert(2, "two").unwrap();
//!
//! let keys: Vec<_> = map.keys().copied().collect();
//! assert_eq!(keys, vec![1, 2, 3]);
//! ```

#![warn(missing_docs, rust_2018_idioms)]
#![allow(clippy::module_inception)]

/// Comparator and hash-policy abstractions shared by every container.
pub mod comparator;
/// Error types and the crate-wide result alias.
pub mod error;

/// Ordered-tree engine and the tree-based containers built on it.
pub mod tree;

/// Binary heap, Fibonacci heap and priority queues.
pub mod heap;

/// Chained hash table, linked hash table, hash set and coordinate
/// containers.
pub mod hash;

/// Singly and doubly linked lists.
pub mod list;

/// Bucketed ring-array deque.
pub mod deque;

/// Prefix tree (trie).
pub mod trie;

/// Directed and undirected graphs with the classic traversal algorithms.
pub mod graph;

/// Small numeric utilities: matrix, 2-vector, segment tree, Fenwick tree.
pub mod numeric;

#[cfg(feature = "serde")]
mod serde_support;

// Re-export main types for convenience
pub use comparator::{Comparator, HashPolicy};
pub use deque::Deque;
pub use error::{ContainerError, ContainerResult};
pub use graph::{DirectedGraph, Graph, UndirectedGraph};
pub use hash::{CoordMap, CoordSet, HashSet, HashTable, LinkedHashTable};
pub use heap::{BinaryHeap, FibonacciHeap, MaxPriorityQueue, MinPriorityQueue, PriorityQueue};
pub use list::{DoublyLinkedList, NodeHandle, SinglyLinkedList};
pub use numeric::{BinaryIndexedTree, Matrix2D, SegmentTree, Vector2D};
pub use tree::{
    AvlTree, BinarySearchTree, DfsOrder, IterationKind, RedBlackTree, TreeCounter, TreeMap,
    TreeMultiMap, TreeMultiSet, TreeSet,
};
pub use trie::Trie;

/// Common trait for all container types
pub trait Container {
    /// Returns the number of elements in the container
    fn len(&self) -> usize;

    /// Returns true if the container is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears all elements from the container
    fn clear(&mut self);
}

/// Load factor constants for hash-based containers
pub mod load_factors {
    /// Default load factor for hash tables (0.75)
    pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

    /// Default growth multiplier applied to the capacity on resize
    pub const DEFAULT_GROWTH_MULTIPLIER: usize = 2;
}

/// Capacity constants for container initialization
pub mod capacities {
    /// Default initial capacity for hash tables
    pub const DEFAULT_HASH_TABLE_CAPACITY: usize = 16;

    /// Default initial capacity for heaps
    pub const DEFAULT_HEAP_CAPACITY: usize = 16;

    /// Default inner bucket size for the deque
    pub const DEFAULT_DEQUE_BUCKET_SIZE: usize = 16;
}

/// Utility functions shared by the container implementations
pub(crate) mod utils {
    /// Calculates the next power of 2 greater than or equal to n
    pub fn next_power_of_two(n: usize) -> usize {
        if n == 0 {
            return 1;
        }
        let mut power = 1;
        while power < n {
            power <<= 1;
        }
        power
    }
}

#[cfg(test)]
mod tests {
    use super::utils::*;

    #[test]
    fn test_next_power_of_two() {
        assert_eq!(next_power_of_two(0), 1);
        assert_eq!(next_power_of_two(1), 1);
        assert_eq!(next_power_of_two(2), 2);
        assert_eq!(next_power_of_two(3), 4);
        assert_eq!(next_power_of_two(15), 16);
        assert_eq!(next_power_of_two(16), 16);
        assert_eq!(next_power_of_two(17), 32);
    }
}
