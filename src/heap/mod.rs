//! Priority structures.
//!
//! [`BinaryHeap`] is the array-backed workhorse: comparator-driven, smallest
//! element first (reverse the comparator for a max-heap). [`FibonacciHeap`]
//! trades per-operation cost for O(1) insert and merge with lazy
//! consolidation on extract. [`PriorityQueue`] and its min/max variants wrap
//! the binary heap with a queue-flavored surface.

mod binary;
mod fibonacci;
mod priority_queue;

pub use binary::BinaryHeap;
pub use fibonacci::FibonacciHeap;
pub use priority_queue::{MaxPriorityQueue, MinPriorityQueue, PriorityQueue};
