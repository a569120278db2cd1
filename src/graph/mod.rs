//! Directed and undirected graphs.
//!
//! Both concrete graphs store their vertex and adjacency tables in this
//! crate's [`HashTable`](crate::HashTable) and share the traversal
//! algorithms through the [`Graph`] trait: DFS, BFS and Dijkstra (driven by
//! the crate's [`BinaryHeap`](crate::BinaryHeap)). Topological sort lives on
//! [`DirectedGraph`] alone.

mod directed;
mod undirected;

pub use directed::DirectedGraph;
pub use undirected::UndirectedGraph;

use std::hash::Hash;

use crate::comparator::Comparator;
use crate::hash::{HashSet, HashTable};
use crate::heap::BinaryHeap;

#[derive(Clone, Debug)]
struct HeapItem<Id> {
    dist: f64,
    id: Id,
}

/// Capabilities shared by the concrete graph types, with the classic
/// traversal algorithms provided on top of them.
///
/// Edge weights are finite `f64`s; unweighted edges weigh 1.
pub trait Graph {
    /// Vertex identifier.
    type Id: Clone + Hash + Eq + 'static;

    /// Every vertex id, in vertex-table order.
    fn vertex_ids(&self) -> Vec<Self::Id>;

    /// True when `id` names a vertex.
    fn has_vertex(&self, id: &Self::Id) -> bool;

    /// Outgoing neighbors of `id` (all neighbors for undirected graphs),
    /// in edge insertion order.
    fn neighbors(&self, id: &Self::Id) -> Vec<Self::Id>;

    /// Weight of the edge from `u` to `v`, if present.
    fn edge_weight(&self, u: &Self::Id, v: &Self::Id) -> Option<f64>;

    /// Depth-first preorder from `start`. Neighbors are explored in edge
    /// insertion order; unreachable vertices are absent.
    fn dfs(&self, start: &Self::Id) -> Vec<Self::Id> {
        let mut out = Vec::new();
        if !self.has_vertex(start) {
            return out;
        }
        let mut visited: HashSet<Self::Id> = HashSet::new();
        let mut stack = vec![start.clone()];
        while let Some(id) = stack.pop() {
            if !visited.insert(id.clone()) {
                continue;
            }
            for next in self.neighbors(&id).into_iter().rev() {
                if !visited.contains(&next) {
                    stack.push(next);
                }
            }
            out.push(id);
        }
        out
    }

    /// Breadth-first order from `start`.
    fn bfs(&self, start: &Self::Id) -> Vec<Self::Id> {
        let mut out = Vec::new();
        if !self.has_vertex(start) {
            return out;
        }
        let mut visited: HashSet<Self::Id> = HashSet::new();
        let mut queue = std::collections::VecDeque::from([start.clone()]);
        visited.insert(start.clone());
        while let Some(id) = queue.pop_front() {
            for next in self.neighbors(&id) {
                if visited.insert(next.clone()) {
                    queue.push_back(next);
                }
            }
            out.push(id);
        }
        out
    }

    /// Shortest distances from `source` to every reachable vertex,
    /// binary-heap Dijkstra in O((V + E) log V). Negative edge weights are
    /// outside the algorithm's contract.
    fn dijkstra_all(&self, source: &Self::Id) -> HashTable<Self::Id, f64> {
        self.dijkstra_core(source, None).0
    }

    /// Shortest distance and path from `source` to `target`; `None` when
    /// unreachable. The path lists vertices source first.
    fn dijkstra(&self, source: &Self::Id, target: &Self::Id) -> Option<(f64, Vec<Self::Id>)> {
        let (dist, prev) = self.dijkstra_core(source, Some(target));
        let total = *dist.get(target)?;
        let mut path = vec![target.clone()];
        let mut cur = target.clone();
        while &cur != source {
            cur = prev.get(&cur)?.clone();
            path.push(cur.clone());
        }
        path.reverse();
        Some((total, path))
    }

    /// Distance and predecessor tables; stops early once `target` is
    /// settled.
    #[doc(hidden)]
    fn dijkstra_core(
        &self,
        source: &Self::Id,
        target: Option<&Self::Id>,
    ) -> (HashTable<Self::Id, f64>, HashTable<Self::Id, Self::Id>) {
        let mut dist: HashTable<Self::Id, f64> = HashTable::new();
        let mut prev: HashTable<Self::Id, Self::Id> = HashTable::new();
        if !self.has_vertex(source) {
            return (dist, prev);
        }
        let mut settled: HashSet<Self::Id> = HashSet::new();
        let cmp = Comparator::new("by-distance", |a: &HeapItem<Self::Id>, b: &HeapItem<Self::Id>| {
            a.dist.total_cmp(&b.dist)
        });
        let mut heap = BinaryHeap::with_comparator(cmp);

        dist.set(source.clone(), 0.0);
        heap.push(HeapItem { dist: 0.0, id: source.clone() });

        while let Some(HeapItem { dist: d, id }) = heap.poll() {
            if !settled.insert(id.clone()) {
                continue;
            }
            if target.is_some_and(|t| *t == id) {
                break;
            }
            for next in self.neighbors(&id) {
                let Some(weight) = self.edge_weight(&id, &next) else {
                    continue;
                };
                let candidate = d + weight;
                let better = dist.get(&next).is_none_or(|&cur| candidate < cur);
                if better {
                    dist.set(next.clone(), candidate);
                    prev.set(next.clone(), id.clone());
                    heap.push(HeapItem { dist: candidate, id: next });
                }
            }
        }
        (dist, prev)
    }
}
