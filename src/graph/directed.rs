//! Directed graph.

use std::hash::Hash;

use crate::hash::HashTable;

use super::Graph;

/// A directed graph with weighted edges.
///
/// Vertices and out-adjacency live in the crate's own hash table; each edge
/// is stored once on its source vertex. Parallel edges collapse (re-adding
/// an edge replaces its weight).
#[derive(Clone, Debug)]
pub struct DirectedGraph<Id> {
    adjacency: HashTable<Id, Vec<(Id, f64)>>,
    edge_count: usize,
}

impl<Id: Clone + Hash + Eq> DirectedGraph<Id> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self { adjacency: HashTable::new(), edge_count: 0 }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Adds a vertex. True when it was new.
    pub fn add_vertex(&mut self, id: Id) -> bool {
        if self.adjacency.contains_key(&id) {
            return false;
        }
        self.adjacency.set(id, Vec::new());
        true
    }

    /// Removes a vertex and every edge touching it.
    pub fn remove_vertex(&mut self, id: &Id) -> bool {
        let Some(out_edges) = self.adjacency.remove(id) else {
            return false;
        };
        self.edge_count -= out_edges.len();
        for from in self.adjacency.keys().cloned().collect::<Vec<_>>() {
            let list = self.adjacency.get_mut(&from).unwrap();
            let before = list.len();
            list.retain(|(to, _)| to != id);
            self.edge_count -= before - list.len();
        }
        true
    }

    /// Adds an edge `u -> v` with weight 1. Both endpoints must exist.
    pub fn add_edge(&mut self, u: Id, v: Id) -> bool {
        self.add_edge_weighted(u, v, 1.0)
    }

    /// Adds an edge `u -> v` with the given weight, replacing the weight of
    /// an existing edge. False when an endpoint is missing.
    pub fn add_edge_weighted(&mut self, u: Id, v: Id, weight: f64) -> bool {
        if !self.adjacency.contains_key(&u) || !self.adjacency.contains_key(&v) {
            return false;
        }
        let list = self.adjacency.get_mut(&u).unwrap();
        if let Some(slot) = list.iter_mut().find(|(to, _)| *to == v) {
            slot.1 = weight;
        } else {
            list.push((v, weight));
            self.edge_count += 1;
        }
        true
    }

    /// Removes the edge `u -> v`. True when it existed.
    pub fn remove_edge(&mut self, u: &Id, v: &Id) -> bool {
        let Some(list) = self.adjacency.get_mut(u) else {
            return false;
        };
        let before = list.len();
        list.retain(|(to, _)| to != v);
        let removed = before != list.len();
        if removed {
            self.edge_count -= 1;
        }
        removed
    }

    /// True when the edge `u -> v` exists.
    pub fn has_edge(&self, u: &Id, v: &Id) -> bool {
        self.edge_weight_of(u, v).is_some()
    }

    fn edge_weight_of(&self, u: &Id, v: &Id) -> Option<f64> {
        self.adjacency
            .get(u)?
            .iter()
            .find(|(to, _)| to == v)
            .map(|(_, w)| *w)
    }

    /// In-degree of `id`.
    pub fn in_degree(&self, id: &Id) -> usize {
        self.adjacency
            .iter()
            .map(|(_, list)| list.iter().filter(|(to, _)| to == id).count())
            .sum()
    }

    /// Out-degree of `id`.
    pub fn out_degree(&self, id: &Id) -> usize {
        self.adjacency.get(id).map(Vec::len).unwrap_or(0)
    }

    /// Kahn's algorithm. `Some(order)` lists every vertex with all edges
    /// pointing forward; `None` reports a cycle.
    pub fn topological_sort(&self) -> Option<Vec<Id>> {
        let mut in_degree: HashTable<Id, usize> = HashTable::new();
        for id in self.adjacency.keys() {
            in_degree.set(id.clone(), 0);
        }
        for (_, list) in self.adjacency.iter() {
            for (to, _) in list {
                *in_degree.get_mut(to).unwrap() += 1;
            }
        }

        let mut ready: Vec<Id> = in_degree
            .iter()
            .filter(|&(_, &d)| d == 0)
            .map(|(id, _)| id.clone())
            .collect();
        let mut out = Vec::with_capacity(self.vertex_count());
        while let Some(id) = ready.pop() {
            for (to, _) in self.adjacency.get(&id).unwrap() {
                let d = in_degree.get_mut(to).unwrap();
                *d -= 1;
                if *d == 0 {
                    ready.push(to.clone());
                }
            }
            out.push(id);
        }
        (out.len() == self.vertex_count()).then_some(out)
    }
}

impl<Id: Clone + Hash + Eq> Default for DirectedGraph<Id> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Id: Clone + Hash + Eq + 'static> Graph for DirectedGraph<Id> {
    type Id = Id;

    fn vertex_ids(&self) -> Vec<Id> {
        self.adjacency.keys().cloned().collect()
    }

    fn has_vertex(&self, id: &Id) -> bool {
        self.adjacency.contains_key(id)
    }

    fn neighbors(&self, id: &Id) -> Vec<Id> {
        self.adjacency
            .get(id)
            .map(|list| list.iter().map(|(to, _)| to.clone()).collect())
            .unwrap_or_default()
    }

    fn edge_weight(&self, u: &Id, v: &Id) -> Option<f64> {
        self.edge_weight_of(u, v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> DirectedGraph<&'static str> {
        let mut g = DirectedGraph::new();
        for v in ["a", "b", "c", "d"] {
            g.add_vertex(v);
        }
        g.add_edge("a", "b");
        g.add_edge("a", "c");
        g.add_edge("b", "d");
        g.add_edge("c", "d");
        g
    }

    #[test]
    fn test_vertices_and_edges() {
        let mut g = diamond();
        assert_eq!(g.vertex_count(), 4);
        assert_eq!(g.edge_count(), 4);
        assert!(g.has_edge(&"a", &"b"));
        assert!(!g.has_edge(&"b", &"a"));
        assert_eq!(g.in_degree(&"d"), 2);
        assert_eq!(g.out_degree(&"a"), 2);

        assert!(g.remove_edge(&"a", &"b"));
        assert!(!g.remove_edge(&"a", &"b"));
        assert_eq!(g.edge_count(), 3);

        assert!(g.remove_vertex(&"d"));
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_edge_requires_vertices() {
        let mut g: DirectedGraph<i32> = DirectedGraph::new();
        g.add_vertex(1);
        assert!(!g.add_edge(1, 2));
        g.add_vertex(2);
        assert!(g.add_edge(1, 2));
        assert_eq!(g.edge_count(), 1);
        // Re-adding replaces the weight without a second edge.
        assert!(g.add_edge_weighted(1, 2, 5.0));
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.edge_weight(&1, &2), Some(5.0));
    }

    #[test]
    fn test_traversals() {
        let g = diamond();
        let dfs = g.dfs(&"a");
        assert_eq!(dfs.len(), 4);
        assert_eq!(dfs[0], "a");
        let bfs = g.bfs(&"a");
        assert_eq!(bfs[0], "a");
        assert_eq!(bfs[3], "d");
        assert!(g.dfs(&"zzz").is_empty());
    }

    #[test]
    fn test_topological_sort() {
        let g = diamond();
        let order = g.topological_sort().unwrap();
        let pos = |v: &str| order.iter().position(|x| *x == v).unwrap();
        assert!(pos("a") < pos("b"));
        assert!(pos("a") < pos("c"));
        assert!(pos("b") < pos("d"));
        assert!(pos("c") < pos("d"));

        let mut cyclic = diamond();
        cyclic.add_edge("d", "a");
        assert_eq!(cyclic.topological_sort(), None);
    }

    #[test]
    fn test_dijkstra_weighted() {
        let mut g = DirectedGraph::new();
        for v in ["s", "a", "b", "t"] {
            g.add_vertex(v);
        }
        g.add_edge_weighted("s", "a", 1.0);
        g.add_edge_weighted("a", "t", 1.0);
        g.add_edge_weighted("s", "b", 5.0);
        g.add_edge_weighted("b", "t", 1.0);
        g.add_edge_weighted("s", "t", 10.0);

        let (dist, path) = g.dijkstra(&"s", &"t").unwrap();
        assert_eq!(dist, 2.0);
        assert_eq!(path, vec!["s", "a", "t"]);

        let all = g.dijkstra_all(&"s");
        assert_eq!(all.get(&"b"), Some(&5.0));

        g.add_vertex("island");
        assert_eq!(g.dijkstra(&"s", &"island"), None);
    }
}
