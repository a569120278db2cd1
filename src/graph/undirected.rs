//! Undirected graph.

use std::hash::Hash;

use crate::hash::HashTable;

use super::Graph;

/// An undirected graph with weighted edges.
///
/// Each edge is mirrored into both endpoints' adjacency lists and counted
/// once. Self-loops are stored on their single endpoint.
#[derive(Clone, Debug)]
pub struct UndirectedGraph<Id> {
    adjacency: HashTable<Id, Vec<(Id, f64)>>,
    edge_count: usize,
}

impl<Id: Clone + Hash + Eq> UndirectedGraph<Id> {
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
        let Some(edges) = self.adjacency.remove(id) else {
            return false;
        };
        for (other, _) in &edges {
            if other == id {
                continue;
            }
            if let Some(list) = self.adjacency.get_mut(other) {
                list.retain(|(to, _)| to != id);
            }
        }
        self.edge_count -= edges.len();
        true
    }

    /// Adds an edge between `u` and `v` with weight 1.
    pub fn add_edge(&mut self, u: Id, v: Id) -> bool {
        self.add_edge_weighted(u, v, 1.0)
    }

    /// Adds an edge between `u` and `v`, replacing the weight of an
    /// existing one. False when an endpoint is missing.
    pub fn add_edge_weighted(&mut self, u: Id, v: Id, weight: f64) -> bool {
        if !self.adjacency.contains_key(&u) || !self.adjacency.contains_key(&v) {
            return false;
        }
        if self.has_edge(&u, &v) {
            self.set_weight_one_way(&u, &v, weight);
            if u != v {
                self.set_weight_one_way(&v, &u, weight);
            }
            return true;
        }
        self.adjacency.get_mut(&u).unwrap().push((v.clone(), weight));
        if u != v {
            self.adjacency.get_mut(&v).unwrap().push((u, weight));
        }
        self.edge_count += 1;
        true
    }

    fn set_weight_one_way(&mut self, u: &Id, v: &Id, weight: f64) {
        if let Some(slot) = self
            .adjacency
            .get_mut(u)
            .and_then(|list| list.iter_mut().find(|(to, _)| to == v))
        {
            slot.1 = weight;
        }
    }

    /// Removes the edge between `u` and `v`. True when it existed.
    pub fn remove_edge(&mut self, u: &Id, v: &Id) -> bool {
        if !self.has_edge(u, v) {
            return false;
        }
        if let Some(list) = self.adjacency.get_mut(u) {
            list.retain(|(to, _)| to != v);
        }
        if u != v {
            if let Some(list) = self.adjacency.get_mut(v) {
                list.retain(|(to, _)| to != u);
            }
        }
        self.edge_count -= 1;
        true
    }

    /// True when an edge joins `u` and `v`.
    pub fn has_edge(&self, u: &Id, v: &Id) -> bool {
        self.adjacency
            .get(u)
            .is_some_and(|list| list.iter().any(|(to, _)| to == v))
    }

    /// Degree of `id` (self-loops count once).
    pub fn degree(&self, id: &Id) -> usize {
        self.adjacency.get(id).map(Vec::len).unwrap_or(0)
    }
}

impl<Id: Clone + Hash + Eq> Default for UndirectedGraph<Id> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Id: Clone + Hash + Eq + 'static> Graph for UndirectedGraph<Id> {
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
        self.adjacency
            .get(u)?
            .iter()
            .find(|(to, _)| to == v)
            .map(|(_, w)| *w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_are_symmetric() {
        let mut g = UndirectedGraph::new();
        g.add_vertex(1);
        g.add_vertex(2);
        g.add_vertex(3);
        assert!(g.add_edge(1, 2));
        assert!(g.has_edge(&1, &2));
        assert!(g.has_edge(&2, &1));
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.degree(&1), 1);

        assert!(g.remove_edge(&2, &1));
        assert!(!g.has_edge(&1, &2));
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_remove_vertex_cleans_both_sides() {
        let mut g = UndirectedGraph::new();
        for v in 1..=4 {
            g.add_vertex(v);
        }
        g.add_edge(1, 2);
        g.add_edge(2, 3);
        g.add_edge(2, 4);
        assert!(g.remove_vertex(&2));
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.degree(&1), 0);
        assert_eq!(g.degree(&3), 0);
    }

    #[test]
    fn test_traversals_cover_component() {
        let mut g = UndirectedGraph::new();
        for v in 0..6 {
            g.add_vertex(v);
        }
        g.add_edge(0, 1);
        g.add_edge(1, 2);
        g.add_edge(2, 3);
        g.add_edge(4, 5);

        let reach = g.bfs(&0);
        assert_eq!(reach.len(), 4);
        assert!(!reach.contains(&4));

        let dfs = g.dfs(&4);
        assert_eq!(dfs, vec![4, 5]);
    }

    #[test]
    fn test_dijkstra_undirected() {
        let mut g = UndirectedGraph::new();
        for v in ["a", "b", "c", "d"] {
            g.add_vertex(v);
        }
        g.add_edge_weighted("a", "b", 2.0);
        g.add_edge_weighted("b", "c", 2.0);
        g.add_edge_weighted("a", "c", 5.0);
        g.add_edge_weighted("c", "d", 1.0);

        let (dist, path) = g.dijkstra(&"a", &"d").unwrap();
        assert_eq!(dist, 5.0);
        assert_eq!(path, vec!["a", "b", "c", "d"]);
        // The path works in the other direction too.
        let (back, _) = g.dijkstra(&"d", &"a").unwrap();
        assert_eq!(back, 5.0);
    }
}
